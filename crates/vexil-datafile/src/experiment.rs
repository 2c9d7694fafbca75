// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An experiment as declared in the datafile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
	pub id: String,
	pub key: String,
	pub status: ExperimentStatus,
	pub layer_id: String,
	#[serde(default)]
	pub audience_ids: Vec<String>,
	/// Structured audience combination; takes precedence over `audience_ids` when present.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub audience_conditions: Option<serde_json::Value>,
	#[serde(default)]
	pub variations: Vec<Variation>,
	#[serde(default)]
	pub traffic_allocation: Vec<TrafficAllocation>,
	/// User id -> variation key.
	#[serde(default)]
	pub forced_variations: HashMap<String, String>,
}

/// Lifecycle status of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperimentStatus {
	Running,
	Launched,
	Paused,
	#[serde(rename = "Not started")]
	NotStarted,
	Archived,
}

/// One arm of an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
	pub id: String,
	pub key: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub feature_enabled: Option<bool>,
	/// Per-variation overrides of feature variable values.
	#[serde(default, rename = "variables")]
	pub variable_usages: Vec<FeatureVariableUsageInstance>,
}

impl Variation {
	pub fn is_feature_enabled(&self) -> bool {
		self.feature_enabled == Some(true)
	}
}

/// A variation-level override of a feature variable, addressed by variable id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVariableUsageInstance {
	pub id: String,
	pub value: String,
}

/// Upper bound of a bucketing range assigned to an entity (variation or experiment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficAllocation {
	pub entity_id: String,
	pub end_of_range: u32,
}
