// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::{Experiment, FeatureFlag, Result, TrafficAllocation};

/// The fully-parsed project configuration carried by a datafile.
///
/// Instances are trusted as-is: nothing here checks that ids referenced by one
/// entity exist on another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
	pub account_id: String,
	pub project_id: String,
	pub revision: String,
	/// Datafile format version, e.g. "4".
	pub version: String,
	#[serde(default, rename = "anonymizeIP")]
	pub anonymize_ip: bool,
	#[serde(default)]
	pub bot_filtering: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sdk_key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub environment_key: Option<String>,
	#[serde(default)]
	pub attributes: Vec<Attribute>,
	#[serde(default)]
	pub audiences: Vec<Audience>,
	#[serde(default)]
	pub typed_audiences: Vec<Audience>,
	#[serde(default)]
	pub events: Vec<EventType>,
	#[serde(default)]
	pub experiments: Vec<Experiment>,
	#[serde(default)]
	pub feature_flags: Vec<FeatureFlag>,
	#[serde(default)]
	pub groups: Vec<Group>,
	#[serde(default)]
	pub rollouts: Vec<Rollout>,
}

impl ProjectConfig {
	/// Deserializes a datafile.
	pub fn from_json(datafile: &str) -> Result<Self> {
		Ok(serde_json::from_str(datafile)?)
	}

	/// Every experiment in the project: top-level experiments in declaration
	/// order, then the experiments of each group in group order.
	///
	/// Rollout rules are not experiments and are not included.
	pub fn all_experiments(&self) -> impl Iterator<Item = &Experiment> {
		self
			.experiments
			.iter()
			.chain(self.groups.iter().flat_map(|g| g.experiments.iter()))
	}
}

/// A user attribute that audiences can target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
	pub id: String,
	pub key: String,
}

/// A named audience. Conditions are kept in their datafile form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audience {
	pub id: String,
	pub name: String,
	pub conditions: serde_json::Value,
}

/// A conversion event and the experiments it is tracked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
	pub id: String,
	pub key: String,
	#[serde(default)]
	pub experiment_ids: Vec<String>,
}

/// A mutual-exclusion group of experiments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
	pub id: String,
	pub policy: GroupPolicy,
	#[serde(default)]
	pub experiments: Vec<Experiment>,
	#[serde(default)]
	pub traffic_allocation: Vec<TrafficAllocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPolicy {
	Random,
	Overlapping,
}

/// Ordered targeting rules used when a feature is not under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollout {
	pub id: String,
	#[serde(default)]
	pub experiments: Vec<Experiment>,
}
