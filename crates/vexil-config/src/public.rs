// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Consumer-facing configuration entities.
//!
//! Every map is keyed by business key. Ids are kept on each entity so callers
//! can correlate with events and decisions, but nothing here is addressed by id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vexil_datafile::VariableType;

use crate::Result;

/// A feature variable with its effective value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicVariable {
	pub id: String,
	pub key: String,
	/// Rendered as the lower-cased type name.
	#[serde(rename = "type")]
	pub variable_type: VariableType,
	pub value: String,
}

impl PublicVariable {
	pub fn type_name(&self) -> &'static str {
		self.variable_type.as_str()
	}
}

/// One arm of an experiment, with its merged feature variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicVariation {
	pub id: String,
	pub key: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub feature_enabled: Option<bool>,
	#[serde(rename = "variablesMap")]
	pub variables: HashMap<String, PublicVariable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicExperiment {
	pub id: String,
	pub key: String,
	#[serde(rename = "variationsMap")]
	pub variations: HashMap<String, PublicVariation>,
}

/// A feature flag with the experiments testing it and its default variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicFeature {
	pub id: String,
	pub key: String,
	#[serde(rename = "experimentsMap")]
	pub experiments: HashMap<String, PublicExperiment>,
	#[serde(rename = "variablesMap")]
	pub variables: HashMap<String, PublicVariable>,
}

/// The complete projected configuration for one datafile revision.
///
/// A snapshot is built in one pass and never updated in place. Publish a new
/// one (e.g. by swapping an `Arc<Snapshot>`) when the datafile changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
	pub revision: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sdk_key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub environment_key: Option<String>,
	/// Every experiment in the project, including grouped ones.
	#[serde(rename = "experimentsMap")]
	pub experiments: HashMap<String, PublicExperiment>,
	#[serde(rename = "featuresMap")]
	pub features: HashMap<String, PublicFeature>,
}

impl Snapshot {
	pub fn experiment(&self, key: &str) -> Option<&PublicExperiment> {
		self.experiments.get(key)
	}

	pub fn feature(&self, key: &str) -> Option<&PublicFeature> {
		self.features.get(key)
	}

	/// Gets a variation of an experiment by their keys.
	pub fn variation(&self, experiment_key: &str, variation_key: &str) -> Option<&PublicVariation> {
		self.experiment(experiment_key)?.variations.get(variation_key)
	}

	/// Gets a feature's default variable.
	pub fn feature_variable(&self, feature_key: &str, variable_key: &str) -> Option<&PublicVariable> {
		self.feature(feature_key)?.variables.get(variable_key)
	}

	/// Renders the snapshot as consumer-facing JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}
