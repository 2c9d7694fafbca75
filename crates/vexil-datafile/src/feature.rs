// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::DatafileError;

/// A feature flag as declared in the datafile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
	pub id: String,
	pub key: String,
	/// Empty or absent when the feature has no rollout.
	#[serde(default)]
	pub rollout_id: Option<String>,
	/// Experiments that test this feature, in declaration order.
	#[serde(default)]
	pub experiment_ids: Vec<String>,
	#[serde(default)]
	pub variables: Vec<FeatureVariable>,
}

/// A typed variable declared by a feature flag, with its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVariable {
	pub id: String,
	pub key: String,
	pub default_value: String,
	#[serde(default)]
	pub status: VariableStatus,
	#[serde(rename = "type")]
	pub variable_type: VariableType,
	/// Set to "json" on string variables that carry JSON documents.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sub_type: Option<String>,
}

impl FeatureVariable {
	/// The type consumers should see for this variable.
	///
	/// Newer datafiles declare JSON variables as `string` with a `json` sub-type.
	pub fn effective_type(&self) -> VariableType {
		match (self.variable_type, self.sub_type.as_deref()) {
			(VariableType::String, Some("json")) => VariableType::Json,
			(variable_type, _) => variable_type,
		}
	}
}

/// Lifecycle status of a feature variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableStatus {
	#[default]
	Active,
	Archived,
}

/// Value type of a feature variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
	String,
	Boolean,
	Integer,
	Double,
	Json,
}

impl VariableType {
	pub const ALL: [VariableType; 5] = [
		VariableType::String,
		VariableType::Boolean,
		VariableType::Integer,
		VariableType::Double,
		VariableType::Json,
	];

	/// Lower-cased canonical name, as exposed to consumers.
	pub fn as_str(&self) -> &'static str {
		match self {
			VariableType::String => "string",
			VariableType::Boolean => "boolean",
			VariableType::Integer => "integer",
			VariableType::Double => "double",
			VariableType::Json => "json",
		}
	}
}

impl std::fmt::Display for VariableType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for VariableType {
	type Err = DatafileError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| DatafileError::UnknownVariableType(s.to_string()))
	}
}
