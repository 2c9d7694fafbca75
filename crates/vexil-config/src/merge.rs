// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Effective feature variables of a variation.
//!
//! A variation only carries `(variable id, value)` overrides. Its effective
//! variables are the owning feature's defaults, patched by id with those
//! overrides. Iteration is driven by the defaults, so the result always has the
//! feature's full variable schema and overrides for unknown ids are dropped.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use vexil_datafile::{FeatureVariableUsageInstance, Variation};

use crate::resolver::FeatureExperimentIndex;
use crate::PublicVariable;

/// Variable id -> override value. Later usages of the same id win.
pub fn override_values(usages: &[FeatureVariableUsageInstance]) -> HashMap<&str, &str> {
	usages
		.iter()
		.map(|usage| (usage.id.as_str(), usage.value.as_str()))
		.collect()
}

/// Merges the defaults of the feature tested by `experiment_id` with the
/// variation's overrides.
///
/// Returns an empty map unless the variation is feature-enabled and the
/// experiment resolves to a feature.
pub fn merge_variables(
	variation: &Variation,
	experiment_id: &str,
	index: &FeatureExperimentIndex<'_>,
) -> HashMap<String, PublicVariable> {
	if !variation.is_feature_enabled() {
		return HashMap::new();
	}

	let Some(defaults) = index.default_variables_for_experiment(experiment_id) else {
		return HashMap::new();
	};

	let overrides = override_values(&variation.variable_usages);

	let default_ids: HashSet<&str> = defaults.values().map(|d| d.id.as_str()).collect();
	for variable_id in overrides.keys().filter(|id| !default_ids.contains(*id)) {
		debug!(
			variation_key = %variation.key,
			%variable_id,
			"ignoring override for unknown variable"
		);
	}

	defaults
		.iter()
		.map(|(key, default)| {
			let value = match overrides.get(default.id.as_str()) {
				Some(value) => value.to_string(),
				None => default.value.clone(),
			};
			let merged = PublicVariable {
				value,
				..default.clone()
			};
			(key.clone(), merged)
		})
		.collect()
}
