// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Association between feature flags and the experiments that test them.
//!
//! Feature flags declare their experiments by id; experiments know nothing
//! about features. [`FeatureExperimentIndex`] derives the reverse direction for
//! the lifetime of one assembly, borrowing ids and keys from the flags.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};
use vexil_datafile::FeatureFlag;

use crate::variables::project_variables;
use crate::{PublicExperiment, PublicVariable};

/// Experiment id -> feature key, plus each feature's projected default variables.
#[derive(Debug, Clone, Default)]
pub struct FeatureExperimentIndex<'a> {
	feature_by_experiment: HashMap<&'a str, &'a str>,
	default_variables: HashMap<&'a str, HashMap<String, PublicVariable>>,
}

impl<'a> FeatureExperimentIndex<'a> {
	/// Builds the index in one pass over the flags.
	///
	/// An experiment declared by several flags maps to the flag declared last.
	pub fn build(flags: &'a [FeatureFlag]) -> Self {
		let mut feature_by_experiment: HashMap<&'a str, &'a str> = HashMap::new();
		let mut default_variables = HashMap::with_capacity(flags.len());

		for flag in flags {
			for experiment_id in &flag.experiment_ids {
				let previous = feature_by_experiment.insert(experiment_id.as_str(), flag.key.as_str());
				if let Some(previous) = previous.filter(|p| *p != flag.key) {
					warn!(
						%experiment_id,
						previous_feature = previous,
						feature_key = %flag.key,
						"experiment is tested by more than one feature, keeping the last"
					);
				}
			}
			default_variables.insert(flag.key.as_str(), project_variables(&flag.variables));
		}

		Self {
			feature_by_experiment,
			default_variables,
		}
	}

	/// Key of the feature that declares this experiment, if any.
	pub fn resolve_feature_key(&self, experiment_id: &str) -> Option<&'a str> {
		self.feature_by_experiment.get(experiment_id).copied()
	}

	pub fn default_variables(&self, feature_key: &str) -> Option<&HashMap<String, PublicVariable>> {
		self.default_variables.get(feature_key)
	}

	/// Default variables of the feature tested by this experiment.
	pub fn default_variables_for_experiment(
		&self,
		experiment_id: &str,
	) -> Option<&HashMap<String, PublicVariable>> {
		self
			.resolve_feature_key(experiment_id)
			.and_then(|feature_key| self.default_variables(feature_key))
	}
}

/// Selects the experiments whose ids are listed, keeping their keys.
///
/// Ids with no experiment in `experiments` are skipped.
pub fn filter_experiments(
	experiment_ids: &[String],
	experiments: &HashMap<String, PublicExperiment>,
) -> HashMap<String, PublicExperiment> {
	let wanted: HashSet<&str> = experiment_ids.iter().map(String::as_str).collect();

	let subset: HashMap<String, PublicExperiment> = experiments
		.iter()
		.filter(|(_, experiment)| wanted.contains(experiment.id.as_str()))
		.map(|(key, experiment)| (key.clone(), experiment.clone()))
		.collect();

	if subset.len() < wanted.len() {
		let found: HashSet<&str> = subset.values().map(|e| e.id.as_str()).collect();
		for experiment_id in wanted.difference(&found) {
			debug!(%experiment_id, "skipping unknown experiment id");
		}
	}

	subset
}
