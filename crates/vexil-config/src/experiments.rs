// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use vexil_datafile::{Experiment, Variation};

use crate::merge::merge_variables;
use crate::resolver::FeatureExperimentIndex;
use crate::{PublicExperiment, PublicVariation};

/// Projects experiments into a map keyed by experiment key.
///
/// Later experiments overwrite earlier ones that share a key.
pub fn index_experiments<'e>(
	experiments: impl IntoIterator<Item = &'e Experiment>,
	index: &FeatureExperimentIndex<'_>,
) -> HashMap<String, PublicExperiment> {
	experiments
		.into_iter()
		.map(|experiment| (experiment.key.clone(), project_experiment(experiment, index)))
		.collect()
}

pub fn project_experiment(
	experiment: &Experiment,
	index: &FeatureExperimentIndex<'_>,
) -> PublicExperiment {
	PublicExperiment {
		id: experiment.id.clone(),
		key: experiment.key.clone(),
		variations: project_variations(&experiment.variations, &experiment.id, index),
	}
}

/// Projects an experiment's variations, merging each one's feature variables
/// in the context of `experiment_id`.
pub fn project_variations(
	variations: &[Variation],
	experiment_id: &str,
	index: &FeatureExperimentIndex<'_>,
) -> HashMap<String, PublicVariation> {
	variations
		.iter()
		.map(|variation| {
			let projected = PublicVariation {
				id: variation.id.clone(),
				key: variation.key.clone(),
				feature_enabled: variation.feature_enabled,
				variables: merge_variables(variation, experiment_id, index),
			};
			(variation.key.clone(), projected)
		})
		.collect()
}
