// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use vexil_datafile::FeatureFlag;

use crate::resolver::filter_experiments;
use crate::variables::project_variables;
use crate::{PublicExperiment, PublicFeature};

/// Projects feature flags into a map keyed by feature key.
///
/// `experiments` must be the full, already projected experiment map; each
/// feature receives its own copy of the experiments it declares.
pub fn index_features(
	flags: &[FeatureFlag],
	experiments: &HashMap<String, PublicExperiment>,
) -> HashMap<String, PublicFeature> {
	flags
		.iter()
		.map(|flag| (flag.key.clone(), project_feature(flag, experiments)))
		.collect()
}

pub fn project_feature(
	flag: &FeatureFlag,
	experiments: &HashMap<String, PublicExperiment>,
) -> PublicFeature {
	PublicFeature {
		id: flag.id.clone(),
		key: flag.key.clone(),
		experiments: filter_experiments(&flag.experiment_ids, experiments),
		variables: project_variables(&flag.variables),
	}
}
