// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::{debug, instrument};
use vexil_datafile::ProjectConfig;

use crate::experiments::index_experiments;
use crate::features::index_features;
use crate::resolver::FeatureExperimentIndex;
use crate::{Result, Snapshot};

/// Builds the consumer-facing snapshot of a project configuration.
///
/// The steps are:
/// 1. Index which feature tests each experiment
/// 2. Project every experiment, merging variation variables
/// 3. Project every feature against the full experiment map
/// 4. Attach revision and environment identifiers
///
/// Inconsistent cross-references are skipped rather than reported, so this
/// never fails.
#[instrument(skip_all, fields(revision = %config.revision))]
pub fn assemble(config: &ProjectConfig) -> Snapshot {
	let index = FeatureExperimentIndex::build(&config.feature_flags);

	let experiments = index_experiments(config.all_experiments(), &index);
	let features = index_features(&config.feature_flags, &experiments);

	debug!(
		experiments = experiments.len(),
		features = features.len(),
		"assembled config snapshot"
	);

	Snapshot {
		revision: config.revision.clone(),
		sdk_key: config.sdk_key.clone(),
		environment_key: config.environment_key.clone(),
		experiments,
		features,
	}
}

/// Deserializes a datafile and assembles its snapshot.
pub fn assemble_from_json(datafile: &str) -> Result<Snapshot> {
	let config = ProjectConfig::from_json(datafile)?;
	Ok(assemble(&config))
}

impl From<&ProjectConfig> for Snapshot {
	fn from(config: &ProjectConfig) -> Self {
		assemble(config)
	}
}
