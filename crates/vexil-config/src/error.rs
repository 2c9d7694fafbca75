// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;
use vexil_datafile::DatafileError;

/// Errors surfaced by the snapshot entry points.
///
/// Projection itself never fails; these only cover reading datafiles and
/// rendering snapshots.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("datafile error: {0}")]
	Datafile(#[from] DatafileError),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
