// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors that can occur while reading a project datafile.
#[derive(Debug, Error)]
pub enum DatafileError {
	#[error("unknown variable type: {0}")]
	UnknownVariableType(String),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DatafileError>;
