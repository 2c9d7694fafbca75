// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// Why the bucketing subsystem placed (or did not place) a user in a variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
	/// The user was bucketed into a variation of the experiment.
	BucketedIntoVariation,
	/// The user fell outside every traffic allocation range.
	NotBucketedIntoVariation,
	/// The user did not satisfy the experiment's audience conditions.
	FailedToMeetExperimentConditions,
}

impl DecisionReason {
	pub fn message(&self) -> &'static str {
		match self {
			DecisionReason::BucketedIntoVariation => "Bucketed into variation",
			DecisionReason::NotBucketedIntoVariation => "Not bucketed into a variation",
			DecisionReason::FailedToMeetExperimentConditions => {
				"User does not meet conditions to be in experiment"
			}
		}
	}
}

impl std::fmt::Display for DecisionReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message())
	}
}
