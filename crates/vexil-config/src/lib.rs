// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Consumer-facing configuration snapshots for Vexil.
//!
//! This crate projects a raw [`ProjectConfig`] into a [`Snapshot`]: experiments
//! and features addressed by key, with every variation's feature variables
//! already merged. Application code can read a snapshot without knowing how
//! the datafile cross-references entities by id.
//!
//! # Pipeline
//!
//! - `resolver` - which feature each experiment tests, and per-feature experiment subsets
//! - `variables` - feature variable defaults
//! - `merge` - feature defaults patched by a variation's overrides
//! - `experiments` / `features` - keyed experiment and feature maps
//! - `assemble` - the entry point tying the above together
//!
//! Projection is best-effort: stale ids and unknown overrides are skipped
//! (and logged with `tracing`), never reported as errors.
//!
//! # Example
//!
//! ```
//! use vexil_config::assemble_from_json;
//!
//! let snapshot = assemble_from_json(
//! 	r#"{
//! 		"accountId": "1",
//! 		"projectId": "2",
//! 		"revision": "7",
//! 		"version": "4",
//! 		"featureFlags": [{"id": "10", "key": "checkout", "experimentIds": [], "variables": [
//! 			{"id": "11", "key": "color", "defaultValue": "blue", "type": "string"}
//! 		]}]
//! 	}"#,
//! )?;
//!
//! let color = snapshot.feature_variable("checkout", "color").unwrap();
//! assert_eq!(color.value, "blue");
//! # Ok::<(), vexil_config::ConfigError>(())
//! ```

pub mod assemble;
pub mod error;
pub mod experiments;
pub mod features;
pub mod merge;
pub mod public;
pub mod resolver;
pub mod variables;

#[cfg(test)]
mod fixtures;

pub use assemble::{assemble, assemble_from_json};
pub use error::{ConfigError, Result};
pub use public::{PublicExperiment, PublicFeature, PublicVariable, PublicVariation, Snapshot};
pub use resolver::FeatureExperimentIndex;

// Re-export core types for convenience
pub use vexil_datafile::{DecisionReason, ProjectConfig, VariableType};
