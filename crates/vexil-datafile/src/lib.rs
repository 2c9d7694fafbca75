// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Raw project configuration model for Vexil.
//!
//! This crate holds the internal, denormalized configuration a datafile carries:
//! experiments and their variations, feature flags and their typed variables,
//! plus the supporting entities (attributes, audiences, events, groups,
//! rollouts) that are passed through untouched. It is consumed by
//! `vexil-config`, which projects it into consumer-facing snapshots.
//!
//! Identifiers are kept as the datafile's opaque strings. Nothing in this crate
//! checks referential integrity between entities.
//!
//! # Example
//!
//! ```
//! use vexil_datafile::{ProjectConfig, VariableType};
//!
//! let config = ProjectConfig::from_json(
//! 	r#"{"accountId": "1", "projectId": "2", "revision": "42", "version": "4"}"#,
//! )
//! .unwrap();
//! assert_eq!(config.revision, "42");
//! assert_eq!("integer".parse::<VariableType>().unwrap(), VariableType::Integer);
//! ```

pub mod decision;
pub mod error;
pub mod experiment;
pub mod feature;
pub mod project;

pub use decision::DecisionReason;
pub use error::{DatafileError, Result};
pub use experiment::{
	Experiment, ExperimentStatus, FeatureVariableUsageInstance, TrafficAllocation, Variation,
};
pub use feature::{FeatureFlag, FeatureVariable, VariableStatus, VariableType};
pub use project::{Attribute, Audience, EventType, Group, GroupPolicy, ProjectConfig, Rollout};
