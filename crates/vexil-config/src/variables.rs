// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use vexil_datafile::FeatureVariable;

use crate::PublicVariable;

/// Projects a feature's declared variables into a map keyed by variable key,
/// carrying each variable's default value.
pub fn project_variables(variables: &[FeatureVariable]) -> HashMap<String, PublicVariable> {
	variables
		.iter()
		.map(|variable| (variable.key.clone(), project_variable(variable)))
		.collect()
}

pub fn project_variable(variable: &FeatureVariable) -> PublicVariable {
	PublicVariable {
		id: variable.id.clone(),
		key: variable.key.clone(),
		variable_type: variable.effective_type(),
		value: variable.default_value.clone(),
	}
}
