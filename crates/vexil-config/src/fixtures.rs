// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A small project with one plain experiment, one multivariate feature test,
//! a feature with no variables and the snapshot it projects to.

use std::collections::HashMap;

use vexil_datafile::{
	Attribute, EventType, Experiment, ExperimentStatus, FeatureFlag, FeatureVariable,
	FeatureVariableUsageInstance, ProjectConfig, TrafficAllocation, VariableStatus, VariableType,
	Variation,
};

use crate::{PublicExperiment, PublicFeature, PublicVariable, PublicVariation, Snapshot};

fn usage(id: &str, value: &str) -> FeatureVariableUsageInstance {
	FeatureVariableUsageInstance {
		id: id.to_string(),
		value: value.to_string(),
	}
}

fn allocation(entity_id: &str, end_of_range: u32) -> TrafficAllocation {
	TrafficAllocation {
		entity_id: entity_id.to_string(),
		end_of_range,
	}
}

fn variation(
	id: &str,
	key: &str,
	feature_enabled: Option<bool>,
	usages: Vec<FeatureVariableUsageInstance>,
) -> Variation {
	Variation {
		id: id.to_string(),
		key: key.to_string(),
		feature_enabled,
		variable_usages: usages,
	}
}

fn string_variable(id: &str, key: &str, default_value: &str) -> FeatureVariable {
	FeatureVariable {
		id: id.to_string(),
		key: key.to_string(),
		default_value: default_value.to_string(),
		status: VariableStatus::Active,
		variable_type: VariableType::String,
		sub_type: None,
	}
}

pub(crate) fn project_config() -> ProjectConfig {
	ProjectConfig {
		account_id: "2360254204".to_string(),
		project_id: "3918735994".to_string(),
		revision: "1480511547".to_string(),
		version: "4".to_string(),
		anonymize_ip: true,
		bot_filtering: Some(true),
		sdk_key: None,
		environment_key: None,
		attributes: vec![
			Attribute {
				id: "553339214".to_string(),
				key: "house".to_string(),
			},
			Attribute {
				id: "58339410".to_string(),
				key: "nationality".to_string(),
			},
		],
		audiences: vec![],
		typed_audiences: vec![],
		events: vec![EventType {
			id: "3785620495".to_string(),
			key: "basic_event".to_string(),
			experiment_ids: vec!["1323241596".to_string(), "3262035800".to_string()],
		}],
		experiments: vec![
			Experiment {
				id: "1323241596".to_string(),
				key: "basic_experiment".to_string(),
				status: ExperimentStatus::Running,
				layer_id: "1630555626".to_string(),
				audience_ids: vec![],
				audience_conditions: None,
				variations: vec![
					variation("1423767502", "A", None, vec![]),
					variation("3433458314", "B", None, vec![]),
				],
				traffic_allocation: vec![
					allocation("1423767502", 5000),
					allocation("3433458314", 10000),
				],
				forced_variations: HashMap::from([("Harry Potter".to_string(), "A".to_string())]),
			},
			Experiment {
				id: "3262035800".to_string(),
				key: "multivariate_experiment".to_string(),
				status: ExperimentStatus::Running,
				layer_id: "3262035800".to_string(),
				audience_ids: vec!["3468206642".to_string()],
				audience_conditions: None,
				variations: vec![
					variation(
						"1880281238",
						"Fred",
						Some(true),
						vec![usage("675244127", "F"), usage("4052219963", "red")],
					),
					variation(
						"3631049532",
						"Feorge",
						Some(true),
						vec![usage("675244127", "F"), usage("4052219963", "eorge")],
					),
				],
				traffic_allocation: vec![
					allocation("1880281238", 2500),
					allocation("3631049532", 5000),
					allocation("4204375027", 7500),
					allocation("2099211198", 10000),
				],
				forced_variations: HashMap::from([("Fred".to_string(), "Fred".to_string())]),
			},
		],
		feature_flags: vec![
			FeatureFlag {
				id: "4195505407".to_string(),
				key: "boolean_feature".to_string(),
				rollout_id: Some(String::new()),
				experiment_ids: vec![],
				variables: vec![],
			},
			FeatureFlag {
				id: "3263342226".to_string(),
				key: "multi_variate_feature".to_string(),
				rollout_id: Some("813411034".to_string()),
				experiment_ids: vec!["3262035800".to_string()],
				variables: vec![
					string_variable("675244127", "first_letter", "H"),
					string_variable("4052219963", "rest_of_name", "arry"),
				],
			},
		],
		groups: vec![],
		rollouts: vec![],
	}
}

fn public_variable(id: &str, key: &str, value: &str) -> (String, PublicVariable) {
	let variable = PublicVariable {
		id: id.to_string(),
		key: key.to_string(),
		variable_type: VariableType::String,
		value: value.to_string(),
	};
	(key.to_string(), variable)
}

fn public_variation(
	id: &str,
	key: &str,
	feature_enabled: Option<bool>,
	variables: Vec<(String, PublicVariable)>,
) -> (String, PublicVariation) {
	let variation = PublicVariation {
		id: id.to_string(),
		key: key.to_string(),
		feature_enabled,
		variables: variables.into_iter().collect(),
	};
	(key.to_string(), variation)
}

fn multivariate_experiment() -> PublicExperiment {
	PublicExperiment {
		id: "3262035800".to_string(),
		key: "multivariate_experiment".to_string(),
		variations: HashMap::from([
			public_variation(
				"3631049532",
				"Feorge",
				Some(true),
				vec![
					public_variable("675244127", "first_letter", "F"),
					public_variable("4052219963", "rest_of_name", "eorge"),
				],
			),
			public_variation(
				"1880281238",
				"Fred",
				Some(true),
				vec![
					public_variable("675244127", "first_letter", "F"),
					public_variable("4052219963", "rest_of_name", "red"),
				],
			),
		]),
	}
}

pub(crate) fn expected_snapshot() -> Snapshot {
	let basic_experiment = PublicExperiment {
		id: "1323241596".to_string(),
		key: "basic_experiment".to_string(),
		variations: HashMap::from([
			public_variation("1423767502", "A", None, vec![]),
			public_variation("3433458314", "B", None, vec![]),
		]),
	};

	let multi_variate_feature = PublicFeature {
		id: "3263342226".to_string(),
		key: "multi_variate_feature".to_string(),
		experiments: HashMap::from([(
			"multivariate_experiment".to_string(),
			multivariate_experiment(),
		)]),
		variables: HashMap::from([
			public_variable("675244127", "first_letter", "H"),
			public_variable("4052219963", "rest_of_name", "arry"),
		]),
	};

	let boolean_feature = PublicFeature {
		id: "4195505407".to_string(),
		key: "boolean_feature".to_string(),
		experiments: HashMap::new(),
		variables: HashMap::new(),
	};

	Snapshot {
		revision: "1480511547".to_string(),
		sdk_key: None,
		environment_key: None,
		experiments: HashMap::from([
			("multivariate_experiment".to_string(), multivariate_experiment()),
			("basic_experiment".to_string(), basic_experiment),
		]),
		features: HashMap::from([
			("multi_variate_feature".to_string(), multi_variate_feature),
			("boolean_feature".to_string(), boolean_feature),
		]),
	}
}
