// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One-way "export" projection for downstream tooling. Never read back.

use serde::Serialize;

use crate::model::{ScenarioNode, Trigger};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportedScenario {
    pub scenario_info: ScenarioInfo,
    pub load_info: TriggerInfo,
    pub end_info: TriggerInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScenarioInfo {
    #[serde(rename = "ScenarioID")]
    pub scenario_id: String,
    pub route: String,
    pub day: String,
    pub time: String,
    pub description: String,
    pub next_scenarios: Vec<String>,
    pub previous_scenarios: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TriggerInfo {
    pub immediately: bool,
    pub after_scenario: String,
    pub at_day: String,
    pub at_time: String,
}

impl From<&Trigger> for TriggerInfo {
    fn from(trigger: &Trigger) -> Self {
        Self {
            immediately: trigger.immediately,
            after_scenario: trigger
                .after_scenario
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            at_day: trigger.at_day.label(),
            at_time: trigger.at_time.label().to_owned(),
        }
    }
}

impl From<&ScenarioNode> for ExportedScenario {
    fn from(node: &ScenarioNode) -> Self {
        let position = node.grid_position();
        Self {
            scenario_info: ScenarioInfo {
                scenario_id: node.scenario_id().to_string(),
                route: position.route.to_string(),
                day: position.day.label(),
                time: position.time.label().to_owned(),
                description: node.description().to_owned(),
                next_scenarios: node.next_scenarios().iter().map(ToString::to_string).collect(),
                previous_scenarios: node
                    .previous_scenarios()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
            load_info: TriggerInfo::from(node.load_info()),
            end_info: TriggerInfo::from(node.end_info()),
        }
    }
}

pub fn export_nodes(nodes: &[ScenarioNode]) -> Vec<ExportedScenario> {
    nodes.iter().map(ExportedScenario::from).collect()
}
