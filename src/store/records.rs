// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! On-disk node records.
//!
//! The model stays serde-free; these DTOs own the JSON shape and convert at the boundary.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::model::{
    Day, GridError, GridPosition, NodeId, Route, ScenarioId, ScenarioNode, TimeSlot, Trigger,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: String,
    #[serde(default)]
    pub scenario_id: String,
    pub grid_position: GridPositionRecord,
    #[serde(default)]
    pub branch_index: u32,
    #[serde(default)]
    pub sort_index: u32,
    #[serde(default)]
    pub is_routine: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub load_info: TriggerRecord,
    pub end_info: TriggerRecord,
    #[serde(default)]
    pub next_scenarios: Vec<String>,
    #[serde(default)]
    pub previous_scenarios: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub edge_colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GridPositionRecord {
    /// 0-based day index (0..=27).
    pub day: u32,
    /// 0 = Morning .. 3 = Night.
    pub time: u32,
    pub route: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRecord {
    #[serde(default)]
    pub immediately: bool,
    /// `null` and `""` both mean "no dependency".
    #[serde(default)]
    pub after_scenario: Option<String>,
    pub at_day: u32,
    pub at_time: u32,
}

impl From<&ScenarioNode> for NodeRecord {
    fn from(node: &ScenarioNode) -> Self {
        let position = node.grid_position();
        Self {
            id: node.id().to_string(),
            scenario_id: node.scenario_id().to_string(),
            grid_position: GridPositionRecord {
                day: u32::from(position.day.index()),
                time: u32::from(position.time.index()),
                route: position.route.to_string(),
            },
            branch_index: node.branch_index(),
            sort_index: node.sort_index(),
            is_routine: node.is_routine(),
            description: node.description().to_owned(),
            load_info: TriggerRecord::from(node.load_info()),
            end_info: TriggerRecord::from(node.end_info()),
            next_scenarios: node.next_scenarios().iter().map(ToString::to_string).collect(),
            previous_scenarios: node
                .previous_scenarios()
                .iter()
                .map(ToString::to_string)
                .collect(),
            edge_colors: node
                .edge_colors()
                .iter()
                .map(|(target, color)| (target.to_string(), color.clone()))
                .collect(),
        }
    }
}

impl From<&Trigger> for TriggerRecord {
    fn from(trigger: &Trigger) -> Self {
        Self {
            immediately: trigger.immediately,
            after_scenario: trigger.after_scenario.as_ref().map(ToString::to_string),
            at_day: u32::from(trigger.at_day.index()),
            at_time: u32::from(trigger.at_time.index()),
        }
    }
}

impl NodeRecord {
    pub fn into_node(self) -> Result<ScenarioNode, StoreError> {
        let id = NodeId::new(self.id.clone()).map_err(|source| StoreError::InvalidId {
            field: "id",
            value: self.id.clone(),
            source,
        })?;
        let grid_position = GridPosition::new(
            day(self.grid_position.day, &self.id, "gridPosition.day")?,
            time(self.grid_position.time, &self.id, "gridPosition.time")?,
            Route::new(&self.grid_position.route),
        );

        let mut node = ScenarioNode::new(id, ScenarioId::new(self.scenario_id), grid_position);
        node.set_branch_index(self.branch_index);
        node.set_sort_index(self.sort_index);
        node.set_routine(self.is_routine);
        node.set_description(self.description);
        *node.load_info_mut() = self.load_info.into_trigger(&self.id, "loadInfo")?;
        *node.end_info_mut() = self.end_info.into_trigger(&self.id, "endInfo")?;
        *node.next_scenarios_mut() = self.next_scenarios.into_iter().map(ScenarioId::new).collect();
        *node.previous_scenarios_mut() = self
            .previous_scenarios
            .into_iter()
            .map(ScenarioId::new)
            .collect();
        *node.edge_colors_mut() = self
            .edge_colors
            .into_iter()
            .map(|(target, color)| (ScenarioId::new(target), color))
            .collect();
        Ok(node)
    }
}

impl TriggerRecord {
    fn into_trigger(self, node_id: &str, field: &'static str) -> Result<Trigger, StoreError> {
        Ok(Trigger {
            immediately: self.immediately,
            after_scenario: self
                .after_scenario
                .filter(|sid| !sid.is_empty())
                .map(ScenarioId::new),
            at_day: day(self.at_day, node_id, field)?,
            at_time: time(self.at_time, node_id, field)?,
        })
    }
}

fn day(index: u32, node_id: &str, field: &'static str) -> Result<Day, StoreError> {
    Day::new(index).map_err(|source| invalid_grid(node_id, field, source))
}

fn time(index: u32, node_id: &str, field: &'static str) -> Result<TimeSlot, StoreError> {
    TimeSlot::new(index).map_err(|source| invalid_grid(node_id, field, source))
}

fn invalid_grid(node_id: &str, field: &'static str, source: GridError) -> StoreError {
    StoreError::InvalidGrid {
        node_id: node_id.to_owned(),
        field,
        source,
    }
}

/// Converts a full record array, failing on the first malformed record.
pub fn nodes_from_records(records: Vec<NodeRecord>) -> Result<Vec<ScenarioNode>, StoreError> {
    records.into_iter().map(NodeRecord::into_node).collect()
}

pub fn records_from_nodes(nodes: &[ScenarioNode]) -> Vec<NodeRecord> {
    nodes.iter().map(NodeRecord::from).collect()
}

/// JSON schema of a persisted project file (an array of [`NodeRecord`]s).
pub fn record_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(Vec<NodeRecord>);
    serde_json::to_value(schema).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::{nodes_from_records, record_schema, records_from_nodes, NodeRecord};
    use crate::model::fixtures::{find, sid, small_chain};
    use crate::store::StoreError;

    #[test]
    fn minimal_record_fills_defaults() {
        let raw = r#"{
            "id": "n1",
            "scenarioId": "Intro",
            "gridPosition": { "day": 2, "time": 3, "route": "Rhea" },
            "loadInfo": { "immediately": true, "afterScenario": "", "atDay": 2, "atTime": 3 },
            "endInfo": { "immediately": false, "afterScenario": null, "atDay": 2, "atTime": 3 },
            "nextScenarios": ["Outro"],
            "previousScenarios": []
        }"#;
        let record: NodeRecord = serde_json::from_str(raw).expect("parse record");
        let node = record.into_node().expect("convert record");

        assert_eq!(node.branch_index(), 0);
        assert_eq!(node.sort_index(), 0);
        assert!(!node.is_routine());
        assert_eq!(node.description(), "");
        assert_eq!(node.load_info().after_scenario, None);
        assert_eq!(node.next_scenarios(), &[sid("Outro")]);
        assert_eq!(node.grid_position().route.as_str(), "Rhea");
    }

    #[test]
    fn records_keep_every_field() {
        let mut nodes = small_chain();
        nodes[1].set_description("Crossroads");
        nodes[1].load_info_mut().after_scenario = Some(sid("A"));
        nodes[0].edge_colors_mut().insert(sid("B"), "#123456".to_owned());

        let json = serde_json::to_string(&records_from_nodes(&nodes)).expect("serialize");
        assert!(json.contains("\"scenarioId\":\"B\""));
        assert!(json.contains("\"edgeColors\":{\"B\":\"#123456\"}"));

        let records = serde_json::from_str(&json).expect("parse");
        let restored = nodes_from_records(records).expect("convert");
        assert_eq!(restored, nodes);
        assert_eq!(find(&restored, "b").description(), "Crossroads");
    }

    #[test]
    fn out_of_range_day_is_rejected() {
        let raw = r#"{
            "id": "n1",
            "scenarioId": "Intro",
            "gridPosition": { "day": 28, "time": 0, "route": "Common" },
            "loadInfo": { "immediately": true, "atDay": 0, "atTime": 0 },
            "endInfo": { "immediately": true, "atDay": 0, "atTime": 0 }
        }"#;
        let record: NodeRecord = serde_json::from_str(raw).expect("parse record");
        let err = record.into_node().unwrap_err();
        assert!(matches!(err, StoreError::InvalidGrid { field: "gridPosition.day", .. }));
    }

    #[test]
    fn blank_node_id_is_rejected() {
        let raw = r#"{
            "id": "",
            "gridPosition": { "day": 0, "time": 0, "route": "Common" },
            "loadInfo": { "atDay": 0, "atTime": 0 },
            "endInfo": { "atDay": 0, "atTime": 0 }
        }"#;
        let record: NodeRecord = serde_json::from_str(raw).expect("parse record");
        assert!(matches!(record.into_node(), Err(StoreError::InvalidId { field: "id", .. })));
    }

    #[test]
    fn schema_describes_camel_case_records() {
        let schema = record_schema().to_string();
        assert!(schema.contains("scenarioId"));
        assert!(schema.contains("gridPosition"));
        assert!(schema.contains("afterScenario"));
    }
}
