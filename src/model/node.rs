// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::grid::{Day, GridPosition, Lane, Slot, TimeSlot};
use super::ids::{NodeId, ScenarioId};

/// Load/unload trigger of a scenario: either immediate at a slot, or after another
/// scenario (referenced by its scenario id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub immediately: bool,
    pub after_scenario: Option<ScenarioId>,
    pub at_day: Day,
    pub at_time: TimeSlot,
}

impl Trigger {
    pub fn immediate(at_day: Day, at_time: TimeSlot) -> Self {
        Self {
            immediately: true,
            after_scenario: None,
            at_day,
            at_time,
        }
    }

    pub fn references(&self, scenario_id: &ScenarioId) -> bool {
        self.after_scenario.as_ref() == Some(scenario_id)
    }
}

/// The unit of narrative content placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioNode {
    id: NodeId,
    scenario_id: ScenarioId,
    grid_position: GridPosition,
    branch_index: u32,
    sort_index: u32,
    is_routine: bool,
    description: String,
    load_info: Trigger,
    end_info: Trigger,
    next_scenarios: Vec<ScenarioId>,
    previous_scenarios: Vec<ScenarioId>,
    edge_colors: BTreeMap<ScenarioId, String>,
}

impl ScenarioNode {
    /// A node at branch 0 / stack position 0 with immediate triggers at its own slot.
    pub fn new(id: NodeId, scenario_id: ScenarioId, grid_position: GridPosition) -> Self {
        let load_info = Trigger::immediate(grid_position.day, grid_position.time);
        let end_info = load_info.clone();
        Self {
            id,
            scenario_id,
            grid_position,
            branch_index: 0,
            sort_index: 0,
            is_routine: false,
            description: String::new(),
            load_info,
            end_info,
            next_scenarios: Vec::new(),
            previous_scenarios: Vec::new(),
            edge_colors: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn scenario_id(&self) -> &ScenarioId {
        &self.scenario_id
    }

    pub fn set_scenario_id(&mut self, scenario_id: ScenarioId) {
        self.scenario_id = scenario_id;
    }

    pub fn grid_position(&self) -> &GridPosition {
        &self.grid_position
    }

    pub fn set_grid_position(&mut self, grid_position: GridPosition) {
        self.grid_position = grid_position;
    }

    pub fn slot(&self) -> Slot {
        self.grid_position.slot()
    }

    pub fn branch_index(&self) -> u32 {
        self.branch_index
    }

    pub fn set_branch_index(&mut self, branch_index: u32) {
        self.branch_index = branch_index;
    }

    pub fn sort_index(&self) -> u32 {
        self.sort_index
    }

    pub fn set_sort_index(&mut self, sort_index: u32) {
        self.sort_index = sort_index;
    }

    pub fn is_routine(&self) -> bool {
        self.is_routine
    }

    pub fn set_routine(&mut self, is_routine: bool) {
        self.is_routine = is_routine;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn load_info(&self) -> &Trigger {
        &self.load_info
    }

    pub fn load_info_mut(&mut self) -> &mut Trigger {
        &mut self.load_info
    }

    pub fn end_info(&self) -> &Trigger {
        &self.end_info
    }

    pub fn end_info_mut(&mut self) -> &mut Trigger {
        &mut self.end_info
    }

    pub fn next_scenarios(&self) -> &[ScenarioId] {
        &self.next_scenarios
    }

    pub fn next_scenarios_mut(&mut self) -> &mut Vec<ScenarioId> {
        &mut self.next_scenarios
    }

    pub fn previous_scenarios(&self) -> &[ScenarioId] {
        &self.previous_scenarios
    }

    pub fn previous_scenarios_mut(&mut self) -> &mut Vec<ScenarioId> {
        &mut self.previous_scenarios
    }

    pub fn edge_colors(&self) -> &BTreeMap<ScenarioId, String> {
        &self.edge_colors
    }

    pub fn edge_colors_mut(&mut self) -> &mut BTreeMap<ScenarioId, String> {
        &mut self.edge_colors
    }

    /// The stacking lane this node currently occupies.
    pub fn lane(&self) -> Lane {
        Lane::new(
            self.slot(),
            self.grid_position.route.clone(),
            self.is_routine,
            self.branch_index,
        )
    }

    /// Cheaper than comparing [`ScenarioNode::lane`] results; avoids cloning the route.
    pub fn is_in_lane(&self, lane: &Lane) -> bool {
        self.is_routine == lane.is_routine
            && self.effective_branch_index() == lane.branch_index
            && self.slot() == lane.slot
            && self.grid_position.route == lane.route
    }

    fn effective_branch_index(&self) -> u32 {
        if self.is_routine {
            0
        } else {
            self.branch_index
        }
    }

    /// Whether any field holds `scenario_id` as a reference to another scenario.
    pub fn references(&self, scenario_id: &ScenarioId) -> bool {
        self.next_scenarios.contains(scenario_id)
            || self.previous_scenarios.contains(scenario_id)
            || self.load_info.references(scenario_id)
            || self.end_info.references(scenario_id)
            || self.edge_colors.contains_key(scenario_id)
    }
}
