// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editing state: one node-set snapshot plus everything derived from it.
//!
//! Each effective mutation swaps the snapshot wholesale, bumps [`Project::rev`] and refreshes
//! the derived layout and issue list. Mutations that resolve to a no-op leave the snapshot
//! (and its `Arc`) untouched.

use std::sync::Arc;

use tracing::debug;

use crate::layout::{
    compute_column_layout, compute_row_layout, ColumnLayout, GridConfig, RowLayout,
};
use crate::model::{Day, NodeId, Route, ScenarioNode, TimeSlot};
use crate::ops::{self, NodePatch};
use crate::validate::{self, ValidationIssue, ValidationReport};

#[derive(Debug, Clone)]
pub struct Project {
    nodes: Arc<[ScenarioNode]>,
    routes: Vec<Route>,
    config: GridConfig,
    columns: ColumnLayout,
    rows: RowLayout,
    issues: Vec<ValidationIssue>,
    rev: u64,
    in_gesture: bool,
}

impl Default for Project {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Project {
    pub fn new(routes: Vec<Route>, config: GridConfig) -> Self {
        let nodes: Arc<[ScenarioNode]> = Arc::from(Vec::new());
        let columns = compute_column_layout(&nodes, &routes, &config);
        let rows = compute_row_layout(&nodes, &routes, &config);
        Self {
            nodes,
            routes,
            config,
            columns,
            rows,
            issues: Vec::new(),
            rev: 0,
            in_gesture: false,
        }
    }

    /// Default route list and grid constants.
    pub fn with_defaults() -> Self {
        Self::new(Route::defaults(), GridConfig::default())
    }

    pub fn nodes(&self) -> &[ScenarioNode] {
        &self.nodes
    }

    /// Shared handle on the current snapshot. Compare with [`Arc::ptr_eq`] to detect changes.
    pub fn nodes_snapshot(&self) -> Arc<[ScenarioNode]> {
        Arc::clone(&self.nodes)
    }

    pub fn node(&self, id: &NodeId) -> Option<&ScenarioNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    pub fn rows(&self) -> &RowLayout {
        &self.rows
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn report(&self) -> ValidationReport<'_> {
        ValidationReport::new(&self.issues)
    }

    /// Incremented on every effective mutation.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn in_gesture(&self) -> bool {
        self.in_gesture
    }

    /// Creates a node in the given cell and returns its id.
    pub fn add_node(&mut self, day: Day, time: TimeSlot, route: &Route, is_routine: bool) -> NodeId {
        let node = ops::create_node(&self.nodes, day, time, route, is_routine);
        let id = node.id().clone();
        debug!(node = %id, scenario = %node.scenario_id(), "add node");

        let mut next = self.nodes.to_vec();
        next.push(node);
        self.commit(next, true);
        id
    }

    /// Returns whether the snapshot changed.
    pub fn update_node(&mut self, id: &NodeId, patch: &NodePatch) -> bool {
        match ops::try_update_node(&self.nodes, id, patch) {
            Some(next) => {
                self.commit(next, patch.is_structural());
                true
            }
            None => {
                debug!(node = %id, "update ignored");
                false
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn move_node(
        &mut self,
        id: &NodeId,
        day: Day,
        time: TimeSlot,
        route: &Route,
        target_index: u32,
        branch_index: u32,
        is_routine: bool,
    ) -> bool {
        let moved = ops::try_move_node(
            &self.nodes,
            id,
            day,
            time,
            route,
            target_index,
            branch_index,
            is_routine,
        );
        match moved {
            Some(next) => {
                self.commit(next, true);
                true
            }
            None => {
                debug!(node = %id, "move ignored: unknown node");
                false
            }
        }
    }

    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        match ops::try_delete_node(&self.nodes, id) {
            Some(next) => {
                self.commit(next, true);
                true
            }
            None => {
                debug!(node = %id, "delete ignored: unknown node");
                false
            }
        }
    }

    pub fn connect_nodes(&mut self, source: &NodeId, target: &NodeId) -> bool {
        match ops::try_connect_nodes(&self.nodes, source, target) {
            Some(next) => {
                self.commit(next, false);
                true
            }
            None => {
                debug!(%source, %target, "connect ignored");
                false
            }
        }
    }

    pub fn disconnect_nodes(&mut self, source: &NodeId, target: &NodeId) -> bool {
        match ops::try_disconnect_nodes(&self.nodes, source, target) {
            Some(next) => {
                self.commit(next, false);
                true
            }
            None => {
                debug!(%source, %target, "disconnect ignored");
                false
            }
        }
    }

    /// Branch index for a new parallel lane on `route`.
    pub fn create_branch(&self, route: &Route) -> u32 {
        ops::next_branch_index(&self.nodes, route)
    }

    /// Replaces the whole node set, e.g. after loading a project file.
    pub fn import_nodes(&mut self, nodes: Vec<ScenarioNode>) {
        debug!(count = nodes.len(), "import nodes");
        self.commit(nodes, true);
    }

    pub fn clear_all(&mut self) {
        self.issues.clear();
        self.commit(Vec::new(), true);
    }

    /// Replaces the node set with three starter scenarios.
    pub fn load_sample_data(&mut self) {
        self.clear_all();
        let common = Route::new("Common");
        self.add_node(Day::FIRST, TimeSlot::Morning, &common, false);
        self.add_node(Day::FIRST, TimeSlot::Afternoon, &common, false);
        if let Ok(second_day) = Day::new(1) {
            self.add_node(second_day, TimeSlot::Morning, &Route::new("Alyssa"), false);
        }
    }

    /// Defers validation until [`Project::end_gesture`]. Layout keeps refreshing.
    pub fn begin_gesture(&mut self) {
        self.in_gesture = true;
    }

    pub fn end_gesture(&mut self) {
        if std::mem::take(&mut self.in_gesture) {
            self.validate_all();
        }
    }

    pub fn validate_all(&mut self) -> &[ValidationIssue] {
        self.issues = validate::validate_all(&self.nodes);
        debug!(issues = self.issues.len(), "validated");
        &self.issues
    }

    pub fn refresh_layout(&mut self) {
        self.columns = compute_column_layout(&self.nodes, &self.routes, &self.config);
        self.rows = compute_row_layout(&self.nodes, &self.routes, &self.config);
    }

    fn commit(&mut self, nodes: Vec<ScenarioNode>, structural: bool) {
        self.nodes = Arc::from(nodes);
        self.rev = self.rev.saturating_add(1);
        if structural {
            self.refresh_layout();
        }
        if !self.in_gesture {
            self.validate_all();
        }
    }
}
