// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::GridConfig;
use crate::model::{Route, ScenarioNode, Slot, SLOT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpan {
    pub start_x: f64,
    pub width: f64,
    /// Peak number of nodes sharing one lane of this slot, across all routes.
    pub concurrency: usize,
}

impl ColumnSpan {
    pub fn end_x(&self) -> f64 {
        self.start_x + self.width
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.start_x && x < self.end_x()
    }
}

/// One span per (day, time) slot, in day-then-time order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    columns: Vec<ColumnSpan>,
    total_width: f64,
    config: GridConfig,
}

impl ColumnLayout {
    pub fn column(&self, slot: Slot) -> Option<&ColumnSpan> {
        self.columns.get(slot.global_index())
    }

    pub fn columns(&self) -> &[ColumnSpan] {
        &self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &ColumnSpan)> + '_ {
        Slot::all().zip(self.columns.iter())
    }

    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

#[derive(Debug, Clone, Copy)]
struct BranchCount {
    route: usize,
    branch_index: u32,
    count: usize,
}

/// Sizes every column for the densest lane it has to hold.
///
/// Per slot and route, occupants are partitioned by branch index, with routine nodes counted
/// on branch 0; the slot's concurrency is the largest partition over all routes. Nodes on
/// routes not listed in `routes` do not contribute.
pub fn compute_column_layout(
    nodes: &[ScenarioNode],
    routes: &[Route],
    config: &GridConfig,
) -> ColumnLayout {
    let route_rows = routes
        .iter()
        .enumerate()
        .map(|(idx, route)| (route, idx))
        .collect::<HashMap<_, _>>();

    let mut branches: Vec<SmallVec<[BranchCount; 4]>> = vec![SmallVec::new(); SLOT_COUNT];
    for node in nodes {
        let Some(&route) = route_rows.get(&node.grid_position().route) else {
            continue;
        };
        let Some(slot_branches) = branches.get_mut(node.slot().global_index()) else {
            continue;
        };
        let branch_index = node.lane().branch_index;
        match slot_branches
            .iter_mut()
            .find(|c| c.route == route && c.branch_index == branch_index)
        {
            Some(existing) => existing.count += 1,
            None => slot_branches.push(BranchCount {
                route,
                branch_index,
                count: 1,
            }),
        }
    }

    let mut columns = Vec::with_capacity(SLOT_COUNT);
    let mut current_x = config.sidebar_width;
    for slot_branches in &branches {
        let concurrency = slot_branches.iter().map(|c| c.count).max().unwrap_or(0);
        let width = config.column_width_for(concurrency);
        columns.push(ColumnSpan {
            start_x: current_x,
            width,
            concurrency,
        });
        current_x += width;
    }

    ColumnLayout {
        columns,
        total_width: current_x,
        config: *config,
    }
}
