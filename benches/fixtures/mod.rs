// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use scenario_graph::model::{
    Day, GridPosition, NodeId, Route, ScenarioId, ScenarioNode, TimeSlot, DAY_COUNT,
    TIME_SLOT_COUNT,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn node_count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 2000,
        }
    }
}

/// One move request, mirroring a drag drop.
#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub id: NodeId,
    pub day: Day,
    pub time: TimeSlot,
    pub route: Route,
    pub target_index: u32,
    pub branch_index: u32,
    pub is_routine: bool,
}

fn day(index: usize) -> Day {
    Day::new((index % usize::from(DAY_COUNT)) as u32).expect("day")
}

fn time(index: usize) -> TimeSlot {
    TimeSlot::new((index % usize::from(TIME_SLOT_COUNT)) as u32).expect("time")
}

/// Nodes spread over every route and slot, a few stacked per cell, with branches up to 2,
/// one routine node in eleven and a forward edge from most nodes to a later one.
pub fn nodes(case: Case) -> Vec<ScenarioNode> {
    let routes = Route::defaults();
    let count = case.node_count();
    let mut out = Vec::with_capacity(count);

    for idx in 0..count {
        let route = routes[idx % routes.len()].clone();
        let slot = idx.wrapping_mul(7) / 3;
        let mut node = ScenarioNode::new(
            NodeId::new(format!("bench_node_{idx:06}")).expect("node id"),
            ScenarioId::new(format!("bench_sc_{idx:06}")),
            GridPosition::new(day(slot / 4), time(slot), route),
        );
        node.set_branch_index((idx % 3) as u32);
        node.set_sort_index((idx / 15 % 3) as u32);
        node.set_routine(idx % 11 == 0);
        out.push(node);
    }

    for idx in 0..count.saturating_sub(5) {
        if idx % 4 == 3 {
            continue;
        }
        let target = idx + 5;
        let target_sid = out[target].scenario_id().clone();
        let source_sid = out[idx].scenario_id().clone();
        out[idx].next_scenarios_mut().push(target_sid);
        out[target].previous_scenarios_mut().push(source_sid);
    }

    out
}

/// `count` moves cycling through the node set and the grid.
pub fn moves(nodes: &[ScenarioNode], count: usize) -> Vec<MoveRequest> {
    assert!(!nodes.is_empty(), "move fixture needs nodes");
    let routes = Route::defaults();

    (0..count)
        .map(|idx| MoveRequest {
            id: nodes[idx.wrapping_mul(13) % nodes.len()].id().clone(),
            day: day(idx.wrapping_mul(5)),
            time: time(idx),
            route: routes[idx.wrapping_mul(3) % routes.len()].clone(),
            target_index: (idx % 4) as u32,
            branch_index: (idx % 2) as u32,
            is_routine: idx % 17 == 0,
        })
        .collect()
}

pub fn checksum_nodes(nodes: &[ScenarioNode]) -> u64 {
    let mut acc = 0u64;
    for node in nodes {
        acc = acc.wrapping_mul(131).wrapping_add(u64::from(node.sort_index()));
        acc = acc.wrapping_mul(131).wrapping_add(u64::from(node.branch_index()));
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.grid_position().global_time_index() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.next_scenarios().len() as u64);
    }
    acc
}
