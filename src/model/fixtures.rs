// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::grid::{Day, GridPosition, Route, TimeSlot};
use super::ids::{NodeId, ScenarioId};
use super::node::ScenarioNode;

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn sid(value: &str) -> ScenarioId {
    ScenarioId::new(value)
}

pub(crate) fn node(id: &str, scenario_id: &str, day: u32, time: u32, route: &str) -> ScenarioNode {
    ScenarioNode::new(
        nid(id),
        sid(scenario_id),
        GridPosition::new(
            Day::new(day).expect("day"),
            TimeSlot::new(time).expect("time"),
            Route::new(route),
        ),
    )
}

pub(crate) fn placed(
    id: &str,
    scenario_id: &str,
    (day, time, route): (u32, u32, &str),
    branch_index: u32,
    sort_index: u32,
) -> ScenarioNode {
    let mut n = node(id, scenario_id, day, time, route);
    n.set_branch_index(branch_index);
    n.set_sort_index(sort_index);
    n
}

pub(crate) fn routine(id: &str, scenario_id: &str, (day, time, route): (u32, u32, &str)) -> ScenarioNode {
    let mut n = node(id, scenario_id, day, time, route);
    n.set_routine(true);
    n
}

/// Writes a symmetric edge `from -> to` (by scenario id) directly into the node set.
pub(crate) fn link(nodes: &mut [ScenarioNode], from: &str, to: &str) {
    for n in nodes.iter_mut() {
        if n.scenario_id() == from {
            n.next_scenarios_mut().push(sid(to));
        }
        if n.scenario_id() == to {
            n.previous_scenarios_mut().push(sid(from));
        }
    }
}

pub(crate) fn find<'a>(nodes: &'a [ScenarioNode], id: &str) -> &'a ScenarioNode {
    nodes
        .iter()
        .find(|n| n.id().as_str() == id)
        .unwrap_or_else(|| panic!("node {id} present"))
}

/// Three chained scenarios on the Common route: a (Day1 Morning) -> b (Day1 Evening) -> c (Day2 Morning).
pub(crate) fn small_chain() -> Vec<ScenarioNode> {
    let mut nodes = vec![
        node("a", "A", 0, 0, "Common"),
        node("b", "B", 0, 2, "Common"),
        node("c", "C", 1, 0, "Common"),
    ];
    link(&mut nodes, "A", "B");
    link(&mut nodes, "B", "C");
    nodes
}
