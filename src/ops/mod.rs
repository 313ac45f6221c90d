// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations on node sets.
//!
//! Every operation is a pure transform from one node-set snapshot to the next. Requests that
//! cannot apply (unknown node id, colliding rename, duplicate edge) are absorbed as no-ops:
//! the `try_*` variants report them as `None`, the plain variants return an unchanged copy.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use crate::model::{
    Day, GridPosition, Lane, NodeId, Route, ScenarioId, ScenarioNode, Slot, TimeSlot, Trigger,
};

/// Shallow field update for [`update_node`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePatch {
    pub scenario_id: Option<ScenarioId>,
    pub description: Option<String>,
    pub grid_position: Option<GridPosition>,
    pub branch_index: Option<u32>,
    pub sort_index: Option<u32>,
    pub is_routine: Option<bool>,
    pub load_info: Option<Trigger>,
    pub end_info: Option<Trigger>,
    pub next_scenarios: Option<Vec<ScenarioId>>,
    pub previous_scenarios: Option<Vec<ScenarioId>>,
    pub edge_colors: Option<BTreeMap<ScenarioId, String>>,
}

impl NodePatch {
    pub fn rename(scenario_id: impl Into<ScenarioId>) -> Self {
        Self {
            scenario_id: Some(scenario_id.into()),
            ..Self::default()
        }
    }

    /// Whether applying the patch can change the grid layout.
    pub fn is_structural(&self) -> bool {
        self.grid_position.is_some()
            || self.branch_index.is_some()
            || self.sort_index.is_some()
            || self.is_routine.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// First free `D{day}_R{route}_Sc{counter}` id, counting up from `Sc001`.
pub fn generate_scenario_id(nodes: &[ScenarioNode], day: Day, route: &Route) -> ScenarioId {
    let taken = nodes
        .iter()
        .map(|n| n.scenario_id().as_str())
        .collect::<HashSet<_>>();
    let prefix = format!("D{:02}_R{}_Sc", u32::from(day.index()) + 1, route);

    let mut counter = 1u32;
    loop {
        let candidate = format!("{prefix}{counter:03}");
        if !taken.contains(candidate.as_str()) {
            return ScenarioId::new(candidate);
        }
        counter += 1;
    }
}

/// Builds (but does not insert) a node for the given cell, stacked after the lane's
/// current occupants on branch 0.
pub fn create_node(
    nodes: &[ScenarioNode],
    day: Day,
    time: TimeSlot,
    route: &Route,
    is_routine: bool,
) -> ScenarioNode {
    let scenario_id = generate_scenario_id(nodes, day, route);
    let lane = Lane::new(Slot::new(day, time), route.clone(), is_routine, 0);
    let sort_index = nodes
        .iter()
        .filter(|n| n.is_in_lane(&lane))
        .map(|n| n.sort_index() + 1)
        .max()
        .unwrap_or(0);

    let mut node = ScenarioNode::new(
        NodeId::generate(),
        scenario_id,
        GridPosition::new(day, time, route.clone()),
    );
    node.set_routine(is_routine);
    node.set_sort_index(sort_index);
    node
}

pub fn update_node(nodes: &[ScenarioNode], id: &NodeId, patch: &NodePatch) -> Vec<ScenarioNode> {
    try_update_node(nodes, id, patch).unwrap_or_else(|| nodes.to_vec())
}

/// Applies `patch` to node `id`.
///
/// A scenario-id change is cascaded into every reference held by any node (edge lists,
/// trigger dependencies, edge colors). Renaming onto an id owned by another node is
/// rejected. A blank new id is stored without cascading so existing references keep
/// pointing at the old key.
pub fn try_update_node(
    nodes: &[ScenarioNode],
    id: &NodeId,
    patch: &NodePatch,
) -> Option<Vec<ScenarioNode>> {
    let index = position_of(nodes, id)?;
    let old_id = nodes[index].scenario_id().clone();
    let rename = patch
        .scenario_id
        .as_ref()
        .filter(|new_id| **new_id != old_id);

    if let Some(new_id) = rename {
        if !new_id.is_blank()
            && nodes
                .iter()
                .any(|n| n.id() != id && n.scenario_id() == new_id)
        {
            debug!(node = %id, from = %old_id, to = %new_id, "rename rejected: scenario id in use");
            return None;
        }
    }

    let mut out = nodes.to_vec();
    apply_patch(&mut out[index], patch);

    if let Some(new_id) = rename.filter(|new_id| !new_id.is_blank() && !old_id.is_blank()) {
        for node in &mut out {
            rewrite_references(node, &old_id, new_id);
        }
    }

    Some(out)
}

#[allow(clippy::too_many_arguments)]
pub fn move_node(
    nodes: &[ScenarioNode],
    id: &NodeId,
    day: Day,
    time: TimeSlot,
    route: &Route,
    target_index: u32,
    branch_index: u32,
    is_routine: bool,
) -> Vec<ScenarioNode> {
    try_move_node(nodes, id, day, time, route, target_index, branch_index, is_routine)
        .unwrap_or_else(|| nodes.to_vec())
}

/// Relocates node `id` to stack position `target_index` of the target lane.
///
/// The node is taken out of its old stacking first, so `target_index` counts among the other
/// occupants of the target lane: whoever held it shifts up by one and an index past the end
/// appends. Both the vacated and the destination lane end up numbered `0..k-1`, and the
/// branch indices of the vacated (and destination) route are compacted.
#[allow(clippy::too_many_arguments)]
pub fn try_move_node(
    nodes: &[ScenarioNode],
    id: &NodeId,
    day: Day,
    time: TimeSlot,
    route: &Route,
    target_index: u32,
    branch_index: u32,
    is_routine: bool,
) -> Option<Vec<ScenarioNode>> {
    let index = position_of(nodes, id)?;
    let vacated = nodes[index].lane();
    let target = Lane::new(Slot::new(day, time), route.clone(), is_routine, branch_index);

    let mut out = nodes.to_vec();
    {
        let moved = &mut out[index];
        moved.set_grid_position(GridPosition::new(day, time, route.clone()));
        moved.set_branch_index(target.branch_index);
        moved.set_routine(is_routine);
        let load_info = moved.load_info_mut();
        load_info.at_day = day;
        load_info.at_time = time;
    }

    if vacated != target {
        compact_lane(&mut out, &vacated);
    }
    insert_into_lane(&mut out, &target, index, target_index);

    normalize_branches_in_place(&mut out, &vacated.route);
    if vacated.route != *route {
        normalize_branches_in_place(&mut out, route);
    }

    Some(out)
}

pub fn delete_node(nodes: &[ScenarioNode], id: &NodeId) -> Vec<ScenarioNode> {
    try_delete_node(nodes, id).unwrap_or_else(|| nodes.to_vec())
}

/// Removes node `id` and every reference to its scenario id, then renumbers the vacated
/// lane and compacts the branch indices of its route.
pub fn try_delete_node(nodes: &[ScenarioNode], id: &NodeId) -> Option<Vec<ScenarioNode>> {
    let index = position_of(nodes, id)?;
    let removed = &nodes[index];
    let scenario_id = removed.scenario_id();
    let vacated = removed.lane();

    let mut out = nodes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, n)| n.clone())
        .collect::<Vec<_>>();
    for node in &mut out {
        strip_references(node, scenario_id);
    }

    compact_lane(&mut out, &vacated);
    normalize_branches_in_place(&mut out, &vacated.route);
    Some(out)
}

pub fn connect_nodes(nodes: &[ScenarioNode], source: &NodeId, target: &NodeId) -> Vec<ScenarioNode> {
    try_connect_nodes(nodes, source, target).unwrap_or_else(|| nodes.to_vec())
}

/// Adds the edge `source -> target` to both endpoint lists. Self-edges and existing edges
/// are no-ops.
pub fn try_connect_nodes(
    nodes: &[ScenarioNode],
    source: &NodeId,
    target: &NodeId,
) -> Option<Vec<ScenarioNode>> {
    if source == target {
        return None;
    }
    let source_index = position_of(nodes, source)?;
    let target_index = position_of(nodes, target)?;
    let source_sid = nodes[source_index].scenario_id().clone();
    let target_sid = nodes[target_index].scenario_id().clone();
    if nodes[source_index].next_scenarios().contains(&target_sid) {
        return None;
    }

    let mut out = nodes.to_vec();
    out[source_index].next_scenarios_mut().push(target_sid);
    let previous = out[target_index].previous_scenarios_mut();
    if !previous.contains(&source_sid) {
        previous.push(source_sid);
    }
    Some(out)
}

pub fn disconnect_nodes(
    nodes: &[ScenarioNode],
    source: &NodeId,
    target: &NodeId,
) -> Vec<ScenarioNode> {
    try_disconnect_nodes(nodes, source, target).unwrap_or_else(|| nodes.to_vec())
}

/// Removes the edge `source -> target` from both endpoint lists. `None` when either node is
/// unknown or the edge did not exist.
pub fn try_disconnect_nodes(
    nodes: &[ScenarioNode],
    source: &NodeId,
    target: &NodeId,
) -> Option<Vec<ScenarioNode>> {
    let source_index = position_of(nodes, source)?;
    let target_index = position_of(nodes, target)?;
    let source_sid = nodes[source_index].scenario_id().clone();
    let target_sid = nodes[target_index].scenario_id().clone();

    let linked = nodes[source_index].next_scenarios().contains(&target_sid)
        || nodes[target_index].previous_scenarios().contains(&source_sid);
    if !linked {
        return None;
    }

    let mut out = nodes.to_vec();
    out[source_index]
        .next_scenarios_mut()
        .retain(|sid| *sid != target_sid);
    out[target_index]
        .previous_scenarios_mut()
        .retain(|sid| *sid != source_sid);
    Some(out)
}

/// Remaps the non-routine branch indices of `route` onto `0..k-1`, preserving their order.
pub fn normalize_branches(nodes: &[ScenarioNode], route: &Route) -> Vec<ScenarioNode> {
    let mut out = nodes.to_vec();
    normalize_branches_in_place(&mut out, route);
    out
}

/// Branch index for a new parallel lane on `route`: one past the deepest in use.
pub fn next_branch_index(nodes: &[ScenarioNode], route: &Route) -> u32 {
    nodes
        .iter()
        .filter(|n| &n.grid_position().route == route)
        .map(ScenarioNode::branch_index)
        .max()
        .unwrap_or(0)
        + 1
}

// Extracted helpers shared by the operations above.
include!("ops_impl.rs");
