// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Node-set helpers used by the public operations.
/// Keeps `ops::mod` focused on the operation contracts.
fn position_of(nodes: &[ScenarioNode], id: &NodeId) -> Option<usize> {
    nodes.iter().position(|n| n.id() == id)
}

fn apply_patch(node: &mut ScenarioNode, patch: &NodePatch) {
    if let Some(scenario_id) = &patch.scenario_id {
        node.set_scenario_id(scenario_id.clone());
    }
    if let Some(description) = &patch.description {
        node.set_description(description.clone());
    }
    if let Some(grid_position) = &patch.grid_position {
        node.set_grid_position(grid_position.clone());
    }
    if let Some(branch_index) = patch.branch_index {
        node.set_branch_index(branch_index);
    }
    if let Some(sort_index) = patch.sort_index {
        node.set_sort_index(sort_index);
    }
    if let Some(is_routine) = patch.is_routine {
        node.set_routine(is_routine);
    }
    if let Some(load_info) = &patch.load_info {
        *node.load_info_mut() = load_info.clone();
    }
    if let Some(end_info) = &patch.end_info {
        *node.end_info_mut() = end_info.clone();
    }
    if let Some(next) = &patch.next_scenarios {
        *node.next_scenarios_mut() = next.clone();
    }
    if let Some(previous) = &patch.previous_scenarios {
        *node.previous_scenarios_mut() = previous.clone();
    }
    if let Some(edge_colors) = &patch.edge_colors {
        *node.edge_colors_mut() = edge_colors.clone();
    }
}

fn rewrite_references(node: &mut ScenarioNode, old_id: &ScenarioId, new_id: &ScenarioId) {
    rename_in_list(node.next_scenarios_mut(), old_id, new_id);
    rename_in_list(node.previous_scenarios_mut(), old_id, new_id);
    if node.load_info().references(old_id) {
        node.load_info_mut().after_scenario = Some(new_id.clone());
    }
    if node.end_info().references(old_id) {
        node.end_info_mut().after_scenario = Some(new_id.clone());
    }
    if let Some(color) = node.edge_colors_mut().remove(old_id) {
        node.edge_colors_mut().insert(new_id.clone(), color);
    }
}

fn rename_in_list(list: &mut [ScenarioId], old_id: &ScenarioId, new_id: &ScenarioId) {
    for sid in list.iter_mut().filter(|sid| **sid == *old_id) {
        *sid = new_id.clone();
    }
}

fn strip_references(node: &mut ScenarioNode, scenario_id: &ScenarioId) {
    node.next_scenarios_mut().retain(|sid| sid != scenario_id);
    node.previous_scenarios_mut().retain(|sid| sid != scenario_id);
    if node.load_info().references(scenario_id) {
        node.load_info_mut().after_scenario = None;
    }
    if node.end_info().references(scenario_id) {
        node.end_info_mut().after_scenario = None;
    }
    node.edge_colors_mut().remove(scenario_id);
}

/// Positions of the occupants of `lane` in stacking order; ties on `sort_index` keep set order.
fn lane_order(nodes: &[ScenarioNode], lane: &Lane, skip: Option<usize>) -> Vec<usize> {
    let mut occupants = nodes
        .iter()
        .enumerate()
        .filter(|(i, n)| Some(*i) != skip && n.is_in_lane(lane))
        .map(|(i, n)| (n.sort_index(), i))
        .collect::<Vec<_>>();
    occupants.sort_unstable();
    occupants.into_iter().map(|(_, i)| i).collect()
}

/// Renumbers the occupants of `lane` to `0..k-1`.
fn compact_lane(nodes: &mut [ScenarioNode], lane: &Lane) {
    for (rank, i) in lane_order(nodes, lane, None).into_iter().enumerate() {
        nodes[i].set_sort_index(rank as u32);
    }
}

/// Stacks `moved` at `target_index` among the other occupants of `lane`.
fn insert_into_lane(nodes: &mut [ScenarioNode], lane: &Lane, moved: usize, target_index: u32) {
    let mut order = lane_order(nodes, lane, Some(moved));
    let at = (target_index as usize).min(order.len());
    order.insert(at, moved);
    for (rank, i) in order.into_iter().enumerate() {
        nodes[i].set_sort_index(rank as u32);
    }
}

fn normalize_branches_in_place(nodes: &mut [ScenarioNode], route: &Route) {
    let used = nodes
        .iter()
        .filter(|n| !n.is_routine() && &n.grid_position().route == route)
        .map(ScenarioNode::branch_index)
        .collect::<BTreeSet<_>>();
    if used.iter().copied().eq(0..used.len() as u32) {
        return;
    }

    let remap = used
        .into_iter()
        .enumerate()
        .map(|(new_index, old_index)| (old_index, new_index as u32))
        .collect::<BTreeMap<_, _>>();
    for node in nodes
        .iter_mut()
        .filter(|n| !n.is_routine() && &n.grid_position().route == route)
    {
        if let Some(&new_index) = remap.get(&node.branch_index()) {
            node.set_branch_index(new_index);
        }
    }
}
