// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::GridConfig;
use crate::model::{Route, ScenarioNode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpan {
    pub start_y: f64,
    pub height: f64,
    pub max_branch: u32,
    pub has_routine: bool,
}

impl RowSpan {
    pub fn end_y(&self) -> f64 {
        self.start_y + self.height
    }

    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.start_y && y < self.end_y()
    }
}

/// One span per route, in route order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    rows: Vec<(Route, RowSpan)>,
    total_height: f64,
    config: GridConfig,
}

impl RowLayout {
    pub fn row(&self, route: &Route) -> Option<&RowSpan> {
        self.rows
            .iter()
            .find_map(|(candidate, span)| (candidate == route).then_some(span))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Route, &RowSpan)> + '_ {
        self.rows.iter().map(|(route, span)| (route, span))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

/// Stacks route rows top to bottom. A row is tall enough for its deepest branch, plus a
/// routine band when any of its nodes is routine.
pub fn compute_row_layout(nodes: &[ScenarioNode], routes: &[Route], config: &GridConfig) -> RowLayout {
    let mut rows = Vec::with_capacity(routes.len());
    let mut current_y = config.header_height;

    for route in routes {
        if rows.iter().any(|(seen, _): &(Route, RowSpan)| seen == route) {
            continue;
        }

        let mut max_branch = 0u32;
        let mut has_routine = false;
        for node in nodes.iter().filter(|n| &n.grid_position().route == route) {
            if node.is_routine() {
                has_routine = true;
            } else {
                max_branch = max_branch.max(node.branch_index());
            }
        }

        let mut height = config.row_height + f64::from(max_branch) * config.branch_height;
        if has_routine {
            height += config.routine_band_height;
        }

        rows.push((
            route.clone(),
            RowSpan {
                start_y: current_y,
                height,
                max_branch,
                has_routine,
            },
        ));
        current_y += height;
    }

    RowLayout {
        rows,
        total_height: current_y,
        config: *config,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_row_layout;
    use crate::layout::GridConfig;
    use crate::model::fixtures::{node, placed, routine};
    use crate::model::Route;

    #[test]
    fn rows_stack_in_route_order() {
        let config = GridConfig::default();
        let routes = Route::defaults();
        let layout = compute_row_layout(&[], &routes, &config);

        assert_eq!(layout.len(), routes.len());
        let starts = layout.iter().map(|(_, span)| span.start_y).collect::<Vec<_>>();
        assert_eq!(starts, vec![60.0, 310.0, 560.0, 810.0, 1060.0]);
        assert_eq!(layout.total_height(), 1310.0);
    }

    #[test]
    fn branch_depth_and_routine_band_grow_the_row() {
        let config = GridConfig::default();
        let routes = Route::defaults();
        let nodes = vec![
            node("a", "A", 0, 0, "Alyssa"),
            placed("b", "B", (0, 0, "Alyssa"), 2, 0),
            routine("r", "R", (3, 1, "Alyssa")),
        ];
        let layout = compute_row_layout(&nodes, &routes, &config);

        let alyssa = layout.row(&Route::new("Alyssa")).expect("row");
        assert_eq!(alyssa.max_branch, 2);
        assert!(alyssa.has_routine);
        assert_eq!(alyssa.height, 250.0 + 2.0 * 200.0 + 250.0);

        let rhea = layout.row(&Route::new("Rhea")).expect("row");
        assert_eq!(rhea.start_y, alyssa.end_y());
        assert_eq!(rhea.height, 250.0);
    }

    #[test]
    fn routine_nodes_do_not_count_as_branches() {
        let mut r = routine("r", "R", (0, 0, "Common"));
        r.set_branch_index(4);
        let layout = compute_row_layout(&[r], &Route::defaults(), &GridConfig::default());
        let common = layout.row(&Route::new("Common")).expect("row");
        assert_eq!(common.max_branch, 0);
    }
}
