// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Slot ↔ pixel mapping.
//!
//! Columns have independent widths, so every horizontal position is looked up in the
//! [`ColumnLayout`]; rows likewise come from the [`RowLayout`].

use super::{ColumnLayout, RowLayout};
use crate::model::{Day, Route, ScenarioNode, Slot, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A logical grid cell resolved from a pixel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub day: Day,
    pub time: TimeSlot,
    pub route: Route,
}

/// Top-left corner of a node box.
///
/// Routes absent from `rows` fall back to the first band below the header.
#[allow(clippy::too_many_arguments)]
pub fn to_pixel_coordinates(
    day: Day,
    time: TimeSlot,
    route: &Route,
    branch_index: u32,
    stack_index: u32,
    columns: &ColumnLayout,
    rows: &RowLayout,
    is_routine: bool,
) -> PixelPoint {
    let config = rows.config();
    let padding = config.row_padding();

    // Routine nodes always carry branch 0, so they are anchored on the deepest numbered branch
    // of the row instead of their own branch index; `routine_offset` must be at least
    // `node_height` for them to clear it.
    let y = match rows.row(route) {
        Some(row) if is_routine => {
            row.start_y
                + f64::from(row.max_branch) * config.branch_height
                + padding
                + config.routine_offset
        }
        Some(row) => row.start_y + f64::from(branch_index) * config.branch_height + padding,
        None => config.header_height + padding,
    };

    let config = columns.config();
    let slot = Slot::new(day, time);
    let start_x = match columns.column(slot) {
        Some(column) => column.start_x,
        None => config.sidebar_width + slot.global_index() as f64 * config.min_column_width,
    };
    let x = start_x
        + config.node_gap
        + f64::from(stack_index) * (config.node_width + config.node_gap);

    PixelPoint { x, y }
}

pub fn node_position(node: &ScenarioNode, columns: &ColumnLayout, rows: &RowLayout) -> PixelPoint {
    let position = node.grid_position();
    to_pixel_coordinates(
        position.day,
        position.time,
        &position.route,
        node.branch_index(),
        node.sort_index(),
        columns,
        rows,
        node.is_routine(),
    )
}

pub fn node_rect(node: &ScenarioNode, columns: &ColumnLayout, rows: &RowLayout) -> PixelRect {
    let PixelPoint { x, y } = node_position(node, columns, rows);
    let config = columns.config();
    PixelRect {
        x,
        y,
        width: config.node_width,
        height: config.node_height,
    }
}

/// Resolves a pixel position to the grid cell under it.
///
/// Linear scans over row bands (route order) and column bands (day-then-time order).
/// Points past the last band clamp to it; points before the first band, or in no band,
/// resolve to the first. Returns `None` only when `routes` is empty.
pub fn from_pixel_coordinates(
    x: f64,
    y: f64,
    columns: &ColumnLayout,
    rows: &RowLayout,
    routes: &[Route],
) -> Option<GridCell> {
    let first_route = routes.first()?;
    let last_route = routes.last()?;

    let mut route = routes
        .iter()
        .find(|route| rows.row(route).is_some_and(|row| row.contains_y(y)))
        .unwrap_or(first_route);
    if rows.row(last_route).is_some_and(|row| y >= row.end_y()) {
        route = last_route;
    }

    let mut slot = columns
        .iter()
        .find_map(|(slot, column)| column.contains_x(x).then_some(slot))
        .unwrap_or_default();
    if columns
        .columns()
        .last()
        .is_some_and(|column| x >= column.end_x())
    {
        slot = Slot::new(Day::LAST, TimeSlot::Night);
    }

    Some(GridCell {
        day: slot.day,
        time: slot.time,
        route: route.clone(),
    })
}
