// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout of the scenario grid.
//!
//! Column widths and row heights are derived wholesale from the node set; geometry maps
//! logical slots to pixels (and back) through those derived maps.

pub mod columns;
pub mod geometry;
pub mod rows;

use serde::Deserialize;

pub use columns::{compute_column_layout, ColumnLayout, ColumnSpan};
pub use geometry::{
    from_pixel_coordinates, node_position, node_rect, to_pixel_coordinates, GridCell,
    PixelPoint, PixelRect,
};
pub use rows::{compute_row_layout, RowLayout, RowSpan};

/// Pixel constants of the grid. Every field falls back to its default when absent from a
/// config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub min_column_width: f64,
    pub node_width: f64,
    pub node_height: f64,
    pub node_gap: f64,
    pub row_height: f64,
    pub branch_height: f64,
    pub header_height: f64,
    pub sidebar_width: f64,
    /// Vertical shift of routine nodes below the deepest numbered branch. Defaults to one
    /// routine band (250) rather than 120, which would overlap a 180 px node on that branch.
    pub routine_offset: f64,
    /// Extra row height reserved when a route holds routine nodes.
    pub routine_band_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_column_width: 250.0,
            node_width: 240.0,
            node_height: 180.0,
            node_gap: 50.0,
            row_height: 250.0,
            branch_height: 200.0,
            header_height: 60.0,
            sidebar_width: 120.0,
            routine_offset: 250.0,
            routine_band_height: 250.0,
        }
    }
}

impl GridConfig {
    /// Vertical inset of a node inside its branch band.
    pub fn row_padding(&self) -> f64 {
        ((self.row_height - self.node_height) / 2.0).max(0.0)
    }

    /// Column width needed to tile `concurrency` nodes side by side.
    pub fn column_width_for(&self, concurrency: usize) -> f64 {
        let count = concurrency.max(1) as f64;
        let required = count * self.node_width + (count + 1.0) * self.node_gap;
        required.max(self.min_column_width)
    }
}
