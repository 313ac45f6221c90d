// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for project files on disk.
//!
//! A project file is a JSON array of node records. The export projection and the grid
//! config file are written and read through the same helpers.

pub mod export;
pub mod project_file;
pub mod records;

pub use export::{export_nodes, ExportedScenario, ScenarioInfo, TriggerInfo};
pub use project_file::{load_grid_config, ProjectFile, StoreError, WriteDurability};
pub use records::{
    nodes_from_records, record_schema, records_from_nodes, GridPositionRecord, NodeRecord,
    TriggerRecord,
};
