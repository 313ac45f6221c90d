// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A scenario graph is a flat set of [`ScenarioNode`]s placed on a Day × Time × Route grid;
//! edges live inside the nodes as lists of scenario ids.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod ids;
pub mod node;

pub use grid::{
    Day, GridError, GridPosition, Lane, Route, Slot, TimeSlot, DAY_COUNT, SLOT_COUNT,
    TIME_SLOT_COUNT,
};
pub use ids::{Id, IdError, NodeId, ScenarioId};
pub use node::{ScenarioNode, Trigger};
