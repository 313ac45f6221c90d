// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scenario Graph: layout and consistency engine for Day × Time × Route scenario grids.
//!
//! The core ([`ops`], [`layout`], [`validate`]) is a set of pure functions over node-set
//! snapshots. [`project::Project`] owns one snapshot and keeps the derived state in sync;
//! [`store`] reads and writes project files.

pub mod layout;
pub mod model;
pub mod ops;
pub mod project;
pub mod store;
pub mod validate;

pub use project::Project;
