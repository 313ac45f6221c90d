// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Logical grid coordinates: days, time slots, routes and the stacking lane key.

use std::fmt;

use smol_str::SmolStr;

/// Number of days on the grid (`Day1` ..= `Day28`).
pub const DAY_COUNT: u8 = 28;
/// Number of time slots per day.
pub const TIME_SLOT_COUNT: u8 = 4;
/// Number of (day, time) columns.
pub const SLOT_COUNT: usize = DAY_COUNT as usize * TIME_SLOT_COUNT as usize;

const DEFAULT_ROUTES: [&str; 5] = ["Common", "Alyssa", "Rhea", "Natalie", "OtherQuest"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    DayOutOfRange { index: u32 },
    TimeOutOfRange { index: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayOutOfRange { index } => {
                write!(f, "day index {index} out of range (0..{DAY_COUNT})")
            }
            Self::TimeOutOfRange { index } => {
                write!(f, "time index {index} out of range (0..{TIME_SLOT_COUNT})")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Zero-based day index, always `< DAY_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Day(u8);

impl Day {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(DAY_COUNT - 1);

    pub fn new(index: u32) -> Result<Self, GridError> {
        if index >= u32::from(DAY_COUNT) {
            return Err(GridError::DayOutOfRange { index });
        }
        Ok(Self(index as u8))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Human-readable label, `Day1` for index 0.
    pub fn label(self) -> String {
        let mut buf = itoa::Buffer::new();
        format!("Day{}", buf.format(u32::from(self.0) + 1))
    }

    pub fn all() -> impl Iterator<Item = Day> {
        (0..DAY_COUNT).map(Day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; TIME_SLOT_COUNT as usize] =
        [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    pub fn new(index: u32) -> Result<Self, GridError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(GridError::TimeOutOfRange { index })
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Morning => 0,
            Self::Afternoon => 1,
            Self::Evening => 2,
            Self::Night => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A (day, time-of-day) column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Slot {
    pub day: Day,
    pub time: TimeSlot,
}

impl Slot {
    pub fn new(day: Day, time: TimeSlot) -> Self {
        Self { day, time }
    }

    /// Total ordering of slots: `day * 4 + time`.
    pub fn global_index(self) -> usize {
        usize::from(self.day.index()) * usize::from(TIME_SLOT_COUNT) + usize::from(self.time.index())
    }

    /// Inverse of [`Slot::global_index`]; `None` past the last slot.
    pub fn from_global_index(index: usize) -> Option<Self> {
        if index >= SLOT_COUNT {
            return None;
        }
        let per_day = usize::from(TIME_SLOT_COUNT);
        Some(Self {
            day: Day((index / per_day) as u8),
            time: TimeSlot::ALL[index % per_day],
        })
    }

    /// Every slot in day-then-time order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).filter_map(Self::from_global_index)
    }
}

/// A named narrative lane occupying one row band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route(SmolStr);

impl Route {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The stock route list, in row order.
    pub fn defaults() -> Vec<Route> {
        DEFAULT_ROUTES.iter().map(Route::new).collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Route {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The logical "when/where" of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub day: Day,
    pub time: TimeSlot,
    pub route: Route,
}

impl GridPosition {
    pub fn new(day: Day, time: TimeSlot, route: Route) -> Self {
        Self { day, time, route }
    }

    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.time)
    }

    pub fn global_time_index(&self) -> usize {
        self.slot().global_index()
    }
}

/// Stacking key: nodes sharing a lane tile left-to-right by `sort_index`.
///
/// Routine nodes stack in their own lane (always branch 0), separate from the numbered
/// branches of the same cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lane {
    pub slot: Slot,
    pub route: Route,
    pub is_routine: bool,
    pub branch_index: u32,
}

impl Lane {
    pub fn new(slot: Slot, route: Route, is_routine: bool, branch_index: u32) -> Self {
        Self {
            slot,
            route,
            is_routine,
            branch_index: if is_routine { 0 } else { branch_index },
        }
    }
}
