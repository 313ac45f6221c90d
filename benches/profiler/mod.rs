// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Reads `SCENARIO_BENCH_<name>`, clamped into `range`; unset or unparsable keeps `default`.
fn knob<T: FromStr + Ord + Copy>(name: &str, default: T, range: RangeInclusive<T>) -> T {
    std::env::var(format!("SCENARIO_BENCH_{name}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(*range.start(), *range.end())
}

/// Shared criterion config for the `ops`, `layout` and `validate` targets.
///
/// Ops cases are batched and short, so the defaults favour more samples over long windows.
/// `--profile-time <secs>` writes a flamegraph per benchmark under `target/criterion`.
pub fn criterion() -> Criterion {
    let frequency = knob("PROFILE_HZ", 200_i32, 1..=1000);
    let samples = knob("SAMPLES", 40_usize, 10..=200);
    let measure = knob("MEASURE_SECS", 4_u64, 1..=60);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(measure))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
