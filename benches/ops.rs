// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use scenario_graph::model::{Day, Route, TimeSlot};
use scenario_graph::ops::{create_node, delete_node, move_node, update_node, NodePatch};
use scenario_graph::Project;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names: `ops.move`, `ops.cascade`, `ops.project`
// - Case IDs (after the `/`) must not be renamed so results stay comparable.
fn benches_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops.move");

    for case in [fixtures::Case::Medium, fixtures::Case::Large] {
        let nodes = fixtures::nodes(case);
        let moves = fixtures::moves(&nodes, 200);

        group.throughput(Throughput::Elements(moves.len() as u64));
        group.bench_function(format!("{}_200_moves", case.id()), |b| {
            b.iter(|| {
                let mut current = nodes.clone();
                for m in &moves {
                    current = move_node(
                        &current,
                        &m.id,
                        m.day,
                        m.time,
                        &m.route,
                        m.target_index,
                        m.branch_index,
                        m.is_routine,
                    );
                }
                black_box(fixtures::checksum_nodes(&current))
            })
        });
    }

    group.throughput(Throughput::Elements(100));
    group.bench_function("create_100_in_one_cell", |b| {
        let route = Route::new("Common");
        b.iter(|| {
            let mut nodes = Vec::with_capacity(100);
            for _ in 0..100 {
                let node = create_node(&nodes, Day::FIRST, TimeSlot::Morning, &route, false);
                nodes.push(node);
            }
            black_box(nodes.len())
        })
    });
    group.finish();

    let mut group = c.benchmark_group("ops.cascade");
    let nodes = fixtures::nodes(fixtures::Case::Large);
    let middle = nodes[nodes.len() / 2].id().clone();

    group.bench_function("rename_large", |b| {
        let patch = NodePatch::rename("bench_renamed");
        b.iter(|| black_box(update_node(black_box(&nodes), &middle, &patch).len()))
    });

    group.bench_function("delete_large", |b| {
        b.iter_batched(
            || nodes.clone(),
            |nodes| black_box(delete_node(&nodes, &middle).len()),
            BatchSize::LargeInput,
        )
    });
    group.finish();

    let mut group = c.benchmark_group("ops.project");
    let template = {
        let mut project = Project::with_defaults();
        project.import_nodes(fixtures::nodes(fixtures::Case::Medium));
        project
    };
    let moves = fixtures::moves(template.nodes(), 200);

    group.throughput(Throughput::Elements(moves.len() as u64));
    group.bench_function("medium_200_moves_gesture", |b| {
        b.iter_batched(
            || template.clone(),
            |mut project| {
                project.begin_gesture();
                for m in &moves {
                    project.move_node(
                        &m.id,
                        m.day,
                        m.time,
                        &m.route,
                        m.target_index,
                        m.branch_index,
                        m.is_routine,
                    );
                }
                project.end_gesture();
                black_box(project.issues().len())
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_ops
}
criterion_main!(benches);
