// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use erd_canvas::command::{decode_commands, editor, table};
use erd_canvas::focus::MoveKey;
use erd_canvas::Store;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `dispatch.replay`, `dispatch.interactive`
// - Case IDs after the `/` stay fixed across refactors so results remain comparable.
fn benches_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch.replay");

    for (case, tables, columns) in [("small", 8, 4), ("medium", 40, 8), ("large", 120, 12)] {
        let log = fixtures::session_log(tables, columns);
        group.throughput(Throughput::Elements(log.len() as u64));
        group.bench_function(case, |b| {
            b.iter(|| {
                let mut store = Store::new();
                store.dispatch_all(black_box(&log));
                black_box(fixtures::checksum_store(&store))
            })
        });
    }

    let encoded = serde_json::to_string(&fixtures::session_log(40, 8)).expect("encode log");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("decode_medium", |b| {
        b.iter(|| {
            let commands = decode_commands(black_box(&encoded)).expect("decode log");
            black_box(commands.len())
        })
    });

    group.finish();
}

fn benches_interactive(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch.interactive");

    group.bench_function("group_move_medium", |b| {
        b.iter_batched(
            || {
                let mut store = fixtures::populated_store(40, 8);
                store.dispatch(&table::select_all_table());
                store
            },
            |mut store| {
                let table_id = fixtures::first_table_id(&store);
                let command = table::move_table(&store, true, 3.0, 2.0, &table_id);
                store.dispatch(black_box(&command));
                black_box(fixtures::checksum_store(&store))
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("focus_walk_large", |b| {
        b.iter_batched(
            || {
                let mut store = fixtures::populated_store(8, 64);
                let table_id = fixtures::first_table_id(&store);
                store.dispatch(&editor::focus_table(&table_id));
                store
            },
            |mut store| {
                for _ in 0..64 {
                    store.dispatch(&editor::focus_move_table(MoveKey::ArrowDown, true));
                }
                store.dispatch(&editor::focus_move_table(MoveKey::ArrowRight, false));
                black_box(
                    store
                        .editor()
                        .focus_table()
                        .map(|model| model.selected_column_ids().len()),
                )
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_replay, benches_interactive
}
criterion_main!(benches);
