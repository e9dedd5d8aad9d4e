// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic benchmark fixtures (no RNG, sequential ids).

use erd_canvas::command::{column, memo, table};
use erd_canvas::layout::{FontConfig, Helper};
use erd_canvas::model::{SequentialIds, TableId};
use erd_canvas::{Command, Store};

pub fn helper() -> Helper {
    Helper::new(
        |text: &str, font: &FontConfig| text.chars().count() as f64 * font.size_px * 0.6,
        FontConfig::default(),
    )
}

/// A recorded editing session: `tables` tables with `columns` named columns each and one memo
/// per four tables. Commands are built against a scratch store so placement matches replay.
pub fn session_log(tables: usize, columns: usize) -> Vec<Command> {
    let helper = helper();
    let mut ids = SequentialIds::new("bench");
    let mut store = Store::new();
    let mut log = Vec::new();

    let mut push = |store: &mut Store, command: Command| {
        store.dispatch(&command);
        log.push(command);
    };

    for table_idx in 0..tables {
        let add = table::add_table(&store, &mut ids);
        let Command::AddTable(data) = &add else {
            unreachable!("table::add_table builds table.add");
        };
        let table_id = data.id.clone();
        push(&mut store, add);
        push(
            &mut store,
            table::change_table_name(&helper, &table_id, format!("bench_table_{table_idx:04}")),
        );

        for column_idx in 0..columns {
            let add = column::add_column(&table_id, &mut ids);
            let Command::AddColumn(data) = &add else {
                unreachable!("column::add_column builds column.add");
            };
            let column_id = data.id.clone();
            push(&mut store, add);
            push(
                &mut store,
                column::change_column_name(
                    &helper,
                    &table_id,
                    &column_id,
                    format!("bench_column_{column_idx:03}"),
                ),
            );
        }

        if table_idx % 4 == 3 {
            let add = memo::add_memo(&store, &mut ids);
            push(&mut store, add);
        }
    }
    log
}

/// Store with the whole `session_log` applied.
pub fn populated_store(tables: usize, columns: usize) -> Store {
    let mut store = Store::new();
    store.dispatch_all(&session_log(tables, columns));
    store
}

pub fn first_table_id(store: &Store) -> TableId {
    store
        .tables()
        .first()
        .map(|table| table.id().clone())
        .expect("fixture has tables")
}

pub fn checksum_store(store: &Store) -> u64 {
    let mut acc = 0u64;
    for table in store.tables() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(table.columns().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(table.ui().left.to_bits() ^ table.ui().top.to_bits());
    }
    for memo in store.memos() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(memo.ui().z_index as u64);
    }
    acc
}
