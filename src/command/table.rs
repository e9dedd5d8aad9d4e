// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `table.*` commands.
//!
//! Moving and removing act on tables and memos together, so the payloads carry both id lists.

use serde::{Deserialize, Serialize};

use super::{editor, memo, Command};
use crate::layout::{default_table_size, next_point, next_z_index, Helper};
use crate::model::{IdGenerator, MemoId, Table, TableId, TableUi};
use crate::store::{Store, StoreMut};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTable {
    pub id: TableId,
    pub ui: TableUi,
}

/// Relative drag of a group of shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveShapes {
    pub movement_x: f64,
    pub movement_y: f64,
    pub table_ids: Vec<TableId>,
    pub memo_ids: Vec<MemoId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveShapes {
    pub table_ids: Vec<TableId>,
    pub memo_ids: Vec<MemoId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTable {
    pub ctrl_key: bool,
    pub table_id: TableId,
    pub z_index: i64,
}

/// New text plus its measured cell width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTableValue {
    pub table_id: TableId,
    pub value: String,
    pub width: f64,
}

/// A new active table at the next free point, stacked above everything else.
pub fn add_table(store: &Store, ids: &mut impl IdGenerator) -> Command {
    let size = default_table_size(store.canvas().show());
    let point = next_point(store.canvas(), store.tables(), store.memos(), size);
    Command::AddTable(AddTable {
        id: ids.next_typed(),
        ui: TableUi {
            active: true,
            top: point.top,
            left: point.left,
            z_index: next_z_index(store.tables(), store.memos()),
            ..TableUi::default()
        },
    })
}

/// With `ctrl_key` the whole active selection moves; otherwise only `table_id`.
pub fn move_table(
    store: &Store,
    ctrl_key: bool,
    movement_x: f64,
    movement_y: f64,
    table_id: &TableId,
) -> Command {
    let (table_ids, memo_ids) = if ctrl_key {
        active_ids(store)
    } else {
        (vec![table_id.clone()], Vec::new())
    };
    Command::MoveTable(MoveShapes {
        movement_x,
        movement_y,
        table_ids,
        memo_ids,
    })
}

/// Removes `table_id`, or every active table and memo when `None`.
pub fn remove_table(store: &Store, table_id: Option<&TableId>) -> Command {
    let (table_ids, memo_ids) = match table_id {
        Some(table_id) => (vec![table_id.clone()], Vec::new()),
        None => active_ids(store),
    };
    Command::RemoveTable(RemoveShapes {
        table_ids,
        memo_ids,
    })
}

pub fn select_table(store: &Store, ctrl_key: bool, table_id: &TableId) -> Command {
    Command::SelectTable(SelectTable {
        ctrl_key,
        table_id: table_id.clone(),
        z_index: next_z_index(store.tables(), store.memos()),
    })
}

pub fn select_end_table() -> Command {
    Command::SelectEndTable
}

pub fn select_all_table() -> Command {
    Command::SelectAllTable
}

pub fn change_table_name(helper: &Helper, table_id: &TableId, value: impl Into<String>) -> Command {
    Command::ChangeTableName(measured(helper, table_id, value.into()))
}

pub fn change_table_comment(
    helper: &Helper,
    table_id: &TableId,
    value: impl Into<String>,
) -> Command {
    Command::ChangeTableComment(measured(helper, table_id, value.into()))
}

fn measured(helper: &Helper, table_id: &TableId, value: String) -> ChangeTableValue {
    ChangeTableValue {
        table_id: table_id.clone(),
        width: helper.cell_width(&value),
        value,
    }
}

pub(crate) fn active_ids(store: &Store) -> (Vec<TableId>, Vec<MemoId>) {
    let table_ids = store
        .tables()
        .iter()
        .filter(|table| table.ui().active)
        .map(|table| table.id().clone())
        .collect();
    let memo_ids = store
        .memos()
        .iter()
        .filter(|memo| memo.ui().active)
        .map(|memo| memo.id().clone())
        .collect();
    (table_ids, memo_ids)
}

pub(crate) fn add_table_execute(store: &mut StoreMut<'_>, data: &AddTable) {
    tracing::debug!(table_id = %data.id, "table.add");
    if store.table(&data.id).is_some() {
        tracing::warn!(table_id = %data.id, "table id already present; add skipped");
        return;
    }
    select_end_table_execute(store);
    memo::select_end_memo_execute(store);
    store.push_table(Table::new(data.id.clone(), data.ui));
    editor::focus_table_execute(
        store,
        &editor::FocusTable {
            table_id: data.id.clone(),
        },
    );
}

pub(crate) fn move_table_execute(store: &mut StoreMut<'_>, data: &MoveShapes) {
    tracing::debug!(
        tables = data.table_ids.len(),
        memos = data.memo_ids.len(),
        "table.move"
    );
    move_shapes(store, data);
}

pub(crate) fn move_shapes(store: &mut StoreMut<'_>, data: &MoveShapes) {
    for table_id in &data.table_ids {
        let moved = store.update_table_ui(table_id, "position", |ui| {
            ui.left += data.movement_x;
            ui.top += data.movement_y;
        });
        if !moved {
            tracing::trace!(table_id = %table_id, "table missing; move skipped");
        }
    }
    for memo_id in &data.memo_ids {
        let moved = store.update_memo_ui(memo_id, "position", |ui| {
            ui.left += data.movement_x;
            ui.top += data.movement_y;
        });
        if !moved {
            tracing::trace!(memo_id = %memo_id, "memo missing; move skipped");
        }
    }
}

pub(crate) fn remove_table_execute(store: &mut StoreMut<'_>, data: &RemoveShapes) {
    tracing::debug!(
        tables = data.table_ids.len(),
        memos = data.memo_ids.len(),
        "table.remove"
    );
    remove_shapes(store, data);
}

pub(crate) fn remove_shapes(store: &mut StoreMut<'_>, data: &RemoveShapes) {
    store.remove_tables(&data.table_ids);
    store.remove_memos(&data.memo_ids);

    let focused_removed = store
        .editor()
        .focus_table()
        .is_some_and(|model| data.table_ids.contains(model.table_id()));
    if focused_removed {
        editor::focus_end_table_execute(store);
    }
    let dragging_removed = store
        .editor()
        .draggable_column()
        .is_some_and(|drag| data.table_ids.contains(&drag.table_id));
    if dragging_removed {
        editor::draggable_end_column_execute(store);
    }
}

pub(crate) fn select_table_execute(store: &mut StoreMut<'_>, data: &SelectTable) {
    tracing::debug!(table_id = %data.table_id, ctrl = data.ctrl_key, "table.select");
    let found = store.update_table_ui(&data.table_id, "zIndex", |ui| {
        ui.z_index = data.z_index;
        if data.ctrl_key {
            ui.active = true;
        }
    });
    if !found {
        tracing::trace!(table_id = %data.table_id, "table missing; select skipped");
        return;
    }
    if !data.ctrl_key {
        store.for_each_table_ui("active", |table| TableUi {
            active: table.id() == &data.table_id,
            ..*table.ui()
        });
        memo::select_end_memo_execute(store);
    }
    editor::focus_table_execute(
        store,
        &editor::FocusTable {
            table_id: data.table_id.clone(),
        },
    );
}

pub(crate) fn select_end_table_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("table.selectEnd");
    store.for_each_table_ui("active", |table| TableUi {
        active: false,
        ..*table.ui()
    });
    editor::focus_end_table_execute(store);
}

pub(crate) fn select_all_table_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("table.selectAll");
    store.for_each_table_ui("active", |table| TableUi {
        active: true,
        ..*table.ui()
    });
}

pub(crate) fn change_table_name_execute(store: &mut StoreMut<'_>, data: &ChangeTableValue) {
    tracing::debug!(table_id = %data.table_id, "table.changeName");
    let found = store.update_table(&data.table_id, "name", |table| {
        table.set_name(data.value.as_str());
        table.ui_mut().width_name = data.width;
    });
    if !found {
        tracing::trace!(table_id = %data.table_id, "table missing; rename skipped");
    }
}

pub(crate) fn change_table_comment_execute(store: &mut StoreMut<'_>, data: &ChangeTableValue) {
    tracing::debug!(table_id = %data.table_id, "table.changeComment");
    let found = store.update_table(&data.table_id, "comment", |table| {
        table.set_comment(data.value.as_str());
        table.ui_mut().width_comment = data.width;
    });
    if !found {
        tracing::trace!(table_id = %data.table_id, "table missing; comment skipped");
    }
}
