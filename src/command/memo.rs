// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `memo.*` commands, the sibling set of the table commands.

use serde::{Deserialize, Serialize};

use super::table::{self, MoveShapes, RemoveShapes};
use super::Command;
use crate::layout::{default_memo_size, next_point, next_z_index};
use crate::model::{IdGenerator, Memo, MemoId, MemoUi};
use crate::store::{Store, StoreMut};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMemo {
    pub id: MemoId,
    pub ui: MemoUi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMemo {
    pub ctrl_key: bool,
    pub memo_id: MemoId,
    pub z_index: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeMemoValue {
    pub memo_id: MemoId,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeMemo {
    pub memo_id: MemoId,
    pub width: f64,
    pub height: f64,
}

pub fn add_memo(store: &Store, ids: &mut impl IdGenerator) -> Command {
    let point = next_point(store.canvas(), store.tables(), store.memos(), default_memo_size());
    Command::AddMemo(AddMemo {
        id: ids.next_typed(),
        ui: MemoUi {
            active: true,
            top: point.top,
            left: point.left,
            z_index: next_z_index(store.tables(), store.memos()),
            ..MemoUi::default()
        },
    })
}

/// With `ctrl_key` the whole active selection moves; otherwise only `memo_id`.
pub fn move_memo(
    store: &Store,
    ctrl_key: bool,
    movement_x: f64,
    movement_y: f64,
    memo_id: &MemoId,
) -> Command {
    let (table_ids, memo_ids) = if ctrl_key {
        table::active_ids(store)
    } else {
        (Vec::new(), vec![memo_id.clone()])
    };
    Command::MoveMemo(MoveShapes {
        movement_x,
        movement_y,
        table_ids,
        memo_ids,
    })
}

/// Removes `memo_id`, or every active table and memo when `None`.
pub fn remove_memo(store: &Store, memo_id: Option<&MemoId>) -> Command {
    let (table_ids, memo_ids) = match memo_id {
        Some(memo_id) => (Vec::new(), vec![memo_id.clone()]),
        None => table::active_ids(store),
    };
    Command::RemoveMemo(RemoveShapes {
        table_ids,
        memo_ids,
    })
}

pub fn select_memo(store: &Store, ctrl_key: bool, memo_id: &MemoId) -> Command {
    Command::SelectMemo(SelectMemo {
        ctrl_key,
        memo_id: memo_id.clone(),
        z_index: next_z_index(store.tables(), store.memos()),
    })
}

pub fn select_end_memo() -> Command {
    Command::SelectEndMemo
}

pub fn select_all_memo() -> Command {
    Command::SelectAllMemo
}

pub fn change_memo_value(memo_id: &MemoId, value: impl Into<String>) -> Command {
    Command::ChangeMemoValue(ChangeMemoValue {
        memo_id: memo_id.clone(),
        value: value.into(),
    })
}

pub fn resize_memo(memo_id: &MemoId, width: f64, height: f64) -> Command {
    Command::ResizeMemo(ResizeMemo {
        memo_id: memo_id.clone(),
        width,
        height,
    })
}

pub(crate) fn add_memo_execute(store: &mut StoreMut<'_>, data: &AddMemo) {
    tracing::debug!(memo_id = %data.id, "memo.add");
    if store.memo(&data.id).is_some() {
        tracing::warn!(memo_id = %data.id, "memo id already present; add skipped");
        return;
    }
    table::select_end_table_execute(store);
    select_end_memo_execute(store);
    store.push_memo(Memo::new(data.id.clone(), data.ui));
}

pub(crate) fn move_memo_execute(store: &mut StoreMut<'_>, data: &MoveShapes) {
    tracing::debug!(
        tables = data.table_ids.len(),
        memos = data.memo_ids.len(),
        "memo.move"
    );
    table::move_shapes(store, data);
}

pub(crate) fn remove_memo_execute(store: &mut StoreMut<'_>, data: &RemoveShapes) {
    tracing::debug!(
        tables = data.table_ids.len(),
        memos = data.memo_ids.len(),
        "memo.remove"
    );
    table::remove_shapes(store, data);
}

pub(crate) fn select_memo_execute(store: &mut StoreMut<'_>, data: &SelectMemo) {
    tracing::debug!(memo_id = %data.memo_id, ctrl = data.ctrl_key, "memo.select");
    let found = store.update_memo_ui(&data.memo_id, "zIndex", |ui| {
        ui.z_index = data.z_index;
        if data.ctrl_key {
            ui.active = true;
        }
    });
    if !found {
        tracing::trace!(memo_id = %data.memo_id, "memo missing; select skipped");
        return;
    }
    if !data.ctrl_key {
        store.for_each_memo_ui("active", |memo| MemoUi {
            active: memo.id() == &data.memo_id,
            ..*memo.ui()
        });
        table::select_end_table_execute(store);
    }
}

pub(crate) fn select_end_memo_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("memo.selectEnd");
    store.for_each_memo_ui("active", |memo| MemoUi {
        active: false,
        ..*memo.ui()
    });
}

pub(crate) fn select_all_memo_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("memo.selectAll");
    store.for_each_memo_ui("active", |memo| MemoUi {
        active: true,
        ..*memo.ui()
    });
}

pub(crate) fn change_memo_value_execute(store: &mut StoreMut<'_>, data: &ChangeMemoValue) {
    tracing::debug!(memo_id = %data.memo_id, "memo.changeValue");
    let found = store.update_memo(&data.memo_id, "value", |memo| {
        memo.set_value(data.value.as_str())
    });
    if !found {
        tracing::trace!(memo_id = %data.memo_id, "memo missing; value skipped");
    }
}

pub(crate) fn resize_memo_execute(store: &mut StoreMut<'_>, data: &ResizeMemo) {
    tracing::debug!(memo_id = %data.memo_id, "memo.resize");
    let found = store.update_memo_ui(&data.memo_id, "size", |ui| {
        ui.width = data.width;
        ui.height = data.height;
    });
    if !found {
        tracing::trace!(memo_id = %data.memo_id, "memo missing; resize skipped");
    }
}
