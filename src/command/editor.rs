// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `editor.*` commands: table focus, keyboard navigation, edit mode and column dragging.
//!
//! Only `editor.focusTable` and `editor.focusEndTable` create or tear down the focus model;
//! every other focus command is a no-op while no table is focused.

use serde::{Deserialize, Serialize};

use super::Command;
use crate::focus::{ColumnClick, FocusType, MoveKey};
use crate::model::{ColumnId, TableId};
use crate::store::StoreMut;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusTable {
    pub table_id: TableId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusMoveTable {
    pub move_key: MoveKey,
    pub shift_key: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusTargetTable {
    pub focus_type: FocusType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusTargetColumn {
    pub column_id: ColumnId,
    pub focus_type: FocusType,
    pub ctrl_key: bool,
    pub shift_key: bool,
}

/// The table and field currently in text-edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTable {
    pub id: TableId,
    pub focus_type: FocusType,
}

/// The column currently being drag-reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableColumn {
    pub table_id: TableId,
    pub column_id: ColumnId,
}

pub fn focus_table(table_id: &TableId) -> Command {
    Command::FocusTable(FocusTable {
        table_id: table_id.clone(),
    })
}

pub fn focus_end_table() -> Command {
    Command::FocusEndTable
}

pub fn focus_move_table(move_key: MoveKey, shift_key: bool) -> Command {
    Command::FocusMoveTable(FocusMoveTable {
        move_key,
        shift_key,
    })
}

pub fn focus_target_table(focus_type: FocusType) -> Command {
    Command::FocusTargetTable(FocusTargetTable { focus_type })
}

pub fn focus_target_column(
    column_id: &ColumnId,
    focus_type: FocusType,
    ctrl_key: bool,
    shift_key: bool,
) -> Command {
    Command::FocusTargetColumn(FocusTargetColumn {
        column_id: column_id.clone(),
        focus_type,
        ctrl_key,
        shift_key,
    })
}

pub fn select_all_column() -> Command {
    Command::SelectAllColumn
}

pub fn select_end_column() -> Command {
    Command::SelectEndColumn
}

pub fn edit_table(table_id: &TableId, focus_type: FocusType) -> Command {
    Command::EditTable(EditTable {
        id: table_id.clone(),
        focus_type,
    })
}

pub fn edit_end_table() -> Command {
    Command::EditEndTable
}

pub fn draggable_column(table_id: &TableId, column_id: &ColumnId) -> Command {
    Command::DraggableColumn(DraggableColumn {
        table_id: table_id.clone(),
        column_id: column_id.clone(),
    })
}

pub fn draggable_end_column() -> Command {
    Command::DraggableEndColumn
}

/// Focuses `table_id`, ending the previous focus first. Re-focusing the same table keeps its
/// model (and selection) alive.
pub(crate) fn focus_table_execute(store: &mut StoreMut<'_>, data: &FocusTable) {
    tracing::debug!(table_id = %data.table_id, "editor.focusTable");
    if store.table(&data.table_id).is_none() {
        tracing::trace!(table_id = %data.table_id, "table missing; focus skipped");
        return;
    }
    let already_focused = store
        .editor()
        .focus_table()
        .is_some_and(|model| model.table_id() == &data.table_id);
    if already_focused {
        return;
    }
    focus_end_table_execute(store);
    store.begin_focus_table(&data.table_id);
}

pub(crate) fn focus_end_table_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("editor.focusEndTable");
    store.end_focus_table();
    edit_end_table_execute(store);
}

pub(crate) fn focus_move_table_execute(store: &mut StoreMut<'_>, data: &FocusMoveTable) {
    tracing::debug!(key = ?data.move_key, shift = data.shift_key, "editor.focusMoveTable");
    store.update_focus_table(|model, table, show| {
        model.move_focus(table, show, data.move_key, data.shift_key)
    });
}

pub(crate) fn focus_target_table_execute(store: &mut StoreMut<'_>, data: &FocusTargetTable) {
    tracing::debug!(focus_type = ?data.focus_type, "editor.focusTargetTable");
    store.update_focus_table(|model, table, _| model.focus_table_field(table, data.focus_type));
    edit_end_table_execute(store);
}

pub(crate) fn focus_target_column_execute(store: &mut StoreMut<'_>, data: &FocusTargetColumn) {
    tracing::debug!(
        column_id = %data.column_id,
        focus_type = ?data.focus_type,
        ctrl = data.ctrl_key,
        shift = data.shift_key,
        "editor.focusTargetColumn"
    );
    store.update_focus_table(|model, table, _| {
        model.focus_column(
            table,
            ColumnClick {
                column_id: &data.column_id,
                focus_type: data.focus_type,
                ctrl_key: data.ctrl_key,
                shift_key: data.shift_key,
            },
        )
    });
    edit_end_table_execute(store);
}

pub(crate) fn select_all_column_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("editor.selectAllColumn");
    store.update_focus_table(|model, table, _| model.select_all(table));
}

pub(crate) fn select_end_column_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("editor.selectEndColumn");
    store.update_focus_table(|model, _, _| model.select_end());
}

/// Enters edit mode; ignored unless `data.id` is the focused table.
pub(crate) fn edit_table_execute(store: &mut StoreMut<'_>, data: &EditTable) {
    tracing::debug!(table_id = %data.id, focus_type = ?data.focus_type, "editor.editTable");
    let focused = store
        .editor()
        .focus_table()
        .is_some_and(|model| model.table_id() == &data.id);
    if !focused {
        tracing::trace!(table_id = %data.id, "table not focused; edit skipped");
        return;
    }
    store.set_edit_table(Some(data.clone()));
}

pub(crate) fn edit_end_table_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("editor.editEndTable");
    store.set_edit_table(None);
}

pub(crate) fn draggable_column_execute(store: &mut StoreMut<'_>, data: &DraggableColumn) {
    tracing::debug!(table_id = %data.table_id, column_id = %data.column_id, "editor.draggableColumn");
    let exists = store
        .table(&data.table_id)
        .is_some_and(|table| table.column(&data.column_id).is_some());
    if !exists {
        tracing::trace!(column_id = %data.column_id, "column missing; drag skipped");
        return;
    }
    store.set_draggable_column(Some(data.clone()));
}

pub(crate) fn draggable_end_column_execute(store: &mut StoreMut<'_>) {
    tracing::debug!("editor.draggableEndColumn");
    store.set_draggable_column(None);
}
