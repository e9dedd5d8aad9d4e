// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `column.*` commands.

use serde::{Deserialize, Serialize};

use super::editor::{self, DraggableColumn, FocusTable};
use super::Command;
use crate::focus::{ColumnClick, FocusType};
use crate::layout::Helper;
use crate::model::{Column, ColumnId, IdGenerator, TableId};
use crate::store::{Store, StoreMut};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddColumn {
    pub table_id: TableId,
    pub id: ColumnId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveColumn {
    pub table_id: TableId,
    pub column_ids: Vec<ColumnId>,
}

/// New text plus its measured cell width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeColumnValue {
    pub table_id: TableId,
    pub column_id: ColumnId,
    pub value: String,
    pub width: f64,
}

/// Drag-reorder: the dragged column takes the target column's slot, possibly in another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveColumn {
    pub table_id: TableId,
    pub column_id: ColumnId,
    pub target_table_id: TableId,
    pub target_column_id: ColumnId,
}

pub fn add_column(table_id: &TableId, ids: &mut impl IdGenerator) -> Command {
    Command::AddColumn(AddColumn {
        table_id: table_id.clone(),
        id: ids.next_typed(),
    })
}

/// Removes `column_id`, or the focused table's selected columns when `None`.
pub fn remove_column(store: &Store, table_id: &TableId, column_id: Option<&ColumnId>) -> Command {
    let column_ids = match column_id {
        Some(column_id) => vec![column_id.clone()],
        None => store
            .editor()
            .focus_table()
            .filter(|model| model.table_id() == table_id)
            .zip(store.table(table_id))
            .map(|(model, table)| model.selection_in_order(table))
            .unwrap_or_default(),
    };
    Command::RemoveColumn(RemoveColumn {
        table_id: table_id.clone(),
        column_ids,
    })
}

pub fn change_column_name(
    helper: &Helper,
    table_id: &TableId,
    column_id: &ColumnId,
    value: impl Into<String>,
) -> Command {
    Command::ChangeColumnName(measured(helper, table_id, column_id, value.into()))
}

pub fn change_column_comment(
    helper: &Helper,
    table_id: &TableId,
    column_id: &ColumnId,
    value: impl Into<String>,
) -> Command {
    Command::ChangeColumnComment(measured(helper, table_id, column_id, value.into()))
}

pub fn change_column_data_type(
    helper: &Helper,
    table_id: &TableId,
    column_id: &ColumnId,
    value: impl Into<String>,
) -> Command {
    Command::ChangeColumnDataType(measured(helper, table_id, column_id, value.into()))
}

fn measured(
    helper: &Helper,
    table_id: &TableId,
    column_id: &ColumnId,
    value: String,
) -> ChangeColumnValue {
    ChangeColumnValue {
        table_id: table_id.clone(),
        column_id: column_id.clone(),
        width: helper.cell_width(&value),
        value,
    }
}

/// Moves the column currently being dragged onto `target_column_id`.
///
/// `None` when no drag is in progress or the target is the dragged column itself.
pub fn move_column(
    store: &Store,
    target_table_id: &TableId,
    target_column_id: &ColumnId,
) -> Option<Command> {
    let drag = store.editor().draggable_column()?;
    if &drag.table_id == target_table_id && &drag.column_id == target_column_id {
        return None;
    }
    Some(Command::MoveColumn(MoveColumn {
        table_id: drag.table_id.clone(),
        column_id: drag.column_id.clone(),
        target_table_id: target_table_id.clone(),
        target_column_id: target_column_id.clone(),
    }))
}

pub(crate) fn add_column_execute(store: &mut StoreMut<'_>, data: &AddColumn) {
    tracing::debug!(table_id = %data.table_id, column_id = %data.id, "column.add");
    let Some(table) = store.table(&data.table_id) else {
        tracing::trace!(table_id = %data.table_id, "table missing; add column skipped");
        return;
    };
    if table.column(&data.id).is_some() {
        tracing::warn!(column_id = %data.id, "column id already present; add skipped");
        return;
    }
    store.update_columns(&data.table_id, "columns", |columns| {
        columns.push(Column::new(data.id.clone()))
    });
    editor::focus_table_execute(
        store,
        &FocusTable {
            table_id: data.table_id.clone(),
        },
    );
    store.update_focus_table(|model, table, _| {
        model.focus_column(
            table,
            ColumnClick {
                column_id: &data.id,
                focus_type: FocusType::ColumnName,
                ctrl_key: false,
                shift_key: false,
            },
        )
    });
}

pub(crate) fn remove_column_execute(store: &mut StoreMut<'_>, data: &RemoveColumn) {
    tracing::debug!(
        table_id = %data.table_id,
        columns = data.column_ids.len(),
        "column.remove"
    );
    let removed = store.update_columns(&data.table_id, "columns", |columns| {
        let before = columns.len();
        columns.retain(|column| !data.column_ids.contains(column.id()));
        before - columns.len()
    });
    if removed.is_none() {
        tracing::trace!(table_id = %data.table_id, "table missing; remove column skipped");
    }
    let dragging_removed = store.editor().draggable_column().is_some_and(|drag| {
        drag.table_id == data.table_id && data.column_ids.contains(&drag.column_id)
    });
    if dragging_removed {
        editor::draggable_end_column_execute(store);
    }
}

pub(crate) fn change_column_name_execute(store: &mut StoreMut<'_>, data: &ChangeColumnValue) {
    tracing::debug!(table_id = %data.table_id, column_id = %data.column_id, "column.changeName");
    change_column(store, data, "name", |column| {
        column.set_name(data.value.as_str());
        column.ui_mut().width_name = data.width;
    });
}

pub(crate) fn change_column_comment_execute(store: &mut StoreMut<'_>, data: &ChangeColumnValue) {
    tracing::debug!(
        table_id = %data.table_id,
        column_id = %data.column_id,
        "column.changeComment"
    );
    change_column(store, data, "comment", |column| {
        column.set_comment(data.value.as_str());
        column.ui_mut().width_comment = data.width;
    });
}

pub(crate) fn change_column_data_type_execute(store: &mut StoreMut<'_>, data: &ChangeColumnValue) {
    tracing::debug!(
        table_id = %data.table_id,
        column_id = %data.column_id,
        "column.changeDataType"
    );
    change_column(store, data, "dataType", |column| {
        column.set_data_type(data.value.as_str());
        column.ui_mut().width_data_type = data.width;
    });
}

fn change_column(
    store: &mut StoreMut<'_>,
    data: &ChangeColumnValue,
    key: &'static str,
    f: impl FnOnce(&mut Column),
) {
    if !store.update_column(&data.table_id, &data.column_id, key, f) {
        tracing::trace!(column_id = %data.column_id, "column missing; change skipped");
    }
}

pub(crate) fn move_column_execute(store: &mut StoreMut<'_>, data: &MoveColumn) {
    tracing::debug!(
        column_id = %data.column_id,
        target_column_id = %data.target_column_id,
        "column.move"
    );
    let Some(target_index) = store
        .table(&data.target_table_id)
        .and_then(|table| table.column_index(&data.target_column_id))
    else {
        tracing::trace!(column_id = %data.target_column_id, "target column missing; move skipped");
        return;
    };
    let Some(source_index) = store
        .table(&data.table_id)
        .and_then(|table| table.column_index(&data.column_id))
    else {
        tracing::trace!(column_id = %data.column_id, "dragged column missing; move skipped");
        return;
    };

    if data.table_id == data.target_table_id {
        if source_index == target_index {
            return;
        }
        store.update_columns(&data.table_id, "columns", |columns| {
            let column = columns.remove(source_index);
            columns.insert(target_index, column);
        });
        return;
    }

    let Some(column) = store.update_columns(&data.table_id, "columns", |columns| {
        columns.remove(source_index)
    }) else {
        return;
    };
    store.update_columns(&data.target_table_id, "columns", |columns| {
        columns.insert(target_index, column)
    });

    let dragging = store
        .editor()
        .draggable_column()
        .is_some_and(|drag| drag.table_id == data.table_id && drag.column_id == data.column_id);
    if dragging {
        editor::draggable_column_execute(
            store,
            &DraggableColumn {
                table_id: data.target_table_id.clone(),
                column_id: data.column_id.clone(),
            },
        );
    }
}
