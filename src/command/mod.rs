// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command descriptors and their executors.
//!
//! A [`Command`] is an immutable `{name, data}` value. Factories (the free functions in the
//! submodules) build commands and may read the [`Store`](crate::store::Store), but never write
//! it. Executors apply a command through a [`StoreMut`] and may call other executors directly.
//! Commands that address a missing id are no-ops.

pub mod canvas;
pub mod column;
pub mod editor;
pub mod memo;
pub mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::StoreMut;

pub use canvas::{
    ChangeCanvasShow, ChangeCanvasType, ChangeDatabase, ChangeDatabaseName, ChangeLanguage,
    ChangeNameCase, ChangeRelationshipDataTypeSync, MoveCanvas, MoveColumnOrder, ResizeCanvas,
};
pub use column::{AddColumn, ChangeColumnValue, MoveColumn, RemoveColumn};
pub use editor::{
    DraggableColumn, EditTable, FocusMoveTable, FocusTable, FocusTargetColumn, FocusTargetTable,
};
pub use memo::{AddMemo, ChangeMemoValue, ResizeMemo, SelectMemo};
pub use table::{AddTable, ChangeTableValue, MoveShapes, RemoveShapes, SelectTable};

/// Every state change the editor knows about.
///
/// Serializes as `{"name": "table.add", "data": {...}}`; commands without data omit `data`
/// (or accept `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "data")]
pub enum Command {
    #[serde(rename = "canvas.move")]
    MoveCanvas(MoveCanvas),
    #[serde(rename = "canvas.resize")]
    ResizeCanvas(ResizeCanvas),
    #[serde(rename = "canvas.changeShow")]
    ChangeCanvasShow(ChangeCanvasShow),
    #[serde(rename = "canvas.changeDatabase")]
    ChangeDatabase(ChangeDatabase),
    #[serde(rename = "canvas.changeDatabaseName")]
    ChangeDatabaseName(ChangeDatabaseName),
    #[serde(rename = "canvas.changeCanvasType")]
    ChangeCanvasType(ChangeCanvasType),
    #[serde(rename = "canvas.changeLanguage")]
    ChangeLanguage(ChangeLanguage),
    #[serde(rename = "canvas.changeTableCase")]
    ChangeTableCase(ChangeNameCase),
    #[serde(rename = "canvas.changeColumnCase")]
    ChangeColumnCase(ChangeNameCase),
    #[serde(rename = "canvas.changeRelationshipDataTypeSync")]
    ChangeRelationshipDataTypeSync(ChangeRelationshipDataTypeSync),
    #[serde(rename = "canvas.moveColumnOrder")]
    MoveColumnOrder(MoveColumnOrder),

    #[serde(rename = "table.add")]
    AddTable(AddTable),
    #[serde(rename = "table.move")]
    MoveTable(MoveShapes),
    #[serde(rename = "table.remove")]
    RemoveTable(RemoveShapes),
    #[serde(rename = "table.select")]
    SelectTable(SelectTable),
    #[serde(rename = "table.selectEnd")]
    SelectEndTable,
    #[serde(rename = "table.selectAll")]
    SelectAllTable,
    #[serde(rename = "table.changeName")]
    ChangeTableName(ChangeTableValue),
    #[serde(rename = "table.changeComment")]
    ChangeTableComment(ChangeTableValue),

    #[serde(rename = "column.add")]
    AddColumn(AddColumn),
    #[serde(rename = "column.remove")]
    RemoveColumn(RemoveColumn),
    #[serde(rename = "column.changeName")]
    ChangeColumnName(ChangeColumnValue),
    #[serde(rename = "column.changeComment")]
    ChangeColumnComment(ChangeColumnValue),
    #[serde(rename = "column.changeDataType")]
    ChangeColumnDataType(ChangeColumnValue),
    #[serde(rename = "column.move")]
    MoveColumn(MoveColumn),

    #[serde(rename = "memo.add")]
    AddMemo(AddMemo),
    #[serde(rename = "memo.move")]
    MoveMemo(MoveShapes),
    #[serde(rename = "memo.remove")]
    RemoveMemo(RemoveShapes),
    #[serde(rename = "memo.select")]
    SelectMemo(SelectMemo),
    #[serde(rename = "memo.selectEnd")]
    SelectEndMemo,
    #[serde(rename = "memo.selectAll")]
    SelectAllMemo,
    #[serde(rename = "memo.changeValue")]
    ChangeMemoValue(ChangeMemoValue),
    #[serde(rename = "memo.resize")]
    ResizeMemo(ResizeMemo),

    #[serde(rename = "editor.focusTable")]
    FocusTable(FocusTable),
    #[serde(rename = "editor.focusEndTable")]
    FocusEndTable,
    #[serde(rename = "editor.focusMoveTable")]
    FocusMoveTable(FocusMoveTable),
    #[serde(rename = "editor.focusTargetTable")]
    FocusTargetTable(FocusTargetTable),
    #[serde(rename = "editor.focusTargetColumn")]
    FocusTargetColumn(FocusTargetColumn),
    #[serde(rename = "editor.selectAllColumn")]
    SelectAllColumn,
    #[serde(rename = "editor.selectEndColumn")]
    SelectEndColumn,
    #[serde(rename = "editor.editTable")]
    EditTable(EditTable),
    #[serde(rename = "editor.editEndTable")]
    EditEndTable,
    #[serde(rename = "editor.draggableColumn")]
    DraggableColumn(DraggableColumn),
    #[serde(rename = "editor.draggableEndColumn")]
    DraggableEndColumn,
}

impl Command {
    /// Wire name, e.g. `"table.add"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveCanvas(_) => "canvas.move",
            Self::ResizeCanvas(_) => "canvas.resize",
            Self::ChangeCanvasShow(_) => "canvas.changeShow",
            Self::ChangeDatabase(_) => "canvas.changeDatabase",
            Self::ChangeDatabaseName(_) => "canvas.changeDatabaseName",
            Self::ChangeCanvasType(_) => "canvas.changeCanvasType",
            Self::ChangeLanguage(_) => "canvas.changeLanguage",
            Self::ChangeTableCase(_) => "canvas.changeTableCase",
            Self::ChangeColumnCase(_) => "canvas.changeColumnCase",
            Self::ChangeRelationshipDataTypeSync(_) => "canvas.changeRelationshipDataTypeSync",
            Self::MoveColumnOrder(_) => "canvas.moveColumnOrder",
            Self::AddTable(_) => "table.add",
            Self::MoveTable(_) => "table.move",
            Self::RemoveTable(_) => "table.remove",
            Self::SelectTable(_) => "table.select",
            Self::SelectEndTable => "table.selectEnd",
            Self::SelectAllTable => "table.selectAll",
            Self::ChangeTableName(_) => "table.changeName",
            Self::ChangeTableComment(_) => "table.changeComment",
            Self::AddColumn(_) => "column.add",
            Self::RemoveColumn(_) => "column.remove",
            Self::ChangeColumnName(_) => "column.changeName",
            Self::ChangeColumnComment(_) => "column.changeComment",
            Self::ChangeColumnDataType(_) => "column.changeDataType",
            Self::MoveColumn(_) => "column.move",
            Self::AddMemo(_) => "memo.add",
            Self::MoveMemo(_) => "memo.move",
            Self::RemoveMemo(_) => "memo.remove",
            Self::SelectMemo(_) => "memo.select",
            Self::SelectEndMemo => "memo.selectEnd",
            Self::SelectAllMemo => "memo.selectAll",
            Self::ChangeMemoValue(_) => "memo.changeValue",
            Self::ResizeMemo(_) => "memo.resize",
            Self::FocusTable(_) => "editor.focusTable",
            Self::FocusEndTable => "editor.focusEndTable",
            Self::FocusMoveTable(_) => "editor.focusMoveTable",
            Self::FocusTargetTable(_) => "editor.focusTargetTable",
            Self::FocusTargetColumn(_) => "editor.focusTargetColumn",
            Self::SelectAllColumn => "editor.selectAllColumn",
            Self::SelectEndColumn => "editor.selectEndColumn",
            Self::EditTable(_) => "editor.editTable",
            Self::EditEndTable => "editor.editEndTable",
            Self::DraggableColumn(_) => "editor.draggableColumn",
            Self::DraggableEndColumn => "editor.draggableEndColumn",
        }
    }

    pub(crate) fn execute(&self, store: &mut StoreMut<'_>) {
        match self {
            Self::MoveCanvas(data) => canvas::move_canvas_execute(store, data),
            Self::ResizeCanvas(data) => canvas::resize_canvas_execute(store, data),
            Self::ChangeCanvasShow(data) => canvas::change_canvas_show_execute(store, data),
            Self::ChangeDatabase(data) => canvas::change_database_execute(store, data),
            Self::ChangeDatabaseName(data) => canvas::change_database_name_execute(store, data),
            Self::ChangeCanvasType(data) => canvas::change_canvas_type_execute(store, data),
            Self::ChangeLanguage(data) => canvas::change_language_execute(store, data),
            Self::ChangeTableCase(data) => canvas::change_table_case_execute(store, data),
            Self::ChangeColumnCase(data) => canvas::change_column_case_execute(store, data),
            Self::ChangeRelationshipDataTypeSync(data) => {
                canvas::change_relationship_data_type_sync_execute(store, data)
            }
            Self::MoveColumnOrder(data) => canvas::move_column_order_execute(store, data),
            Self::AddTable(data) => table::add_table_execute(store, data),
            Self::MoveTable(data) => table::move_table_execute(store, data),
            Self::RemoveTable(data) => table::remove_table_execute(store, data),
            Self::SelectTable(data) => table::select_table_execute(store, data),
            Self::SelectEndTable => table::select_end_table_execute(store),
            Self::SelectAllTable => table::select_all_table_execute(store),
            Self::ChangeTableName(data) => table::change_table_name_execute(store, data),
            Self::ChangeTableComment(data) => table::change_table_comment_execute(store, data),
            Self::AddColumn(data) => column::add_column_execute(store, data),
            Self::RemoveColumn(data) => column::remove_column_execute(store, data),
            Self::ChangeColumnName(data) => column::change_column_name_execute(store, data),
            Self::ChangeColumnComment(data) => column::change_column_comment_execute(store, data),
            Self::ChangeColumnDataType(data) => {
                column::change_column_data_type_execute(store, data)
            }
            Self::MoveColumn(data) => column::move_column_execute(store, data),
            Self::AddMemo(data) => memo::add_memo_execute(store, data),
            Self::MoveMemo(data) => memo::move_memo_execute(store, data),
            Self::RemoveMemo(data) => memo::remove_memo_execute(store, data),
            Self::SelectMemo(data) => memo::select_memo_execute(store, data),
            Self::SelectEndMemo => memo::select_end_memo_execute(store),
            Self::SelectAllMemo => memo::select_all_memo_execute(store),
            Self::ChangeMemoValue(data) => memo::change_memo_value_execute(store, data),
            Self::ResizeMemo(data) => memo::resize_memo_execute(store, data),
            Self::FocusTable(data) => editor::focus_table_execute(store, data),
            Self::FocusEndTable => editor::focus_end_table_execute(store),
            Self::FocusMoveTable(data) => editor::focus_move_table_execute(store, data),
            Self::FocusTargetTable(data) => editor::focus_target_table_execute(store, data),
            Self::FocusTargetColumn(data) => editor::focus_target_column_execute(store, data),
            Self::SelectAllColumn => editor::select_all_column_execute(store),
            Self::SelectEndColumn => editor::select_end_column_execute(store),
            Self::EditTable(data) => editor::edit_table_execute(store, data),
            Self::EditEndTable => editor::edit_end_table_execute(store),
            Self::DraggableColumn(data) => editor::draggable_column_execute(store, data),
            Self::DraggableEndColumn => editor::draggable_end_column_execute(store),
        }
    }

    pub fn to_json(&self) -> Result<String, CommandDecodeError> {
        serde_json::to_string(self).map_err(CommandDecodeError::Json)
    }

    pub fn from_json(raw: &str) -> Result<Self, CommandDecodeError> {
        serde_json::from_str(raw).map_err(CommandDecodeError::Json)
    }
}

/// Decodes a JSON array of `{name, data}` descriptors, e.g. a replay log.
pub fn decode_commands(raw: &str) -> Result<Vec<Command>, CommandDecodeError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(CommandDecodeError::Json)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CommandDecodeError::NotAList);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| CommandDecodeError::Entry { index, source })
        })
        .collect()
}

#[derive(Debug)]
pub enum CommandDecodeError {
    Json(serde_json::Error),
    NotAList,
    Entry {
        index: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for CommandDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid command json: {err}"),
            Self::NotAList => f.write_str("expected a json array of commands"),
            Self::Entry { index, source } => write!(f, "invalid command at index {index}: {source}"),
        }
    }
}

impl std::error::Error for CommandDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) | Self::Entry { source: err, .. } => Some(err),
            Self::NotAList => None,
        }
    }
}
