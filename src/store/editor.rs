// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transient interaction state: focus, text editing and column dragging.

use serde::Serialize;

use crate::command::{DraggableColumn, EditTable};
use crate::focus::{Focus, FocusTableModel};
use crate::model::{ColumnId, TableId};

/// Editor partition of the store.
///
/// `edit_table` is only set while `focus_table` is set and refers to the same table.
#[derive(Debug, Default)]
pub struct EditorState {
    pub(super) focus_table: Option<FocusTableModel>,
    pub(super) edit_table: Option<EditTable>,
    pub(super) draggable_column: Option<DraggableColumn>,
}

impl EditorState {
    pub fn focus_table(&self) -> Option<&FocusTableModel> {
        self.focus_table.as_ref()
    }

    pub fn edit_table(&self) -> Option<&EditTable> {
        self.edit_table.as_ref()
    }

    pub fn draggable_column(&self) -> Option<&DraggableColumn> {
        self.draggable_column.as_ref()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            focus_table: self.focus_table.as_ref().map(|model| FocusTableSnapshot {
                table_id: model.table_id().clone(),
                focus: model.focus().cloned(),
                selected_column_ids: model.selected_column_ids().iter().cloned().collect(),
            }),
            edit_table: self.edit_table.clone(),
            draggable_column: self.draggable_column.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusTableSnapshot {
    pub table_id: TableId,
    pub focus: Option<Focus>,
    pub selected_column_ids: Vec<ColumnId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub focus_table: Option<FocusTableSnapshot>,
    pub edit_table: Option<EditTable>,
    pub draggable_column: Option<DraggableColumn>,
}
