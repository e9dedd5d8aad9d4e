// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::canvas::Show;
use super::ids::{ColumnId, TableId};
use crate::layout::{self, Rect, SIZE_MIN_WIDTH};

/// Canvas placement and cached text widths of a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUi {
    pub active: bool,
    pub top: f64,
    pub left: f64,
    pub z_index: i64,
    pub width_name: f64,
    pub width_comment: f64,
}

impl Default for TableUi {
    fn default() -> Self {
        Self {
            active: false,
            top: 0.0,
            left: 0.0,
            z_index: 1,
            width_name: SIZE_MIN_WIDTH,
            width_comment: SIZE_MIN_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOption {
    pub auto_increment: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub not_null: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnUi {
    pub width_name: f64,
    pub width_comment: f64,
    pub width_data_type: f64,
    pub width_default: f64,
}

impl Default for ColumnUi {
    fn default() -> Self {
        Self {
            width_name: SIZE_MIN_WIDTH,
            width_comment: SIZE_MIN_WIDTH,
            width_data_type: SIZE_MIN_WIDTH,
            width_default: SIZE_MIN_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    name: String,
    comment: String,
    data_type: String,
    default: String,
    option: ColumnOption,
    ui: ColumnUi,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self::with_ui(id, ColumnUi::default())
    }

    pub fn with_ui(id: ColumnId, ui: ColumnUi) -> Self {
        Self {
            id,
            name: String::new(),
            comment: String::new(),
            data_type: String::new(),
            default: String::new(),
            option: ColumnOption::default(),
            ui,
        }
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn set_data_type(&mut self, data_type: impl Into<String>) {
        self.data_type = data_type.into();
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn set_default_value(&mut self, default: impl Into<String>) {
        self.default = default.into();
    }

    pub fn option(&self) -> &ColumnOption {
        &self.option
    }

    pub fn option_mut(&mut self) -> &mut ColumnOption {
        &mut self.option
    }

    pub fn ui(&self) -> &ColumnUi {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut ColumnUi {
        &mut self.ui
    }
}

/// A table shape. Owns its columns; column order is display and navigation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    id: TableId,
    name: String,
    comment: String,
    columns: Vec<Column>,
    ui: TableUi,
}

impl Table {
    pub fn new(id: TableId, ui: TableUi) -> Self {
        Self {
            id,
            name: String::new(),
            comment: String::new(),
            columns: Vec::new(),
            ui,
        }
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn ui(&self) -> &TableUi {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut TableUi {
        &mut self.ui
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == column_id)
    }

    pub fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id() == column_id)
    }

    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id() == column_id)
    }

    pub fn width(&self, show: &Show) -> f64 {
        layout::table_width(&self.ui, &self.columns, show)
    }

    pub fn height(&self) -> f64 {
        layout::table_height(self.columns.len())
    }

    pub fn bounds(&self, show: &Show) -> Rect {
        Rect::new(self.ui.left, self.ui.top, self.width(show), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, Table, TableUi};
    use crate::model::{ColumnId, Show, TableId};

    fn cid(value: &str) -> ColumnId {
        ColumnId::new(value).expect("column id")
    }

    #[test]
    fn column_lookup_follows_insertion_order() {
        let mut table = Table::new(TableId::new("t1").expect("table id"), TableUi::default());
        table.columns_mut().push(Column::new(cid("c0")));
        table.columns_mut().push(Column::new(cid("c1")));

        assert_eq!(table.column_index(&cid("c1")), Some(1));
        assert!(table.column(&cid("missing")).is_none());
    }

    #[test]
    fn height_grows_with_columns_and_width_with_comment_visibility() {
        let mut table = Table::new(TableId::new("t1").expect("table id"), TableUi::default());
        let empty_height = table.height();
        table.columns_mut().push(Column::new(cid("c0")));
        assert!(table.height() > empty_height);

        let mut hidden = Show::default();
        hidden.table_comment = false;
        hidden.column_comment = false;
        assert!(table.width(&Show::default()) > table.width(&hidden));
    }
}
