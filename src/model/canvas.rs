// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::layout::SIZE_CANVAS_MIN;

/// Visibility flags the canvas can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowKey {
    TableComment,
    ColumnComment,
    ColumnDataType,
    ColumnDefault,
    ColumnAutoIncrement,
    ColumnPrimaryKey,
    ColumnUnique,
    ColumnNotNull,
    Relationship,
}

impl ShowKey {
    pub const ALL: [ShowKey; 9] = [
        ShowKey::TableComment,
        ShowKey::ColumnComment,
        ShowKey::ColumnDataType,
        ShowKey::ColumnDefault,
        ShowKey::ColumnAutoIncrement,
        ShowKey::ColumnPrimaryKey,
        ShowKey::ColumnUnique,
        ShowKey::ColumnNotNull,
        ShowKey::Relationship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TableComment => "tableComment",
            Self::ColumnComment => "columnComment",
            Self::ColumnDataType => "columnDataType",
            Self::ColumnDefault => "columnDefault",
            Self::ColumnAutoIncrement => "columnAutoIncrement",
            Self::ColumnPrimaryKey => "columnPrimaryKey",
            Self::ColumnUnique => "columnUnique",
            Self::ColumnNotNull => "columnNotNull",
            Self::Relationship => "relationship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub table_comment: bool,
    pub column_comment: bool,
    pub column_data_type: bool,
    pub column_default: bool,
    pub column_auto_increment: bool,
    pub column_primary_key: bool,
    pub column_unique: bool,
    pub column_not_null: bool,
    pub relationship: bool,
}

impl Default for Show {
    fn default() -> Self {
        Self {
            table_comment: true,
            column_comment: true,
            column_data_type: true,
            column_default: true,
            column_auto_increment: false,
            column_primary_key: true,
            column_unique: false,
            column_not_null: true,
            relationship: true,
        }
    }
}

impl Show {
    pub fn get(&self, key: ShowKey) -> bool {
        *self.slot(key)
    }

    pub fn set(&mut self, key: ShowKey, value: bool) {
        *self.slot_mut(key) = value;
    }

    fn slot(&self, key: ShowKey) -> &bool {
        match key {
            ShowKey::TableComment => &self.table_comment,
            ShowKey::ColumnComment => &self.column_comment,
            ShowKey::ColumnDataType => &self.column_data_type,
            ShowKey::ColumnDefault => &self.column_default,
            ShowKey::ColumnAutoIncrement => &self.column_auto_increment,
            ShowKey::ColumnPrimaryKey => &self.column_primary_key,
            ShowKey::ColumnUnique => &self.column_unique,
            ShowKey::ColumnNotNull => &self.column_not_null,
            ShowKey::Relationship => &self.relationship,
        }
    }

    fn slot_mut(&mut self, key: ShowKey) -> &mut bool {
        match key {
            ShowKey::TableComment => &mut self.table_comment,
            ShowKey::ColumnComment => &mut self.column_comment,
            ShowKey::ColumnDataType => &mut self.column_data_type,
            ShowKey::ColumnDefault => &mut self.column_default,
            ShowKey::ColumnAutoIncrement => &mut self.column_auto_increment,
            ShowKey::ColumnPrimaryKey => &mut self.column_primary_key,
            ShowKey::ColumnUnique => &mut self.column_unique,
            ShowKey::ColumnNotNull => &mut self.column_not_null,
            ShowKey::Relationship => &mut self.relationship,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Database {
    MariaDB,
    #[serde(rename = "MSSQL")]
    MsSql,
    #[default]
    MySQL,
    Oracle,
    PostgreSQL,
    SQLite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    GraphQL,
    #[serde(rename = "C#")]
    CSharp,
    Java,
    Kotlin,
    TypeScript,
    #[serde(rename = "JPA")]
    Jpa,
    Scala,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameCase {
    #[default]
    None,
    CamelCase,
    PascalCase,
    SnakeCase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanvasType {
    #[default]
    #[serde(rename = "ERD")]
    Erd,
    #[serde(rename = "SQL")]
    Sql,
    Grid,
    GeneratorCode,
    Visualization,
}

/// Column cells in display order; reordered by `canvas.moveColumnOrder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    ColumnName,
    ColumnDataType,
    ColumnNotNull,
    ColumnUnique,
    ColumnAutoIncrement,
    ColumnDefault,
    ColumnComment,
}

impl ColumnType {
    pub const DEFAULT_ORDER: [ColumnType; 7] = [
        ColumnType::ColumnName,
        ColumnType::ColumnDataType,
        ColumnType::ColumnNotNull,
        ColumnType::ColumnUnique,
        ColumnType::ColumnAutoIncrement,
        ColumnType::ColumnDefault,
        ColumnType::ColumnComment,
    ];
}

/// Process-wide display and configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    width: f64,
    height: f64,
    scroll_top: f64,
    scroll_left: f64,
    show: Show,
    database: Database,
    database_name: String,
    canvas_type: CanvasType,
    language: Language,
    table_case: NameCase,
    column_case: NameCase,
    relationship_data_type_sync: bool,
    column_order: Vec<ColumnType>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            width: SIZE_CANVAS_MIN,
            height: SIZE_CANVAS_MIN,
            scroll_top: 0.0,
            scroll_left: 0.0,
            show: Show::default(),
            database: Database::default(),
            database_name: String::new(),
            canvas_type: CanvasType::default(),
            language: Language::default(),
            table_case: NameCase::PascalCase,
            column_case: NameCase::CamelCase,
            relationship_data_type_sync: true,
            column_order: ColumnType::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl CanvasState {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn set_scroll(&mut self, scroll_top: f64, scroll_left: f64) {
        self.scroll_top = scroll_top;
        self.scroll_left = scroll_left;
    }

    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn show_mut(&mut self) -> &mut Show {
        &mut self.show
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn set_database(&mut self, database: Database) {
        self.database = database;
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn set_database_name(&mut self, database_name: impl Into<String>) {
        self.database_name = database_name.into();
    }

    pub fn canvas_type(&self) -> CanvasType {
        self.canvas_type
    }

    pub fn set_canvas_type(&mut self, canvas_type: CanvasType) {
        self.canvas_type = canvas_type;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn table_case(&self) -> NameCase {
        self.table_case
    }

    pub fn set_table_case(&mut self, name_case: NameCase) {
        self.table_case = name_case;
    }

    pub fn column_case(&self) -> NameCase {
        self.column_case
    }

    pub fn set_column_case(&mut self, name_case: NameCase) {
        self.column_case = name_case;
    }

    pub fn relationship_data_type_sync(&self) -> bool {
        self.relationship_data_type_sync
    }

    pub fn set_relationship_data_type_sync(&mut self, value: bool) {
        self.relationship_data_type_sync = value;
    }

    pub fn column_order(&self) -> &[ColumnType] {
        &self.column_order
    }

    /// Moves `column_type` to the slot currently held by `target`.
    ///
    /// Returns `false` when either type is missing from the order or both are the same.
    pub fn move_column_order(&mut self, column_type: ColumnType, target: ColumnType) -> bool {
        if column_type == target {
            return false;
        }
        let Some(from) = self.column_order.iter().position(|c| *c == column_type) else {
            return false;
        };
        let Some(to) = self.column_order.iter().position(|c| *c == target) else {
            return false;
        };
        let moved = self.column_order.remove(from);
        self.column_order.insert(to, moved);
        true
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CanvasState, ColumnType, Show, ShowKey};

    #[test]
    fn show_get_set_round_trips_every_key() {
        let mut show = Show::default();
        for key in ShowKey::ALL {
            let before = show.get(key);
            show.set(key, !before);
            assert_eq!(show.get(key), !before, "{}", key.as_str());
        }
    }

    #[rstest]
    #[case(ColumnType::ColumnComment, ColumnType::ColumnName, ColumnType::ColumnComment, 0)]
    #[case(ColumnType::ColumnName, ColumnType::ColumnDefault, ColumnType::ColumnName, 5)]
    fn move_column_order_takes_target_slot(
        #[case] column_type: ColumnType,
        #[case] target: ColumnType,
        #[case] expected: ColumnType,
        #[case] index: usize,
    ) {
        let mut canvas = CanvasState::default();
        assert!(canvas.move_column_order(column_type, target));
        assert_eq!(canvas.column_order()[index], expected);
        assert_eq!(canvas.column_order().len(), ColumnType::DEFAULT_ORDER.len());
    }

    #[test]
    fn move_column_order_to_itself_is_a_noop() {
        let mut canvas = CanvasState::default();
        assert!(!canvas.move_column_order(ColumnType::ColumnName, ColumnType::ColumnName));
        assert_eq!(canvas.column_order(), &ColumnType::DEFAULT_ORDER);
    }

    #[test]
    fn show_key_serializes_camel_case() {
        let json = serde_json::to_string(&ShowKey::ColumnNotNull).expect("serialize");
        assert_eq!(json, "\"columnNotNull\"");
    }
}
