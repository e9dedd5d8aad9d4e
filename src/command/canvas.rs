// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `canvas.*` commands: scroll, size, visibility flags and generator settings.

use serde::{Deserialize, Serialize};

use super::Command;
use crate::model::{CanvasType, ColumnType, Database, Language, NameCase, ShowKey};
use crate::store::{Store, StoreMut};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCanvas {
    pub scroll_top: f64,
    pub scroll_left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeCanvas {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCanvasShow {
    pub show_key: ShowKey,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDatabase {
    pub database: Database,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDatabaseName {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCanvasType {
    pub canvas_type: CanvasType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLanguage {
    pub language: Language,
}

/// Shared by `canvas.changeTableCase` and `canvas.changeColumnCase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNameCase {
    pub name_case: NameCase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRelationshipDataTypeSync {
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveColumnOrder {
    pub column_type: ColumnType,
    pub target_column_type: ColumnType,
}

pub fn move_canvas(scroll_top: f64, scroll_left: f64) -> Command {
    Command::MoveCanvas(MoveCanvas {
        scroll_top,
        scroll_left,
    })
}

pub fn resize_canvas(width: f64, height: f64) -> Command {
    Command::ResizeCanvas(ResizeCanvas { width, height })
}

/// Toggles `show_key` relative to the store's current value.
pub fn change_canvas_show(store: &Store, show_key: ShowKey) -> Command {
    Command::ChangeCanvasShow(ChangeCanvasShow {
        show_key,
        value: !store.canvas().show().get(show_key),
    })
}

pub fn change_database(database: Database) -> Command {
    Command::ChangeDatabase(ChangeDatabase { database })
}

pub fn change_database_name(value: impl Into<String>) -> Command {
    Command::ChangeDatabaseName(ChangeDatabaseName {
        value: value.into(),
    })
}

pub fn change_canvas_type(canvas_type: CanvasType) -> Command {
    Command::ChangeCanvasType(ChangeCanvasType { canvas_type })
}

pub fn change_language(language: Language) -> Command {
    Command::ChangeLanguage(ChangeLanguage { language })
}

pub fn change_table_case(name_case: NameCase) -> Command {
    Command::ChangeTableCase(ChangeNameCase { name_case })
}

pub fn change_column_case(name_case: NameCase) -> Command {
    Command::ChangeColumnCase(ChangeNameCase { name_case })
}

pub fn change_relationship_data_type_sync(value: bool) -> Command {
    Command::ChangeRelationshipDataTypeSync(ChangeRelationshipDataTypeSync { value })
}

pub fn move_column_order(column_type: ColumnType, target_column_type: ColumnType) -> Command {
    Command::MoveColumnOrder(MoveColumnOrder {
        column_type,
        target_column_type,
    })
}

pub(crate) fn move_canvas_execute(store: &mut StoreMut<'_>, data: &MoveCanvas) {
    tracing::debug!(top = data.scroll_top, left = data.scroll_left, "canvas.move");
    store.update_canvas("scroll", |canvas| {
        canvas.set_scroll(data.scroll_top, data.scroll_left)
    });
}

pub(crate) fn resize_canvas_execute(store: &mut StoreMut<'_>, data: &ResizeCanvas) {
    tracing::debug!(width = data.width, height = data.height, "canvas.resize");
    store.update_canvas("size", |canvas| canvas.set_size(data.width, data.height));
}

pub(crate) fn change_canvas_show_execute(store: &mut StoreMut<'_>, data: &ChangeCanvasShow) {
    tracing::debug!(key = data.show_key.as_str(), value = data.value, "canvas.changeShow");
    store.update_show(data.show_key, data.value);
}

pub(crate) fn change_database_execute(store: &mut StoreMut<'_>, data: &ChangeDatabase) {
    tracing::debug!(database = ?data.database, "canvas.changeDatabase");
    store.update_canvas("database", |canvas| canvas.set_database(data.database));
}

pub(crate) fn change_database_name_execute(store: &mut StoreMut<'_>, data: &ChangeDatabaseName) {
    tracing::debug!("canvas.changeDatabaseName");
    store.update_canvas("databaseName", |canvas| {
        canvas.set_database_name(data.value.as_str())
    });
}

pub(crate) fn change_canvas_type_execute(store: &mut StoreMut<'_>, data: &ChangeCanvasType) {
    tracing::debug!(canvas_type = ?data.canvas_type, "canvas.changeCanvasType");
    store.update_canvas("canvasType", |canvas| canvas.set_canvas_type(data.canvas_type));
}

pub(crate) fn change_language_execute(store: &mut StoreMut<'_>, data: &ChangeLanguage) {
    tracing::debug!(language = ?data.language, "canvas.changeLanguage");
    store.update_canvas("language", |canvas| canvas.set_language(data.language));
}

pub(crate) fn change_table_case_execute(store: &mut StoreMut<'_>, data: &ChangeNameCase) {
    tracing::debug!(name_case = ?data.name_case, "canvas.changeTableCase");
    store.update_canvas("tableCase", |canvas| canvas.set_table_case(data.name_case));
}

pub(crate) fn change_column_case_execute(store: &mut StoreMut<'_>, data: &ChangeNameCase) {
    tracing::debug!(name_case = ?data.name_case, "canvas.changeColumnCase");
    store.update_canvas("columnCase", |canvas| canvas.set_column_case(data.name_case));
}

pub(crate) fn change_relationship_data_type_sync_execute(
    store: &mut StoreMut<'_>,
    data: &ChangeRelationshipDataTypeSync,
) {
    tracing::debug!(value = data.value, "canvas.changeRelationshipDataTypeSync");
    store.update_canvas("relationshipDataTypeSync", |canvas| {
        canvas.set_relationship_data_type_sync(data.value)
    });
}

pub(crate) fn move_column_order_execute(store: &mut StoreMut<'_>, data: &MoveColumnOrder) {
    tracing::debug!(
        column_type = ?data.column_type,
        target = ?data.target_column_type,
        "canvas.moveColumnOrder"
    );
    let moved = store.try_update_canvas("columnOrder", |canvas| {
        canvas.move_column_order(data.column_type, data.target_column_type)
    });
    if !moved {
        tracing::trace!("column order unchanged");
    }
}
