// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The single mutable state graph.
//!
//! [`Store`] hands out read-only views and observer subscriptions. Mutation goes through
//! [`Store::dispatch`], which lends a [`StoreMut`] to exactly one command executor at a time.
//! Every `StoreMut` write notifies observers immediately; multi-step commands produce several
//! notifications, not one batch.

mod editor;
pub mod observe;

use std::ops::Deref;

use serde::Serialize;

pub use editor::{EditorSnapshot, EditorState, FocusTableSnapshot};
pub use observe::{Change, ObserveTarget, Subscription};

use crate::command::{Command, DraggableColumn, EditTable};
use crate::focus::FocusTableModel;
use crate::model::{
    CanvasState, Column, ColumnId, Memo, MemoId, MemoUi, Show, ShowKey, Table, TableId, TableUi,
};
use observe::Observers;

#[derive(Debug, Default)]
pub struct Store {
    canvas: CanvasState,
    tables: Vec<Table>,
    memos: Vec<Memo>,
    editor: EditorState,
    observers: Observers,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas(canvas: CanvasState) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, table_id: &TableId) -> Option<&Table> {
        self.tables.iter().find(|table| table.id() == table_id)
    }

    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn memo(&self, memo_id: &MemoId) -> Option<&Memo> {
        self.memos.iter().find(|memo| memo.id() == memo_id)
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Registers `callback` for every change reachable from `target`.
    pub fn observe(
        &self,
        target: ObserveTarget,
        callback: impl Fn(&Change) + 'static,
    ) -> Subscription {
        self.observers.observe(target, callback)
    }

    /// Live subscriptions, either all of them or those registered on exactly `target`.
    pub fn observer_count(&self, target: Option<&ObserveTarget>) -> usize {
        self.observers.count(target)
    }

    /// Runs the command's executor to completion before returning.
    pub fn dispatch(&mut self, command: &Command) {
        let _span = tracing::debug_span!("dispatch", command = command.name()).entered();
        let mut store = StoreMut { store: self };
        command.execute(&mut store);
        self.settle_focus();
    }

    /// Applies pending column removals to the focus model so readers never see stale ids.
    fn settle_focus(&mut self) {
        let Some(model) = self.editor.focus_table.as_mut() else {
            return;
        };
        if let Some(table) = self.tables.iter().find(|t| t.id() == model.table_id()) {
            model.sync_columns(table);
        }
    }

    pub fn dispatch_all<'c>(&mut self, commands: impl IntoIterator<Item = &'c Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            canvas: self.canvas.clone(),
            tables: self.tables.clone(),
            memos: self.memos.clone(),
            editor: self.editor.snapshot(),
        }
    }
}

/// Serializable copy of the whole store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub canvas: CanvasState,
    pub tables: Vec<Table>,
    pub memos: Vec<Memo>,
    pub editor: EditorSnapshot,
}

/// Write access to a [`Store`], lent to command executors by [`Store::dispatch`].
pub struct StoreMut<'a> {
    store: &'a mut Store,
}

impl Deref for StoreMut<'_> {
    type Target = Store;

    fn deref(&self) -> &Store {
        self.store
    }
}

impl StoreMut<'_> {
    fn notify(&self, target: ObserveTarget, key: &'static str) {
        self.store.observers.notify(Change::new(target, key));
    }

    pub(crate) fn update_canvas(&mut self, key: &'static str, f: impl FnOnce(&mut CanvasState)) {
        f(&mut self.store.canvas);
        self.notify(ObserveTarget::Canvas, key);
    }

    /// Like [`Self::update_canvas`], but only notifies when `f` reports a change.
    pub(crate) fn try_update_canvas(
        &mut self,
        key: &'static str,
        f: impl FnOnce(&mut CanvasState) -> bool,
    ) -> bool {
        let changed = f(&mut self.store.canvas);
        if changed {
            self.notify(ObserveTarget::Canvas, key);
        }
        changed
    }

    pub(crate) fn update_show(&mut self, show_key: ShowKey, value: bool) {
        self.store.canvas.show_mut().set(show_key, value);
        self.notify(ObserveTarget::CanvasShow, show_key.as_str());
    }

    pub(crate) fn push_table(&mut self, table: Table) {
        self.store.tables.push(table);
        self.notify(ObserveTarget::Tables, "tables");
    }

    /// Removes every listed table that exists; returns how many were removed.
    pub(crate) fn remove_tables(&mut self, table_ids: &[TableId]) -> usize {
        let before = self.store.tables.len();
        self.store
            .tables
            .retain(|table| !table_ids.contains(table.id()));
        let removed = before - self.store.tables.len();
        if removed > 0 {
            self.notify(ObserveTarget::Tables, "tables");
        }
        removed
    }

    /// Returns `false` when the table does not exist.
    pub(crate) fn update_table(
        &mut self,
        table_id: &TableId,
        key: &'static str,
        f: impl FnOnce(&mut Table),
    ) -> bool {
        let Some(table) = self.store.tables.iter_mut().find(|t| t.id() == table_id) else {
            return false;
        };
        f(table);
        self.notify(ObserveTarget::Table(table_id.clone()), key);
        true
    }

    pub(crate) fn update_table_ui(
        &mut self,
        table_id: &TableId,
        key: &'static str,
        f: impl FnOnce(&mut TableUi),
    ) -> bool {
        let Some(table) = self.store.tables.iter_mut().find(|t| t.id() == table_id) else {
            return false;
        };
        f(table.ui_mut());
        self.notify(ObserveTarget::TableUi(table_id.clone()), key);
        true
    }

    /// Applies `f` to every table's ui; only tables whose ui actually changed are notified.
    pub(crate) fn for_each_table_ui(
        &mut self,
        key: &'static str,
        mut f: impl FnMut(&Table) -> TableUi,
    ) {
        let mut changed = Vec::new();
        for table in &mut self.store.tables {
            let next = f(table);
            if next != *table.ui() {
                *table.ui_mut() = next;
                changed.push(table.id().clone());
            }
        }
        for table_id in changed {
            self.notify(ObserveTarget::TableUi(table_id), key);
        }
    }

    pub(crate) fn update_columns<R>(
        &mut self,
        table_id: &TableId,
        key: &'static str,
        f: impl FnOnce(&mut Vec<Column>) -> R,
    ) -> Option<R> {
        let table = self.store.tables.iter_mut().find(|t| t.id() == table_id)?;
        let result = f(table.columns_mut());
        self.notify(ObserveTarget::TableColumns(table_id.clone()), key);
        Some(result)
    }

    pub(crate) fn update_column(
        &mut self,
        table_id: &TableId,
        column_id: &ColumnId,
        key: &'static str,
        f: impl FnOnce(&mut Column),
    ) -> bool {
        let Some(column) = self
            .store
            .tables
            .iter_mut()
            .find(|t| t.id() == table_id)
            .and_then(|table| table.column_mut(column_id))
        else {
            return false;
        };
        f(column);
        self.notify(ObserveTarget::Column(table_id.clone(), column_id.clone()), key);
        true
    }

    pub(crate) fn push_memo(&mut self, memo: Memo) {
        self.store.memos.push(memo);
        self.notify(ObserveTarget::Memos, "memos");
    }

    pub(crate) fn remove_memos(&mut self, memo_ids: &[MemoId]) -> usize {
        let before = self.store.memos.len();
        self.store.memos.retain(|memo| !memo_ids.contains(memo.id()));
        let removed = before - self.store.memos.len();
        if removed > 0 {
            self.notify(ObserveTarget::Memos, "memos");
        }
        removed
    }

    pub(crate) fn update_memo(
        &mut self,
        memo_id: &MemoId,
        key: &'static str,
        f: impl FnOnce(&mut Memo),
    ) -> bool {
        let Some(memo) = self.store.memos.iter_mut().find(|m| m.id() == memo_id) else {
            return false;
        };
        f(memo);
        self.notify(ObserveTarget::Memo(memo_id.clone()), key);
        true
    }

    pub(crate) fn update_memo_ui(
        &mut self,
        memo_id: &MemoId,
        key: &'static str,
        f: impl FnOnce(&mut MemoUi),
    ) -> bool {
        let Some(memo) = self.store.memos.iter_mut().find(|m| m.id() == memo_id) else {
            return false;
        };
        f(memo.ui_mut());
        self.notify(ObserveTarget::MemoUi(memo_id.clone()), key);
        true
    }

    pub(crate) fn for_each_memo_ui(
        &mut self,
        key: &'static str,
        mut f: impl FnMut(&Memo) -> MemoUi,
    ) {
        let mut changed = Vec::new();
        for memo in &mut self.store.memos {
            let next = f(memo);
            if next != *memo.ui() {
                *memo.ui_mut() = next;
                changed.push(memo.id().clone());
            }
        }
        for memo_id in changed {
            self.notify(ObserveTarget::MemoUi(memo_id), key);
        }
    }

    /// Creates the focus model for `table_id`.
    ///
    /// The previous model must already have been ended; a leftover one is reported and torn
    /// down.
    pub(crate) fn begin_focus_table(&mut self, table_id: &TableId) {
        if let Some(previous) = self.store.editor.focus_table.take() {
            tracing::warn!(
                previous = %previous.table_id(),
                next = %table_id,
                "focus model replaced without being ended"
            );
            debug_assert!(false, "two focus models would be live at once");
            previous.destroy();
        }
        let model = FocusTableModel::new(table_id.clone(), &self.store.observers);
        self.store.editor.focus_table = Some(model);
        self.notify(ObserveTarget::FocusTable, "focusTable");
    }

    pub(crate) fn end_focus_table(&mut self) {
        if let Some(model) = self.store.editor.focus_table.take() {
            model.destroy();
            self.notify(ObserveTarget::FocusTable, "focusTable");
        }
    }

    /// Runs `f` against the focus model and its table. `None` when nothing is focused or the
    /// focused table is gone.
    pub(crate) fn update_focus_table<R>(
        &mut self,
        f: impl FnOnce(&mut FocusTableModel, &Table, &Show) -> R,
    ) -> Option<R> {
        let store = &mut *self.store;
        let model = store.editor.focus_table.as_mut()?;
        let table = store.tables.iter().find(|t| t.id() == model.table_id())?;
        let result = f(model, table, store.canvas.show());
        self.notify(ObserveTarget::FocusTable, "focus");
        Some(result)
    }

    pub(crate) fn set_edit_table(&mut self, edit_table: Option<EditTable>) {
        if let Some(edit) = &edit_table {
            let focused = self.store.editor.focus_table.as_ref().map(|m| m.table_id());
            if focused != Some(&edit.id) {
                tracing::warn!(
                    table_id = %edit.id,
                    "edit mode requested outside the focused table"
                );
                debug_assert!(false, "edit table must match the focused table");
                return;
            }
        }
        if self.store.editor.edit_table == edit_table {
            return;
        }
        self.store.editor.edit_table = edit_table;
        self.notify(ObserveTarget::Editor, "editTable");
    }

    pub(crate) fn set_draggable_column(&mut self, draggable_column: Option<DraggableColumn>) {
        if self.store.editor.draggable_column == draggable_column {
            return;
        }
        self.store.editor.draggable_column = draggable_column;
        self.notify(ObserveTarget::Editor, "draggableColumn");
    }
}

#[cfg(test)]
mod tests;
