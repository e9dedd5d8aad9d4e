// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Keyboard focus, column selection and navigation inside the focused table.
//!
//! The model keeps the *primary* focus (the single field receiving keyboard input) apart
//! from the *selection* (the set of columns bulk operations act on). Column order of the
//! table is the navigation order; ranges are contiguous by index.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{ColumnId, Show, Table, TableId};
use crate::store::observe::Observers;
use crate::store::{ObserveTarget, Subscription};

/// The field of a table or column that can hold keyboard focus.
///
/// Declaration order is the left-to-right order of the fields on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusType {
    TableName,
    TableComment,
    ColumnName,
    ColumnDataType,
    ColumnNotNull,
    ColumnDefault,
    ColumnComment,
}

impl FocusType {
    pub fn is_table(self) -> bool {
        matches!(self, Self::TableName | Self::TableComment)
    }

    pub fn is_column(self) -> bool {
        !self.is_table()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    ArrowUp,
    ArrowRight,
    ArrowDown,
    ArrowLeft,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [
        MoveKey::ArrowUp,
        MoveKey::ArrowRight,
        MoveKey::ArrowDown,
        MoveKey::ArrowLeft,
    ];

    /// Maps a DOM-style key name (`"ArrowUp"`, ...) to a move key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            _ => None,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::ArrowUp | Self::ArrowDown)
    }
}

/// Primary focus position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Focus {
    #[serde(rename_all = "camelCase")]
    Table { focus_type: FocusType },
    #[serde(rename_all = "camelCase")]
    Column {
        column_id: ColumnId,
        focus_type: FocusType,
    },
}

impl Focus {
    pub fn focus_type(&self) -> FocusType {
        match self {
            Self::Table { focus_type } | Self::Column { focus_type, .. } => *focus_type,
        }
    }

    pub fn column_id(&self) -> Option<&ColumnId> {
        match self {
            Self::Table { .. } => None,
            Self::Column { column_id, .. } => Some(column_id),
        }
    }
}

/// Column click as delivered by the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnClick<'a> {
    pub column_id: &'a ColumnId,
    pub focus_type: FocusType,
    pub ctrl_key: bool,
    pub shift_key: bool,
}

/// Transient focus/selection state of the one table that has input focus.
///
/// Only the editor state creates and destroys instances. The model watches its table's
/// column collection and drops stale ids before the next operation.
pub struct FocusTableModel {
    table_id: TableId,
    focus: Option<Focus>,
    selected: BTreeSet<ColumnId>,
    anchor: Option<ColumnId>,
    columns_changed: Rc<Cell<bool>>,
    subscription: Subscription,
}

impl FocusTableModel {
    pub(crate) fn new(table_id: TableId, observers: &Observers) -> Self {
        let columns_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&columns_changed);
        let subscription = observers.observe(
            ObserveTarget::TableColumns(table_id.clone()),
            move |_| flag.set(true),
        );
        Self {
            table_id,
            focus: Some(Focus::Table {
                focus_type: FocusType::TableName,
            }),
            selected: BTreeSet::new(),
            anchor: None,
            columns_changed,
            subscription,
        }
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    /// `None` when the primary column was toggled out of the selection.
    pub fn focus(&self) -> Option<&Focus> {
        self.focus.as_ref()
    }

    pub fn focus_type(&self) -> Option<FocusType> {
        self.focus.as_ref().map(Focus::focus_type)
    }

    pub fn focused_column_id(&self) -> Option<&ColumnId> {
        self.focus.as_ref().and_then(Focus::column_id)
    }

    pub fn selected_column_ids(&self) -> &BTreeSet<ColumnId> {
        &self.selected
    }

    pub fn is_selected(&self, column_id: &ColumnId) -> bool {
        self.selected.contains(column_id)
    }

    /// Selected column ids in the table's column order.
    pub fn selection_in_order(&self, table: &Table) -> Vec<ColumnId> {
        table
            .columns()
            .iter()
            .filter(|column| self.selected.contains(column.id()))
            .map(|column| column.id().clone())
            .collect()
    }

    /// Focuses a table-level field and clears the column selection.
    pub fn focus_table_field(&mut self, table: &Table, focus_type: FocusType) {
        self.sync_columns(table);
        if !focus_type.is_table() {
            return;
        }
        self.focus = Some(Focus::Table { focus_type });
        self.selected.clear();
        self.anchor = None;
    }

    pub fn focus_column(&mut self, table: &Table, click: ColumnClick<'_>) {
        self.sync_columns(table);
        let Some(index) = table.column_index(click.column_id) else {
            return;
        };
        if !click.focus_type.is_column() {
            return;
        }

        if click.shift_key {
            let anchor_index = self
                .anchor
                .as_ref()
                .or_else(|| self.focused_column_id())
                .and_then(|anchor| table.column_index(anchor));
            if let Some(anchor_index) = anchor_index {
                self.anchor = Some(table.columns()[anchor_index].id().clone());
                self.selected = column_range(table, anchor_index, index);
                self.focus = Some(Focus::Column {
                    column_id: click.column_id.clone(),
                    focus_type: click.focus_type,
                });
                return;
            }
        } else if click.ctrl_key {
            if self.selected.remove(click.column_id) {
                if self.focused_column_id() == Some(click.column_id) {
                    self.focus = None;
                    self.anchor = None;
                }
            } else {
                self.selected.insert(click.column_id.clone());
            }
            return;
        }

        self.focus_single(click.column_id.clone(), click.focus_type);
    }

    /// Arrow-key navigation. Vertical moves clamp at the first/last column; with `shift_key`
    /// they extend the selection from the anchor instead of replacing it.
    pub fn move_focus(&mut self, table: &Table, show: &Show, move_key: MoveKey, shift_key: bool) {
        self.sync_columns(table);
        if move_key.is_vertical() {
            self.move_vertical(table, move_key, shift_key);
        } else {
            self.move_horizontal(show, move_key);
        }
    }

    pub fn select_all(&mut self, table: &Table) {
        self.sync_columns(table);
        self.selected = table.columns().iter().map(|c| c.id().clone()).collect();
    }

    pub fn select_end(&mut self) {
        self.selected.clear();
    }

    /// Drops selected/focused ids whose columns left the table.
    pub(crate) fn sync_columns(&mut self, table: &Table) {
        if !self.columns_changed.replace(false) {
            return;
        }
        self.selected.retain(|column_id| table.column(column_id).is_some());
        if self
            .focused_column_id()
            .is_some_and(|column_id| table.column(column_id).is_none())
        {
            self.focus = None;
        }
        if self
            .anchor
            .as_ref()
            .is_some_and(|column_id| table.column(column_id).is_none())
        {
            self.anchor = None;
        }
    }

    /// Tears the model down and releases its column subscription.
    pub(crate) fn destroy(self) {
        let Self { subscription, .. } = self;
        subscription.dispose();
    }

    fn focus_single(&mut self, column_id: ColumnId, focus_type: FocusType) {
        self.selected.clear();
        self.selected.insert(column_id.clone());
        self.anchor = Some(column_id.clone());
        self.focus = Some(Focus::Column {
            column_id,
            focus_type,
        });
    }

    fn move_vertical(&mut self, table: &Table, move_key: MoveKey, shift_key: bool) {
        let columns = table.columns();
        let (column_id, focus_type) = match &self.focus {
            Some(Focus::Column {
                column_id,
                focus_type,
            }) => (column_id.clone(), *focus_type),
            Some(Focus::Table { .. }) => {
                if move_key == MoveKey::ArrowDown {
                    if let Some(first) = columns.first() {
                        self.focus_single(first.id().clone(), FocusType::ColumnName);
                    }
                }
                return;
            }
            None => return,
        };
        let Some(index) = table.column_index(&column_id) else {
            return;
        };

        let next = match move_key {
            MoveKey::ArrowUp => index.checked_sub(1),
            _ => (index + 1 < columns.len()).then_some(index + 1),
        };

        if shift_key {
            let anchor_id = self.anchor.get_or_insert_with(|| column_id.clone()).clone();
            let anchor_index = table.column_index(&anchor_id).unwrap_or(index);
            let target = next.unwrap_or(index);
            self.selected = column_range(table, anchor_index, target);
            self.focus = Some(Focus::Column {
                column_id: columns[target].id().clone(),
                focus_type,
            });
        } else if let Some(next) = next {
            self.focus_single(columns[next].id().clone(), focus_type);
        }
    }

    fn move_horizontal(&mut self, show: &Show, move_key: MoveKey) {
        let Some(focus) = self.focus.as_mut() else {
            return;
        };
        let fields = match focus {
            Focus::Table { .. } => table_fields(show),
            Focus::Column { .. } => column_fields(show),
        };
        let current = focus.focus_type();
        // The current field may itself be hidden, so step by declared order, not by position.
        let next = match move_key {
            MoveKey::ArrowLeft => fields
                .iter()
                .rev()
                .find(|field| **field < current)
                .or_else(|| fields.first()),
            _ => fields
                .iter()
                .find(|field| **field > current)
                .or_else(|| fields.last()),
        };
        let Some(&next) = next else {
            return;
        };
        match focus {
            Focus::Table { focus_type } | Focus::Column { focus_type, .. } => {
                *focus_type = next;
            }
        }
    }
}

impl fmt::Debug for FocusTableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTableModel")
            .field("table_id", &self.table_id)
            .field("focus", &self.focus)
            .field("selected", &self.selected)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

type Fields = SmallVec<[FocusType; 5]>;

/// Table-level fields visible under `show`, left to right.
fn table_fields(show: &Show) -> Fields {
    let mut fields = SmallVec::new();
    fields.push(FocusType::TableName);
    if show.table_comment {
        fields.push(FocusType::TableComment);
    }
    fields
}

/// Column fields visible under `show`, left to right.
fn column_fields(show: &Show) -> Fields {
    let mut fields = SmallVec::new();
    fields.push(FocusType::ColumnName);
    if show.column_data_type {
        fields.push(FocusType::ColumnDataType);
    }
    if show.column_not_null {
        fields.push(FocusType::ColumnNotNull);
    }
    if show.column_default {
        fields.push(FocusType::ColumnDefault);
    }
    if show.column_comment {
        fields.push(FocusType::ColumnComment);
    }
    fields
}

fn column_range(table: &Table, from: usize, to: usize) -> BTreeSet<ColumnId> {
    let (low, high) = if from <= to { (from, to) } else { (to, from) };
    table.columns()[low..=high]
        .iter()
        .map(|column| column.id().clone())
        .collect()
}
