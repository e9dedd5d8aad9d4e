// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{ColumnId, TableId};
use super::table::{Column, Table, TableUi};

pub(crate) fn tid(value: &str) -> TableId {
    TableId::new(value).expect("table id")
}

pub(crate) fn cid(value: &str) -> ColumnId {
    ColumnId::new(value).expect("column id")
}

/// Table `t1` with columns `c0..c{count-1}`, named after their ids.
pub(crate) fn table_with_columns(count: usize) -> Table {
    let mut table = Table::new(tid("t1"), TableUi::default());
    table.set_name("users");
    for idx in 0..count {
        let mut column = Column::new(cid(&format!("c{idx}")));
        column.set_name(format!("col_{idx}"));
        table.columns_mut().push(column);
    }
    table
}
