// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! The canvas holds tables (with ordered columns) and memos; both shape kinds share one
//! placement and stacking space.

pub mod canvas;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod memo;
pub mod table;

pub use canvas::{
    CanvasState, CanvasType, ColumnType, Database, Language, NameCase, Show, ShowKey,
};
pub use ids::{
    ColumnId, Id, IdError, IdGenerator, MemoId, SequentialIds, TableId, UuidGenerator,
};
pub use memo::{Memo, MemoUi};
pub use table::{Column, ColumnOption, ColumnUi, Table, TableUi};
