// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::MemoId;
use crate::layout::{Rect, SIZE_MEMO_HEIGHT, SIZE_MEMO_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoUi {
    pub active: bool,
    pub top: f64,
    pub left: f64,
    pub z_index: i64,
    pub width: f64,
    pub height: f64,
}

impl Default for MemoUi {
    fn default() -> Self {
        Self {
            active: false,
            top: 0.0,
            left: 0.0,
            z_index: 1,
            width: SIZE_MEMO_WIDTH,
            height: SIZE_MEMO_HEIGHT,
        }
    }
}

/// A free-text note on the canvas. Shares placement and stacking with tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    id: MemoId,
    value: String,
    ui: MemoUi,
}

impl Memo {
    pub fn new(id: MemoId, ui: MemoUi) -> Self {
        Self {
            id,
            value: String::new(),
            ui,
        }
    }

    pub fn id(&self) -> &MemoId {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn ui(&self) -> &MemoUi {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut MemoUi {
        &mut self.ui
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.ui.left, self.ui.top, self.ui.width, self.ui.height)
    }
}
