// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry shared by the model and the command layer.
//!
//! Sizes are pixels. Table sizes are derived from cached text widths, never stored.

pub mod placement;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::model::{Column, Show, TableUi};

pub use placement::{next_point, next_z_index};
pub use text::{FontConfig, Helper, MonospaceMeasure, TextMeasure};

pub const SIZE_CANVAS_MIN: f64 = 2000.0;
pub const SIZE_MIN_WIDTH: f64 = 60.0;
pub const SIZE_FONT: f64 = 13.0;
pub const SIZE_TABLE_PADDING: f64 = 10.0;
pub const SIZE_TABLE_BORDER: f64 = 1.0;
pub const SIZE_TABLE_HEADER_HEIGHT: f64 = 46.0;
pub const SIZE_COLUMN_HEIGHT: f64 = 25.0;
pub const SIZE_COLUMN_MARGIN_RIGHT: f64 = 10.0;
pub const SIZE_COLUMN_CLOSE: f64 = 15.0;
pub const SIZE_COLUMN_KEY: f64 = 15.0;
pub const SIZE_COLUMN_OPTION_NN: f64 = 35.0;
pub const SIZE_MEMO_WIDTH: f64 = 116.0;
pub const SIZE_MEMO_HEIGHT: f64 = 100.0;

/// Where the placement cascade starts, relative to the scroll offset.
pub const PLACEMENT_ORIGIN: Point = Point {
    top: 50.0,
    left: 200.0,
};
/// Diagonal step between placement candidates.
pub const PLACEMENT_STEP: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub top: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn at(point: Point, size: Size) -> Self {
        Self::new(point.left, point.top, size.width, size.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Interior overlap; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Width of a table: the wider of its header row and its widest column row.
pub fn table_width(ui: &TableUi, columns: &[Column], show: &Show) -> f64 {
    let mut header = ui.width_name + SIZE_COLUMN_MARGIN_RIGHT;
    if show.table_comment {
        header += ui.width_comment + SIZE_COLUMN_MARGIN_RIGHT;
    }

    let max_of = |f: fn(&Column) -> f64| {
        columns
            .iter()
            .map(f)
            .fold(SIZE_MIN_WIDTH, f64::max)
    };

    let mut row = SIZE_COLUMN_CLOSE;
    if show.column_primary_key {
        row += SIZE_COLUMN_KEY;
    }
    row += max_of(|c| c.ui().width_name) + SIZE_COLUMN_MARGIN_RIGHT;
    if show.column_data_type {
        row += max_of(|c| c.ui().width_data_type) + SIZE_COLUMN_MARGIN_RIGHT;
    }
    if show.column_not_null {
        row += SIZE_COLUMN_OPTION_NN + SIZE_COLUMN_MARGIN_RIGHT;
    }
    if show.column_default {
        row += max_of(|c| c.ui().width_default) + SIZE_COLUMN_MARGIN_RIGHT;
    }
    if show.column_comment {
        row += max_of(|c| c.ui().width_comment) + SIZE_COLUMN_MARGIN_RIGHT;
    }

    header.max(row) + (SIZE_TABLE_PADDING + SIZE_TABLE_BORDER) * 2.0
}

pub fn table_height(column_count: usize) -> f64 {
    SIZE_TABLE_HEADER_HEIGHT
        + column_count as f64 * SIZE_COLUMN_HEIGHT
        + (SIZE_TABLE_PADDING + SIZE_TABLE_BORDER) * 2.0
}

/// Footprint of a freshly added table (minimum widths, no columns).
pub fn default_table_size(show: &Show) -> Size {
    Size {
        width: table_width(&TableUi::default(), &[], show),
        height: table_height(0),
    }
}

pub fn default_memo_size() -> Size {
    Size {
        width: SIZE_MEMO_WIDTH,
        height: SIZE_MEMO_HEIGHT,
    }
}
