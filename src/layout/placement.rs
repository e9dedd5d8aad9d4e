// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Insertion point and stacking order for new shapes.
//!
//! Tables and memos form one occupancy space and one z-order.

use super::{Point, Rect, Size, PLACEMENT_ORIGIN, PLACEMENT_STEP};
use crate::model::{CanvasState, Memo, Table};

/// First point on the diagonal cascade whose `size` box overlaps no table or memo.
///
/// The cascade starts at [`PLACEMENT_ORIGIN`] offset by the canvas scroll position and moves
/// [`PLACEMENT_STEP`] down-right per step, so repeated additions fan out instead of stacking.
/// A blocking shape is skipped in one jump to the first step past its right or bottom edge,
/// so the search visits at most one candidate per shape regardless of shape size.
pub fn next_point(canvas: &CanvasState, tables: &[Table], memos: &[Memo], size: Size) -> Point {
    let show = canvas.show();
    let occupied = tables
        .iter()
        .map(|table| table.bounds(show))
        .chain(memos.iter().map(Memo::bounds))
        .collect::<Vec<_>>();

    let origin = Point {
        top: PLACEMENT_ORIGIN.top + canvas.scroll_top(),
        left: PLACEMENT_ORIGIN.left + canvas.scroll_left(),
    };
    let at_step = |step: f64| Point {
        top: origin.top + step * PLACEMENT_STEP,
        left: origin.left + step * PLACEMENT_STEP,
    };

    let mut step = 0.0_f64;
    for _ in 0..=occupied.len() {
        let point = at_step(step);
        let candidate = Rect::at(point, size);
        let Some(blocker) = occupied.iter().find(|rect| rect.intersects(&candidate)) else {
            return point;
        };
        // Once the candidate's left edge passes the blocker's right edge, or its top edge
        // passes the blocker's bottom edge, every later step clears it too.
        let clear = ((blocker.right() - origin.left) / PLACEMENT_STEP)
            .ceil()
            .min(((blocker.bottom() - origin.top) / PLACEMENT_STEP).ceil());
        if !clear.is_finite() {
            return point;
        }
        step = clear.max(step + 1.0);
    }
    at_step(step)
}

/// One above the highest z-index across tables and memos (at least 1).
pub fn next_z_index(tables: &[Table], memos: &[Memo]) -> i64 {
    let max = tables
        .iter()
        .map(|table| table.ui().z_index)
        .chain(memos.iter().map(|memo| memo.ui().z_index))
        .fold(0, i64::max);
    max.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{next_point, next_z_index};
    use crate::layout::{
        default_memo_size, default_table_size, Point, Rect, PLACEMENT_ORIGIN, PLACEMENT_STEP,
    };
    use crate::model::{CanvasState, Memo, MemoId, MemoUi, Table, TableId, TableUi};

    fn table_at(id: &str, left: f64, top: f64, z_index: i64) -> Table {
        let ui = TableUi {
            left,
            top,
            z_index,
            ..TableUi::default()
        };
        Table::new(TableId::new(id).expect("table id"), ui)
    }

    fn memo_at(id: &str, left: f64, top: f64, z_index: i64) -> Memo {
        let ui = MemoUi {
            left,
            top,
            z_index,
            ..MemoUi::default()
        };
        Memo::new(MemoId::new(id).expect("memo id"), ui)
    }

    #[test]
    fn empty_canvas_places_at_origin() {
        let canvas = CanvasState::default();
        let size = default_table_size(canvas.show());
        assert_eq!(next_point(&canvas, &[], &[], size), PLACEMENT_ORIGIN);
    }

    #[test]
    fn origin_follows_scroll_offset() {
        let mut canvas = CanvasState::default();
        canvas.set_scroll(300.0, 100.0);
        let size = default_table_size(canvas.show());
        assert_eq!(
            next_point(&canvas, &[], &[], size),
            Point {
                top: PLACEMENT_ORIGIN.top + 300.0,
                left: PLACEMENT_ORIGIN.left + 100.0
            }
        );
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(12)]
    fn repeated_placement_never_overlaps(#[case] count: usize) {
        let canvas = CanvasState::default();
        let size = default_table_size(canvas.show());
        let mut tables = Vec::new();
        let mut memos = Vec::new();

        for idx in 0..count {
            let point = next_point(&canvas, &tables, &memos, size);
            let candidate = Rect::at(point, size);
            for table in &tables {
                assert!(!table.bounds(canvas.show()).intersects(&candidate));
            }
            for memo in &memos {
                assert!(!Memo::bounds(memo).intersects(&candidate));
            }
            if idx % 2 == 0 {
                tables.push(table_at(&format!("t{idx}"), point.left, point.top, 1));
            } else {
                let memo_point = next_point(&canvas, &tables, &memos, default_memo_size());
                memos.push(memo_at(&format!("m{idx}"), memo_point.left, memo_point.top, 1));
            }
        }
    }

    #[test]
    fn memo_blocks_table_placement() {
        let canvas = CanvasState::default();
        let memos = [memo_at("m1", PLACEMENT_ORIGIN.left, PLACEMENT_ORIGIN.top, 1)];
        let size = default_table_size(canvas.show());
        let point = next_point(&canvas, &[], &memos, size);
        assert_ne!(point, PLACEMENT_ORIGIN);
        assert!(!memos[0].bounds().intersects(&Rect::at(point, size)));
    }

    #[rstest]
    #[case(1e6)]
    #[case(1e12)]
    fn huge_shape_is_skipped_in_one_jump(#[case] extent: f64) {
        let canvas = CanvasState::default();
        let mut memo = memo_at("m1", PLACEMENT_ORIGIN.left, PLACEMENT_ORIGIN.top, 1);
        memo.ui_mut().width = extent;
        memo.ui_mut().height = extent;
        let size = default_table_size(canvas.show());

        let point = next_point(&canvas, &[], std::slice::from_ref(&memo), size);

        assert!(!memo.bounds().intersects(&Rect::at(point, size)));
        let steps = (point.left - PLACEMENT_ORIGIN.left) / PLACEMENT_STEP;
        assert_eq!(steps, (extent / PLACEMENT_STEP).ceil());
        assert_eq!(point.top - PLACEMENT_ORIGIN.top, point.left - PLACEMENT_ORIGIN.left);
    }

    #[test]
    fn cascade_skips_a_chain_of_blockers() {
        let canvas = CanvasState::default();
        let size = default_table_size(canvas.show());
        let memos: Vec<_> = (0..5)
            .map(|idx| {
                let offset = idx as f64 * 150.0;
                memo_at(
                    &format!("m{idx}"),
                    PLACEMENT_ORIGIN.left + offset,
                    PLACEMENT_ORIGIN.top + offset,
                    1,
                )
            })
            .collect();

        let point = next_point(&canvas, &[], &memos, size);

        let candidate = Rect::at(point, size);
        assert!(memos.iter().all(|memo| !memo.bounds().intersects(&candidate)));
    }

    #[test]
    fn next_z_index_spans_tables_and_memos() {
        assert_eq!(next_z_index(&[], &[]), 1);

        let tables = [table_at("t1", 0.0, 0.0, 3)];
        let memos = [memo_at("m1", 0.0, 0.0, 7)];
        assert_eq!(next_z_index(&tables, &[]), 4);
        assert_eq!(next_z_index(&tables, &memos), 8);
    }

    #[test]
    fn next_z_index_ignores_negative_values() {
        let tables = [table_at("t1", 0.0, 0.0, -5)];
        assert_eq!(next_z_index(&tables, &[]), 1);
    }
}
