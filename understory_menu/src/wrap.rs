// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap-around targets for moves that ran off the edge of the layout.
//!
//! When [`find_closest`](crate::search::find_closest) has nothing to offer and
//! wrapping is enabled, the menu jumps to the item at the far end of the layout
//! on the opposite side: pressing right in the last column lands in the first
//! column, pressing up in the top row lands in the bottom row.
//!
//! Each candidate's extreme edge is scored first (smallest `left` for right,
//! largest `bottom` for up, and so on). Candidates that share the current row
//! (for left/right) or column (for up/down) then get [`ALIGNED_BONUS`]
//! subtracted, so the jump stays on the same line whenever it can. Candidates
//! that do not share it pay their edge-to-edge distance instead.

use kurbo::Rect;

use crate::search::min_by_score;
use crate::util::{span_gap, spans_overlap};
use crate::{Direction, Item};

/// Score bonus for candidates aligned with the current item on the cross axis.
pub const ALIGNED_BONUS: f64 = 10_000.0;

/// Find the item to wrap to when a move in `direction` found no candidate.
///
/// Candidates are the enabled, measured items other than `current`. When
/// `cross_axis` is `false`, only candidates on the current row or column are
/// considered. Returns `None` when `current` is unmeasured or nothing qualifies.
///
/// ```
/// use kurbo::Rect;
/// use understory_menu::{Direction, Item, wrap::find_wrap_target};
///
/// // One row of three cells; wrapping right from the last lands on the first.
/// let items = [
///     Item::new(0).with_rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
///     Item::new(1).with_rect(Rect::new(20.0, 0.0, 30.0, 10.0)),
///     Item::new(2).with_rect(Rect::new(40.0, 0.0, 50.0, 10.0)),
/// ];
/// let target = find_wrap_target(&items, &items[2], Direction::Right, true);
/// assert_eq!(target.map(Item::value), Some(&0));
/// ```
pub fn find_wrap_target<'a, V: PartialEq>(
    items: &'a [Item<V>],
    current: &Item<V>,
    direction: Direction,
    cross_axis: bool,
) -> Option<&'a Item<V>> {
    let origin = current.current_rect()?;
    let candidates = items
        .iter()
        .filter(|c| c.is_candidate() && c.value() != current.value());
    let best = min_by_score(candidates, |r| wrap_score(origin, r, direction, cross_axis));

    tracing::debug!(?direction, found = best.is_some(), "wrap-around search");
    best
}

fn wrap_score(origin: Rect, r: Rect, direction: Direction, cross_axis: bool) -> Option<f64> {
    let (edge, aligned, gap) = match direction {
        Direction::Up => (
            -r.y1,
            spans_overlap(origin.x0, origin.x1, r.x0, r.x1),
            span_gap(origin.x0, origin.x1, r.x0, r.x1),
        ),
        Direction::Down => (
            r.y0,
            spans_overlap(origin.x0, origin.x1, r.x0, r.x1),
            span_gap(origin.x0, origin.x1, r.x0, r.x1),
        ),
        Direction::Left => (
            -r.x1,
            spans_overlap(origin.y0, origin.y1, r.y0, r.y1),
            span_gap(origin.y0, origin.y1, r.y0, r.y1),
        ),
        Direction::Right => (
            r.x0,
            spans_overlap(origin.y0, origin.y1, r.y0, r.y1),
            span_gap(origin.y0, origin.y1, r.y0, r.y1),
        ),
    };
    if aligned {
        Some(edge - ALIGNED_BONUS)
    } else if cross_axis {
        Some(edge + gap)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn grid(rows: u32, cols: u32) -> Vec<Item<(u32, u32)>> {
        let mut items = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let x = f64::from(col) * 20.0;
                let y = f64::from(row) * 20.0;
                items.push(Item::new((row, col)).with_rect(Rect::new(x, y, x + 10.0, y + 10.0)));
            }
        }
        items
    }

    fn wrap_from(
        items: &[Item<(u32, u32)>],
        from: (u32, u32),
        direction: Direction,
    ) -> Option<(u32, u32)> {
        let current = items
            .iter()
            .find(|item| *item.value() == from)
            .expect("cell exists");
        find_wrap_target(items, current, direction, true).map(|item| *item.value())
    }

    #[test]
    fn wraps_to_the_opposite_edge_on_the_same_line() {
        let items = grid(3, 3);
        assert_eq!(wrap_from(&items, (1, 2), Direction::Right), Some((1, 0)));
        assert_eq!(wrap_from(&items, (1, 0), Direction::Left), Some((1, 2)));
        assert_eq!(wrap_from(&items, (0, 1), Direction::Up), Some((2, 1)));
        assert_eq!(wrap_from(&items, (2, 1), Direction::Down), Some((0, 1)));
    }

    #[test]
    fn unaligned_candidates_pay_their_distance() {
        // Column 2 only has a cell in the last row, so wrapping down from it
        // has no aligned candidate. The top row wins on its edge, and its
        // nearest column wins on distance.
        let mut items = grid(3, 3);
        items.retain(|item| *item.value() != (0, 2) && *item.value() != (1, 2));
        assert_eq!(wrap_from(&items, (2, 2), Direction::Down), Some((0, 1)));
    }

    #[test]
    fn disabled_candidates_are_skipped() {
        let mut items = grid(1, 3);
        items[0] = items[0].clone().with_disabled(true);
        assert_eq!(wrap_from(&items, (0, 2), Direction::Right), Some((0, 1)));
    }

    #[test]
    fn without_cross_axis_requires_alignment() {
        let items = [
            Item::new(0_u32).with_rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Item::new(1_u32).with_rect(Rect::new(0.0, 20.0, 10.0, 30.0)),
        ];
        assert!(find_wrap_target(&items, &items[1], Direction::Right, false).is_none());
        let target = find_wrap_target(&items, &items[1], Direction::Right, true);
        assert_eq!(target.map(|item| *item.value()), Some(0));
    }

    #[test]
    fn lone_item_has_no_target() {
        let items = [Item::new(0_u32).with_rect(Rect::new(0.0, 0.0, 10.0, 10.0))];
        assert!(find_wrap_target(&items, &items[0], Direction::Up, true).is_none());
    }
}
