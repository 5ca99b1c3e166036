// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional search over measured item rectangles.
//!
//! Given the current item and an arrow direction, [`find_closest`] scores every
//! other candidate that lies strictly on the requested side and returns the
//! lowest score. The score is the gap along the navigation axis plus twice the
//! gap along the cross axis, so an item directly below beats one that is only
//! "somewhere below". Gaps are edge-to-edge and collapse to zero when the two
//! rectangles overlap on that axis.
//!
//! Horizontal queries run in two passes. The first pass ignores items that lie
//! entirely above the current one, which keeps left/right movement on the
//! current row or flowing down into the next row. Only when that pass finds
//! nothing does a second pass consider the rows above.
//!
//! Queries are pure functions of the item slice: the same snapshot, origin, and
//! direction always produce the same answer. Equal scores resolve to the item
//! that comes first in registration order.

use kurbo::Rect;

use crate::util::{span_gap, spans_overlap};
use crate::{Direction, Item};

/// Weight applied to the cross-axis gap when scoring candidates.
pub const CROSS_AXIS_WEIGHT: f64 = 2.0;

/// Find the best candidate in `direction` from `current`.
///
/// Candidates are the items of `items` other than `current` that are enabled
/// and measured. When `cross_axis` is `false`, a candidate must also overlap
/// `current` on the cross axis (the same row for left/right, the same column
/// for up/down).
///
/// Returns `None` when `current` has no rectangle or when no candidate lies
/// strictly on the requested side.
///
/// ```
/// use kurbo::Rect;
/// use understory_menu::{Direction, Item, search::find_closest};
///
/// let items = [
///     Item::new('a').with_rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
///     Item::new('b').with_rect(Rect::new(20.0, 0.0, 30.0, 10.0)),
///     Item::new('c').with_rect(Rect::new(20.0, 20.0, 30.0, 30.0)),
/// ];
///
/// let next = find_closest(&items, &items[0], Direction::Right, true);
/// assert_eq!(next.map(Item::value), Some(&'b'));
/// assert!(find_closest(&items, &items[0], Direction::Left, true).is_none());
/// ```
pub fn find_closest<'a, V: PartialEq>(
    items: &'a [Item<V>],
    current: &Item<V>,
    direction: Direction,
    cross_axis: bool,
) -> Option<&'a Item<V>> {
    let origin = current.current_rect()?;
    let others = move || {
        items
            .iter()
            .filter(move |c| c.is_candidate() && c.value() != current.value())
    };
    let score = |r: Rect| directional_score(origin, r, direction, cross_axis);

    let best = if direction.is_horizontal() {
        min_by_score(others().filter(|c| !lies_above(c, origin)), score)
            .or_else(|| min_by_score(others(), score))
    } else {
        min_by_score(others(), score)
    };

    tracing::trace!(?direction, found = best.is_some(), "directional search");
    best
}

/// Whether the candidate lies entirely above `origin`.
fn lies_above<V>(candidate: &Item<V>, origin: Rect) -> bool {
    candidate
        .current_rect()
        .is_some_and(|r| r.y1 <= origin.y0)
}

/// Score `r` as a move from `origin`, or `None` if it is not on the requested side.
fn directional_score(origin: Rect, r: Rect, direction: Direction, cross_axis: bool) -> Option<f64> {
    let (main, cross, aligned) = match direction {
        Direction::Right if r.x0 >= origin.x1 => (
            r.x0 - origin.x1,
            span_gap(origin.y0, origin.y1, r.y0, r.y1),
            spans_overlap(origin.y0, origin.y1, r.y0, r.y1),
        ),
        Direction::Left if r.x1 <= origin.x0 => (
            origin.x0 - r.x1,
            span_gap(origin.y0, origin.y1, r.y0, r.y1),
            spans_overlap(origin.y0, origin.y1, r.y0, r.y1),
        ),
        Direction::Down if r.y0 >= origin.y1 => (
            r.y0 - origin.y1,
            span_gap(origin.x0, origin.x1, r.x0, r.x1),
            spans_overlap(origin.x0, origin.x1, r.x0, r.x1),
        ),
        Direction::Up if r.y1 <= origin.y0 => (
            origin.y0 - r.y1,
            span_gap(origin.x0, origin.x1, r.x0, r.x1),
            spans_overlap(origin.x0, origin.x1, r.x0, r.x1),
        ),
        _ => return None,
    };
    if !cross_axis && !aligned {
        return None;
    }
    Some(main + CROSS_AXIS_WEIGHT * cross)
}

/// Return the candidate with the strictly lowest finite score.
///
/// The first candidate reaching the minimum wins, so ties follow iteration order.
pub(crate) fn min_by_score<'a, V: 'a>(
    candidates: impl Iterator<Item = &'a Item<V>>,
    mut score: impl FnMut(Rect) -> Option<f64>,
) -> Option<&'a Item<V>> {
    let mut best: Option<&'a Item<V>> = None;
    let mut best_score = f64::INFINITY;
    for candidate in candidates {
        let Some(rect) = candidate.current_rect() else {
            continue;
        };
        let Some(s) = score(rect) else {
            continue;
        };
        if s.is_finite() && s < best_score {
            best_score = s;
            best = Some(candidate);
        }
    }
    best
}
