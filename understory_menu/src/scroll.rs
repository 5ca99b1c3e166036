// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-into-view requests raised after keyboard navigation.

use kurbo::{Rect, Vec2};

/// How the host should animate a scroll-into-view request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animate the scroll.
    #[default]
    Smooth,
    /// Jump to the target position.
    Instant,
    /// Let the host pick.
    Auto,
    /// Never request scrolling.
    None,
}

/// A request to bring a newly highlighted item into view.
///
/// Both axes use nearest-edge semantics: the host should scroll just enough to
/// make `rect` fully visible, and not at all if it already is.
/// [`reveal_offset`] computes that delta for hosts that scroll themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRequest<V> {
    /// Value of the item to reveal.
    pub value: V,
    /// The item's rectangle at the time of the request.
    pub rect: Rect,
    /// Animation hint. Never [`ScrollBehavior::None`].
    pub behavior: ScrollBehavior,
}

/// Scroll delta that brings `target` fully into `viewport` with the smallest move.
///
/// Both rectangles are in the same (content) space. Each axis is handled
/// independently:
/// - already fully visible: no movement;
/// - starts before the viewport: align the starts;
/// - otherwise: align the ends.
///
/// A target larger than the viewport that starts before it is aligned to its
/// start.
///
/// ```
/// use kurbo::{Rect, Vec2};
/// use understory_menu::scroll::reveal_offset;
///
/// let viewport = Rect::new(0.0, 100.0, 200.0, 300.0);
/// // Below the viewport: scroll down until its bottom edge is visible.
/// let below = Rect::new(10.0, 320.0, 50.0, 340.0);
/// assert_eq!(reveal_offset(viewport, below), Vec2::new(0.0, 40.0));
/// // Already visible: nothing to do.
/// let inside = Rect::new(10.0, 120.0, 50.0, 140.0);
/// assert_eq!(reveal_offset(viewport, inside), Vec2::ZERO);
/// ```
pub fn reveal_offset(viewport: Rect, target: Rect) -> Vec2 {
    Vec2::new(
        nearest_delta(viewport.x0, viewport.x1, target.x0, target.x1),
        nearest_delta(viewport.y0, viewport.y1, target.y0, target.y1),
    )
}

fn nearest_delta(view_start: f64, view_end: f64, item_start: f64, item_end: f64) -> f64 {
    if item_start >= view_start && item_end <= view_end {
        0.0
    } else if item_start < view_start {
        item_start - view_start
    } else {
        item_end - view_end
    }
}
