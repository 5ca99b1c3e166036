// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu configuration.

use crate::ScrollBehavior;

/// Configuration for a [`Menu`](crate::Menu).
///
/// Options are fixed for the lifetime of a menu; create a new menu to change them.
///
/// ```
/// use understory_menu::{MenuOptions, ScrollBehavior};
///
/// let options = MenuOptions::default()
///     .with_wrap(true)
///     .with_scroll_behavior(ScrollBehavior::Instant);
/// assert!(options.wrap);
/// assert!(options.cross_axis);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuOptions {
    /// Jump to the opposite edge when a move finds no candidate.
    pub wrap: bool,
    /// How scroll-into-view requests are animated, or whether they are raised at all.
    pub scroll_behavior: ScrollBehavior,
    /// Whether a move may land on an item that is off the current row (left/right)
    /// or column (up/down).
    ///
    /// When `false`, moves and wrap-around only consider items that overlap the
    /// current item on the cross axis.
    pub cross_axis: bool,
    /// Advisory maximum horizontal distance for a move.
    ///
    /// Accepted for compatibility with hosts that configure it; scoring does not
    /// consult it.
    pub max_distance_x: Option<f64>,
    /// Advisory maximum vertical distance for a move.
    ///
    /// Accepted for compatibility with hosts that configure it; scoring does not
    /// consult it.
    pub max_distance_y: Option<f64>,
}

impl MenuOptions {
    /// Builder-style setter for [`MenuOptions::wrap`].
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Builder-style setter for [`MenuOptions::scroll_behavior`].
    #[must_use]
    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    /// Builder-style setter for [`MenuOptions::cross_axis`].
    #[must_use]
    pub fn with_cross_axis(mut self, cross_axis: bool) -> Self {
        self.cross_axis = cross_axis;
        self
    }

    /// Builder-style setter for the advisory distance limits.
    #[must_use]
    pub fn with_max_distance(mut self, x: Option<f64>, y: Option<f64>) -> Self {
        self.max_distance_x = x;
        self.max_distance_y = y;
        self
    }
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            wrap: false,
            scroll_behavior: ScrollBehavior::Smooth,
            cross_axis: true,
            max_distance_x: None,
            max_distance_y: None,
        }
    }
}
