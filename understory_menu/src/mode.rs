// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard vs. pointer ownership of the highlight.
//!
//! A menu can be driven by arrow keys or by hovering the pointer.
//! [`ModeTracker`] records which of the two last showed intent:
//!
//! - any arrow key handled by the menu switches to [`SelectionMode::Keyboard`];
//! - any pointer movement over the menu root switches to [`SelectionMode::Pointer`];
//! - hover only moves the highlight in pointer mode.
//!
//! Hosts must not report scroll-induced hover changes as pointer movement;
//! only real pointer motion flips the mode.
//!
//! ```
//! use understory_menu::{ModeTracker, SelectionMode};
//!
//! let mut mode = ModeTracker::new();
//! assert_eq!(mode.mode(), SelectionMode::Keyboard);
//! assert!(!mode.hover_allowed());
//!
//! mode.on_pointer_move();
//! assert!(mode.hover_allowed());
//!
//! mode.on_arrow_key();
//! assert!(!mode.hover_allowed());
//! ```

/// Which input currently owns the highlight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Arrow keys own the highlight; hover is ignored.
    #[default]
    Keyboard,
    /// The pointer owns the highlight; hovering an item highlights it.
    Pointer,
}

/// Two-state machine deciding whether hover may change the highlight.
#[derive(Clone, Debug, Default)]
pub struct ModeTracker {
    mode: SelectionMode,
}

impl ModeTracker {
    /// Create a tracker in [`SelectionMode::Keyboard`].
    pub const fn new() -> Self {
        Self {
            mode: SelectionMode::Keyboard,
        }
    }

    /// The current mode.
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Record a handled arrow key. Returns `true` if the mode changed.
    pub fn on_arrow_key(&mut self) -> bool {
        self.transition(SelectionMode::Keyboard)
    }

    /// Record pointer movement over the menu root. Returns `true` if the mode changed.
    pub fn on_pointer_move(&mut self) -> bool {
        self.transition(SelectionMode::Pointer)
    }

    /// Whether hovering an item should move the highlight.
    pub const fn hover_allowed(&self) -> bool {
        matches!(self.mode, SelectionMode::Pointer)
    }

    fn transition(&mut self, to: SelectionMode) -> bool {
        if self.mode == to {
            return false;
        }
        tracing::trace!(from = ?self.mode, ?to, "selection mode");
        self.mode = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_keyboard_mode() {
        let tracker = ModeTracker::new();
        assert_eq!(tracker.mode(), SelectionMode::Keyboard);
        assert!(!tracker.hover_allowed());
    }

    #[test]
    fn transitions_report_changes_once() {
        let mut tracker = ModeTracker::new();
        assert!(!tracker.on_arrow_key());
        assert!(tracker.on_pointer_move());
        assert!(!tracker.on_pointer_move());
        assert_eq!(tracker.mode(), SelectionMode::Pointer);
        assert!(tracker.on_arrow_key());
        assert_eq!(tracker.mode(), SelectionMode::Keyboard);
    }
}
