// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: headless arrow-key navigation for grids and menus.
//!
//! This crate answers one question for a framework-rendered 2D layout of
//! interactive items: *which item is up, down, left, or right of the highlighted
//! one?* Items are known only by their live bounding rectangles, not by row or
//! column indices, so the same controller drives vertical menus, toolbars,
//! wrapped flows, and ragged grids.
//!
//! It is built from small pieces:
//! - An **item registry** ([`Registry`]) holding the mounted [`Item`]s, their last
//!   measured [`kurbo::Rect`], and their disabled state, in registration order.
//! - A **directional search** ([`search::find_closest`]) that scores candidates on
//!   the requested side by main-axis gap plus twice the cross-axis gap.
//! - A **wrap-around resolver** ([`wrap::find_wrap_target`]) used when a move runs
//!   off the edge and wrapping is enabled.
//! - A **selection-mode tracker** ([`ModeTracker`]) deciding whether pointer hover
//!   may move the highlight.
//! - The **menu controller** ([`Menu`]) that owns the highlighted value, dispatches
//!   keys, raises [`ScrollRequest`]s, and fires select/highlight callbacks.
//!
//! This crate deliberately does **not** lay anything out, render anything, or
//! generate accessibility attributes. Host frameworks are responsible for:
//! - Measuring items and feeding rectangles back via [`ItemHandle::attach`],
//!   [`ItemHandle::measure`], or [`Menu::remeasure`].
//! - Translating native key and pointer events into [`Menu::handle_key`],
//!   [`Menu::pointer_move`], [`ItemHandle::on_hover`], and [`ItemHandle::on_click`].
//! - Honoring [`KeyOutcome::Consumed`] by preventing default handling.
//! - Performing the scroll described by each [`ScrollRequest`]
//!   (see [`scroll::reveal_offset`]).
//!
//! All rectangles of one menu must share a coordinate space.
//!
//! ## Minimal example
//!
//! A 2x2 grid navigated with the arrow keys:
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_menu::{Direction, ItemOptions, Key, Menu, MenuOptions};
//!
//! let mut menu = Menu::new(MenuOptions::default().with_wrap(true));
//!
//! let cells = [("a", 0.0, 0.0), ("b", 20.0, 0.0), ("c", 0.0, 20.0), ("d", 20.0, 20.0)];
//! for (name, x, y) in cells {
//!     let handle = menu.get_item(name, ItemOptions::default());
//!     handle.attach(&mut menu, Some(Rect::new(x, y, x + 10.0, y + 10.0)));
//! }
//!
//! // The first arrow key only highlights the first item.
//! menu.handle_key(Key::Arrow(Direction::Right));
//! assert_eq!(menu.highlighted(), Some(&"a"));
//!
//! menu.handle_key(Key::Arrow(Direction::Down));
//! assert_eq!(menu.highlighted(), Some(&"c"));
//!
//! // Right twice: once to "d", then wrap back to the start of the row.
//! menu.handle_key(Key::Arrow(Direction::Right));
//! menu.handle_key(Key::Arrow(Direction::Right));
//! assert_eq!(menu.highlighted(), Some(&"c"));
//! ```
//!
//! ## Keyboard and pointer
//!
//! Hover only moves the highlight after the pointer has moved over the menu
//! root; any arrow key hands ownership back to the keyboard. Clicks select in
//! either mode.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_menu::{Item, Menu, MenuOptions, SelectionMode};
//!
//! let mut menu = Menu::new(MenuOptions::default());
//! menu.register(Item::new(1).with_rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! menu.register(Item::new(2).with_rect(Rect::new(0.0, 20.0, 10.0, 30.0)));
//!
//! assert!(!menu.hover(&2));
//! menu.pointer_move();
//! assert_eq!(menu.mode(), SelectionMode::Pointer);
//! assert!(menu.hover(&2));
//! assert_eq!(menu.highlighted(), Some(&2));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! Diagnostics are emitted through [`tracing`] at `trace` and `debug` level; the
//! crate never installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod direction;
mod item;
mod menu;
mod mode;
mod options;
mod registry;
pub mod scroll;
pub mod search;
mod util;
pub mod wrap;

#[cfg(test)]
mod fixture;

pub use direction::{Direction, Key, KeyOutcome, ParseDirectionError};
pub use item::Item;
pub use menu::{ItemHandle, ItemOptions, Menu};
pub use mode::{ModeTracker, SelectionMode};
pub use options::MenuOptions;
pub use registry::Registry;
pub use scroll::{ScrollBehavior, ScrollRequest};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{grid_menu, render};

    #[test]
    fn navigation_is_repeatable_from_the_same_snapshot() {
        let rows = ["o o o", "o h x", "o o o"];
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut first = grid_menu(&rows, MenuOptions::default().with_wrap(true));
            let mut second = grid_menu(&rows, MenuOptions::default().with_wrap(true));
            first.navigate(direction);
            second.navigate(direction);
            assert_eq!(render(&first, &rows), render(&second, &rows));
        }
    }

    #[test]
    fn walks_a_ragged_flow_layout() {
        // A wrapped toolbar: the second row is shorter than the first.
        let rows = ["h o o o", "o o"];
        let mut menu = grid_menu(&rows, MenuOptions::default());
        for _ in 0..3 {
            menu.navigate(Direction::Right);
        }
        assert_eq!(render(&menu, &rows), ["o o o h", "o o"]);

        // Down from the last column lands on the nearest cell of the short row.
        menu.navigate(Direction::Down);
        assert_eq!(render(&menu, &rows), ["o o o o", "o h"]);

        // Left stays on the short row.
        menu.navigate(Direction::Left);
        assert_eq!(render(&menu, &rows), ["o o o o", "h o"]);
    }

    #[test]
    fn key_names_route_through_handle_key() {
        let rows = ["h o"];
        let mut menu = grid_menu(&rows, MenuOptions::default());
        let outcome = menu.handle_key(Key::from_name("ArrowRight"));
        assert!(outcome.is_consumed());
        assert_eq!(render(&menu, &rows), ["o h"]);
        assert!(!menu.handle_key(Key::from_name("Tab")).is_consumed());
    }
}
