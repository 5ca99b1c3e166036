// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation over an emoji-picker style grid.
//!
//! This example shows how a host wires `understory_menu` into its event loop:
//! - item handles attached with measured rectangles,
//! - a disabled cell that navigation skips,
//! - wrap-around at the grid edges,
//! - scroll requests resolved against a small viewport with `reveal_offset`,
//! - hover gated on pointer movement.
//!
//! Run:
//! - `cargo run -p understory_menu_demos --example menu_grid`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Vec2};
use understory_menu::scroll::reveal_offset;
use understory_menu::{
    Direction, ItemHandle, ItemOptions, Key, Menu, MenuOptions, ScrollBehavior,
};

const COLS: usize = 4;
const ROWS: usize = 5;
const CELL: f64 = 32.0;
const GAP: f64 = 8.0;

fn cell_rect(index: usize) -> Rect {
    let col = (index % COLS) as f64;
    let row = (index / COLS) as f64;
    let x = col * (CELL + GAP);
    let y = row * (CELL + GAP);
    Rect::new(x, y, x + CELL, y + CELL)
}

fn main() {
    let options = MenuOptions::default()
        .with_wrap(true)
        .with_scroll_behavior(ScrollBehavior::Instant);
    let mut menu: Menu<usize> = Menu::new(options);

    // A viewport showing three rows; the host scrolls it in response to requests.
    let viewport = Rc::new(RefCell::new(Rect::new(0.0, 0.0, 160.0, 112.0)));
    let scroll_view = Rc::clone(&viewport);
    menu.set_on_scroll_request(move |request| {
        let delta: Vec2 = reveal_offset(*scroll_view.borrow(), request.rect);
        if delta != Vec2::ZERO {
            let moved = *scroll_view.borrow() + delta;
            println!("  scroll {:?} by {delta:?} to reveal cell {}", request.behavior, request.value);
            *scroll_view.borrow_mut() = moved;
        }
    });
    menu.set_on_highlight_change(|value| println!("  highlight -> {value:?}"));
    menu.set_on_select(|value| println!("  selected cell {value}"));

    // Mount every cell; cell 5 is disabled.
    let handles: Vec<ItemHandle<usize>> = (0..COLS * ROWS)
        .map(|i| {
            let handle = menu.get_item(i, ItemOptions { disabled: i == 5 });
            handle.attach(&mut menu, Some(cell_rect(i)));
            handle
        })
        .collect();

    for name in [
        "ArrowDown",
        "ArrowRight",
        "ArrowDown",
        "ArrowDown",
        "ArrowDown",
        "ArrowDown",
        "ArrowDown",
        "ArrowLeft",
        "Enter",
    ] {
        println!("{name}:");
        let outcome = menu.handle_key(Key::from_name(name));
        println!("  consumed: {}", outcome.is_consumed());
    }

    println!("hover cell 10 before the pointer moves:");
    println!("  moved: {}", handles[10].on_hover(&mut menu));
    menu.pointer_move();
    println!("hover cell 10 after the pointer moves:");
    println!("  moved: {}", handles[10].on_hover(&mut menu));

    println!("unmount the highlighted cell:");
    handles[10].detach(&mut menu);

    println!("arrow up from {:?}:", menu.highlighted());
    menu.navigate(Direction::Up);
}
