// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character-grid fixtures for menu tests.
//!
//! Each row is a string of space-separated cells: `o` is an enabled item, `h`
//! the highlighted item, and `x` a disabled item. Cells are 10x10 on a 20-unit
//! stride, so neighbors are 10 units apart on both axes.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::{Item, Menu, MenuOptions};

/// `(row, column)` of a fixture cell.
pub(crate) type Pos = (usize, usize);

const CELL: f64 = 10.0;
const STRIDE: f64 = 20.0;

fn cell_rect((row, col): Pos) -> Rect {
    let x = col as f64 * STRIDE;
    let y = row as f64 * STRIDE;
    Rect::new(x, y, x + CELL, y + CELL)
}

fn cells(rows: &[&str]) -> impl Iterator<Item = (Pos, char)> {
    rows.iter().enumerate().flat_map(|(row, line)| {
        line.split_whitespace()
            .enumerate()
            .filter_map(move |(col, cell)| cell.chars().next().map(|c| ((row, col), c)))
    })
}

/// Build a menu with every cell registered in row-major order.
pub(crate) fn grid_menu(rows: &[&str], options: MenuOptions) -> Menu<Pos> {
    let mut menu = Menu::new(options);
    let mut highlighted = None;
    for (pos, c) in cells(rows) {
        menu.register(Item::new(pos).with_rect(cell_rect(pos)).with_disabled(c == 'x'));
        if c == 'h' {
            highlighted = Some(pos);
        }
    }
    assert!(
        menu.set_highlighted(highlighted),
        "fixture highlight must be enabled"
    );
    menu
}

/// Render the menu back into the shape of `rows`.
pub(crate) fn render(menu: &Menu<Pos>, rows: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = rows.iter().map(|_| String::new()).collect();
    for ((row, col), _) in cells(rows) {
        let pos = (row, col);
        let c = if menu.highlighted() == Some(&pos) {
            'h'
        } else if menu.registry().get(&pos).is_some_and(Item::is_disabled) {
            'x'
        } else {
            'o'
        };
        if col > 0 {
            out[row].push(' ');
        }
        out[row].push(c);
    }
    out
}
