// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation directions and the host keys that produce them.

use core::fmt;
use core::str::FromStr;

/// Direction of an arrow-key move across the menu surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move toward smaller `y`.
    Up,
    /// Move toward larger `y`.
    Down,
    /// Move toward smaller `x`.
    Left,
    /// Move toward larger `x`.
    Right,
}

impl Direction {
    /// Whether this direction moves along the x axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Map a DOM-style key name (`"ArrowUp"`, ...) to a direction.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key_name(s).ok_or(ParseDirectionError(()))
    }
}

/// Error returned when a key name is not one of the four arrow keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError(());

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of ArrowUp, ArrowDown, ArrowLeft, ArrowRight")
    }
}

impl core::error::Error for ParseDirectionError {}

/// A key press as seen by the menu root.
///
/// Hosts translate their native keyboard events into this type before calling
/// [`Menu::handle_key`](crate::Menu::handle_key). Anything the menu does not
/// react to is carried as [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// One of the four arrow keys.
    Arrow(Direction),
    /// The activation key.
    Enter,
    /// Any other key.
    Other,
}

impl Key {
    /// Map a DOM-style key name to a [`Key`].
    ///
    /// ```
    /// use understory_menu::{Direction, Key};
    ///
    /// assert_eq!(Key::from_name("ArrowLeft"), Key::Arrow(Direction::Left));
    /// assert_eq!(Key::from_name("Enter"), Key::Enter);
    /// assert_eq!(Key::from_name("a"), Key::Other);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match Direction::from_key_name(name) {
            Some(direction) => Self::Arrow(direction),
            None if name == "Enter" => Self::Enter,
            None => Self::Other,
        }
    }
}

impl From<Direction> for Key {
    fn from(direction: Direction) -> Self {
        Self::Arrow(direction)
    }
}

/// What the host should do with a key event after the menu has seen it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The menu handled the key; prevent the default action and stop propagation.
    Consumed,
    /// The menu ignored the key; let it continue to other handlers.
    Ignored,
}

impl KeyOutcome {
    /// Whether the host should prevent the default action and stop propagation.
    #[inline]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arrow_key_names() {
        assert_eq!("ArrowUp".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("ArrowDown".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("ArrowLeft".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("ArrowRight".parse::<Direction>(), Ok(Direction::Right));
        assert!("Up".parse::<Direction>().is_err());
        assert!("arrowup".parse::<Direction>().is_err());
    }
}
