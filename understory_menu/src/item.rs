// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigable item records.

use kurbo::Rect;

/// One navigable unit of a menu.
///
/// An `Item` pairs a caller-chosen value with the last rectangle the host
/// measured for it. Rectangles are expressed in the coordinate space shared by
/// every item of the same [`Registry`](crate::Registry), typically the menu
/// root's local space or the window surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<V> {
    value: V,
    rect: Option<Rect>,
    disabled: bool,
}

impl<V> Item<V> {
    /// Create an enabled, unmeasured item.
    pub const fn new(value: V) -> Self {
        Self {
            value,
            rect: None,
            disabled: false,
        }
    }

    /// Builder-style setter for the measured rectangle.
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Builder-style setter for the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The value identifying this item.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// The last measured rectangle, or `None` if the host has not measured it yet.
    pub const fn current_rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Whether the item is disabled.
    ///
    /// Disabled items stay registered but are never highlighted by navigation.
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the item can win a directional or wrap-around query right now.
    pub const fn is_candidate(&self) -> bool {
        !self.disabled && self.rect.is_some()
    }

    pub(crate) fn set_rect(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
