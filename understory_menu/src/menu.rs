// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu controller and per-item handles.

use alloc::boxed::Box;
use core::fmt;
use core::hash::Hash;

use kurbo::Rect;

use crate::search::find_closest;
use crate::wrap::find_wrap_target;
use crate::{
    Direction, Item, Key, KeyOutcome, MenuOptions, ModeTracker, Registry, ScrollBehavior,
    ScrollRequest, SelectionMode,
};

type SelectFn<V> = Box<dyn FnMut(&V)>;
type HighlightFn<V> = Box<dyn FnMut(Option<&V>)>;
type ScrollFn<V> = Box<dyn FnMut(ScrollRequest<V>)>;

/// Headless controller for a grid or menu of highlightable items.
///
/// ## Usage
///
/// - Create with [`Menu::new`] and install callbacks with
///   [`Menu::set_on_select`], [`Menu::set_on_highlight_change`], and
///   [`Menu::set_on_scroll_request`].
/// - For each rendered item, call [`Menu::get_item`] and wire the returned
///   [`ItemHandle`] to the element: [`ItemHandle::attach`] on mount,
///   [`ItemHandle::measure`] when layout changes, [`ItemHandle::detach`] on
///   unmount, [`ItemHandle::on_hover`] and [`ItemHandle::on_click`] from
///   pointer events.
/// - Route key presses on the root (or an embedded input) to
///   [`Menu::handle_key`] and pointer movement over the root to
///   [`Menu::pointer_move`].
///
/// The menu owns the highlighted value and the [`SelectionMode`]. The
/// highlighted value, when present, always names a registered, enabled item.
///
/// Callbacks run synchronously inside the call that committed the change.
/// They receive values, not the menu, and cannot re-enter it.
pub struct Menu<V> {
    registry: Registry<V>,
    options: MenuOptions,
    highlighted: Option<V>,
    mode: ModeTracker,
    on_select: Option<SelectFn<V>>,
    on_highlight_change: Option<HighlightFn<V>>,
    on_scroll_request: Option<ScrollFn<V>>,
}

impl<V> fmt::Debug for Menu<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("options", &self.options)
            .field("mode", &self.mode)
            .field("highlighted", &self.highlighted.is_some())
            .finish_non_exhaustive()
    }
}

impl<V: Clone + Eq + Hash> Menu<V> {
    /// Create an empty menu with nothing highlighted, in keyboard mode.
    pub fn new(options: MenuOptions) -> Self {
        Self {
            registry: Registry::new(),
            options,
            highlighted: None,
            mode: ModeTracker::new(),
            on_select: None,
            on_highlight_change: None,
            on_scroll_request: None,
        }
    }

    /// Install the callback fired when an item is selected (click or Enter).
    pub fn set_on_select(&mut self, f: impl FnMut(&V) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    /// Install the callback fired whenever the highlighted value changes.
    pub fn set_on_highlight_change(&mut self, f: impl FnMut(Option<&V>) + 'static) {
        self.on_highlight_change = Some(Box::new(f));
    }

    /// Install the callback receiving scroll-into-view requests.
    ///
    /// It is never called when [`MenuOptions::scroll_behavior`] is [`ScrollBehavior::None`].
    pub fn set_on_scroll_request(&mut self, f: impl FnMut(ScrollRequest<V>) + 'static) {
        self.on_scroll_request = Some(Box::new(f));
    }

    /// The options this menu was created with.
    pub const fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// The registered items.
    pub const fn registry(&self) -> &Registry<V> {
        &self.registry
    }

    /// Whether keyboard or pointer currently owns the highlight.
    pub const fn mode(&self) -> SelectionMode {
        self.mode.mode()
    }

    /// The highlighted value, if any.
    pub const fn highlighted(&self) -> Option<&V> {
        self.highlighted.as_ref()
    }

    /// The highlighted item, if any.
    pub fn current(&self) -> Option<&Item<V>> {
        self.registry.current(self.highlighted.as_ref())
    }

    /// Set the highlighted value directly, bypassing directional search.
    ///
    /// Fires the highlight-change callback if the value changed. Values that
    /// are not registered or are disabled are rejected and leave the highlight
    /// untouched; the return value reports whether the write was accepted.
    pub fn set_highlighted(&mut self, value: Option<V>) -> bool {
        if let Some(v) = &value {
            if !self.registry.get(v).is_some_and(|item| !item.is_disabled()) {
                return false;
            }
        }
        self.commit(value);
        true
    }

    /// Create a handle for an item with this value.
    ///
    /// The handle does not register anything by itself; the item joins the menu
    /// when [`ItemHandle::attach`] is called. If the value is already registered,
    /// its disabled state is synchronized with `options`.
    pub fn get_item(&mut self, value: V, options: ItemOptions) -> ItemHandle<V> {
        if self.registry.contains(&value) {
            self.set_disabled(&value, options.disabled);
        }
        ItemHandle {
            value,
            disabled: options.disabled,
        }
    }

    /// Add an item to the menu.
    ///
    /// Registering a value that is already present replaces it (see [`Registry`]).
    /// Registration never highlights anything by itself.
    pub fn register(&mut self, item: Item<V>) {
        let disabled = item.is_disabled();
        let value = item.value().clone();
        self.registry.register(item);
        if disabled && self.highlighted.as_ref() == Some(&value) {
            self.reassign_highlight();
        }
    }

    /// Remove an item from the menu.
    ///
    /// If it was highlighted, the highlight moves to the first enabled item that
    /// remains, or clears if there is none.
    pub fn unregister(&mut self, value: &V) -> Option<Item<V>> {
        let removed = self.registry.unregister(value)?;
        if self.highlighted.as_ref() == Some(value) {
            tracing::debug!("highlighted item unmounted");
            self.reassign_highlight();
        }
        Some(removed)
    }

    /// Record a new rectangle for an item, or `None` if it cannot be measured.
    ///
    /// Returns `false` if the value is not registered.
    pub fn measure(&mut self, value: &V, rect: Option<Rect>) -> bool {
        self.registry.set_rect(value, rect)
    }

    /// Re-measure every registered item with a host-provided closure.
    pub fn remeasure(&mut self, measure: impl FnMut(&V) -> Option<Rect>) {
        self.registry.refresh_with(measure);
    }

    /// Enable or disable a registered item.
    ///
    /// Disabling the highlighted item moves the highlight as if it had unmounted.
    /// Returns `false` if the value is not registered.
    pub fn set_disabled(&mut self, value: &V, disabled: bool) -> bool {
        if !self.registry.set_disabled(value, disabled) {
            return false;
        }
        if disabled && self.highlighted.as_ref() == Some(value) {
            self.reassign_highlight();
        }
        true
    }

    /// Handle a key press on the menu root.
    ///
    /// Arrow keys are always consumed, even when they do not move the highlight.
    /// Enter selects the highlighted item and is consumed only if something is
    /// highlighted. Other keys are ignored.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Arrow(direction) => {
                self.navigate(direction);
                KeyOutcome::Consumed
            }
            Key::Enter => match self.highlighted.clone() {
                Some(value) => {
                    self.select(&value);
                    KeyOutcome::Consumed
                }
                None => KeyOutcome::Ignored,
            },
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Move the highlight one step in `direction`.
    ///
    /// Switches to keyboard mode. With nothing highlighted, highlights the first
    /// enabled item without searching. Otherwise searches in `direction`, falls
    /// back to wrap-around when enabled, and requests a scroll to the new item.
    /// Returns `true` if the highlight moved.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.mode.on_arrow_key();

        let Some(current) = self.current() else {
            let first = self.registry.first_enabled().map(|item| item.value().clone());
            return match first {
                Some(value) => self.commit(Some(value)),
                None => false,
            };
        };

        let items = self.registry.all();
        let cross_axis = self.options.cross_axis;
        let target = find_closest(items, current, direction, cross_axis).or_else(|| {
            if self.options.wrap {
                find_wrap_target(items, current, direction, cross_axis)
            } else {
                None
            }
        });
        let Some(target) = target else {
            return false;
        };

        let value = target.value().clone();
        let rect = target.current_rect();
        let moved = self.commit(Some(value.clone()));
        if let Some(rect) = rect {
            self.request_scroll(value, rect);
        }
        moved
    }

    /// Record pointer movement over the menu root, switching to pointer mode.
    pub fn pointer_move(&mut self) {
        self.mode.on_pointer_move();
    }

    /// Handle the pointer hovering an item.
    ///
    /// Only moves the highlight in pointer mode, and only onto enabled items.
    /// Returns `true` if the highlight moved.
    pub fn hover(&mut self, value: &V) -> bool {
        if !self.mode.hover_allowed() || !self.is_enabled(value) {
            return false;
        }
        self.commit(Some(value.clone()))
    }

    /// Handle a click on an item: highlight it and fire the select callback.
    ///
    /// Works in either mode. Clicks on disabled or unregistered items are
    /// ignored; the return value reports whether the click selected anything.
    pub fn click(&mut self, value: &V) -> bool {
        if !self.is_enabled(value) {
            return false;
        }
        self.commit(Some(value.clone()));
        self.select(value);
        true
    }

    fn is_enabled(&self, value: &V) -> bool {
        self.registry.get(value).is_some_and(|item| !item.is_disabled())
    }

    fn select(&mut self, value: &V) {
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(value);
        }
    }

    fn reassign_highlight(&mut self) {
        let first = self.registry.first_enabled().map(|item| item.value().clone());
        self.commit(first);
    }

    /// Store a new highlighted value and notify if it changed.
    fn commit(&mut self, value: Option<V>) -> bool {
        if self.highlighted == value {
            return false;
        }
        self.highlighted = value;
        tracing::debug!(
            position = ?self.highlighted.as_ref().and_then(|v| self.registry.position(v)),
            "highlight changed"
        );
        if let Some(on_change) = self.on_highlight_change.as_mut() {
            on_change(self.highlighted.as_ref());
        }
        true
    }

    fn request_scroll(&mut self, value: V, rect: Rect) {
        let behavior = self.options.scroll_behavior;
        if behavior == ScrollBehavior::None {
            return;
        }
        if let Some(on_scroll) = self.on_scroll_request.as_mut() {
            on_scroll(ScrollRequest {
                value,
                rect,
                behavior,
            });
        }
    }
}

/// Per-item options passed to [`Menu::get_item`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemOptions {
    /// Exclude the item from navigation, hover, and clicks.
    pub disabled: bool,
}

/// Binding between one rendered element and its menu item.
///
/// Handles are cheap values; the host keeps one per rendered element and calls
/// into it from the element's lifecycle and pointer events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemHandle<V> {
    value: V,
    disabled: bool,
}

impl<V: Clone + Eq + Hash> ItemHandle<V> {
    /// The value this handle navigates to.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Register the item when its element mounts, with its first measurement if known.
    pub fn attach(&self, menu: &mut Menu<V>, rect: Option<Rect>) {
        let mut item = Item::new(self.value.clone()).with_disabled(self.disabled);
        if let Some(rect) = rect {
            item = item.with_rect(rect);
        }
        menu.register(item);
    }

    /// Record a new measurement after the element's layout changed.
    pub fn measure(&self, menu: &mut Menu<V>, rect: Option<Rect>) -> bool {
        menu.measure(&self.value, rect)
    }

    /// Deregister the item when its element unmounts.
    pub fn detach(&self, menu: &mut Menu<V>) {
        menu.unregister(&self.value);
    }

    /// Forward a pointer-enter/hover event from the element.
    pub fn on_hover(&self, menu: &mut Menu<V>) -> bool {
        menu.hover(&self.value)
    }

    /// Forward a click from the element.
    pub fn on_click(&self, menu: &mut Menu<V>) -> bool {
        menu.click(&self.value)
    }

    /// Whether this item is the highlighted one.
    pub fn is_highlighted(&self, menu: &Menu<V>) -> bool {
        menu.highlighted() == Some(&self.value)
    }

    /// The item's last measured rectangle, if it is registered and measured.
    pub fn current_rect(&self, menu: &Menu<V>) -> Option<Rect> {
        menu.registry().get(&self.value).and_then(Item::current_rect)
    }
}
