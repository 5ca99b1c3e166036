// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live set of navigable items.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::Item;

/// Registration-ordered set of [`Item`]s keyed by value.
///
/// Items enter the registry when the host attaches their element and leave it
/// when the element detaches. Iteration order is registration order, which is
/// also the tie-break order used by the search and wrap-around queries.
///
/// Registering a value that is already present replaces the earlier record and
/// moves it to the end of the order: the most recently registered item wins.
#[derive(Clone, Debug)]
pub struct Registry<V> {
    items: Vec<Item<V>>,
    slots: HashMap<V, usize>,
}

impl<V: Clone + Eq + Hash> Registry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Add an item, returning the record it replaced if its value was already registered.
    pub fn register(&mut self, item: Item<V>) -> Option<Item<V>> {
        let replaced = self.unregister(item.value());
        self.slots.insert(item.value().clone(), self.items.len());
        self.items.push(item);
        replaced
    }

    /// Remove the item with the given value, if present.
    pub fn unregister(&mut self, value: &V) -> Option<Item<V>> {
        let slot = self.slots.remove(value)?;
        let removed = self.items.remove(slot);
        for (i, item) in self.items.iter().enumerate().skip(slot) {
            if let Some(s) = self.slots.get_mut(item.value()) {
                *s = i;
            }
        }
        Some(removed)
    }

    /// All registered items in registration order.
    pub fn all(&self) -> &[Item<V>] {
        &self.items
    }

    /// The item whose value equals `highlighted`, if any.
    pub fn current(&self, highlighted: Option<&V>) -> Option<&Item<V>> {
        highlighted.and_then(|value| self.get(value))
    }

    /// Look up an item by value.
    pub fn get(&self, value: &V) -> Option<&Item<V>> {
        self.position(value).map(|slot| &self.items[slot])
    }

    /// Registration index of the item with the given value.
    pub fn position(&self, value: &V) -> Option<usize> {
        self.slots.get(value).copied()
    }

    /// Whether an item with this value is registered.
    pub fn contains(&self, value: &V) -> bool {
        self.slots.contains_key(value)
    }

    /// The first enabled item in registration order.
    ///
    /// This is the fallback target whenever the menu needs "the first item".
    pub fn first_enabled(&self) -> Option<&Item<V>> {
        self.items.iter().find(|item| !item.is_disabled())
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record a new measurement for an item. Returns `false` if the value is not registered.
    pub fn set_rect(&mut self, value: &V, rect: Option<Rect>) -> bool {
        match self.position(value) {
            Some(slot) => {
                self.items[slot].set_rect(rect);
                true
            }
            None => false,
        }
    }

    /// Update an item's disabled flag. Returns `false` if the value is not registered.
    pub fn set_disabled(&mut self, value: &V, disabled: bool) -> bool {
        match self.position(value) {
            Some(slot) => {
                self.items[slot].set_disabled(disabled);
                true
            }
            None => false,
        }
    }

    /// Re-measure every item with a host-provided closure.
    ///
    /// Hosts that read layout lazily call this at the start of an event turn so
    /// that queries see the current geometry.
    pub fn refresh_with(&mut self, mut measure: impl FnMut(&V) -> Option<Rect>) {
        for item in &mut self.items {
            let rect = measure(item.value());
            item.set_rect(rect);
        }
    }
}

impl<V: Clone + Eq + Hash> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}
