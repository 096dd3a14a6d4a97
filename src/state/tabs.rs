//! Tab/panel selection over a fetched list.
//!
//! Exactly one tab is active at a time; the panel renders the item at the
//! selected index. Shared by the experience and project panels.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabList<T> {
    items: Vec<T>,
    selected: usize,
}

impl<T> Default for TabList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), selected: 0 }
    }
}

impl<T> TabList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Make `index` the sole active tab. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.selected && index < self.items.len()
    }

    /// Value for a tab's `aria-selected` attribute.
    pub fn aria_selected(&self, index: usize) -> &'static str {
        if self.is_active(index) { "true" } else { "false" }
    }
}
