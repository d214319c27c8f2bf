use crate::item::ShoppingItem;
use crate::types::InventoryStatus;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-item state for one shopping trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSession {
    pub checked: bool,
    pub inventory: InventoryStatus,
}

/// Checked/inventory state for the current trip, keyed by item id.
///
/// Items without an entry read as unchecked with unknown inventory. Entries
/// for deleted items are harmless and can be dropped with [`retain_known`].
///
/// [`retain_known`]: SessionState::retain_known
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    entries: HashMap<String, ItemSession>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: &str) -> ItemSession {
        self.entries.get(item_id).copied().unwrap_or_default()
    }

    pub fn is_checked(&self, item_id: &str) -> bool {
        self.get(item_id).checked
    }

    pub fn inventory(&self, item_id: &str) -> InventoryStatus {
        self.get(item_id).inventory
    }

    /// Flip `checked`; returns the new value.
    pub fn toggle_checked(&mut self, item_id: &str) -> bool {
        let entry = self.entries.entry(item_id.to_string()).or_default();
        entry.checked = !entry.checked;
        entry.checked
    }

    pub fn set_inventory(&mut self, item_id: &str, status: InventoryStatus) {
        self.entries.entry(item_id.to_string()).or_default().inventory = status;
    }

    /// Shopping finished: every item back to defaults.
    pub fn reset_all(&mut self) {
        self.entries.clear();
    }

    /// Drop one item's entry, e.g. after the item is deleted.
    pub fn forget(&mut self, item_id: &str) {
        self.entries.remove(item_id);
    }

    pub fn retain_known<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: HashSet<&str> = ids.into_iter().collect();
        self.entries.retain(|id, _| known.contains(id.as_str()));
    }

    /// True when the item belongs on the trip's shopping list: bench members
    /// always, otherwise when checked or marked out of stock.
    pub fn needs_purchase(&self, item: &ShoppingItem) -> bool {
        let s = self.get(&item.id);
        item.is_bench() || s.checked || s.inventory == InventoryStatus::Unavailable
    }

    pub fn needs_purchase_count(&self, items: &[ShoppingItem]) -> usize {
        items.iter().filter(|i| self.needs_purchase(i)).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_items_read_as_defaults() {
        let s = SessionState::new();
        assert_eq!(s.get("missing"), ItemSession::default());
        assert!(!s.is_checked("missing"));
        assert_eq!(s.inventory("missing"), InventoryStatus::Unknown);
    }

    #[test]
    fn toggle_starts_from_unchecked() {
        let mut s = SessionState::new();
        assert!(s.toggle_checked("x"));
        assert!(s.is_checked("x"));
        assert!(!s.toggle_checked("x"));
        assert!(!s.is_checked("x"));
    }

    #[test]
    fn set_inventory_overwrites() {
        let mut s = SessionState::new();
        s.set_inventory("x", InventoryStatus::Unavailable);
        s.set_inventory("x", InventoryStatus::Unavailable);
        assert_eq!(s.inventory("x"), InventoryStatus::Unavailable);
        s.set_inventory("x", InventoryStatus::Available);
        assert_eq!(s.inventory("x"), InventoryStatus::Available);
    }

    #[test]
    fn axes_are_independent() {
        let mut s = SessionState::new();
        s.toggle_checked("x");
        s.set_inventory("x", InventoryStatus::Available);
        assert_eq!(
            s.get("x"),
            ItemSession {
                checked: true,
                inventory: InventoryStatus::Available
            }
        );
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut s = SessionState::new();
        s.toggle_checked("x");
        s.set_inventory("y", InventoryStatus::Unavailable);
        s.reset_all();
        assert_eq!(s.get("x"), ItemSession::default());
        assert_eq!(s.get("y"), ItemSession::default());
        assert!(s.is_empty());
    }

    #[test]
    fn forget_removes_one_entry() {
        let mut s = SessionState::new();
        s.toggle_checked("a");
        s.toggle_checked("b");
        s.forget("a");
        assert!(!s.is_checked("a"));
        assert!(s.is_checked("b"));
    }

    #[test]
    fn retain_known_drops_stale_entries() {
        let mut s = SessionState::new();
        s.toggle_checked("keep");
        s.toggle_checked("gone");
        s.retain_known(["keep"]);
        assert_eq!(s.len(), 1);
        assert!(s.is_checked("keep"));
    }

    #[test]
    fn bench_items_always_need_purchase() {
        let s = SessionState::new();
        let bench = ShoppingItem::new("牛乳,bench", "dairy");
        let plain = ShoppingItem::new("バナナ", "fruits");
        assert!(s.needs_purchase(&bench));
        assert!(!s.needs_purchase(&plain));
        assert_eq!(s.needs_purchase_count(&[bench, plain]), 1);
    }
}
