use crate::item::InventoryItem;

/// An item found in a slot, tagged with its position in the store so a later
/// update can target it with [`InventoryStore::replace_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry<'a> {
    pub index: usize,
    pub item: &'a InventoryItem,
}

/// Ordered, in-memory list of every inventory record.
/// Insertion order is the only order; there is no per-item identity beyond position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InventoryItem> {
        self.items.get(index)
    }

    pub fn append(&mut self, item: InventoryItem) {
        tracing::debug!(coordinate = %item.coordinate, index = self.items.len(), "append item");
        self.items.push(item);
    }

    /// Overwrite the item at `index`. Returns `false` (and changes nothing) when
    /// `index` does not refer to an existing item.
    pub fn replace_at(&mut self, index: usize, item: InventoryItem) -> bool {
        let Some(slot) = self.items.get_mut(index) else {
            tracing::debug!(index, len = self.items.len(), "replace_at: index out of range");
            return false;
        };
        tracing::debug!(coordinate = %item.coordinate, index, "replace item");
        *slot = item;
        true
    }

    pub fn items_by_slot(&self, coordinate: &str) -> Vec<SlotEntry<'_>> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.coordinate == coordinate)
            .map(|(index, item)| SlotEntry { index, item })
            .collect()
    }

    /// Discard every existing item and adopt `items` in their given order.
    pub fn replace_all(&mut self, items: Vec<InventoryItem>) {
        tracing::debug!(previous = self.items.len(), next = items.len(), "replace all items");
        self.items = items;
    }

    /// Move every item labelled `old` to `new`. Returns how many items changed.
    pub fn relabel(&mut self, old: &str, new: &str) -> usize {
        if old == new {
            return 0;
        }
        let mut changed = 0usize;
        for item in self.items.iter_mut().filter(|i| i.coordinate == old) {
            item.coordinate = new.to_string();
            changed += 1;
        }
        changed
    }
}
