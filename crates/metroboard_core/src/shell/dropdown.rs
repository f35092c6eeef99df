//! Dropdown display model.

use crate::model::record::RecordKey;
use crate::store::record_store::RecordStore;
use crate::store::RecordRepository;

/// One selectable dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub key: RecordKey,
    pub label: String,
}

/// Labels shown by the record selector, in store order.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    items: Vec<DropdownItem>,
}

impl Dropdown {
    /// Rebuilds every entry from the store.
    pub fn rebuild<R: RecordRepository>(&mut self, store: &RecordStore<R>) {
        self.items = store
            .iter()
            .map(|(key, record)| DropdownItem {
                key,
                label: record.label(),
            })
            .collect();
    }

    /// Updates one entry's label in place.
    ///
    /// Returns `false` when `index` does not hold `key`.
    pub fn set_item_label(&mut self, index: usize, key: RecordKey, label: String) -> bool {
        match self.items.get_mut(index) {
            Some(item) if item.key == key => {
                item.label = label;
                true
            }
            _ => false,
        }
    }

    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
