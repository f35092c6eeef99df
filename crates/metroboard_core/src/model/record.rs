//! Board record model.
//!
//! # Responsibility
//! - Define the `(id, name, message)` record managed by the user.
//! - Provide the display label used by the dropdown.
//!
//! # Invariants
//! - `id` is not validated; empty strings and duplicates are allowed.
//! - `RecordKey` is generated per session and never persisted.

use crate::model::fields::Field;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Session-local stable handle for one record in the store.
///
/// Selection is keyed by this value so that list mutations cannot leave a
/// stale positional index pointing at the wrong record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey(Uuid);

impl RecordKey {
    /// Generates a fresh key.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordKey {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-managed board entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// User-supplied identifier. Used as the mapping key when persisted.
    pub id: String,
    pub name: String,
    pub message: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the value backing one form field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Message => &self.message,
        }
    }

    /// Dropdown label, `"{name} (ID: {id})"`.
    pub fn label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordKey};
    use crate::model::fields::Field;

    #[test]
    fn label_shows_name_then_id() {
        let record = Record::new("A", "Alpha", "hi");
        assert_eq!(record.label(), "Alpha (ID: A)");
        assert_eq!(record.to_string(), "Alpha (ID: A)");
    }

    #[test]
    fn label_keeps_empty_fields() {
        assert_eq!(Record::default().label(), " (ID: )");
    }

    #[test]
    fn field_maps_to_matching_value() {
        let record = Record::new("A", "Alpha", "hi");
        assert_eq!(record.field(Field::Id), "A");
        assert_eq!(record.field(Field::Name), "Alpha");
        assert_eq!(record.field(Field::Message), "hi");
    }

    #[test]
    fn keys_are_unique() {
        assert_ne!(RecordKey::new(), RecordKey::new());
    }
}
