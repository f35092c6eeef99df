//! Selection controller.
//!
//! # Responsibility
//! - Hold the current selection and the three form fields.
//! - Route user edits back into the selected record and persist them.
//! - Report each field-driven record edit to the caller as `RecordEdited`.
//!
//! # Invariants
//! - `select` runs every field copy inside a suppression scope.
//! - `on_field_changed` is a no-op while suppressed or with no selection.
//! - The current key always refers to a record present in the store, or is
//!   `None`.

use super::suppression::Suppression;
use crate::model::fields::{Field, FieldChanged, FormFields};
use crate::model::record::{Record, RecordKey};
use crate::store::record_store::RecordStore;
use crate::store::{RecordRepository, StoreResult};
use log::{debug, trace};

/// Notification emitted after a user edit was written into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEdited {
    pub key: RecordKey,
    /// Position of the edited record at the time of the edit.
    pub index: usize,
    pub field: Field,
    /// Fresh dropdown label for the edited record.
    pub label: String,
}

/// Keeps the editing form in sync with exactly one current record.
#[derive(Debug, Default)]
pub struct SelectionController {
    current: Option<RecordKey>,
    fields: FormFields,
    suppression: Suppression,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<RecordKey> {
        self.current
    }

    /// Position of the current record in `store`, if any.
    pub fn current_index<R: RecordRepository>(&self, store: &RecordStore<R>) -> Option<usize> {
        self.current.and_then(|key| store.position(key))
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppression.is_active()
    }

    /// Makes `key` current and copies its record into the form.
    ///
    /// Unknown keys and `None` clear the selection and blank the form.
    pub fn select<R: RecordRepository>(
        &mut self,
        store: &mut RecordStore<R>,
        key: Option<RecordKey>,
    ) {
        let key = key.filter(|candidate| store.position(*candidate).is_some());
        self.current = key;
        let source = key
            .and_then(|key| store.get(key))
            .cloned()
            .unwrap_or_default();
        debug!(
            "event=selection_change module=controller status=ok index={}",
            format_index(self.current_index(store))
        );

        let _guard = self.suppression.scope();
        for field in Field::ALL {
            if let Some(change) = self.fields.set_text(field, source.field(field)) {
                // The copy still notifies; the handler must drop it.
                let outcome = self.on_field_changed(store, change);
                debug_assert!(matches!(outcome, Ok(None)));
            }
        }
    }

    /// Selects the record at `index`; `None` or out-of-range clears.
    pub fn select_index<R: RecordRepository>(
        &mut self,
        store: &mut RecordStore<R>,
        index: Option<usize>,
    ) {
        let key = index.and_then(|index| store.key_at(index));
        self.select(store, key);
    }

    /// Applies text typed by the user into one field.
    ///
    /// # Errors
    /// - Returns the store error when persisting the edited record fails. The
    ///   in-memory record keeps the edit.
    pub fn user_edit<R: RecordRepository>(
        &mut self,
        store: &mut RecordStore<R>,
        field: Field,
        text: impl Into<String>,
    ) -> StoreResult<Option<RecordEdited>> {
        match self.fields.set_text(field, text) {
            Some(change) => self.on_field_changed(store, change),
            None => Ok(None),
        }
    }

    /// Handles one field-change notification.
    ///
    /// With an active selection and no suppression, writes the three field
    /// values into the current record and persists the whole store.
    pub fn on_field_changed<R: RecordRepository>(
        &self,
        store: &mut RecordStore<R>,
        change: FieldChanged,
    ) -> StoreResult<Option<RecordEdited>> {
        if self.suppression.is_active() {
            trace!(
                "event=field_change module=controller status=suppressed field={:?}",
                change.field
            );
            return Ok(None);
        }
        let Some(key) = self.current else {
            return Ok(None);
        };

        let edited: Record = self.fields.to_record();
        let label = edited.label();
        let Some(index) = store.replace(key, edited) else {
            return Ok(None);
        };
        store.save()?;

        debug!(
            "event=record_edit module=controller status=ok index={} field={:?}",
            index, change.field
        );
        Ok(Some(RecordEdited {
            key,
            index,
            field: change.field,
            label,
        }))
    }
}

fn format_index(index: Option<usize>) -> String {
    index.map_or_else(|| "none".to_string(), |index| index.to_string())
}
