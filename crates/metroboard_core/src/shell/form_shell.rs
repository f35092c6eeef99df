//! Form shell: the board manager's window logic without a window.
//!
//! # Responsibility
//! - Wire user actions to the store, the selection controller, the dropdown
//!   and the visibility rule.
//! - Notify registered listeners of every observable change.
//!
//! # Invariants
//! - The dropdown highlight and the form's edit target are tracked apart:
//!   `delete` acts on the highlight, field edits write into the edit target.
//! - After `add`, the first entry is highlighted and the form is a blank
//!   draft bound to no record.
//! - After `delete`, the first remaining record is highlighted and shown, or
//!   nothing when the store is empty.
//! - Save failures are returned to the caller after the view has been brought
//!   back in line with the in-memory store.

use super::dropdown::Dropdown;
use super::visibility::{FieldVisibility, FormWidget};
use crate::controller::selection::{RecordEdited, SelectionController};
use crate::model::fields::{Field, FormFields};
use crate::model::record::{Record, RecordKey};
use crate::store::record_store::RecordStore;
use crate::store::{RecordRepository, StoreResult};
use log::{debug, info, warn};

/// Window title shown by renderers.
pub const WINDOW_TITLE: &str = "Metro Board Manager";

/// Observable shell change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    RecordAdded { key: RecordKey, index: usize },
    RecordDeleted { key: RecordKey, index: usize },
    RecordEdited(RecordEdited),
    SelectionChanged { index: Option<usize> },
    HighlightChanged { index: Option<usize> },
    VisibilityChanged(FieldVisibility),
}

type Listener = Box<dyn FnMut(&ShellEvent)>;

/// Session shell owning the store for the process lifetime.
pub struct FormShell<R: RecordRepository> {
    store: RecordStore<R>,
    selection: SelectionController,
    dropdown: Dropdown,
    highlighted: Option<RecordKey>,
    visibility: FieldVisibility,
    listeners: Vec<Listener>,
}

impl<R: RecordRepository> FormShell<R> {
    /// Loads the store and shows the first record, if any.
    ///
    /// # Errors
    /// - Returns the load error for an unreadable or malformed file.
    pub fn open(repo: R) -> StoreResult<Self> {
        let store = RecordStore::open(repo)?;
        let mut shell = Self {
            store,
            selection: SelectionController::new(),
            dropdown: Dropdown::default(),
            highlighted: None,
            visibility: FieldVisibility::Hidden,
            listeners: Vec::new(),
        };
        shell.dropdown.rebuild(&shell.store);
        let first = shell.store.key_at(0);
        shell.highlighted = first;
        shell.selection.select(&mut shell.store, first);
        shell.visibility = FieldVisibility::for_store_len(shell.store.len());

        info!(
            "event=shell_open module=shell status=ok records={} visibility={:?}",
            shell.store.len(),
            shell.visibility
        );
        Ok(shell)
    }

    /// Registers a listener for shell events.
    pub fn subscribe(&mut self, listener: impl FnMut(&ShellEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a record built from the current field contents.
    ///
    /// Empty fields are accepted as empty strings. The record stays in the
    /// session even when saving fails.
    pub fn add(&mut self) -> StoreResult<RecordKey> {
        let record = self.selection.fields().to_record();
        let key = self.store.append(record);
        let saved = self.store.save();

        self.dropdown.rebuild(&self.store);
        let first = self.store.key_at(0);
        self.set_highlight(first);
        self.set_selection(None);
        self.apply_visibility();

        let index = self.store.len() - 1;
        info!(
            "event=record_add module=shell status={} index={} records={}",
            status_label(&saved),
            index,
            self.store.len()
        );
        self.emit(ShellEvent::RecordAdded { key, index });
        saved.map(|()| key)
    }

    /// Deletes the highlighted record immediately.
    ///
    /// Returns `Ok(None)` without touching storage when nothing is
    /// highlighted.
    pub fn delete(&mut self) -> StoreResult<Option<Record>> {
        let Some(index) = self.highlighted_index() else {
            debug!("event=record_delete module=shell status=skipped reason=no_highlight");
            return Ok(None);
        };
        let Some((key, record)) = self.store.remove(index) else {
            return Ok(None);
        };
        let saved = self.store.save();

        self.dropdown.rebuild(&self.store);
        let first = self.store.key_at(0);
        self.set_highlight(first);
        self.set_selection(first);
        self.apply_visibility();

        info!(
            "event=record_delete module=shell status={} index={} records={}",
            status_label(&saved),
            index,
            self.store.len()
        );
        self.emit(ShellEvent::RecordDeleted { key, index });
        saved.map(|()| Some(record))
    }

    /// Placeholder board push. Has no effect.
    pub fn update_board(&mut self) {
        debug!("event=board_update module=shell status=skipped reason=not_implemented");
    }

    /// Highlights the dropdown entry at `index` and shows it in the form.
    ///
    /// Returns `false` and changes nothing for an out-of-range index.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.store.key_at(index) {
            Some(key) => {
                self.set_highlight(Some(key));
                self.set_selection(Some(key));
                true
            }
            None => false,
        }
    }

    /// Applies user-typed text to one field.
    ///
    /// With a selection, the edit is written into that record, persisted, and
    /// its dropdown label refreshed.
    pub fn edit_field(
        &mut self,
        field: Field,
        text: impl Into<String>,
    ) -> StoreResult<Option<RecordEdited>> {
        match self.selection.user_edit(&mut self.store, field, text) {
            Ok(Some(edited)) => {
                if !self
                    .dropdown
                    .set_item_label(edited.index, edited.key, edited.label.clone())
                {
                    self.dropdown.rebuild(&self.store);
                }
                self.emit(ShellEvent::RecordEdited(edited.clone()));
                Ok(Some(edited))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                warn!(
                    "event=record_edit module=shell status=error field={:?} error_code=save_failed",
                    field
                );
                self.dropdown.rebuild(&self.store);
                Err(err)
            }
        }
    }

    /// Re-evaluates field visibility from store emptiness.
    ///
    /// Returns `true` only when the visibility state actually changed.
    pub fn apply_visibility(&mut self) -> bool {
        let next = FieldVisibility::for_store_len(self.store.len());
        if next == self.visibility {
            return false;
        }
        self.visibility = next;
        debug!(
            "event=visibility_change module=shell status=ok visibility={:?}",
            next
        );
        self.emit(ShellEvent::VisibilityChanged(next));
        true
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.visibility
    }

    pub fn is_widget_visible(&self, _widget: FormWidget) -> bool {
        self.visibility.is_shown()
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn fields(&self) -> &FormFields {
        self.selection.fields()
    }

    /// Position of the highlighted dropdown entry.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted.and_then(|key| self.store.position(key))
    }

    /// Position of the record bound to the form for write-back.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.current_index(&self.store)
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    fn set_highlight(&mut self, key: Option<RecordKey>) {
        self.highlighted = key;
        let index = self.highlighted_index();
        self.emit(ShellEvent::HighlightChanged { index });
    }

    fn set_selection(&mut self, key: Option<RecordKey>) {
        self.selection.select(&mut self.store, key);
        let index = self.selected_index();
        self.emit(ShellEvent::SelectionChanged { index });
    }

    fn emit(&mut self, event: ShellEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

fn status_label<T>(result: &StoreResult<T>) -> &'static str {
    if result.is_ok() {
        "ok"
    } else {
        "save_failed"
    }
}
