//! Domain model for board records and the editing form.
//!
//! # Responsibility
//! - Define the record shape shared by storage, selection and shell.
//! - Define the three editable form fields independent of any UI toolkit.
//!
//! # Invariants
//! - A record's user-facing `id` is free text and may repeat.
//! - Session identity is carried by `RecordKey`, never by list position.

pub mod fields;
pub mod record;
