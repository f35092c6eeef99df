//! Selection control between the record store and the editing form.
//!
//! # Responsibility
//! - Track the current record by stable key.
//! - Copy records into the form without echoing the copy back into storage.
//!
//! # Invariants
//! - Field notifications raised while suppression is active never mutate
//!   the store.
//! - An empty store implies no selection and blank fields.

pub mod selection;
pub mod suppression;
