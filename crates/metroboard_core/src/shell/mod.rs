//! Toolkit-independent presentation shell.
//!
//! # Responsibility
//! - Own the record store and the selection controller for the session.
//! - Expose the add, delete and update-board actions.
//! - Keep dropdown entries and field visibility consistent with the store.
//!
//! # Invariants
//! - Every add/delete flushes the full store before returning.
//! - Field widgets are visible iff the store is non-empty.
//! - Renderers observe the shell through read accessors and `subscribe`;
//!   no UI toolkit type crosses this boundary.

pub mod dropdown;
pub mod form_shell;
pub mod visibility;
