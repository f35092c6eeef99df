//! Core logic for the Metro Board Manager.
//! Record storage, selection sync and the form shell live here; renderers
//! only read shell state and forward user actions.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod shell;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use controller::selection::{RecordEdited, SelectionController};
pub use controller::suppression::{Suppression, SuppressionGuard};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::fields::{Field, FieldChanged, FormFields};
pub use model::record::{Record, RecordKey};
pub use shell::dropdown::{Dropdown, DropdownItem};
pub use shell::form_shell::{FormShell, ShellEvent, WINDOW_TITLE};
pub use shell::visibility::{FieldVisibility, FormWidget};
pub use store::json_file::{JsonFileRepository, DEFAULT_SETTINGS_FILE_NAME};
pub use store::record_store::RecordStore;
pub use store::{RecordRepository, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
