//! Record persistence contracts and the in-memory record store.
//!
//! # Responsibility
//! - Define the repository contract used to load and flush the full list.
//! - Keep file format details out of selection and shell logic.
//!
//! # Invariants
//! - Every save writes the complete list; there is no partial persistence.
//! - A missing persistence file loads as an empty list, not an error.
//! - A malformed persistence file is reported, never masked.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_file;
pub mod record_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for record load/save operations.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the persistence file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The persistence file exists but is not a valid record document.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "malformed record file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

/// Repository interface for whole-list record persistence.
pub trait RecordRepository {
    /// Loads all records in persisted order.
    fn load(&self) -> StoreResult<Vec<Record>>;
    /// Replaces the persisted list with `records`.
    fn save(&self, records: &[Record]) -> StoreResult<()>;
}
