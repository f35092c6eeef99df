//! JSON file repository.
//!
//! # Responsibility
//! - Persist records as one JSON object keyed by record id.
//! - Emit `store_load` / `store_save` diagnostics with counts and durations.
//!
//! # Invariants
//! - Document shape is `{ "<id>": { "name": ..., "message": ... }, ... }`.
//! - Object key order follows list order; a repeated id keeps its first
//!   position and takes the value of its last occurrence.
//! - Record contents never appear in log output.

use super::{RecordRepository, StoreError, StoreResult};
use crate::model::record::Record;
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Default persistence file name, resolved against the working directory.
pub const DEFAULT_SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Deserialize)]
struct PersistedEntry {
    name: String,
    message: String,
}

/// File-backed repository writing a flat JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> StoreResult<Vec<Record>> {
        let started_at = Instant::now();
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=store status=ok source=missing count=0");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=read_failed error={}",
                    err
                );
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let records = decode_document(&raw).map_err(|err| {
            error!(
                "event=store_load module=store status=error error_code=malformed line={} column={}",
                err.line(),
                err.column()
            );
            StoreError::Malformed {
                path: self.path.clone(),
                source: err,
            }
        })?;

        info!(
            "event=store_load module=store status=ok source=file count={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let started_at = Instant::now();
        let (document, collapsed) = encode_document(records);
        if collapsed > 0 {
            warn!(
                "event=store_save module=store status=collapsed duplicate_ids={}",
                collapsed
            );
        }

        std::fs::write(&self.path, document).map_err(|err| {
            error!(
                "event=store_save module=store status=error error_code=write_failed error={}",
                err
            );
            StoreError::Io {
                path: self.path.clone(),
                source: err,
            }
        })?;

        info!(
            "event=store_save module=store status=ok count={} duration_ms={}",
            records.len() - collapsed,
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

fn decode_document(raw: &[u8]) -> Result<Vec<Record>, serde_json::Error> {
    let document: Map<String, Value> = serde_json::from_slice(raw)?;
    document
        .into_iter()
        .map(|(id, value)| -> Result<Record, serde_json::Error> {
            let entry: PersistedEntry = serde_json::from_value(value)?;
            Ok(Record {
                id,
                name: entry.name,
                message: entry.message,
            })
        })
        .collect()
}

/// Returns the serialized document and the number of records lost to
/// duplicate ids.
fn encode_document(records: &[Record]) -> (String, usize) {
    let mut document = Map::new();
    for record in records {
        document.insert(
            record.id.clone(),
            json!({ "name": record.name, "message": record.message }),
        );
    }
    let collapsed = records.len() - document.len();
    (Value::Object(document).to_string(), collapsed)
}

#[cfg(test)]
mod tests {
    use super::{decode_document, encode_document};
    use crate::model::record::Record;

    #[test]
    fn encode_keeps_list_order() {
        let records = vec![
            Record::new("Z", "Zulu", "last letter"),
            Record::new("A", "Alpha", "first letter"),
        ];
        let (document, collapsed) = encode_document(&records);
        assert_eq!(collapsed, 0);
        assert!(document.find("\"Z\"").unwrap() < document.find("\"A\"").unwrap());
    }

    #[test]
    fn encode_collapses_duplicate_ids_last_value_wins() {
        let records = vec![
            Record::new("A", "first", "1"),
            Record::new("B", "bee", "2"),
            Record::new("A", "second", "3"),
        ];
        let (document, collapsed) = encode_document(&records);
        assert_eq!(collapsed, 1);

        let decoded = decode_document(document.as_bytes()).unwrap();
        assert_eq!(
            decoded,
            vec![Record::new("A", "second", "3"), Record::new("B", "bee", "2")]
        );
    }

    #[test]
    fn decode_empty_object_yields_no_records() {
        assert!(decode_document(b"{}").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_missing_message() {
        assert!(decode_document(br#"{"A": {"name": "Alpha"}}"#).is_err());
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(decode_document(b"{\xff}").is_err());
    }

    #[test]
    fn decode_rejects_non_object_document() {
        assert!(decode_document(b"[1, 2, 3]").is_err());
    }

    #[test]
    fn decode_ignores_unknown_entry_keys() {
        let decoded =
            decode_document(br#"{"A": {"name": "Alpha", "message": "hi", "color": "red"}}"#)
                .unwrap();
        assert_eq!(decoded, vec![Record::new("A", "Alpha", "hi")]);
    }
}
