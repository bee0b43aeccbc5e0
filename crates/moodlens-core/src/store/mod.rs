//! CSV-backed record store.
//!
//! One table, five fixed columns, append-only. Each append is a full
//! read-modify-write of the backing file. There is no locking: two
//! simultaneous writers race (last-writer-wins at best), which is acceptable
//! for the single-user demo scope.

use crate::error::PipelineError;
use crate::types::SentimentRecord;
use std::path::{Path, PathBuf};

/// Column header of the backing CSV file.
pub const HEADERS: [&str; 5] = [
    "image_caption",
    "user_text",
    "combined_input",
    "label",
    "score",
];

/// Append-only record table over a single CSV file.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the table with the fixed schema if the
    /// file is missing or empty.
    pub fn append(&self, record: &SentimentRecord) -> Result<(), PipelineError> {
        let mut records = self.load_all()?;
        records.push(record.clone());
        self.write_all(&records)
    }

    /// Load every stored record in insertion order.
    ///
    /// A missing, empty, or unparseable file reads as an empty table, never
    /// as a fatal error.
    pub fn load_all(&self) -> Result<Vec<SentimentRecord>, PipelineError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::warn!(
                    "Unreadable record file {}: {e} — treating as empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::new();
        for row in reader.deserialize() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping corrupt record row: {e}");
                }
            }
        }
        Ok(records)
    }

    fn write_all(&self, records: &[SentimentRecord]) -> Result<(), PipelineError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.store_err(e))?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| self.store_err(e))?;
        for record in records {
            writer.serialize(record).map_err(|e| self.store_err(e))?;
        }
        writer.flush().map_err(|e| self.store_err(e))?;
        Ok(())
    }

    fn store_err(&self, e: impl std::fmt::Display) -> PipelineError {
        PipelineError::Store {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Classification, SentimentScore};

    fn record(caption: &str, text: &str, label: &str, score: f32) -> SentimentRecord {
        let classification = Classification::from_score(SentimentScore {
            label: label.to_string(),
            score,
        });
        SentimentRecord::new(caption, text, &classification)
    }

    fn scratch_store(dir: &tempfile::TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("records.csv"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);

        let records = vec![
            record("a cat", "I love this", "positive", 0.95),
            record("a storm", "this is awful", "negative", 0.88),
            record("a cat", "I love this", "positive", 0.95), // duplicates allowed
        ];
        for r in &records {
            store.append(r).unwrap();
        }

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        store.append(&record("a cat", "hello", "neutral", 0.5)).unwrap();

        let first = store.load_all().unwrap();
        let second = store.load_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_header_written_on_first_append() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        store.append(&record("a cat", "hi", "positive", 0.9)).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let header = raw.lines().next().unwrap();
        assert_eq!(header, HEADERS.join(","));
    }

    #[test]
    fn test_embedded_delimiters_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);

        let tricky = record(
            "a sign reading \"stop, look, listen\"",
            "line one\nline two",
            "neutral",
            0.42,
        );
        store.append(&tricky).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], tricky);
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        std::fs::write(store.path(), "").unwrap();

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_garbage_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        std::fs::write(store.path(), "not,a,valid\nrecord file").unwrap();

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_to_existing_table_preserves_prior_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);

        store.append(&record("first", "one", "positive", 0.9)).unwrap();
        store.append(&record("second", "two", "negative", 0.8)).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].image_caption, "first");
        assert_eq!(loaded[1].image_caption, "second");
    }
}
