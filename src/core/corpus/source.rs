//! Data-supply interface for the note snapshot.
//!
//! A `CorpusSource` yields the three flat tables the service runs on:
//! the chapter index, the EN chapters and the SEN chapters. The JSON
//! implementation reads them from a data directory.

use crate::core::error::{HstcError, Result};
use crate::core::types::{Chapter, ChapterIndexEntry};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the chapter index
pub const CHAPTERS_FILE: &str = "chapters.json";

/// File name of the Explanatory Notes
pub const EN_NOTES_FILE: &str = "en-notes.json";

/// File name of the Supplementary Explanatory Notes
pub const SEN_NOTES_FILE: &str = "sen-notes.json";

/// Supplier of a complete note snapshot
pub trait CorpusSource {
    fn chapter_index(&self) -> Result<Vec<ChapterIndexEntry>>;

    fn en_chapters(&self) -> Result<Vec<Chapter>>;

    fn sen_chapters(&self) -> Result<Vec<Chapter>>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}

/// Reads the snapshot from JSON files in one directory
#[derive(Debug, Clone)]
pub struct JsonCorpusSource {
    dir: PathBuf,
}

impl JsonCorpusSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        let contents = fs::read_to_string(&path).map_err(|e| {
            HstcError::DataUnavailable(format!("Failed to read {}: {e}", path.display()))
        })?;

        let rows: Vec<T> = serde_json::from_str(&contents).map_err(|e| {
            HstcError::DataUnavailable(format!("Failed to parse {}: {e}", path.display()))
        })?;

        tracing::debug!("Read {} entries from {}", rows.len(), path.display());
        Ok(rows)
    }
}

impl CorpusSource for JsonCorpusSource {
    fn chapter_index(&self) -> Result<Vec<ChapterIndexEntry>> {
        self.read_table(CHAPTERS_FILE)
    }

    fn en_chapters(&self) -> Result<Vec<Chapter>> {
        self.read_table(EN_NOTES_FILE)
    }

    fn sen_chapters(&self) -> Result<Vec<Chapter>> {
        self.read_table(SEN_NOTES_FILE)
    }

    fn describe(&self) -> String {
        format!("JSON files in {}", self.dir.display())
    }
}
