//! Immutable in-memory note snapshot.
//!
//! The store is built once from a `CorpusSource`, segments every chapter
//! of both corpora up front and is then shared read-only by all queries.

use super::source::CorpusSource;
use crate::core::error::{HstcError, Result};
use crate::core::segment::{segment_chapter, CodeWindow};
use crate::core::types::{Chapter, ChapterIndexEntry, Corpus, Row};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// A chapter together with its precomputed heading windows
#[derive(Debug, Clone)]
pub struct SegmentedChapter {
    pub chapter: Chapter,
    pub windows: Vec<CodeWindow>,
}

impl SegmentedChapter {
    pub fn new(corpus: Corpus, chapter: Chapter) -> Self {
        let windows = segment_chapter(corpus, &chapter);
        Self { chapter, windows }
    }

    pub fn number(&self) -> u8 {
        self.chapter.chapter_number
    }

    pub fn window_rows(&self, window: &CodeWindow) -> &[Row] {
        window.rows(&self.chapter)
    }

    /// Windows addressed by `code`, in document order
    pub fn windows_for<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a CodeWindow> + 'a {
        self.windows.iter().filter(move |w| w.code == code)
    }
}

/// Counts for one corpus of the snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusCounts {
    pub chapters: usize,
    pub rows: usize,
    pub windows: usize,
}

/// Snapshot statistics
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub indexed_chapters: usize,
    pub en: CorpusCounts,
    pub sen: CorpusCounts,
    pub loaded_at: DateTime<Utc>,
}

/// Process-wide, read-only note snapshot
#[derive(Debug)]
pub struct CorpusStore {
    index: Vec<ChapterIndexEntry>,
    en: BTreeMap<u8, SegmentedChapter>,
    sen: BTreeMap<u8, SegmentedChapter>,
    loaded_at: DateTime<Utc>,
}

impl CorpusStore {
    /// Build the snapshot from a data source.
    ///
    /// Any failure of the source is reported as `DataUnavailable`; no
    /// partial snapshot is ever produced.
    pub fn load(source: &dyn CorpusSource) -> Result<Self> {
        tracing::info!("Loading notes from {}", source.describe());

        let index = source.chapter_index().map_err(unavailable("chapter index"))?;
        let en = source.en_chapters().map_err(unavailable("EN notes"))?;
        let sen = source.sen_chapters().map_err(unavailable("SEN notes"))?;

        let store = Self::from_parts(index, en, sen)?;
        store.log_stats();
        Ok(store)
    }

    /// Build the snapshot from already-loaded tables
    pub fn from_parts(
        mut index: Vec<ChapterIndexEntry>,
        en: Vec<Chapter>,
        sen: Vec<Chapter>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &index {
            check_chapter_number(entry.chapter_number, "chapter index")?;
            if !seen.insert(entry.chapter_number) {
                return Err(HstcError::DataUnavailable(format!(
                    "chapter index lists chapter {} twice",
                    entry.chapter_number
                )));
            }
        }
        index.sort_by_key(|entry| entry.chapter_number);

        Ok(Self {
            index,
            en: segment_corpus(Corpus::En, en)?,
            sen: segment_corpus(Corpus::Sen, sen)?,
            loaded_at: Utc::now(),
        })
    }

    /// Chapter index, ascending by chapter number
    pub fn chapter_index(&self) -> &[ChapterIndexEntry] {
        &self.index
    }

    pub fn chapter(&self, corpus: Corpus, number: u8) -> Option<&SegmentedChapter> {
        self.corpus(corpus).get(&number)
    }

    /// Chapters of one corpus, ascending by chapter number
    pub fn chapters(&self, corpus: Corpus) -> impl Iterator<Item = &SegmentedChapter> {
        self.corpus(corpus).values()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            indexed_chapters: self.index.len(),
            en: self.counts(Corpus::En),
            sen: self.counts(Corpus::Sen),
            loaded_at: self.loaded_at,
        }
    }

    fn corpus(&self, corpus: Corpus) -> &BTreeMap<u8, SegmentedChapter> {
        match corpus {
            Corpus::En => &self.en,
            Corpus::Sen => &self.sen,
        }
    }

    fn counts(&self, corpus: Corpus) -> CorpusCounts {
        self.chapters(corpus)
            .fold(CorpusCounts::default(), |mut acc, ch| {
                acc.chapters += 1;
                acc.rows += ch.chapter.rows.len();
                acc.windows += ch.windows.len();
                acc
            })
    }

    fn log_stats(&self) {
        let stats = self.stats();
        tracing::info!(
            "Loaded {} indexed chapters; EN: {} chapters, {} rows, {} windows; \
             SEN: {} chapters, {} rows, {} windows",
            stats.indexed_chapters,
            stats.en.chapters,
            stats.en.rows,
            stats.en.windows,
            stats.sen.chapters,
            stats.sen.rows,
            stats.sen.windows
        );
    }
}

fn unavailable(what: &'static str) -> impl Fn(HstcError) -> HstcError {
    move |e| match e {
        HstcError::DataUnavailable(msg) => HstcError::DataUnavailable(format!("{what}: {msg}")),
        other => HstcError::DataUnavailable(format!("{what}: {other}")),
    }
}

fn check_chapter_number(number: u8, table: &str) -> Result<()> {
    if (1..=99).contains(&number) {
        Ok(())
    } else {
        Err(HstcError::DataUnavailable(format!(
            "{table} has chapter number {number} outside 1..=99"
        )))
    }
}

fn segment_corpus(corpus: Corpus, chapters: Vec<Chapter>) -> Result<BTreeMap<u8, SegmentedChapter>> {
    let mut map = BTreeMap::new();
    for chapter in chapters {
        let number = chapter.chapter_number;
        check_chapter_number(number, corpus.label())?;
        if map.contains_key(&number) {
            return Err(HstcError::DataUnavailable(format!(
                "{} notes contain chapter {number} twice",
                corpus.label()
            )));
        }
        map.insert(number, SegmentedChapter::new(corpus, chapter));
    }
    Ok(map)
}
