//! Row and window matching.
//!
//! Comparison is case-insensitive through Unicode lowercasing. Diacritics
//! are significant: "ngua" does not match "ngựa".

use crate::core::corpus::{CorpusStore, SegmentedChapter};
use crate::core::segment::CodeWindow;
use crate::core::types::{Corpus, Language, MatchType, NoteMatch, Row, SearchQuery};

/// Compiled form of a validated query
#[derive(Debug, Clone)]
pub struct Matcher {
    language: Language,
    match_type: MatchType,
    keyword: String,
    tokens: Vec<String>,
    filters: Vec<String>,
}

impl Matcher {
    pub fn new(query: &SearchQuery) -> Self {
        let keyword = query.keyword.to_lowercase();
        let tokens = keyword.split_whitespace().map(str::to_string).collect();
        let filters = query
            .filter_terms()
            .into_iter()
            .map(str::to_lowercase)
            .collect();

        Self {
            language: query.language,
            match_type: query.match_type,
            keyword,
            tokens,
            filters,
        }
    }

    /// Whether a single row's display text satisfies the keyword
    pub fn row_matches(&self, row: &Row) -> bool {
        let text = row.display_text(self.language).to_lowercase();
        match self.match_type {
            MatchType::Exact => text.contains(&self.keyword),
            MatchType::Tokens => {
                !self.tokens.is_empty() && self.tokens.iter().all(|t| text.contains(t.as_str()))
            }
        }
    }

    /// Whether every filter term occurs somewhere in the window.
    ///
    /// Terms may be satisfied by different rows.
    pub fn window_passes_filters(&self, rows: &[Row]) -> bool {
        if self.filters.is_empty() {
            return true;
        }

        let texts: Vec<String> = rows
            .iter()
            .map(|row| row.display_text(self.language).to_lowercase())
            .collect();

        self.filters
            .iter()
            .all(|term| texts.iter().any(|text| text.contains(term.as_str())))
    }

    /// Matches within one window, in row order
    pub fn match_window(
        &self,
        corpus: Corpus,
        chapter: &SegmentedChapter,
        window: &CodeWindow,
    ) -> Vec<NoteMatch> {
        let rows = chapter.window_rows(window);
        if !self.window_passes_filters(rows) {
            return Vec::new();
        }

        rows.iter()
            .filter(|row| self.row_matches(row))
            .map(|row| NoteMatch {
                hs_code: window.code.clone(),
                source: corpus,
                snippet: row.display_text(self.language).to_string(),
                chapter_number: chapter.number(),
            })
            .collect()
    }
}

/// Scan every window of the snapshot and collect raw matches.
///
/// Order is EN before SEN, chapters ascending, windows and rows in
/// document order. Rows outside any window are never reported. The
/// result is neither deduplicated nor capped.
pub fn match_windows(store: &CorpusStore, query: &SearchQuery) -> Vec<NoteMatch> {
    let matcher = Matcher::new(query);
    let mut matches = Vec::new();

    for corpus in Corpus::SCAN_ORDER {
        for chapter in store.chapters(corpus) {
            for window in &chapter.windows {
                matches.extend(matcher.match_window(corpus, chapter, window));
            }
        }
    }

    matches
}
