//! Heading window segmentation.
//!
//! A chapter is a flat row sequence. Each declaring heading row opens a
//! window for every code it declares that is not already open, and closes
//! every open window whose code it no longer declares. Heading rows that
//! declare nothing stay inside the current windows. Rows before the first
//! declaring heading belong to no window.

use super::extractor::row_heading_keys;
use crate::core::types::{Chapter, Corpus, Row};
use std::ops::Range;

/// Contiguous row range of one chapter scoped to one heading code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeWindow {
    /// 4-digit heading code
    pub code: String,

    pub chapter_number: u8,

    /// Index of the declaring heading row
    pub start: usize,

    /// One past the last row of the window
    pub end: usize,
}

impl CodeWindow {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Rows of `chapter` covered by this window
    pub fn rows<'a>(&self, chapter: &'a Chapter) -> &'a [Row] {
        &chapter.rows[self.range()]
    }
}

/// Partition a chapter's rows into heading windows, ordered by start row.
///
/// A SEN heading row declaring several headings yields one window per
/// heading. A window stays open across later headings that still declare
/// its code, so windows of different codes may overlap.
pub fn segment_chapter(corpus: Corpus, chapter: &Chapter) -> Vec<CodeWindow> {
    let mut windows: Vec<CodeWindow> = Vec::new();
    // Indices into `windows` of the windows still open
    let mut open: Vec<usize> = Vec::new();

    for (idx, row) in chapter.rows.iter().enumerate() {
        let keys = row_heading_keys(corpus, row);
        if keys.is_empty() {
            continue;
        }

        open.retain(|&w| {
            let still_declared = keys.contains(&windows[w].code);
            if !still_declared {
                windows[w].end = idx;
            }
            still_declared
        });

        for key in keys {
            if open.iter().any(|&w| windows[w].code == key) {
                continue;
            }
            open.push(windows.len());
            windows.push(CodeWindow {
                code: key,
                chapter_number: chapter.chapter_number,
                start: idx,
                end: idx,
            });
        }
    }

    for w in open {
        windows[w].end = chapter.rows.len();
    }

    windows
}
