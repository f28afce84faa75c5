//! Note lookup operations.
//!
//! `NoteService` exposes the read operations every adapter serves:
//! chapter listing, chapter and heading detail, and keyword search.
//! All of them are pure functions of the shared snapshot.

use crate::core::corpus::{CorpusStore, SegmentedChapter};
use crate::core::error::{HstcError, Result};
use crate::core::search::SearchService;
use crate::core::segment::{chapter_of, extract_sen_codes, format_heading_code, normalize_heading_code};
use crate::core::types::{
    BilingualTitle, ChapterDetail, ChapterSummary, Corpus, HeadingDetail, Language, NoteRow, Row,
    SearchRequest, SearchResponse, SourceSelector,
};
use std::sync::Arc;

/// Read operations over the note snapshot
pub struct NoteService {
    store: Arc<CorpusStore>,
    search: Arc<SearchService>,
}

impl NoteService {
    pub fn new(store: Arc<CorpusStore>, search: Arc<SearchService>) -> Self {
        Self { store, search }
    }

    /// All indexed chapters, ascending, with the title in `language`
    pub fn list_chapters(&self, language: Language) -> Vec<ChapterSummary> {
        self.store
            .chapter_index()
            .iter()
            .map(|entry| ChapterSummary {
                chapter_number: entry.chapter_number,
                title: match language {
                    Language::En if !entry.title_en.is_empty() => entry.title_en.clone(),
                    _ => entry.title_vi.clone(),
                },
                has_en: entry.has_en,
                has_sen: entry.has_sen,
            })
            .collect()
    }

    /// Full notes of one chapter from the selected corpora.
    ///
    /// `En` and `Both` require the EN chapter; SEN notes are attached
    /// when present. `Sen` requires the SEN chapter.
    pub fn get_chapter_detail(
        &self,
        chapter_number: i64,
        source: SourceSelector,
        language: Language,
    ) -> Result<ChapterDetail> {
        if !(1..=99).contains(&chapter_number) {
            return Err(HstcError::invalid(
                "chapterNumber",
                "must be a number between 1 and 99",
            ));
        }
        let number = chapter_number as u8;

        let en = source
            .includes(Corpus::En)
            .then(|| self.store.chapter(Corpus::En, number))
            .flatten();
        let sen = source
            .includes(Corpus::Sen)
            .then(|| self.store.chapter(Corpus::Sen, number))
            .flatten();

        let missing = match source {
            SourceSelector::En | SourceSelector::Both => en.is_none().then_some(Corpus::En),
            SourceSelector::Sen => sen.is_none().then_some(Corpus::Sen),
        };
        if let Some(corpus) = missing {
            return Err(HstcError::NotFound(format!(
                "Chapter {number} not found in {} notes",
                corpus.label()
            )));
        }

        let title = en
            .or(sen)
            .map(|ch| BilingualTitle::of(&ch.chapter))
            .unwrap_or_default();

        Ok(ChapterDetail {
            chapter_number: number,
            title,
            en_notes: en.map(|ch| project_rows(&ch.chapter.rows, language)),
            sen_notes: sen.map(|ch| project_rows(&ch.chapter.rows, language)),
        })
    }

    /// Notes scoped to one 4-digit heading.
    ///
    /// Only the chapter named by the code's first two digits is consulted,
    /// and only the first window for the code in each corpus is returned.
    pub fn get_heading_detail(
        &self,
        heading_code: &str,
        language: Language,
        include_related: bool,
    ) -> Result<HeadingDetail> {
        let code = normalize_heading_code(heading_code)?;
        let number = chapter_of(&code).ok_or_else(|| {
            HstcError::invalid("headingCode", "must start with a 2-digit chapter number")
        })?;

        let en = self.store.chapter(Corpus::En, number);
        let sen = self.store.chapter(Corpus::Sen, number);

        let en_rows = en.and_then(|ch| first_window_rows(ch, &code)).unwrap_or(&[]);
        let sen_rows = sen.and_then(|ch| first_window_rows(ch, &code)).unwrap_or(&[]);

        if en_rows.is_empty() && sen_rows.is_empty() {
            return Err(HstcError::NotFound(format!(
                "No notes for heading {}",
                format_heading_code(&code)
            )));
        }

        let title = en
            .or(sen)
            .map(|ch| BilingualTitle::of(&ch.chapter))
            .unwrap_or_default();

        Ok(HeadingDetail {
            chapter_number: number,
            title,
            en_notes: project_rows(en_rows, language),
            sen_notes: project_rows(sen_rows, language),
            related_codes: include_related.then(|| related_codes(sen_rows, &code)),
            heading_code: code,
        })
    }

    /// Validate and run a keyword search
    pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        self.search.search_request(request)
    }
}

fn project_rows(rows: &[Row], language: Language) -> Vec<NoteRow> {
    rows.iter().map(|row| row.project(language)).collect()
}

fn first_window_rows<'a>(chapter: &'a SegmentedChapter, code: &str) -> Option<&'a [Row]> {
    chapter
        .windows
        .iter()
        .find(|w| w.code == code)
        .map(|w| chapter.window_rows(w))
}

/// Dotted subheading codes under `code`, first occurrence wins
fn related_codes(rows: &[Row], code: &str) -> Vec<String> {
    let mut related: Vec<String> = Vec::new();

    for row in rows.iter().filter(|r| r.is_heading()) {
        let mut declared = extract_sen_codes(&row.text_vi);
        if declared.is_empty() {
            declared = extract_sen_codes(&row.text_en);
        }

        for d in declared {
            if d.is_subheading() && d.heading == code && !related.contains(&d.raw) {
                related.push(d.raw);
            }
        }
    }

    related
}
