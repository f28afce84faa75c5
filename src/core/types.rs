//! Core data types for the HSTC note service.
//!
//! This module defines the note rows and chapters supplied by the
//! data loader, the query and match types used by search, and the
//! response payloads returned by the exposed operations.

use crate::core::error::HstcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = HstcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vi" => Ok(Language::Vi),
            "en" => Ok(Language::En),
            _ => Err(HstcError::invalid("language", "must be \"vi\" or \"en\"")),
        }
    }
}

/// Note corpus a row or match comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corpus {
    /// Explanatory Notes
    En,
    /// Supplementary Explanatory Notes
    Sen,
}

impl Corpus {
    /// Fixed scan order used by search
    pub const SCAN_ORDER: [Corpus; 2] = [Corpus::En, Corpus::Sen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Corpus::En => "en",
            Corpus::Sen => "sen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Corpus::En => "EN",
            Corpus::Sen => "SEN",
        }
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword match policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Every whitespace-separated token must occur somewhere in the row
    #[default]
    Tokens,
    /// The whole keyword must occur as one substring
    Exact,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Tokens => "tokens",
            MatchType::Exact => "exact",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = HstcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokens" => Ok(MatchType::Tokens),
            "exact" => Ok(MatchType::Exact),
            _ => Err(HstcError::invalid(
                "matchType",
                "must be \"tokens\" or \"exact\"",
            )),
        }
    }
}

/// Which corpora a chapter request reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSelector {
    En,
    Sen,
    #[default]
    Both,
}

impl SourceSelector {
    pub fn includes(&self, corpus: Corpus) -> bool {
        matches!(
            (self, corpus),
            (SourceSelector::Both, _)
                | (SourceSelector::En, Corpus::En)
                | (SourceSelector::Sen, Corpus::Sen)
        )
    }
}

impl FromStr for SourceSelector {
    type Err = HstcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(SourceSelector::En),
            "sen" => Ok(SourceSelector::Sen),
            "both" => Ok(SourceSelector::Both),
            _ => Err(HstcError::invalid(
                "source",
                "must be \"en\", \"sen\", or \"both\"",
            )),
        }
    }
}

/// Structural role of a note row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Heading,
    Paragraph,
    List,
}

/// A single note row, in source document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "type")]
    pub kind: RowKind,

    /// Vietnamese text (always the fallback)
    #[serde(rename = "vi", default)]
    pub text_vi: String,

    /// English text (may be empty)
    #[serde(rename = "en", default)]
    pub text_en: String,
}

impl Row {
    pub fn new(kind: RowKind, text_vi: impl Into<String>, text_en: impl Into<String>) -> Self {
        Self {
            kind,
            text_vi: text_vi.into(),
            text_en: text_en.into(),
        }
    }

    /// Text shown for `language`: English only when requested and present.
    pub fn display_text(&self, language: Language) -> &str {
        match language {
            Language::En if !self.text_en.is_empty() => &self.text_en,
            _ => &self.text_vi,
        }
    }

    pub fn is_heading(&self) -> bool {
        self.kind == RowKind::Heading
    }

    /// Project to the language-resolved shape returned to callers
    pub fn project(&self, language: Language) -> NoteRow {
        NoteRow {
            kind: self.kind,
            text: self.display_text(language).to_string(),
        }
    }
}

/// One chapter of one corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub chapter_number: u8,

    #[serde(default)]
    pub title_vi: String,

    #[serde(default)]
    pub title_en: String,

    #[serde(rename = "content", default)]
    pub rows: Vec<Row>,
}

/// Entry of the chapter index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterIndexEntry {
    pub chapter_number: u8,

    #[serde(default)]
    pub title_vi: String,

    #[serde(default)]
    pub title_en: String,

    #[serde(rename = "hasEN", default)]
    pub has_en: bool,

    #[serde(rename = "hasSEN", default)]
    pub has_sen: bool,
}

/// A row that matched a search, attributed to its heading window
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMatch {
    /// 4-digit heading code of the window
    pub hs_code: String,

    pub source: Corpus,

    /// Full display text of the matched row
    pub snippet: String,

    pub chapter_number: u8,
}

/// Raw search request as received from an adapter
///
/// Optional fields fall back to configured defaults during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub keyword: String,

    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default)]
    pub match_type: Option<MatchType>,

    #[serde(default)]
    pub material: Option<String>,

    #[serde(default)]
    pub function_feature: Option<String>,

    #[serde(default)]
    pub max_results: Option<usize>,
}

/// Validated search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub language: Language,
    pub match_type: MatchType,
    pub material: Option<String>,
    pub function_feature: Option<String>,
    pub max_results: usize,
}

impl SearchQuery {
    /// Query with defaults for everything but the keyword
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            language: Language::Vi,
            match_type: MatchType::Tokens,
            material: None,
            function_feature: None,
            max_results: 20,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_function_feature(mut self, function_feature: impl Into<String>) -> Self {
        self.function_feature = Some(function_feature.into());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Filter terms the whole window must contain
    pub fn filter_terms(&self) -> Vec<&str> {
        [self.material.as_deref(), self.function_feature.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Echo of the filters applied to a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_feature: Option<String>,
}

/// Echo of the query a search ran with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEcho {
    pub keyword: String,
    pub filters: SearchFilters,
}

/// Response from search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Matches in scan order, capped at `maxResults`
    pub matches: Vec<NoteMatch>,

    /// Number of matches before capping
    pub total_matches: usize,

    pub query: QueryEcho,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// A row projected to the requested display language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRow {
    #[serde(rename = "type")]
    pub kind: RowKind,
    pub text: String,
}

/// Chapter title in both languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualTitle {
    pub vi: String,
    pub en: String,
}

impl BilingualTitle {
    pub fn of(chapter: &Chapter) -> Self {
        Self {
            vi: chapter.title_vi.clone(),
            en: chapter.title_en.clone(),
        }
    }
}

/// Chapter listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub chapter_number: u8,
    pub title: String,
    #[serde(rename = "hasEN")]
    pub has_en: bool,
    #[serde(rename = "hasSEN")]
    pub has_sen: bool,
}

/// Full chapter notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDetail {
    pub chapter_number: u8,
    pub title: BilingualTitle,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub en_notes: Option<Vec<NoteRow>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sen_notes: Option<Vec<NoteRow>>,
}

/// Notes scoped to one 4-digit heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingDetail {
    pub heading_code: String,
    pub chapter_number: u8,
    pub title: BilingualTitle,
    pub en_notes: Vec<NoteRow>,
    pub sen_notes: Vec<NoteRow>,

    /// SEN subheading codes declared under this heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_codes: Option<Vec<String>>,
}
