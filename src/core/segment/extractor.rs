//! Heading code extraction.
//!
//! EN heading rows declare a single 4-digit heading (`01.01` or
//! `0101`). SEN heading rows may declare several codes of mixed depth
//! (`0101`, `0101.21`, `0101.21.00`), each addressed by its first four
//! digits.

use crate::core::error::{HstcError, Result};
use crate::core::types::{Corpus, Row};
use once_cell::sync::Lazy;
use regex::Regex;

// A 2-digit group optionally followed by a second group. Only the
// 4-digit form yields a heading; a lone 2-digit group is a chapter
// reference.
static EN_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2}(?:\.?[0-9]{2})?").expect("EN code pattern is valid"));

static SEN_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}(?:\.[0-9]{2}(?:\.[0-9]{2})?)?").expect("SEN code pattern is valid")
});

/// A code declared by a SEN heading row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredCode {
    /// Code as written in the row (dots kept)
    pub raw: String,

    /// First four digits, the window lookup key
    pub heading: String,
}

impl DeclaredCode {
    /// True for 6- and 8-digit subheading codes
    pub fn is_subheading(&self) -> bool {
        self.raw.len() > 4
    }
}

/// Extract the heading an EN heading row declares.
///
/// Only the first code-like occurrence is considered. Returns `None`
/// when there is none or when it is a bare 2-digit chapter number.
///
/// # Examples
///
/// ```
/// use hstc::core::segment::extract_en_code;
///
/// assert_eq!(extract_en_code("01.01 - Ngựa, lừa, la sống."), Some("0101".to_string()));
/// assert_eq!(extract_en_code("Chương 01"), None);
/// ```
pub fn extract_en_code(text: &str) -> Option<String> {
    let found = EN_CODE_PATTERN.find(text)?;
    let digits: String = found.as_str().chars().filter(|c| *c != '.').collect();
    (digits.len() == 4).then_some(digits)
}

/// Extract every code a SEN heading row declares, in order of appearance.
///
/// # Examples
///
/// ```
/// use hstc::core::segment::extract_sen_codes;
///
/// let codes = extract_sen_codes("0101.21 và 0101.29 - Ngựa thuần chủng");
/// assert_eq!(codes.len(), 2);
/// assert_eq!(codes[0].heading, "0101");
/// ```
pub fn extract_sen_codes(text: &str) -> Vec<DeclaredCode> {
    SEN_CODE_PATTERN
        .find_iter(text)
        .map(|m| {
            let raw = m.as_str().to_string();
            let heading = raw[..4].to_string();
            DeclaredCode { raw, heading }
        })
        .collect()
}

/// Distinct 4-digit heading keys declared by a heading row text.
pub fn heading_keys(corpus: Corpus, text: &str) -> Vec<String> {
    match corpus {
        Corpus::En => extract_en_code(text).into_iter().collect(),
        Corpus::Sen => {
            let mut keys: Vec<String> = Vec::new();
            for code in extract_sen_codes(text) {
                if !keys.contains(&code.heading) {
                    keys.push(code.heading);
                }
            }
            keys
        }
    }
}

/// Heading keys declared by a row.
///
/// Segmentation must not depend on the display language, so the
/// Vietnamese text is read first and the English text only when the
/// Vietnamese one declares nothing. Non-heading rows declare nothing.
pub fn row_heading_keys(corpus: Corpus, row: &Row) -> Vec<String> {
    if !row.is_heading() {
        return Vec::new();
    }

    let keys = heading_keys(corpus, &row.text_vi);
    if keys.is_empty() {
        heading_keys(corpus, &row.text_en)
    } else {
        keys
    }
}

/// Normalize a caller-supplied heading code (`0101` or `01.01`).
pub fn normalize_heading_code(input: &str) -> Result<String> {
    let code: String = input.trim().chars().filter(|c| *c != '.').collect();

    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(HstcError::invalid(
            "headingCode",
            "must be a 4-digit number (e.g. \"0101\" or \"01.01\")",
        ));
    }

    if &code[..2] == "00" {
        return Err(HstcError::invalid(
            "headingCode",
            "chapter part must be between 01 and 99",
        ));
    }

    Ok(code)
}

/// Dotted display form of a 4-digit heading code (`0101` -> `01.01`).
pub fn format_heading_code(code: &str) -> String {
    if code.len() == 4 && code.chars().all(|c| c.is_ascii_digit()) {
        format!("{}.{}", &code[..2], &code[2..])
    } else {
        code.to_string()
    }
}

/// Chapter number a 4-digit heading code belongs to.
pub fn chapter_of(code: &str) -> Option<u8> {
    code.get(..2)?.parse().ok()
}
