//! Segmentation of flat note chapters into heading windows.
//!
//! This module recognizes heading rows, extracts the codes they declare
//! and groups the rows that follow into per-heading windows.

mod extractor;
mod segmenter;

pub use extractor::{
    chapter_of, extract_en_code, extract_sen_codes, format_heading_code, heading_keys,
    normalize_heading_code, row_heading_keys, DeclaredCode,
};
pub use segmenter::{segment_chapter, CodeWindow};
