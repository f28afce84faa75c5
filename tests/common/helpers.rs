// Test helper functions

use super::fixtures::NoteCorpus;
use hstc::core::config::Config;
use hstc::core::corpus::CorpusStore;
use hstc::core::services::Services;
use hstc::core::types::{Corpus, NoteMatch, SearchResponse};
use std::sync::Arc;
use tempfile::TempDir;

/// Services over the sample corpus, loaded through the JSON files
///
/// Keep the returned TempDir alive for the duration of the test.
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> (Arc<Services>, TempDir) {
    let dir = NoteCorpus::sample().into_temp_dir();
    let mut config = Config::default();
    config.data.dir = dir.path().to_path_buf();

    let services = Services::load(config).expect("sample corpus should load");
    (Arc::new(services), dir)
}

/// In-memory store over the sample corpus
#[allow(dead_code)] // Used in integration tests
pub fn sample_store() -> CorpusStore {
    let corpus = NoteCorpus::sample();
    CorpusStore::from_parts(corpus.index, corpus.en, corpus.sen).expect("sample corpus is valid")
}

/// (source, code, snippet) of every match, for compact assertions
#[allow(dead_code)] // Used in integration tests
pub fn match_keys(response: &SearchResponse) -> Vec<(Corpus, String, String)> {
    response
        .matches
        .iter()
        .map(|m| (m.source, m.hs_code.clone(), m.snippet.clone()))
        .collect()
}

/// Assert matches follow EN-before-SEN, ascending chapter order
#[allow(dead_code)] // Used in integration tests
pub fn assert_scan_order(matches: &[NoteMatch]) {
    for pair in matches.windows(2) {
        let a = (pair[0].source, pair[0].chapter_number);
        let b = (pair[1].source, pair[1].chapter_number);
        assert!(a <= b, "Matches out of scan order: {a:?} before {b:?}");
    }
}
