// Integration tests for loading the note snapshot from JSON files

use crate::common::NoteCorpus;
use hstc::core::corpus::{CorpusStore, JsonCorpusSource, EN_NOTES_FILE, SEN_NOTES_FILE};
use hstc::core::types::Corpus;
use std::fs;

#[test]
fn test_load_sample_corpus() {
    let dir = NoteCorpus::sample().into_temp_dir();
    let store = CorpusStore::load(&JsonCorpusSource::new(dir.path())).unwrap();

    let numbers: Vec<u8> = store
        .chapter_index()
        .iter()
        .map(|e| e.chapter_number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let stats = store.stats();
    assert_eq!(stats.en.chapters, 2);
    assert_eq!(stats.sen.chapters, 2);
    assert_eq!(stats.en.rows, 13);
    assert_eq!(stats.sen.rows, 10);
    // EN: 0101, 0102, 0106, 0301. SEN: 0101, 0102, 0201, 0202, 0206
    assert_eq!(stats.en.windows, 4);
    assert_eq!(stats.sen.windows, 5);
}

#[test]
fn test_missing_sen_file_aborts_load() {
    let dir = NoteCorpus::sample().into_temp_dir();
    fs::remove_file(dir.path().join(SEN_NOTES_FILE)).unwrap();

    let err = CorpusStore::load(&JsonCorpusSource::new(dir.path())).unwrap_err();
    assert!(err.is_unavailable());
    assert!(err.message().contains("SEN notes"));
}

#[test]
fn test_malformed_notes_abort_load() {
    let dir = NoteCorpus::sample().into_temp_dir();
    fs::write(
        dir.path().join(EN_NOTES_FILE),
        r#"[{"chapterNumber": 1, "content": [{"type": "table", "vi": "x"}]}]"#,
    )
    .unwrap();

    let err = CorpusStore::load(&JsonCorpusSource::new(dir.path())).unwrap_err();
    assert!(err.is_unavailable());
}

#[test]
fn test_duplicate_chapter_in_file_aborts_load() {
    let mut corpus = NoteCorpus::sample();
    let copy = corpus.sen[0].clone();
    corpus.sen.push(copy);
    let dir = corpus.into_temp_dir();

    let err = CorpusStore::load(&JsonCorpusSource::new(dir.path())).unwrap_err();
    assert!(err.is_unavailable());
}

#[test]
fn test_chapter_lookup_per_corpus() {
    let dir = NoteCorpus::sample().into_temp_dir();
    let store = CorpusStore::load(&JsonCorpusSource::new(dir.path())).unwrap();

    assert!(store.chapter(Corpus::En, 3).is_some());
    assert!(store.chapter(Corpus::Sen, 3).is_none());
    assert!(store.chapter(Corpus::En, 2).is_none());
    assert!(store.chapter(Corpus::Sen, 2).is_some());
}
