//! Note corpora: the data-supply interface and the immutable snapshot
//! built from it.

mod source;
mod store;

pub use source::{CorpusSource, JsonCorpusSource, CHAPTERS_FILE, EN_NOTES_FILE, SEN_NOTES_FILE};
pub use store::{CorpusCounts, CorpusStats, CorpusStore, SegmentedChapter};
