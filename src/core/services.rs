//! Unified service container for HSTC
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::corpus::{CorpusSource, CorpusStore, JsonCorpusSource};
use crate::core::error::Result;
use crate::core::notes::NoteService;
use crate::core::search::{SearchLimits, SearchService};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Immutable note snapshot
    pub store: Arc<CorpusStore>,

    /// Chapter, heading and search operations
    pub notes: Arc<NoteService>,

    /// Keyword search over heading windows
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services around an already loaded snapshot
    pub fn new(config: Config, store: CorpusStore) -> Self {
        let store = Arc::new(store);

        let search = Arc::new(SearchService::new(
            Arc::clone(&store),
            SearchLimits::from(&config.search),
        ));

        let notes = Arc::new(NoteService::new(Arc::clone(&store), Arc::clone(&search)));

        Self {
            store,
            notes,
            search,
            config: Arc::new(config),
        }
    }

    /// Load the snapshot from the configured data directory
    pub fn load(config: Config) -> Result<Self> {
        let source = JsonCorpusSource::new(config.data.dir.clone());
        Self::from_source(config, &source)
    }

    /// Load the snapshot from an arbitrary source
    pub fn from_source(config: Config, source: &dyn CorpusSource) -> Result<Self> {
        let store = CorpusStore::load(source)?;
        Ok(Self::new(config, store))
    }
}
