//! Search service
//!
//! Runs validated queries against the shared snapshot, collapses
//! duplicate matches and caps the result list.

use super::matcher::match_windows;
use super::query::{validate_search_request, SearchLimits};
use crate::core::corpus::CorpusStore;
use crate::core::error::Result;
use crate::core::types::{QueryEcho, SearchFilters, SearchQuery, SearchRequest, SearchResponse};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Service for searching notes
pub struct SearchService {
    store: Arc<CorpusStore>,
    limits: SearchLimits,
}

impl SearchService {
    /// Create a new search service
    pub fn new(store: Arc<CorpusStore>, limits: SearchLimits) -> Self {
        Self { store, limits }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Validate a raw request and run it
    pub fn search_request(&self, request: SearchRequest) -> Result<SearchResponse> {
        let query = validate_search_request(request, &self.limits)?;
        Ok(self.search(&query))
    }

    /// Run an already validated query.
    ///
    /// `total_matches` counts distinct matches before the cap.
    pub fn search(&self, query: &SearchQuery) -> SearchResponse {
        let start = Instant::now();

        let mut seen = HashSet::new();
        let mut matches: Vec<_> = match_windows(&self.store, query)
            .into_iter()
            .filter(|m| seen.insert(m.clone()))
            .collect();

        let total_matches = matches.len();
        matches.truncate(query.max_results);

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "Search '{}' ({}, {}) returned {}/{} matches in {}ms",
            query.keyword,
            query.match_type,
            query.language,
            matches.len(),
            total_matches,
            duration_ms
        );

        SearchResponse {
            matches,
            total_matches,
            query: QueryEcho {
                keyword: query.keyword.clone(),
                filters: SearchFilters {
                    material: query.material.clone(),
                    function_feature: query.function_feature.clone(),
                },
            },
            duration_ms,
        }
    }
}
