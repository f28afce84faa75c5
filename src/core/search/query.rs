//! Search request validation.
//!
//! Adapters hand over a raw `SearchRequest`; this module checks its
//! shape against the configured limits and fills in defaults, producing
//! a `SearchQuery` the matcher can trust.

use crate::core::config::SearchConfig;
use crate::core::error::{HstcError, Result};
use crate::core::types::{SearchQuery, SearchRequest};

/// Limits a search request is validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub default_max_results: usize,
    pub max_results: usize,
    pub max_keyword_length: usize,
    pub max_filter_length: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for SearchLimits {
    fn from(config: &SearchConfig) -> Self {
        Self {
            default_max_results: config.default_max_results,
            max_results: config.max_results,
            max_keyword_length: config.max_keyword_length,
            max_filter_length: config.max_filter_length,
        }
    }
}

/// Validate a raw request and resolve its defaults.
///
/// Lengths are counted in characters, not bytes, so Vietnamese text
/// is not penalized for its diacritics.
///
/// # Examples
///
/// ```
/// use hstc::core::search::{validate_search_request, SearchLimits};
/// use hstc::core::types::{MatchType, SearchRequest};
///
/// let request = SearchRequest {
///     keyword: "  ngựa giống ".to_string(),
///     ..Default::default()
/// };
/// let query = validate_search_request(request, &SearchLimits::default()).unwrap();
/// assert_eq!(query.keyword, "ngựa giống");
/// assert_eq!(query.match_type, MatchType::Tokens);
/// assert_eq!(query.max_results, 20);
/// ```
pub fn validate_search_request(request: SearchRequest, limits: &SearchLimits) -> Result<SearchQuery> {
    let keyword = request.keyword.trim().to_string();
    if keyword.is_empty() {
        return Err(HstcError::invalid(
            "keyword",
            "is required and must be a non-empty string",
        ));
    }
    if keyword.chars().count() > limits.max_keyword_length {
        return Err(HstcError::invalid(
            "keyword",
            format!("must be {} characters or less", limits.max_keyword_length),
        ));
    }

    let material = validate_filter("material", request.material, limits)?;
    let function_feature = validate_filter("functionFeature", request.function_feature, limits)?;

    let max_results = request.max_results.unwrap_or(limits.default_max_results);
    if max_results == 0 || max_results > limits.max_results {
        return Err(HstcError::invalid(
            "maxResults",
            format!("must be a number between 1 and {}", limits.max_results),
        ));
    }

    Ok(SearchQuery {
        keyword,
        language: request.language.unwrap_or_default(),
        match_type: request.match_type.unwrap_or_default(),
        material,
        function_feature,
        max_results,
    })
}

/// Blank filters count as absent
fn validate_filter(
    field: &str,
    value: Option<String>,
    limits: &SearchLimits,
) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    if value.chars().count() > limits.max_filter_length {
        return Err(HstcError::invalid(
            field,
            format!("must be {} characters or less", limits.max_filter_length),
        ));
    }

    let trimmed = value.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}
