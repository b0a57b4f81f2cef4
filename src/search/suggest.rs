//! Query suggestions derived from top-ranked titles.

use crate::config::Config;
use crate::error::MatcherResult;
use crate::models::Dataset;
use crate::search::highlight::plain_text;
use crate::search::matcher::search;
use crate::search::results::SearchResult;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Return up to `limit` suggestion labels for `query`.
///
/// Runs the matcher, orders all hits by descending score across entity
/// types, and extracts each hit's primary title, de-duplicated
/// case-insensitively. A `limit` of zero yields an empty list.
///
/// # Errors
/// Propagates the matcher's `InvalidArgument` for over-long queries.
pub fn suggest(dataset: &Dataset, query: &str, limit: usize) -> MatcherResult<Vec<String>> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let results = search(dataset, query)?;
    let mut hits: Vec<&SearchResult> = results.iter().collect();
    // Stable sort: equal scores keep entity-type then dataset order.
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();
    for hit in hits {
        let label = plain_text(&hit.title);
        if label.is_empty() || !seen.insert(label.to_lowercase()) {
            continue;
        }
        suggestions.push(label);
        if suggestions.len() == limit {
            break;
        }
    }
    Ok(suggestions)
}

/// [`suggest`] with the configured suggestion limit.
pub fn suggest_with_config(
    dataset: &Dataset,
    query: &str,
    config: &Config,
) -> MatcherResult<Vec<String>> {
    suggest(dataset, query, config.max_suggestions)
}
