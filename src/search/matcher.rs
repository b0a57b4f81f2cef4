//! Cross-entity search matcher.
//!
//! A pure, synchronous function over a dataset snapshot: the query is
//! tokenized into terms, every record's searchable fields are scored per
//! term with tiered weights, and qualifying records come back grouped by
//! entity type with structured highlights. Calling it twice with the same
//! inputs yields identical results; it holds no state and mutates nothing.

use crate::error::{MatcherResult, SearchError};
use crate::models::{Dataset, Record};
use crate::search::highlight::highlight;
use crate::search::results::{SearchResult, SearchResults};
use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on accepted query length in characters.
pub const MAX_QUERY_LEN: usize = 500;

// Scoring weights. Only their strict ordering matters: an exact title
// match outranks a title substring, which outranks a secondary-field
// substring. The values themselves carry no product significance.

/// Score when the entire title equals a term.
const WEIGHT_TITLE_EXACT: f64 = 10.0;

/// Score when a term appears inside the title.
const WEIGHT_TITLE_PARTIAL: f64 = 4.0;

/// Score when a term appears only in description, category, tags or
/// contact fields.
const WEIGHT_SECONDARY: f64 = 1.5;

/// Search all five collections for `query`.
///
/// An empty or whitespace-only query returns an empty result set rather
/// than erroring. Every term must match somewhere in a record for it to
/// qualify (AND semantics); groups are sorted by descending score with
/// ties kept in dataset order.
///
/// # Errors
/// `SearchError::InvalidArgument` if the query exceeds [`MAX_QUERY_LEN`]
/// characters.
pub fn search(dataset: &Dataset, query: &str) -> MatcherResult<SearchResults> {
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(SearchError::InvalidArgument(format!(
            "query longer than {} characters",
            MAX_QUERY_LEN
        )));
    }

    let terms = tokenize(query);
    if terms.is_empty() {
        return Ok(SearchResults::default());
    }

    let mut results = SearchResults::default();
    for record in dataset.records() {
        if let Some(hit) = score_record(&record, &terms) {
            results.push(hit);
        }
    }
    results.finalize();
    Ok(results)
}

/// Lower-case the query and split it on whitespace into terms.
pub(crate) fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Score one record against the term list.
///
/// Returns `None` when any term fails to match (the record is excluded
/// entirely), otherwise a hit whose score is the sum of per-term weights
/// and therefore strictly positive.
fn score_record(record: &Record<'_>, terms: &[String]) -> Option<SearchResult> {
    let title = record.title();
    let title_lower = title.to_lowercase();

    let description = record.description().map(sanitize_text);
    let mut secondary_lower: Vec<String> = record
        .secondary_fields()
        .iter()
        .map(|f| f.to_lowercase())
        .collect();
    if let Some(ref desc) = description {
        secondary_lower.push(desc.to_lowercase());
    }

    let mut score = 0.0;
    for term in terms {
        let term_score = if title_lower == *term {
            WEIGHT_TITLE_EXACT
        } else if title_lower.contains(term.as_str()) {
            WEIGHT_TITLE_PARTIAL
        } else if secondary_lower.iter().any(|f| f.contains(term.as_str())) {
            WEIGHT_SECONDARY
        } else {
            return None;
        };
        score += term_score;
    }

    Some(SearchResult {
        id: record.id().to_string(),
        record_type: record.record_type(),
        score,
        title: highlight(title, terms),
        description: description
            .as_deref()
            .map(|d| highlight(d, terms))
            .unwrap_or_default(),
        metadata: record.display_metadata(),
    })
}

/// Strip HTML tags and collapse whitespace.
///
/// Inquiry messages arrive from the public contact form and may carry
/// markup; sanitizing here keeps the haystack and the highlight source
/// consistent.
pub fn sanitize_text(raw: &str) -> String {
    static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

    let text = HTML_TAG_RE.replace_all(raw, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
