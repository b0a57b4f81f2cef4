//! Ranked, grouped search results.
//!
//! `SearchResults` is derived and ephemeral: recomputed per query, owned by
//! the invoking context for the lifetime of one query, never persisted.

use crate::models::RecordType;
use crate::search::highlight::HighlightSpan;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// One ranked hit for a single record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResult {
    /// Identifier of the source record
    pub id: String,

    /// Entity type of the source record
    pub record_type: RecordType,

    /// Relevance score; strictly positive for every returned hit
    pub score: f64,

    /// Highlighted primary title
    pub title: Vec<HighlightSpan>,

    /// Highlighted description (empty if the record has none)
    pub description: Vec<HighlightSpan>,

    /// Display-only metadata copied from the source record
    pub metadata: Map<String, Value>,
}

/// All hits for one query, grouped by entity type.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SearchResults {
    pub events: Vec<SearchResult>,
    pub services: Vec<SearchResult>,
    pub clients: Vec<SearchResult>,
    pub inquiries: Vec<SearchResult>,
    pub portfolio: Vec<SearchResult>,

    /// Sum of all group sizes
    pub total_results: usize,
}

impl SearchResults {
    /// Whether the query produced no hits at all.
    pub fn is_empty(&self) -> bool {
        self.total_results == 0
    }

    /// Iterate all groups in stable entity-type order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.events
            .iter()
            .chain(self.services.iter())
            .chain(self.clients.iter())
            .chain(self.inquiries.iter())
            .chain(self.portfolio.iter())
    }

    /// Append a hit to its type group. Call `finalize` once all hits are in.
    pub(crate) fn push(&mut self, result: SearchResult) {
        let group = match result.record_type {
            RecordType::Event => &mut self.events,
            RecordType::Service => &mut self.services,
            RecordType::Client => &mut self.clients,
            RecordType::Inquiry => &mut self.inquiries,
            RecordType::Portfolio => &mut self.portfolio,
        };
        group.push(result);
    }

    /// Sort each group by descending score and recompute the total.
    ///
    /// The sort is stable, so equal scores keep dataset input order.
    pub(crate) fn finalize(&mut self) {
        for group in [
            &mut self.events,
            &mut self.services,
            &mut self.clients,
            &mut self.inquiries,
            &mut self.portfolio,
        ] {
            group.sort_by(|a, b| {
                b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
            });
        }
        self.total_results = self.events.len()
            + self.services.len()
            + self.clients.len()
            + self.inquiries.len()
            + self.portfolio.len();
    }
}
