//! Tagged union over the five searchable entity types.
//!
//! The matcher never dispatches on type strings: every per-type operation
//! (field extraction, display metadata) is an exhaustive match, so adding
//! an entity type is a compile error until all of them are handled.

use crate::models::{Client, Event, Inquiry, PortfolioItem, Service};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The entity type a search result originated from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Event,
    Service,
    Client,
    Inquiry,
    Portfolio,
}

impl RecordType {
    /// Human-readable label for result tabs and counts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Event => "events",
            Self::Service => "services",
            Self::Client => "clients",
            Self::Inquiry => "inquiries",
            Self::Portfolio => "portfolio",
        }
    }
}

/// A borrowed view of one searchable record.
///
/// The search core only ever reads a snapshot supplied per call, so records
/// are held by reference; nothing here outlives the dataset being searched.
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    Event(&'a Event),
    Service(&'a Service),
    Client(&'a Client),
    Inquiry(&'a Inquiry),
    Portfolio(&'a PortfolioItem),
}

impl<'a> Record<'a> {
    /// Unique identifier within the record's own collection.
    pub fn id(&self) -> &'a str {
        match self {
            Self::Event(e) => &e.id,
            Self::Service(s) => &s.id,
            Self::Client(c) => &c.id,
            Self::Inquiry(i) => &i.id,
            Self::Portfolio(p) => &p.id,
        }
    }

    /// Entity type tag for grouping.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Event(_) => RecordType::Event,
            Self::Service(_) => RecordType::Service,
            Self::Client(_) => RecordType::Client,
            Self::Inquiry(_) => RecordType::Inquiry,
            Self::Portfolio(_) => RecordType::Portfolio,
        }
    }

    /// Primary display field; matches against it carry the highest weight.
    pub fn title(&self) -> &'a str {
        match self {
            Self::Event(e) => &e.title,
            Self::Service(s) => &s.name,
            Self::Client(c) => &c.name,
            Self::Inquiry(i) => &i.name,
            Self::Portfolio(p) => &p.title,
        }
    }

    /// Longer free-text field, shown highlighted under the title.
    ///
    /// For inquiries this is the visitor-typed message, which the matcher
    /// sanitizes before use.
    pub fn description(&self) -> Option<&'a str> {
        match self {
            Self::Event(e) => e.description.as_deref(),
            Self::Service(s) => s.description.as_deref(),
            Self::Client(c) => c.notes.as_deref(),
            Self::Inquiry(i) => Some(&i.message),
            Self::Portfolio(p) => p.description.as_deref(),
        }
    }

    /// Remaining searchable fields (category, tags, contact details).
    ///
    /// Matches here carry the lowest weight. Missing optional fields are
    /// simply absent, never errors.
    pub fn secondary_fields(&self) -> Vec<&'a str> {
        match self {
            Self::Event(e) => {
                let mut fields = vec![e.category.as_str()];
                fields.extend(e.location.as_deref());
                fields.extend(e.client_name.as_deref());
                fields
            }
            Self::Service(s) => {
                let mut fields = vec![s.category.as_str()];
                fields.extend(s.price_unit.as_deref());
                fields
            }
            Self::Client(c) => {
                let mut fields = Vec::new();
                fields.extend(c.email.as_deref());
                fields.extend(c.phone.as_deref());
                fields.extend(c.company.as_deref());
                fields
            }
            Self::Inquiry(i) => {
                let mut fields = vec![i.event_type.as_str(), i.email.as_str()];
                fields.extend(i.phone.as_deref());
                fields
            }
            Self::Portfolio(p) => {
                let mut fields = vec![p.category.as_str()];
                fields.extend(p.tags.iter().map(String::as_str));
                fields
            }
        }
    }

    /// Display-only metadata surfaced next to a search hit.
    ///
    /// Never used for ranking; the presentation layer renders it verbatim.
    pub fn display_metadata(&self) -> Map<String, Value> {
        let mut meta = Map::new();
        match self {
            Self::Event(e) => {
                meta.insert("category".to_string(), json!(e.category));
                meta.insert("status".to_string(), json!(e.status.label()));
                meta.insert("status_color".to_string(), json!(e.status.color()));
                if let Some(date) = e.date {
                    meta.insert("date".to_string(), json!(date.to_string()));
                }
                if let Some(budget) = e.budget {
                    meta.insert("budget".to_string(), json!(budget));
                }
                if let Some(guests) = e.guest_count {
                    meta.insert("guest_count".to_string(), json!(guests));
                }
            }
            Self::Service(s) => {
                meta.insert("category".to_string(), json!(s.category));
                meta.insert("featured".to_string(), json!(s.featured));
                if let Some(price) = s.price {
                    meta.insert("price".to_string(), json!(price));
                }
                if let Some(ref unit) = s.price_unit {
                    meta.insert("price_unit".to_string(), json!(unit));
                }
            }
            Self::Client(c) => {
                meta.insert("event_count".to_string(), json!(c.event_count));
                if let Some(ref company) = c.company {
                    meta.insert("company".to_string(), json!(company));
                }
                if let Some(spend) = c.total_spend {
                    meta.insert("total_spend".to_string(), json!(spend));
                }
            }
            Self::Inquiry(i) => {
                meta.insert("event_type".to_string(), json!(i.event_type));
                meta.insert("status".to_string(), json!(i.status.label()));
                meta.insert("status_color".to_string(), json!(i.status.color()));
                if let Some(date) = i.event_date {
                    meta.insert("event_date".to_string(), json!(date.to_string()));
                }
            }
            Self::Portfolio(p) => {
                meta.insert("category".to_string(), json!(p.category));
                meta.insert("featured".to_string(), json!(p.featured));
                if !p.tags.is_empty() {
                    meta.insert("tags".to_string(), json!(p.tags));
                }
                if let Some(date) = p.event_date {
                    meta.insert("event_date".to_string(), json!(date.to_string()));
                }
            }
        }
        meta
    }
}

/// In-memory snapshot of all five searchable collections.
///
/// Supplied to the matcher per call by the CRUD pages that own the
/// collections; the search core never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Dataset {
    pub events: Vec<Event>,
    pub services: Vec<Service>,
    pub clients: Vec<Client>,
    pub inquiries: Vec<Inquiry>,
    pub portfolio: Vec<PortfolioItem>,
}

impl Dataset {
    /// Iterate all records in stable collection order.
    ///
    /// Ties in score resolve to this order, which makes ranking
    /// deterministic across calls.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.events
            .iter()
            .map(Record::Event)
            .chain(self.services.iter().map(Record::Service))
            .chain(self.clients.iter().map(Record::Client))
            .chain(self.inquiries.iter().map(Record::Inquiry))
            .chain(self.portfolio.iter().map(Record::Portfolio))
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.events.len()
            + self.services.len()
            + self.clients.len()
            + self.inquiries.len()
            + self.portfolio.len()
    }

    /// Whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
