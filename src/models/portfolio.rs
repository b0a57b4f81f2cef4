//! Portfolio item model representing a published past-work entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A portfolio entry shown on the marketing site's gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PortfolioItem {
    /// Unique identifier for the portfolio item
    pub id: String,

    /// Display title (e.g. "Rose Garden Wedding")
    pub title: String,

    /// Free-text description of the work shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category (e.g. "Weddings", "Birthdays")
    pub category: String,

    /// Tags used for gallery filtering
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Date of the event the entry documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,

    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Whether the entry is highlighted on the landing page
    pub featured: bool,
}

impl PortfolioItem {
    /// Create a new portfolio item with minimal required fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}
