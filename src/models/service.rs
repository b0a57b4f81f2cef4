//! Service model representing a decoration service offered to clients.

use serde::{Deserialize, Serialize};

/// A decoration service listed on the marketing site and managed in the back-office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Service {
    /// Unique identifier for the service
    pub id: String,

    /// Display name (e.g. "Garden Lighting Package")
    pub name: String,

    /// Free-text description of what the service includes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Service category (e.g. "Lighting", "Floral")
    pub category: String,

    /// Base price in the business currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Pricing unit (e.g. "per event", "per hour")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,

    /// Whether the service is highlighted on the marketing site
    pub featured: bool,

    /// Whether the service is currently offered
    pub active: bool,
}

impl Service {
    /// Create a new service with minimal required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            ..Default::default()
        }
    }
}
