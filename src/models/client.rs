//! Client model representing a customer of the decoration business.

use serde::{Deserialize, Serialize};

/// A client managed through the back-office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Client {
    /// Unique identifier for the client
    pub id: String,

    /// Full name of the client
    pub name: String,

    /// Primary email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Primary phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company or organization, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Internal notes about the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Number of events booked by this client
    pub event_count: u32,

    /// Lifetime spend in the business currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spend: Option<f64>,

    /// When the client was created (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Client {
    /// Create a new client with minimal required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}
