//! Event model representing a booked or planned decoration event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planning status of an event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Event is planned but not yet confirmed by the client
    #[default]
    Planned,
    /// Client has confirmed the booking
    Confirmed,
    /// Decoration work is done
    Completed,
    /// Booking was cancelled
    Cancelled,
}

impl EventStatus {
    /// Human-readable label for list and detail screens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Badge color used by the admin UI.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Planned => "blue",
            Self::Confirmed => "green",
            Self::Completed => "gray",
            Self::Cancelled => "red",
        }
    }
}

/// A decoration event managed through the back-office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Event {
    /// Unique identifier for the event
    pub id: String,

    /// Display title (e.g. "Elegant Garden Wedding")
    pub title: String,

    /// Free-text description of the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Event category (e.g. "Weddings", "Corporate")
    pub category: String,

    /// Scheduled date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Venue or location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Name of the client the event belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Agreed budget in the business currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Expected number of guests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,

    /// Current planning status
    pub status: EventStatus,

    /// When the event was created (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Event {
    /// Create a new event with minimal required fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}
