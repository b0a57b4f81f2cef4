//! Inquiry model representing a message submitted through the marketing site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Handling status of an inquiry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Not yet looked at
    #[default]
    New,
    /// Admin has reached out to the sender
    Contacted,
    /// A quote has been sent
    Quoted,
    /// Inquiry turned into a booking
    Booked,
    /// Inquiry was closed without a booking
    Closed,
}

impl InquiryStatus {
    /// Human-readable label for list and detail screens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Quoted => "quoted",
            Self::Booked => "booked",
            Self::Closed => "closed",
        }
    }

    /// Badge color used by the admin UI.
    pub fn color(&self) -> &'static str {
        match self {
            Self::New => "orange",
            Self::Contacted => "blue",
            Self::Quoted => "purple",
            Self::Booked => "green",
            Self::Closed => "gray",
        }
    }
}

/// A visitor inquiry submitted through the public contact form.
///
/// The `message` field is untrusted visitor input; the search layer
/// strips any markup from it before matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Inquiry {
    /// Unique identifier for the inquiry
    pub id: String,

    /// Name of the person who sent the inquiry
    pub name: String,

    /// Sender's email address
    pub email: String,

    /// Sender's phone number, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// What kind of event the inquiry is about (e.g. "Wedding")
    pub event_type: String,

    /// The free-text message body
    pub message: String,

    /// Requested event date, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,

    /// Current handling status
    pub status: InquiryStatus,

    /// When the inquiry was received (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<String>,
}

impl Inquiry {
    /// Create a new inquiry with minimal required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_new() {
        let inquiry = Inquiry::new("i1", "Ana Lopez");
        assert_eq!(inquiry.id, "i1");
        assert_eq!(inquiry.status, InquiryStatus::New);
        assert!(inquiry.message.is_empty());
    }

    #[test]
    fn test_inquiry_status_lookup() {
        assert_eq!(InquiryStatus::Quoted.label(), "quoted");
        assert_eq!(InquiryStatus::Booked.color(), "green");
    }

    #[test]
    fn test_inquiry_status_roundtrip() {
        let json = serde_json::to_string(&InquiryStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");
        let status: InquiryStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, InquiryStatus::Contacted);
    }
}
