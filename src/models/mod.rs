//! Data models for the back-office entities eligible for search.
//!
//! This module contains the five entity types owned by the CRUD pages,
//! the closed `Record` union the matcher operates on, and the `Dataset`
//! snapshot supplied to each search call.

pub mod client;
pub mod event;
pub mod inquiry;
pub mod portfolio;
pub mod record;
pub mod service;

pub use client::Client;
pub use event::{Event, EventStatus};
pub use inquiry::{Inquiry, InquiryStatus};
pub use portfolio::PortfolioItem;
pub use record::{Dataset, Record, RecordType};
pub use service::Service;
