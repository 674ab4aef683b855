//! Instagram Graph API client for detail fetches.
//!
//! Comment notifications only carry identifiers; the full comment and
//! post records are fetched from the Graph API before an event is
//! forwarded downstream.

pub mod client;
pub mod types;

pub use client::{FetchError, GraphClient};
pub use types::{CommentDetails, MediaDetails};
