//! HTTP client for the API.Bible passage service.
//!
//! The client is the only networked collaborator of the core pipeline: it
//! consumes the API token produced by
//! [`ScriptureReference::api_token`](crate::core::reference::ScriptureReference::api_token)
//! and an edition id from
//! [`registry::translations`](crate::registry::translations), and returns
//! plain passage text with markup stripped.
//!
//! Failures surface as [`ApiError`](client::ApiError); verse-not-found and
//! bad-key cases get their own variants because the chat layer words them
//! differently.

pub mod client;
pub mod models;
pub mod text;

pub use client::{ApiError, BibleApiClient};
pub use models::{BibleSummary, Passage};
