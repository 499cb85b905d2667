//! # verse-resolver
//!
//! A library for resolving free-text Bible citations into structured
//! references and fetching the cited passages from API.Bible.
//!
//! Users cite scripture in many conventions: English abbreviations
//! ("Gen 1:1"), German full names with comma separators ("1. Mose 5,14"),
//! mixed forms, verse ranges, and ranges across chapters. `verse-resolver`
//! normalizes all of these against a bilingual registry of the 66 canonical
//! books and renders the result both as a display string and as the passage
//! token the API.Bible service expects.
//!
//! ## Features
//!
//! - **Bilingual normalization**: German and English names, abbreviations,
//!   and the numbered-book spelling variants
//! - **Range handling**: verse ranges and cross-chapter ranges
//! - **Bidirectional formatting**: display strings and API passage tokens
//! - **Chat commands**: `!bible` / `!bibel` extraction with optional
//!   translation codes
//! - **Passage fetch**: async API.Bible client with markup cleanup
//!
//! ## Example
//!
//! ```rust
//! use verse_resolver::{BookRegistry, ReferenceParser};
//!
//! let registry = BookRegistry::new();
//! let parser = ReferenceParser::new(&registry);
//!
//! let reference = parser.parse("1. Mose 5,14").unwrap();
//! assert_eq!(reference.to_string(), "Genesis 5:14");
//! assert_eq!(reference.api_token(&registry).as_deref(), Some("GEN.5.14"));
//!
//! let range = parser.parse("Matt 5:3-7:12").unwrap();
//! assert_eq!(range.api_token(&registry).as_deref(), Some("MAT.5.3-MAT.7.12"));
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: Book-name and translation registries
//! - [`core`]: Core data types for references and books
//! - [`parsing`]: Reference parser and chat-command extraction
//! - [`api`]: HTTP client for the API.Bible service
//! - [`bot`]: Chat-command responder
//! - [`cli`]: Command-line interface implementation

pub mod api;
pub mod bot;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod registry;

// Re-export commonly used types for convenience
pub use api::client::{ApiError, BibleApiClient};
pub use api::models::{BibleSummary, Passage};
pub use bot::Responder;
pub use core::reference::ScriptureReference;
pub use core::types::{BookName, Language, Testament};
pub use parsing::command::{Command, CommandExtractor, CommandMessage};
pub use parsing::reference::ReferenceParser;
pub use registry::store::BookRegistry;
