//! Parsers for free-text citations and chat commands.
//!
//! This module provides:
//!
//! - [`ReferenceParser`]: turns raw text like `"1. Mose 5,14"` into a
//!   structured [`ScriptureReference`]
//! - [`CommandExtractor`]: recognizes `!bible` / `!bibel` chat commands with
//!   an optional translation code in front of the reference
//!
//! ## Grammar
//!
//! A citation is `<book-token> <chapter><sep><verse>[<range>]` where:
//!
//! | Part | Accepted forms |
//! |------|----------------|
//! | book-token | one or two words, optional leading numeral with optional period |
//! | sep | `:` or `,` or whitespace, mixed runs allowed |
//! | range | `-<verse>` or `-<chapter><sep><verse>`, `-` or `–` |
//!
//! Matching is anchored at the start of the (trimmed) input only; trailing
//! text after a well-formed citation is ignored. Both parsers report misses
//! as `None`: malformed input is an expected outcome, never a fault.
//!
//! ## Example
//!
//! ```rust
//! use verse_resolver::parsing::reference::ReferenceParser;
//! use verse_resolver::registry::BookRegistry;
//!
//! let registry = BookRegistry::new();
//! let parser = ReferenceParser::new(&registry);
//!
//! let reference = parser.parse("Matt 5:3-7:12").unwrap();
//! assert_eq!(reference.to_string(), "Matthew 5:3-7:12");
//! ```
//!
//! [`ReferenceParser`]: reference::ReferenceParser
//! [`ScriptureReference`]: crate::core::reference::ScriptureReference
//! [`CommandExtractor`]: command::CommandExtractor

pub mod command;
pub mod reference;
