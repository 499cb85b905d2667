//! Book-name and translation registries.
//!
//! The registries are the static data backbone of the resolver: bilingual
//! alias tables mapping free-form book spellings to canonical entries, the
//! canonical book table with external codes, and the translation-code table
//! for API.Bible edition ids. All tables are compiled into the binary and
//! indexed once at registry construction; nothing is mutated afterwards.
//!
//! ## Lookup Order
//!
//! [`BookRegistry::normalize`] checks, in order:
//!
//! 1. the German/abbreviation table (the larger, more specific one),
//! 2. the English abbreviation table,
//! 3. a case-insensitive match against canonical English display names.
//!
//! There is no fuzzy matching: an unrecognized spelling resolves to `None`,
//! never to a guess.
//!
//! ## Example
//!
//! ```rust
//! use verse_resolver::registry::BookRegistry;
//!
//! let registry = BookRegistry::new();
//!
//! let book = registry.normalize("1. Mose").unwrap();
//! assert_eq!(book.as_str(), "Genesis");
//! assert_eq!(registry.external_code(&book), Some("GEN"));
//! ```

pub mod aliases;
pub mod books;
pub mod store;
pub mod translations;

pub use store::BookRegistry;
