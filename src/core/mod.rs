//! Core translation engine.
//!
//! ## Module Structure
//!
//! - `discover`: scans extensions for lang files and builds the language catalog
//! - `registry`: the immutable [`Registry`] and the request-scoped [`Session`]
//! - `resolve`: ordered lookup strategies (namespaced, then flat, then the source string)
//! - `format`: printf-style placeholder substitution
//! - `datetime`: month/day name localization and standardization
//! - `slug`: handle and filename builders
//! - `parsers`: lang file, datetime and transliteration file parsing

pub mod datetime;
pub mod dictionary;
pub mod discover;
pub mod format;
pub mod host;
pub mod language;
pub mod parsers;
pub mod registry;
pub mod resolve;
pub mod slug;
pub mod transliteration;

pub use datetime::DatetimeDictionary;
pub use dictionary::{Dictionary, Entry};
pub use format::{FormatError, Insert};
pub use host::{ConfigHost, Host};
pub use language::{Catalog, LanguageInfo};
pub use registry::{Activation, Registry, RegistryOptions, Session};
pub use resolve::{Lookup, Resolved};
pub use slug::HandleOptions;
pub use transliteration::{Transliteration, TransliterationTable};
