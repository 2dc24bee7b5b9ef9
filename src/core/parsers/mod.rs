//! File parsers for language data.
//!
//! - `json`: lang files (`lang.<code>.json`), the datetime token list and the
//!   default transliteration table

pub mod json;
