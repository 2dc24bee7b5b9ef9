//! Langkit - runtime translation for extension-based applications
//!
//! Langkit discovers language packs shipped by installed extensions, activates
//! one language per session and translates strings, dates and URL handles with
//! the merged dictionary.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Language discovery, activation and translation

pub mod cli;
pub mod config;
pub mod core;
