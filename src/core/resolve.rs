//! Translation lookup.
//!
//! A string is looked up by each strategy in [`RESOLUTION_ORDER`]; the first hit
//! wins and a miss everywhere returns the source string itself.

use std::fmt;

use crate::core::{Dictionary, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// `dictionary[namespace][key]`, only for a non-blank namespace.
    Namespaced,
    /// `dictionary[key]` when it holds plain text.
    Flat,
}

pub const RESOLUTION_ORDER: [Lookup; 2] = [Lookup::Namespaced, Lookup::Flat];

impl Lookup {
    pub fn find<'d>(
        self,
        dictionary: &'d Dictionary,
        key: &str,
        namespace: Option<&str>,
    ) -> Option<&'d str> {
        match self {
            Lookup::Namespaced => {
                let namespace = namespace.filter(|ns| !ns.trim().is_empty())?;
                dictionary.get(namespace)?.get(key)
            }
            Lookup::Flat => dictionary.get(key).and_then(Entry::as_text),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Namespaced => write!(f, "namespaced"),
            Lookup::Flat => write!(f, "flat"),
        }
    }
}

/// Result of a lookup; `lookup` is `None` when the source string was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub text: &'a str,
    pub lookup: Option<Lookup>,
}

impl Resolved<'_> {
    pub fn is_translated(&self) -> bool {
        self.lookup.is_some()
    }
}

pub fn resolve<'a>(
    dictionary: &'a Dictionary,
    key: &'a str,
    namespace: Option<&str>,
) -> Resolved<'a> {
    RESOLUTION_ORDER
        .iter()
        .find_map(|lookup| {
            lookup
                .find(dictionary, key, namespace)
                .map(|text| Resolved {
                    text,
                    lookup: Some(*lookup),
                })
        })
        .unwrap_or(Resolved {
            text: key,
            lookup: None,
        })
}
