//! The term store: every defined term and its definition text.
//!
//! Built once per run by the parser, then treated as read-only by ordering
//! and rendering. The store itself enforces nothing about duplicates; the
//! parser owns that policy and uses [`Glossary::contains`] before inserting.

use std::collections::HashMap;

/// Mapping from term to definition text.
///
/// The set of known terms is always derived from the map's keys, so the two
/// views cannot diverge.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: HashMap<String, String>,
}

impl Glossary {
    /// Create an empty glossary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term with its definition.
    ///
    /// Returns the previous definition if the term was already present.
    pub fn insert(&mut self, term: String, definition: String) -> Option<String> {
        self.entries.insert(term, definition)
    }

    /// Look up the definition for a term.
    #[must_use]
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Whether a term is defined.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Number of defined terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the glossary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The term set, in no particular order.
    #[must_use]
    pub fn terms(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate over (term, definition) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, d)| (t.as_str(), d.as_str()))
    }
}
