//! Ontology concept: a named tag with associated trigger keywords.

use serde::{Deserialize, Serialize};

/// A named ontology concept.
///
/// Supplied by the ontology collaborator and read-only to the core. The
/// lowercase keyword cache is derived, not persisted; loaders rebuild it
/// after deserialization via [`Concept::refresh_cache`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Display name assigned to matching signals.
    pub name: String,

    /// Trigger keywords as authored in the ontology file.
    pub keywords: Vec<String>,

    /// Lowercased keyword cache used for matching.
    #[serde(skip)]
    pub keywords_lc: Vec<String>,
}

impl Concept {
    /// Create a concept with its lowercase cache built.
    pub fn new(name: impl Into<String>, keywords: Vec<String>) -> Self {
        let mut concept = Self {
            name: name.into(),
            keywords,
            keywords_lc: Vec::new(),
        };
        concept.refresh_cache();
        concept
    }

    /// Rebuild the lowercase keyword cache from `keywords`.
    pub fn refresh_cache(&mut self) {
        self.keywords_lc = self.keywords.iter().map(|k| k.to_lowercase()).collect();
    }
}
