//! Keyword ontology loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use signal_graph_core::types::Concept;

/// On-disk ontology shape: a flat list of named concepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OntologyFile {
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

/// Load the concept list from a JSON ontology file.
///
/// Tolerant like the signal store: a missing or corrupt file yields the
/// empty ontology with a warning, and the tagger simply assigns no
/// concepts. The lowercase keyword cache is rebuilt after
/// deserialization since it is derived, not persisted.
pub fn load_ontology(path: &Path) -> Vec<Concept> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            warn!(path = %path.display(), "ontology file missing, tagging disabled");
            return Vec::new();
        }
    };
    let parsed: OntologyFile = match serde_json::from_str(&content) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt ontology file, tagging disabled");
            return Vec::new();
        }
    };

    let mut concepts = parsed.concepts;
    for concept in concepts.iter_mut() {
        concept.refresh_cache();
    }
    concepts
}
