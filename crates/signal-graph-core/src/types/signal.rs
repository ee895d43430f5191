//! Signal type: one collected headline+source item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single collected signal.
///
/// Created by the acquisition layer and held in an in-memory ordered
/// sequence for the duration of one processing pass. Identity for
/// deduplication is the `source` URL. The tagger rewrites `concepts` in
/// place; every other field is immutable within the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Headline text as published by the feed.
    pub title: String,

    /// Source URL; identity for deduplication.
    pub source: String,

    /// When the acquisition layer collected this signal.
    pub collected_at: DateTime<Utc>,

    /// Ontology concept names assigned by the tagger.
    /// Sorted lexicographically, no duplicates; empty until tagging runs.
    #[serde(default)]
    pub concepts: Vec<String>,
}

impl Signal {
    /// Create a signal collected now, with no concepts assigned yet.
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            collected_at: Utc::now(),
            concepts: Vec::new(),
        }
    }
}
