//! Ontology tagging: keyword substring matching over signal titles.

use crate::types::{Concept, Signal};

/// Assign ontology concepts to each signal in place.
///
/// A concept matches when any of its lowercased keywords occurs as a
/// substring of the lowercased title; no fuzzy matching, no ranking.
/// Matched names are stored sorted lexicographically and deduplicated
/// for determinism. Zero matches leaves `concepts` empty, which is a
/// valid outcome. Independent of the clustering stages.
pub fn tag_signals(signals: &mut [Signal], concepts: &[Concept]) {
    for signal in signals.iter_mut() {
        let title = signal.title.to_lowercase();
        let mut tags: Vec<String> = concepts
            .iter()
            .filter(|concept| {
                concept
                    .keywords_lc
                    .iter()
                    .any(|keyword| !keyword.is_empty() && title.contains(keyword.as_str()))
            })
            .map(|concept| concept.name.clone())
            .collect();
        tags.sort();
        tags.dedup();
        signal.concepts = tags;
    }
}
