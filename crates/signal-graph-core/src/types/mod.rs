//! Domain types shared across the pipeline stages.
//!
//! - [`Signal`] - one collected headline+source item
//! - [`Concept`] - a named ontology tag with trigger keywords
//! - [`SimilarityEdge`] / [`Cluster`] - the similarity graph structure
//! - [`ScenarioGraph`] and friends - the node/edge output for visualization

mod concept;
mod graph;
mod signal;

pub use concept::Concept;
pub use graph::{GraphEdge, GraphNode, NodeKind, ScenarioGraph};
pub use signal::Signal;

use serde::{Deserialize, Serialize};

/// An undirected similarity edge between two signal indices.
///
/// Present only when `score` meets the configured threshold. The
/// invariant `i < j` holds for every edge the pipeline emits, and
/// `score` stays in `[0, 1]` since term weights are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEdge {
    /// Lower signal index.
    pub i: usize,
    /// Higher signal index.
    pub j: usize,
    /// Cosine similarity between the two title vectors.
    pub score: f32,
}

/// One connected component of the similarity graph, members in
/// traversal construction order.
pub type Cluster = Vec<usize>;
