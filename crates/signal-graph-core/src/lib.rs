//! Signal Graph Core Library
//!
//! Clustering and hypothesis/graph synthesis engine for short textual
//! signals (news headline + source URL). One pass over an in-memory
//! batch builds a term-vector space over the titles, retains pairwise
//! cosine-similarity edges above a threshold, extracts connected
//! components, selects a bounded working cluster, tags signals against a
//! keyword ontology and composes a short, strictly-derived hypothesis
//! plus a node/edge graph for visualization.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Signal`, `Concept`, `ScenarioGraph`, `SimilarityEdge`)
//! - The pipeline stages (`vectorize`, `similarity`, `cluster`,
//!   `tagging`, `hypothesis`, `assemble`)
//! - The single entry point [`pipeline::process`]
//! - Error types and configuration structures
//!
//! The core holds no state between invocations: the vector space is
//! batch-local and recomputed every call, so identical input always
//! yields identical output. All I/O (feed acquisition, persistence)
//! belongs to collaborator crates and completes before the core runs.
//!
//! # Example
//!
//! ```
//! use signal_graph_core::config::PipelineConfig;
//! use signal_graph_core::types::{Concept, Signal};
//!
//! let mut signals = vec![
//!     Signal::new("Seca afeta safra de soja", "https://example.org/a"),
//!     Signal::new("Safra de soja é afetada pela seca", "https://example.org/b"),
//! ];
//! let concepts = vec![Concept::new("Clima", vec!["seca".into()])];
//!
//! let outcome = signal_graph_core::pipeline::process(
//!     &mut signals,
//!     &concepts,
//!     &PipelineConfig::default(),
//! ).unwrap();
//! assert_eq!(outcome.clusters.len(), 1);
//! ```

pub mod assemble;
pub mod cluster;
pub mod config;
pub mod error;
pub mod hypothesis;
pub mod pipeline;
pub mod similarity;
pub mod tagging;
pub mod types;
pub mod vectorize;

// Re-exports for convenience
pub use config::{Config, PipelineConfig};
pub use error::{CoreError, CoreResult};
pub use pipeline::{process, PipelineOutcome};
pub use types::{Concept, ScenarioGraph, Signal};
