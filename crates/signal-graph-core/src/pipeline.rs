//! The single pipeline entry point tying the core stages together.
//!
//! Order of operations: validate config and inputs, tag against the
//! ontology, vectorize titles, build the similarity graph, extract
//! clusters, select the working set, synthesize the hypothesis and
//! assemble the scenario graph. Tagging has no data dependency on the
//! clustering stages; it simply runs first here since every call is a
//! bounded in-memory computation.

use serde::Serialize;
use tracing::debug;

use crate::assemble::assemble_graph;
use crate::cluster::{connected_components, select_working};
use crate::config::PipelineConfig;
use crate::error::{CoreError, CoreResult};
use crate::hypothesis::synthesize;
use crate::similarity::build_edges;
use crate::tagging::tag_signals;
use crate::types::{Cluster, Concept, ScenarioGraph, Signal, SimilarityEdge};
use crate::vectorize::vectorize;

/// Everything one pipeline pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    /// Connected components, largest first; partitions the input indices.
    pub clusters: Vec<Cluster>,
    /// The bounded working selection of signal indices.
    pub selection: Vec<usize>,
    /// Similarity edges at or above the configured threshold.
    pub edges: Vec<SimilarityEdge>,
    /// The synthesized hypothesis sentence.
    pub hypothesis: String,
    /// The assembled node/edge structure for visualization.
    pub graph: ScenarioGraph,
}

/// Run one full pass over an in-memory batch.
///
/// Signals are tagged in place; everything else is returned. The core
/// retains no state between invocations - the vector space is
/// batch-local and recomputed on every call - so repeating the call with
/// identical input yields identical output.
///
/// Degenerate inputs degrade, never fail: an empty batch produces the
/// no-data graph, a single signal becomes a singleton cluster with no
/// edges, and a batch with no similar pairs yields singleton clusters.
///
/// # Errors
///
/// `CoreError::Config` when the configuration fails validation, and
/// `CoreError::InvalidSignal` when a signal carries a blank title (a
/// caller contract violation).
pub fn process(
    signals: &mut [Signal],
    concepts: &[Concept],
    config: &PipelineConfig,
) -> CoreResult<PipelineOutcome> {
    config.validate()?;
    for (index, signal) in signals.iter().enumerate() {
        if signal.title.trim().is_empty() {
            return Err(CoreError::InvalidSignal {
                index,
                reason: "title is empty".to_string(),
            });
        }
    }

    tag_signals(signals, concepts);

    let n = signals.len();
    let edges = if n < 2 {
        Vec::new()
    } else {
        let titles: Vec<&str> = signals.iter().map(|s| s.title.as_str()).collect();
        let vectors = vectorize(&titles, config.max_df_ratio);
        build_edges(&vectors, config.similarity_threshold)
    };

    let clusters = connected_components(n, &edges);
    let selection = select_working(&clusters, config.min_selection, config.max_selection);

    let selected_titles: Vec<&str> = selection
        .iter()
        .map(|&index| signals[index].title.as_str())
        .collect();
    let hypothesis = synthesize(
        &selected_titles,
        config.max_title_words,
        config.max_hypothesis_words,
    );
    let graph = assemble_graph(&selection, &hypothesis, &edges, signals);

    debug!(
        signals = n,
        clusters = clusters.len(),
        edges = edges.len(),
        selected = selection.len(),
        "pipeline pass complete"
    );

    Ok(PipelineOutcome {
        clusters,
        selection,
        edges,
        hypothesis,
        graph,
    })
}
