//! Scenario graph output types.

use serde::{Deserialize, Serialize};

/// Node kind in the scenario graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The synthetic node holding the hypothesis.
    Hub,
    /// A node backed by one selected signal.
    Signal,
}

/// One node of the scenario graph.
///
/// The hub node carries only `id`, `label` and `kind`; signal nodes also
/// carry their source URL and tagged concepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Vec<String>>,
}

/// One undirected edge of the scenario graph, expressed by node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source_id: String,
    pub target_id: String,
}

/// The assembled node/edge structure for visualization.
///
/// Invariants: exactly one hub node whenever any node exists; every
/// signal node has exactly one hub-incident edge; signal-signal edges
/// are the similarity edges restricted to the selection, each unordered
/// pair appearing at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioGraph {
    /// Display title for the graph.
    pub title: String,
    /// The synthesized hypothesis sentence.
    pub hypothesis: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ScenarioGraph {
    /// Iterator over the signal nodes, hub excluded.
    pub fn signal_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Signal)
    }

    /// The hub node, when the graph is non-degenerate.
    pub fn hub(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Hub)
    }
}
