//! Scenario graph assembly.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphEdge, GraphNode, NodeKind, ScenarioGraph, Signal, SimilarityEdge};

/// Display title for the assembled graph.
pub const GRAPH_TITLE: &str = "Cluster de Cenários Antecipativo";

/// Node id of the synthetic hub.
const HUB_ID: &str = "hub";

/// Assemble the node/edge structure for the working selection.
///
/// The hub node is emitted first with the hypothesis as its label, then
/// one node per selected signal in selection order carrying title,
/// source URL and tagged concepts. Every signal node gets exactly one
/// hub edge; the similarity edges with both endpoints in the selection
/// are mapped through the absolute-index to local-id table and
/// deduplicated by unordered pair.
///
/// An empty selection produces the explicit no-data output: empty nodes
/// and edges around the fixed hypothesis text.
pub fn assemble_graph(
    selection: &[usize],
    hypothesis: &str,
    edges: &[SimilarityEdge],
    signals: &[Signal],
) -> ScenarioGraph {
    if selection.is_empty() {
        return ScenarioGraph {
            title: GRAPH_TITLE.to_string(),
            hypothesis: hypothesis.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
        };
    }

    let mut nodes = Vec::with_capacity(selection.len() + 1);
    nodes.push(GraphNode {
        id: HUB_ID.to_string(),
        label: hypothesis.to_string(),
        kind: NodeKind::Hub,
        source: None,
        concepts: None,
    });

    let mut local_ids: HashMap<usize, String> = HashMap::with_capacity(selection.len());
    for (local, &absolute) in selection.iter().enumerate() {
        let id = format!("s{local}");
        let signal = &signals[absolute];
        nodes.push(GraphNode {
            id: id.clone(),
            label: signal.title.clone(),
            kind: NodeKind::Signal,
            source: Some(signal.source.clone()),
            concepts: Some(signal.concepts.clone()),
        });
        local_ids.insert(absolute, id);
    }

    let mut graph_edges = Vec::with_capacity(selection.len());
    for local in 0..selection.len() {
        graph_edges.push(GraphEdge {
            source_id: HUB_ID.to_string(),
            target_id: format!("s{local}"),
        });
    }

    let mut seen_pairs: HashSet<(usize, usize)> = HashSet::new();
    for edge in edges {
        let (Some(a), Some(b)) = (local_ids.get(&edge.i), local_ids.get(&edge.j)) else {
            continue;
        };
        let key = (edge.i.min(edge.j), edge.i.max(edge.j));
        if seen_pairs.insert(key) {
            graph_edges.push(GraphEdge {
                source_id: a.clone(),
                target_id: b.clone(),
            });
        }
    }

    ScenarioGraph {
        title: GRAPH_TITLE.to_string(),
        hypothesis: hypothesis.to_string(),
        nodes,
        edges: graph_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Signal;

    fn signals(n: usize) -> Vec<Signal> {
        (0..n)
            .map(|i| Signal::new(format!("título {i}"), format!("https://example.org/{i}")))
            .collect()
    }

    fn edge(i: usize, j: usize) -> SimilarityEdge {
        SimilarityEdge { i, j, score: 0.5 }
    }

    #[test]
    fn test_empty_selection_yields_no_data_output() {
        let graph = assemble_graph(&[], "Sem dados suficientes para hipótese.", &[], &[]);
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert_eq!(graph.title, GRAPH_TITLE);
    }

    #[test]
    fn test_hub_emitted_first() {
        let graph = assemble_graph(&[0, 1], "hipótese", &[], &signals(2));
        assert_eq!(graph.nodes[0].kind, NodeKind::Hub);
        assert_eq!(graph.nodes[0].label, "hipótese");
        assert_eq!(graph.nodes.len(), 3);
    }

    #[test]
    fn test_every_signal_node_has_one_hub_edge() {
        let graph = assemble_graph(&[2, 0, 1], "h", &[], &signals(3));
        for node in graph.signal_nodes() {
            let hub_edges = graph
                .edges
                .iter()
                .filter(|e| e.source_id == "hub" && e.target_id == node.id)
                .count();
            assert_eq!(hub_edges, 1, "node {} must have exactly one hub edge", node.id);
        }
        println!("[PASS] hub connectivity for {} nodes", graph.signal_nodes().count());
    }

    #[test]
    fn test_similarity_edges_restricted_to_selection() {
        // Edge (0,3) leaves the selection and must not appear.
        let graph = assemble_graph(
            &[0, 1],
            "h",
            &[edge(0, 1), edge(0, 3)],
            &signals(4),
        );
        let signal_edges: Vec<_> = graph
            .edges
            .iter()
            .filter(|e| e.source_id != "hub")
            .collect();
        assert_eq!(signal_edges.len(), 1);
        assert_eq!(signal_edges[0].source_id, "s0");
        assert_eq!(signal_edges[0].target_id, "s1");
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let graph = assemble_graph(
            &[0, 1],
            "h",
            &[edge(0, 1), edge(0, 1)],
            &signals(2),
        );
        let signal_edges = graph.edges.iter().filter(|e| e.source_id != "hub").count();
        assert_eq!(signal_edges, 1);
    }

    #[test]
    fn test_local_ids_follow_selection_order() {
        let graph = assemble_graph(&[5, 2], "h", &[edge(2, 5)], &signals(6));
        assert_eq!(graph.nodes[1].id, "s0");
        assert_eq!(graph.nodes[1].label, "título 5");
        assert_eq!(graph.nodes[2].id, "s1");
        assert_eq!(graph.nodes[2].label, "título 2");
        // The (2,5) edge maps through the id table.
        let mapped = graph.edges.iter().any(|e| {
            (e.source_id == "s1" && e.target_id == "s0")
                || (e.source_id == "s0" && e.target_id == "s1")
        });
        assert!(mapped);
    }

    #[test]
    fn test_signal_nodes_carry_source_and_concepts() {
        let mut batch = signals(1);
        batch[0].concepts = vec!["Clima".to_string()];
        let graph = assemble_graph(&[0], "h", &[], &batch);
        let node = &graph.nodes[1];
        assert_eq!(node.source.as_deref(), Some("https://example.org/0"));
        assert_eq!(node.concepts.as_deref(), Some(&["Clima".to_string()][..]));
    }
}
