//! End-to-end pipeline properties over realistic signal batches.

use signal_graph_core::config::PipelineConfig;
use signal_graph_core::hypothesis::NO_DATA_HYPOTHESIS;
use signal_graph_core::pipeline::process;
use signal_graph_core::types::{Concept, NodeKind, Signal};

fn batch(titles: &[&str]) -> Vec<Signal> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| Signal::new(*t, format!("https://example.org/{i}")))
        .collect()
}

fn agro_titles() -> Vec<&'static str> {
    vec![
        "Seca afeta safra de soja no centro-oeste",
        "Safra de soja é afetada pela seca",
        "Seca prolongada reduz safra de soja",
        "Exportações de carne bovina crescem em maio",
        "Crescem exportações de carne bovina para a Ásia",
        "Novo plano de crédito rural é anunciado",
        "Governo anuncia plano de crédito rural",
        "Chuva de granizo atinge pomares no sul",
        "Preço do milho sobe na bolsa",
        "Ferrugem asiática avança sobre lavouras de soja",
    ]
}

#[test]
fn test_clusters_partition_the_index_set() {
    let mut signals = batch(&agro_titles());
    let outcome = process(&mut signals, &[], &PipelineConfig::default()).unwrap();

    let mut all: Vec<usize> = outcome.clusters.iter().flatten().copied().collect();
    all.sort_unstable();
    let expected: Vec<usize> = (0..signals.len()).collect();
    assert_eq!(all, expected);
}

#[test]
fn test_clusters_sorted_largest_first() {
    let mut signals = batch(&agro_titles());
    let outcome = process(&mut signals, &[], &PipelineConfig::default()).unwrap();
    for pair in outcome.clusters.windows(2) {
        assert!(pair[0].len() >= pair[1].len());
    }
}

#[test]
fn test_selection_bounds_hold_for_large_batches() {
    let mut signals = batch(&agro_titles());
    let config = PipelineConfig::default();
    let outcome = process(&mut signals, &[], &config).unwrap();
    assert!(outcome.selection.len() >= config.min_selection);
    assert!(outcome.selection.len() <= config.max_selection);
}

#[test]
fn test_selection_equals_batch_for_small_batches() {
    let mut signals = batch(&["Seca no sul", "Chuva no norte", "Geada no sudeste"]);
    let outcome = process(&mut signals, &[], &PipelineConfig::default()).unwrap();
    assert_eq!(outcome.selection.len(), signals.len());
}

#[test]
fn test_hypothesis_respects_word_cap() {
    let mut signals = batch(&agro_titles());
    let config = PipelineConfig::default();
    let outcome = process(&mut signals, &[], &config).unwrap();
    assert!(outcome.hypothesis.split_whitespace().count() <= config.max_hypothesis_words);
}

#[test]
fn test_hypothesis_words_trace_back_to_selected_titles() {
    let mut signals = batch(&agro_titles());
    let outcome = process(&mut signals, &[], &PipelineConfig::default()).unwrap();

    let connectives = [
        "Tendências",
        "poderão",
        "convergir",
        "entre:",
        "a",
        "partir",
        "de:",
        "e",
    ];
    let selected_titles: Vec<&str> = outcome
        .selection
        .iter()
        .map(|&i| signals[i].title.as_str())
        .collect();

    for word in outcome.hypothesis.split_whitespace() {
        let bare: String = word
            .chars()
            .filter(|c| !matches!(c, '\'' | ',' | '.' | '…'))
            .collect();
        if bare.is_empty() || connectives.contains(&bare.as_str()) {
            continue;
        }
        assert!(
            selected_titles.iter().any(|t| t.contains(&bare)),
            "hypothesis word '{bare}' does not come from a selected title"
        );
    }
}

#[test]
fn test_graph_connectivity_invariants() {
    let mut signals = batch(&agro_titles());
    let outcome = process(&mut signals, &[], &PipelineConfig::default()).unwrap();
    let graph = &outcome.graph;

    let hubs = graph.nodes.iter().filter(|n| n.kind == NodeKind::Hub).count();
    assert_eq!(hubs, 1);

    for node in graph.signal_nodes() {
        let hub_edges = graph
            .edges
            .iter()
            .filter(|e| e.source_id == "hub" && e.target_id == node.id)
            .count();
        assert_eq!(hub_edges, 1, "node {} needs exactly one hub edge", node.id);
    }

    let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &graph.edges {
        assert!(node_ids.contains(&edge.source_id.as_str()));
        assert!(node_ids.contains(&edge.target_id.as_str()));
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let concepts = vec![
        Concept::new("Clima", vec!["seca".into(), "chuva".into(), "granizo".into()]),
        Concept::new("Mercado", vec!["exportações".into(), "preço".into()]),
    ];

    let mut first = batch(&agro_titles());
    let mut second = batch(&agro_titles());
    // collected_at differs between the two batches; only titles feed the
    // vector space, so outcomes must still match.
    let a = process(&mut first, &concepts, &PipelineConfig::default()).unwrap();
    let b = process(&mut second, &concepts, &PipelineConfig::default()).unwrap();

    assert_eq!(a.clusters, b.clusters);
    assert_eq!(a.selection, b.selection);
    assert_eq!(a.hypothesis, b.hypothesis);
    assert_eq!(a.graph, b.graph);
    let tagged_a: Vec<_> = first.iter().map(|s| s.concepts.clone()).collect();
    let tagged_b: Vec<_> = second.iter().map(|s| s.concepts.clone()).collect();
    assert_eq!(tagged_a, tagged_b);
}

#[test]
fn test_two_paraphrased_titles_converge() {
    let mut signals = batch(&[
        "Seca afeta safra de soja",
        "Safra de soja é afetada pela seca",
    ]);
    let outcome = process(&mut signals, &[], &PipelineConfig::default()).unwrap();

    assert_eq!(outcome.clusters.len(), 1, "paraphrases must share one cluster");
    assert_eq!(outcome.clusters[0].len(), 2);
    assert_eq!(outcome.edges.len(), 1);
    assert!(outcome.edges[0].score >= 0.24);

    assert!(outcome.hypothesis.contains("Seca afeta safra de soja"));
    assert!(outcome.hypothesis.contains("Safra de soja é afetada"));
}

#[test]
fn test_zero_signals_produce_no_data_graph() {
    let outcome = process(&mut [], &[], &PipelineConfig::default()).unwrap();
    assert!(outcome.graph.nodes.is_empty());
    assert!(outcome.graph.edges.is_empty());
    assert_eq!(outcome.graph.hypothesis, NO_DATA_HYPOTHESIS);
}

#[test]
fn test_single_signal_without_matches_tags_empty() {
    let concepts = vec![Concept::new("Clima", vec!["geada".into()])];
    let mut signals = batch(&["Exportações de café batem recorde"]);
    let outcome = process(&mut signals, &concepts, &PipelineConfig::default()).unwrap();

    assert!(signals[0].concepts.is_empty());
    assert_eq!(outcome.graph.nodes.len(), 2, "hub plus one signal node");
    let signal_edges = outcome
        .graph
        .edges
        .iter()
        .filter(|e| e.source_id != "hub")
        .count();
    assert_eq!(signal_edges, 0);
}

#[test]
fn test_tagging_annotates_matching_signals() {
    let concepts = vec![
        Concept::new("Clima", vec!["seca".into()]),
        Concept::new("Grãos", vec!["soja".into(), "milho".into()]),
    ];
    let mut signals = batch(&agro_titles());
    process(&mut signals, &concepts, &PipelineConfig::default()).unwrap();

    assert_eq!(signals[0].concepts, vec!["Clima", "Grãos"]);
    assert_eq!(signals[8].concepts, vec!["Grãos"]);
    assert!(signals[3].concepts.is_empty());
}
