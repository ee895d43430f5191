//! Connected-component extraction and working-selection policy.

use crate::types::{Cluster, SimilarityEdge};

/// Find connected components over the similarity graph.
///
/// Explicit stack-based traversal over adjacency lists; no recursion, so
/// deep components cannot exhaust the call stack. Every index is visited
/// exactly once, isolates become singleton clusters, and members are
/// listed in traversal construction order. The result partitions
/// `{0..n-1}` and is sorted by descending size; the stable sort keeps
/// discovery order for ties.
pub fn connected_components(n: usize, edges: &[SimilarityEdge]) -> Vec<Cluster> {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for edge in edges {
        adjacency[edge.i].push(edge.j);
        adjacency[edge.j].push(edge.i);
    }

    let mut visited = vec![false; n];
    let mut clusters: Vec<Cluster> = Vec::new();
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut component = Vec::new();
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            component.push(u);
            for &v in &adjacency[u] {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        clusters.push(component);
    }

    clusters.sort_by(|a, b| b.len().cmp(&a.len()));
    clusters
}

/// Pick the working selection from the ordered cluster list.
///
/// Starts with the largest cluster, truncated to its first
/// `max_selection` members (construction order). When the result is
/// smaller than `min_selection` and other clusters exist, members of
/// subsequent clusters are appended in ascending index order, skipping
/// indices already present, until the lower bound is met or the donor
/// clusters run out. No data at all yields an empty selection.
pub fn select_working(
    clusters: &[Cluster],
    min_selection: usize,
    max_selection: usize,
) -> Vec<usize> {
    let Some(top) = clusters.first() else {
        return Vec::new();
    };

    let mut selection: Vec<usize> = top.iter().copied().take(max_selection).collect();
    if selection.len() >= min_selection {
        return selection;
    }

    for cluster in &clusters[1..] {
        let mut members = cluster.clone();
        members.sort_unstable();
        for index in members {
            if !selection.contains(&index) {
                selection.push(index);
                if selection.len() >= min_selection {
                    return selection;
                }
            }
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(i: usize, j: usize) -> SimilarityEdge {
        SimilarityEdge { i, j, score: 0.5 }
    }

    #[test]
    fn test_partition_invariant() {
        let edges = vec![edge(0, 2), edge(2, 4), edge(1, 3)];
        let clusters = connected_components(6, &edges);

        let mut all: Vec<usize> = clusters.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4, 5], "clusters partition the index set");
        println!("[PASS] partition invariant over {} clusters", clusters.len());
    }

    #[test]
    fn test_isolates_become_singletons() {
        let clusters = connected_components(3, &[]);
        assert_eq!(clusters, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_sorted_by_size_then_discovery() {
        // {0,2,4} discovered first, then {1,3}, then {5}.
        let edges = vec![edge(0, 2), edge(2, 4), edge(1, 3)];
        let clusters = connected_components(6, &edges);
        assert_eq!(clusters[0].len(), 3);
        assert_eq!(clusters[1].len(), 2);
        assert_eq!(clusters[2], vec![5]);
    }

    #[test]
    fn test_size_ties_keep_discovery_order() {
        let edges = vec![edge(0, 1), edge(2, 3)];
        let clusters = connected_components(4, &edges);
        assert_eq!(clusters.len(), 2);
        assert!(clusters[0].contains(&0), "component containing 0 was discovered first");
    }

    #[test]
    fn test_zero_signals_yield_no_clusters() {
        assert!(connected_components(0, &[]).is_empty());
    }

    #[test]
    fn test_selection_truncates_large_cluster() {
        let top: Cluster = (0..20).collect();
        let selection = select_working(&[top], 6, 12);
        assert_eq!(selection, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_selection_pads_from_subsequent_clusters() {
        let clusters = vec![vec![7, 3], vec![9, 1], vec![5], vec![0, 2, 4, 6, 8]];
        let selection = select_working(&clusters, 6, 12);
        // Top cluster in construction order, then donors in ascending
        // index order, stopping exactly at the lower bound.
        assert_eq!(selection, vec![7, 3, 1, 9, 5, 0]);
    }

    #[test]
    fn test_selection_keeps_small_batch_whole() {
        let clusters = vec![vec![1, 0], vec![2]];
        let selection = select_working(&clusters, 6, 12);
        assert_eq!(selection.len(), 3, "fewer signals than the lower bound keeps them all");
    }

    #[test]
    fn test_empty_cluster_list_selects_nothing() {
        assert!(select_working(&[], 6, 12).is_empty());
    }
}
