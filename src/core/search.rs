use crate::core::graph::Graph;
use crate::core::locator::EndTarget;
use crate::domain::model::{Node, Path};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// A frontier entry.
///
/// Ordered by accumulated cost, then by the path's node sequence compared
/// lexicographically, then by push order, so pops are fully deterministic.
#[derive(Debug)]
struct Candidate {
    cost: f64,
    path: Path,
    seq: u64,
}

impl Candidate {
    fn node(&self) -> &Node {
        self.path.last()
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.path.nodes().cmp(other.path.nodes()))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    pushed: u64,
}

impl Frontier {
    fn push(&mut self, cost: f64, path: Path) {
        let seq = self.pushed;
        self.pushed += 1;
        self.heap.push(Reverse(Candidate { cost, path, seq }));
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }
}

/// Multi-source least-cost search that reports one path per terminal node.
///
/// The finalized set is shared by every seed, so each node is expanded at
/// most once and is reached from whichever seed gets there cheapest. A node
/// matching `end` is recorded and not expanded further; the search then
/// carries on with the rest of the frontier. Results come out in pop order,
/// i.e. ascending cost. An empty result means no route.
pub fn find_paths(graph: &Graph, seeds: &[Node], end: &EndTarget) -> Vec<Path> {
    let mut frontier = Frontier::default();
    for seed in seeds {
        frontier.push(0.0, Path::start(seed.clone()));
    }

    let mut finalized: HashSet<Node> = HashSet::new();
    let mut results = Vec::new();

    while let Some(candidate) = frontier.pop() {
        if finalized.contains(candidate.node()) {
            continue;
        }
        finalized.insert(candidate.node().clone());
        tracing::trace!(node = %candidate.node(), cost = candidate.cost, "finalized");

        if end.matches(candidate.node()) {
            tracing::debug!(
                node = %candidate.node(),
                cost = candidate.cost,
                hops = candidate.path.len(),
                "terminal path"
            );
            results.push(candidate.path);
            continue;
        }

        for edge in graph.successors(candidate.node()) {
            if !finalized.contains(&edge.destination) {
                frontier.push(candidate.cost + edge.weight, candidate.path.extended(edge));
            }
        }
    }

    tracing::debug!(paths = results.len(), visited = finalized.len(), "search finished");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locator::resolve_end;
    use crate::domain::model::Edge;

    fn graph(edges: &[(&str, &str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for &(src, dst, port, weight) in edges {
            graph.add_edge(
                src,
                Edge {
                    destination: dst.to_string(),
                    port: Some(port.to_string()),
                    weight,
                },
            );
        }
        graph
    }

    fn seeds(nodes: &[&str]) -> Vec<Node> {
        nodes.iter().map(|n| n.to_string()).collect()
    }

    fn node_list(path: &Path) -> Vec<&str> {
        path.nodes().collect()
    }

    #[test]
    fn test_simple_chain() {
        let g = graph(&[("A", "B", "80", 1.0), ("B", "C", "443", 1.0)]);
        let paths = find_paths(&g, &seeds(&["A"]), &resolve_end("C").unwrap());

        assert_eq!(paths.len(), 1);
        assert_eq!(node_list(&paths[0]), vec!["A", "B", "C"]);
        assert_eq!(paths[0].cost(), 2.0);
        assert_eq!(paths[0].hops[0].link, None);
        assert_eq!(paths[0].hops[2].port(), Some("443"));
    }

    #[test]
    fn test_prefers_cheaper_longer_route() {
        let g = graph(&[
            ("A", "C", "22", 10.0),
            ("A", "B", "80", 1.0),
            ("B", "C", "80", 2.0),
        ]);
        let paths = find_paths(&g, &seeds(&["A"]), &resolve_end("C").unwrap());
        assert_eq!(paths.len(), 1);
        assert_eq!(node_list(&paths[0]), vec!["A", "B", "C"]);
        assert_eq!(paths[0].cost(), 3.0);
    }

    #[test]
    fn test_shared_target_is_finalized_once_from_cheapest_source() {
        let g = graph(&[("A", "Z", "80", 5.0), ("D", "Z", "80", 2.0)]);
        let paths = find_paths(&g, &seeds(&["A", "D"]), &resolve_end("Z").unwrap());
        assert_eq!(paths.len(), 1);
        assert_eq!(node_list(&paths[0]), vec!["D", "Z"]);
    }

    #[test]
    fn test_each_terminal_in_subnet_gets_a_path() {
        let g = graph(&[
            ("192.168.0.1", "10.0.0.5", "80", 3.0),
            ("192.168.0.2", "10.0.0.9", "80", 1.0),
        ]);
        let paths = find_paths(
            &g,
            &seeds(&["192.168.0.1", "192.168.0.2"]),
            &resolve_end("10.0.0.0/24").unwrap(),
        );
        assert_eq!(paths.len(), 2);
        // Ascending cost.
        assert_eq!(paths[0].last(), "10.0.0.9");
        assert_eq!(paths[1].last(), "10.0.0.5");
    }

    #[test]
    fn test_terminal_nodes_are_not_expanded() {
        let g = graph(&[
            ("10.0.0.1", "10.0.0.2", "80", 1.0),
            ("10.0.0.2", "10.0.0.3", "80", 1.0),
        ]);
        let paths = find_paths(&g, &seeds(&["10.0.0.1"]), &resolve_end("10.0.0.0/30").unwrap());
        // The seed itself lies in the end subnet.
        assert_eq!(paths.len(), 1);
        assert_eq!(node_list(&paths[0]), vec!["10.0.0.1"]);
    }

    #[test]
    fn test_start_without_edges_yields_nothing() {
        let g = graph(&[("A", "B", "80", 1.0)]);
        let paths = find_paths(&g, &seeds(&["Q"]), &resolve_end("B").unwrap());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_cycles_terminate() {
        let g = graph(&[
            ("A", "B", "80", 1.0),
            ("B", "A", "80", 1.0),
            ("B", "B", "80", 0.0),
        ]);
        let paths = find_paths(&g, &seeds(&["A"]), &resolve_end("C").unwrap());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_ties_break_on_node_sequence() {
        let g = graph(&[
            ("S", "Y", "80", 1.0),
            ("S", "X", "80", 1.0),
            ("X", "T", "80", 1.0),
            ("Y", "T", "80", 1.0),
        ]);
        let paths = find_paths(&g, &seeds(&["S"]), &resolve_end("T").unwrap());
        assert_eq!(node_list(&paths[0]), vec!["S", "X", "T"]);
    }

    #[test]
    fn test_costs_match_hops_and_nodes_never_repeat() {
        let g = graph(&[
            ("10.0.0.1", "10.0.0.2", "80", 1.5),
            ("10.0.0.1", "10.0.0.3", "80", 4.0),
            ("10.0.0.2", "10.0.0.3", "22", 1.0),
            ("10.0.0.3", "10.0.0.1", "22", 1.0),
            ("10.0.0.3", "10.0.1.1", "443", 2.0),
            ("10.0.0.2", "10.0.1.2", "443", 7.0),
        ]);
        let paths = find_paths(&g, &seeds(&["10.0.0.1"]), &resolve_end("10.0.1.0/24").unwrap());
        assert_eq!(paths.len(), 2);
        for path in &paths {
            let mut seen = HashSet::new();
            assert!(path.nodes().all(|n| seen.insert(n)));
            let sum: f64 = path.hops.iter().map(|h| h.weight()).sum();
            assert_eq!(path.cost(), sum);
        }
        assert_eq!(paths[0].cost(), 4.5);
        assert_eq!(paths[1].cost(), 8.5);
    }

    #[test]
    fn test_repeated_search_is_identical() {
        let g = graph(&[
            ("A", "B", "80", 1.0),
            ("A", "C", "80", 1.0),
            ("B", "D", "80", 1.0),
            ("C", "D", "80", 1.0),
        ]);
        let end = resolve_end("D").unwrap();
        let first = find_paths(&g, &seeds(&["A"]), &end);
        let second = find_paths(&g, &seeds(&["A"]), &end);
        assert_eq!(first, second);
    }
}
