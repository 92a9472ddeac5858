use crate::domain::model::{Edge, EdgeRecord, Node};
use crate::utils::error::{Result, RouteError};
use indexmap::IndexMap;

/// Directed multigraph keyed by source node.
///
/// Source order is the order in which addresses first appear as `src_ip`.
/// Nodes that only ever appear as a destination have no entry and no
/// successors.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: IndexMap<Node, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the adjacency list from raw rows. Fails on the first row whose
    /// weight is not a finite number; rows are numbered from 1, header excluded.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = Self::new();
        for (index, record) in records.into_iter().enumerate() {
            let weight = parse_weight(index + 1, &record.dest_port_weight)?;
            if weight < 0.0 {
                tracing::warn!(
                    row = index + 1,
                    weight,
                    "negative weight; least-cost ordering is not guaranteed"
                );
            }
            let port = record
                .dest_port
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty());
            graph.add_edge(
                record.src_ip.trim(),
                Edge {
                    destination: record.dest_ip.trim().to_string(),
                    port,
                    weight,
                },
            );
        }

        tracing::debug!(
            sources = graph.source_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    pub fn add_edge(&mut self, source: &str, edge: Edge) {
        self.adjacency
            .entry(source.to_string())
            .or_default()
            .push(edge);
    }

    pub fn successors(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sources(&self) -> impl Iterator<Item = &Node> {
        self.adjacency.keys()
    }

    pub fn contains_source(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

fn parse_weight(row: usize, raw: &str) -> Result<f64> {
    let malformed = |reason: &str| RouteError::MalformedRecord {
        row,
        field: "dest_port_weight".to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let weight: f64 = raw.trim().parse().map_err(|_| malformed("not a number"))?;
    if !weight.is_finite() {
        return Err(malformed("not a finite number"));
    }
    Ok(weight)
}
