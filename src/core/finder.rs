use crate::core::graph::Graph;
use crate::core::locator::{resolve_end, resolve_start};
use crate::core::search::find_paths;
use crate::domain::model::Path;
use crate::domain::ports::EdgeSource;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub start_label: String,
    pub end_label: String,
    pub paths: Vec<Path>,
}

impl SearchResult {
    pub fn no_route(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Load, resolve, search.
pub struct RouteFinder<S: EdgeSource> {
    source: S,
}

impl<S: EdgeSource> RouteFinder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn load_graph(&self) -> Result<Graph> {
        let records = self.source.records()?;
        tracing::debug!("Loaded {} edge records", records.len());
        Graph::from_records(records)
    }

    pub fn run(&self, start: &str, end: &str) -> Result<SearchResult> {
        let graph = self.load_graph()?;
        Self::search(&graph, start, end)
    }

    pub fn search(graph: &Graph, start: &str, end: &str) -> Result<SearchResult> {
        let seeds = resolve_start(start, graph)?;
        let target = resolve_end(end)?;
        let paths = find_paths(graph, &seeds.nodes, &target);

        if paths.is_empty() {
            tracing::info!("No route from {} to {}", start, end);
        } else {
            tracing::info!("Found {} path(s) from {} to {}", paths.len(), start, end);
        }

        Ok(SearchResult {
            start_label: seeds.label,
            end_label: target.label(),
            paths,
        })
    }
}
