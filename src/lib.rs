pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::CsvEdgeSource;
pub use config::FileConfig;
pub use crate::core::{
    finder::{RouteFinder, SearchResult},
    graph::Graph,
    locator::{EndTarget, Locator, StartSeeds},
    render::{PathColoring, PathRenderer, RenderOptions},
    search::find_paths,
};
pub use domain::model::{Edge, EdgeRecord, Hop, Path};
pub use utils::error::{Result, RouteError};
