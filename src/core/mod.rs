pub mod finder;
pub mod graph;
pub mod locator;
pub mod port_names;
pub mod render;
pub mod search;

pub use crate::domain::model::{Edge, EdgeRecord, Hop, Link, Node, Path};
pub use crate::domain::ports::EdgeSource;
pub use crate::utils::error::Result;
