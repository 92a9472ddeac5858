// Adapters layer: concrete implementations of the domain ports.

pub mod csv_source;

pub use csv_source::CsvEdgeSource;
