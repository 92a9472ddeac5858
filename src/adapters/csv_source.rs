use crate::domain::model::EdgeRecord;
use crate::domain::ports::EdgeSource;
use crate::utils::error::{Result, RouteError};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Edge table stored as CSV with a `src_ip,dest_ip,dest_port,dest_port_weight`
/// header. Extra columns are ignored.
#[derive(Debug, Clone)]
pub struct CsvEdgeSource {
    path: PathBuf,
}

impl CsvEdgeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EdgeSource for CsvEdgeSource {
    fn records(&self) -> Result<Vec<EdgeRecord>> {
        tracing::debug!("Reading edges from {}", self.path.display());
        let file = std::fs::File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RouteError::FileNotFound {
                path: self.path.display().to_string(),
            },
            _ => RouteError::IoError(e),
        })?;
        read_records(file)
    }
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<EdgeRecord>().enumerate() {
        let record = row.map_err(|e| row_error(index + 1, e))?;
        records.push(record);
    }
    Ok(records)
}

fn row_error(row: usize, e: csv::Error) -> RouteError {
    match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => RouteError::MalformedRecord {
            row,
            field: err
                .field()
                .map_or_else(|| "record".to_string(), |i| format!("column {}", i + 1)),
            value: String::new(),
            reason: err.kind().to_string(),
        },
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => RouteError::MalformedRecord {
            row,
            field: "record".to_string(),
            value: String::new(),
            reason: format!("expected {} fields, found {}", expected_len, len),
        },
        _ => RouteError::CsvError(e),
    }
}
