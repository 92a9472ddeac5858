use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Malformed record at row {row}: {field}={value:?} ({reason})")]
    MalformedRecord {
        row: usize,
        field: String,
        value: String,
        reason: String,
    },

    #[error("No start nodes match locator {locator}")]
    NoStartNodes { locator: String },

    #[error("End locator {locator:?} is neither a subnet nor an address")]
    NoEndTarget { locator: String },

    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to delete {path}: {source}")]
    FileDeletion {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl RouteError {
    /// Text printed on the terminal for this error.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RouteError::MalformedRecord {
                row,
                field,
                value,
                reason,
            } => format!("Malformed record at row {}: {}={} ({})", row, field, value, reason),
            RouteError::NoStartNodes { locator } => {
                format!("No valid start IPs found in the subnet {}.", locator)
            }
            RouteError::NoEndTarget { locator } => {
                format!("No valid end IPs or subnet found in the argument {}.", locator)
            }
            RouteError::FileNotFound { path } => format!("File {} does not exist.", path),
            RouteError::FileDeletion { path, source } => format!("Error: {} : {}", path, source),
            RouteError::CsvError(e) => format!("Could not read edge file: {}", e),
            RouteError::IoError(e) => format!("I/O failure: {}", e),
            RouteError::ConfigError { message } => format!("Invalid configuration: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RouteError::MalformedRecord { .. } => {
                "Check that every dest_port_weight value is a finite number"
            }
            RouteError::NoStartNodes { .. } => {
                "Use a subnet that contains at least one src_ip from the input file"
            }
            RouteError::NoEndTarget { .. } => "Pass an IP address or a CIDR subnet as the end",
            RouteError::FileNotFound { .. } => "Verify the input path",
            RouteError::FileDeletion { .. } => "Check file permissions and remove it manually",
            RouteError::CsvError(_) => {
                "The file needs a header row with src_ip,dest_ip,dest_port,dest_port_weight"
            }
            RouteError::IoError(_) => "Check that the file is readable",
            RouteError::ConfigError { .. } => "Fix the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
