use crate::utils::error::{Result, RouteError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RouteError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(RouteError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(RouteError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RouteError::ConfigError {
            message: format!("{} must be between {} and {} (got {})", field_name, min, max, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "flows.csv").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("edges.csv");
        std::fs::write(&file, "src_ip,dest_ip,dest_port,dest_port_weight\n").unwrap();

        assert!(validate_file_exists(&file).is_ok());
        assert!(matches!(
            validate_file_exists(&dir.path().join("missing.csv")),
            Err(RouteError::FileNotFound { .. })
        ));
        // A directory is not an input file.
        assert!(validate_file_exists(dir.path()).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("link_width", 5, 1, 100).is_ok());
        assert!(validate_range("link_width", 0, 1, 100).is_err());
    }
}
