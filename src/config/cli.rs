use crate::core::render::PathColoring;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_exists, validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: netroute <delete_flag> <input_csv> <start_ip_or_subnet> <end_ip_or_subnet> [<pathColoring>] [<parsePort>]";

#[derive(Debug, Clone, Parser)]
#[command(name = "netroute", version)]
#[command(about = "Find least-cost paths through a network flow table")]
pub struct CliConfig {
    /// "1" removes the input file after the run
    pub delete_flag: String,

    /// CSV with src_ip,dest_ip,dest_port,dest_port_weight columns
    pub input: PathBuf,

    /// Start address or CIDR subnet
    pub start: String,

    /// End address or CIDR subnet
    pub end: String,

    /// byFastest or byWeight
    pub path_coloring: Option<String>,

    /// "1" shows service names for well-known ports
    pub parse_port: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, value_name = "FILE", help = "TOML file with render and logging settings")]
    pub config: Option<PathBuf>,
}

impl CliConfig {
    pub fn delete_input(&self) -> bool {
        self.delete_flag == "1"
    }

    pub fn named_ports(&self) -> bool {
        self.parse_port.as_deref() == Some("1")
    }

    pub fn coloring(&self) -> PathColoring {
        PathColoring::from_arg(self.path_coloring.as_deref())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input.to_string_lossy())?;
        validate_file_exists(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<CliConfig, clap::Error> {
        CliConfig::try_parse_from(std::iter::once("netroute").chain(args.iter().copied()))
    }

    #[test]
    fn test_parses_required_positionals() {
        let config = parse(&["0", "flows.csv", "10.0.0.1", "10.0.1.0/24"]).unwrap();
        assert!(!config.delete_input());
        assert_eq!(config.input, PathBuf::from("flows.csv"));
        assert_eq!(config.coloring(), PathColoring::Plain);
        assert!(!config.named_ports());
    }

    #[test]
    fn test_parses_optional_modes() {
        let args = ["1", "flows.csv", "a", "b", "byFastest", "1", "--verbose"];
        let config = parse(&args).unwrap();
        assert!(config.delete_input());
        assert_eq!(config.coloring(), PathColoring::ByFastest);
        assert!(config.named_ports());
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_wrong_argument_counts() {
        assert!(parse(&["0", "flows.csv", "a"]).is_err());
        assert!(parse(&["0", "flows.csv", "a", "b", "byWeight", "1", "extra"]).is_err());
    }

    #[test]
    fn test_validate_requires_existing_file() {
        let config = parse(&["0", "/definitely/not/here.csv", "a", "b"]).unwrap();
        assert!(config.validate().is_err());
    }
}
