use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use netroute::config::{CliConfig, FileConfig, USAGE};
use netroute::utils::{logger, validation::Validate};
use netroute::{CsvEdgeSource, PathRenderer, RouteError, RouteFinder};

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print().context("failed to print help")?;
            return Ok(());
        }
        Err(_) => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let file_config = match &config.config {
        Some(path) => FileConfig::from_file(path),
        None => Ok(FileConfig::default()),
    };
    let level = file_config
        .as_ref()
        .ok()
        .and_then(|c| c.logging.level.as_deref());
    if config.log_json {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }
    tracing::debug!("CLI config: {:?}", config);

    let outcome = file_config.and_then(|file_config| run(&config, &file_config));
    if let Err(e) = outcome {
        tracing::error!("❌ {}", e);
        tracing::debug!("💡 {}", e.recovery_suggestion());
        println!("{}", e.user_friendly_message());
    }

    Ok(())
}

fn run(config: &CliConfig, file_config: &FileConfig) -> netroute::Result<()> {
    config.validate()?;

    let finder = RouteFinder::new(CsvEdgeSource::new(&config.input));
    let result = finder.run(&config.start, &config.end)?;

    if result.no_route() {
        println!("No route found");
    } else {
        let renderer = PathRenderer::new(
            file_config.render.clone(),
            config.coloring(),
            config.named_ports(),
        );
        for line in renderer.render(&result.paths, &result.start_label, &result.end_label) {
            println!("{}", line);
        }
    }

    if config.delete_input() {
        std::fs::remove_file(&config.input).map_err(|source| RouteError::FileDeletion {
            path: config.input.display().to_string(),
            source,
        })?;
        println!("File {} has been deleted.", config.input.display());
    }

    Ok(())
}
