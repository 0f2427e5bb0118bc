//! Startup sequence for the interactive scheduler.

use std::io::BufRead;
use std::path::PathBuf;

use tracing::info;

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::dispatch::Dispatcher;
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::{menu, paths, repl};
use crate::error::Result;
use crate::infrastructure::bootstrap::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Load configuration, applying process-argument overrides.
///
/// An explicit `--config` must exist; the default location is optional.
///
/// # Errors
/// Returns a config error if the file is unreadable or invalid.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(paths::default_config())?,
    };
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    config.validate()?;
    Ok(config)
}

/// `--db`, then the configured path, then `~/.vaxsched/vaxsched.db`.
#[must_use]
pub fn database_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.db
        .clone()
        .or_else(|| config.database.path.clone())
        .unwrap_or_else(paths::default_database)
}

/// Configure output and logging, open the database, and run the prompt loop
/// over `input`.
///
/// # Errors
/// Returns startup failures (config, database, migrations) and input errors.
pub fn execute<R: BufRead>(cli: &Cli, input: R) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.color.enabled()));

    let config = load_config(cli)?;
    config.init_logging();

    let path = database_path(cli, &config);
    let scheduler = bootstrap(&path, &config)?;
    info!(path = %path.display(), "Scheduler started");

    if !cli.no_banner {
        menu::print_banner();
    }

    let mut dispatcher = Dispatcher::new(scheduler, config.schedule.date_policy());
    repl::run(input, &mut dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn db_flag_beats_config() {
        let cli = Cli::try_parse_from(["vaxsched", "--db", "/tmp/flag.db"]).unwrap();
        let mut config = Config::default();
        config.database.path = Some(PathBuf::from("/tmp/config.db"));

        assert_eq!(database_path(&cli, &config), PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn config_path_beats_default() {
        let cli = Cli::try_parse_from(["vaxsched"]).unwrap();
        let mut config = Config::default();
        config.database.path = Some(PathBuf::from("/tmp/config.db"));

        assert_eq!(database_path(&cli, &config), PathBuf::from("/tmp/config.db"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::try_parse_from([
            "vaxsched",
            "--config",
            "/nonexistent/vaxsched/config.toml",
        ])
        .unwrap();

        assert!(load_config(&cli).is_err());
    }
}
