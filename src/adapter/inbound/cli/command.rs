//! Command-line interface definitions.
//!
//! Process arguments for the `vaxsched` binary. Scheduling commands are not
//! subcommands; they are typed at the interactive prompt and parsed by
//! [`parse`](super::parse).

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

/// Interactive vaccine appointment scheduler
#[derive(Parser, Debug)]
#[command(name = "vaxsched")]
#[command(version, about)]
pub struct Cli {
    /// Configuration file [default: ~/.vaxsched/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database file, overriding the configuration
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, vaxsched=trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Suppress menus, banners and the prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Whether to emit ANSI colors. `Auto` honours `NO_COLOR` and only colors
    /// a terminal.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "vaxsched");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vaxsched"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.db.is_none());
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(!cli.no_banner);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_parse_paths_and_level() {
        let cli = Cli::try_parse_from([
            "vaxsched",
            "--config",
            "/tmp/c.toml",
            "--db",
            "/tmp/s.db",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/s.db")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_output_flags() {
        let cli = Cli::try_parse_from(["vaxsched", "--json", "-q", "--no-banner"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(cli.no_banner);
    }

    #[test]
    fn test_parse_color() {
        let cli = Cli::try_parse_from(["vaxsched", "--color", "never"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(!cli.color.enabled());
        assert!(ColorChoice::Always.enabled());
    }

    #[test]
    fn test_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["vaxsched", "--color", "sometimes"]).is_err());
    }
}
