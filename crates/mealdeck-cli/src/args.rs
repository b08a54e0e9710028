use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "mealdeck")]
#[command(about = "Browse, search and filter TheMealDB recipes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml, preferences.toml and the log
    /// [default: $MEALDECK_PATH, then the system data dir, then ~/.mealdeck]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Recipe API base URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser (default)
    Browse,

    /// Search meals by name
    Search {
        /// Search term; an empty term lists the default browse set
        term: String,

        /// Print every match instead of the first page
        #[arg(long)]
        all: bool,
    },

    /// List meals of one area (cuisine)
    Area {
        area: String,

        /// Print every match instead of the first page
        #[arg(long)]
        all: bool,
    },

    /// List the available areas
    Areas,

    /// Show the full recipe of one meal
    Show {
        /// Meal id, e.g. 52772
        id: String,
    },

    /// Show or set the stored theme preference
    Theme {
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        #[arg(long)]
        light: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["mealdeck"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Plain);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mealdeck",
            "search",
            "chicken",
            "--all",
            "--format",
            "json",
            "--data-dir",
            "/tmp/md",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/md"));
        match cli.command {
            Some(Commands::Search { term, all }) => {
                assert_eq!(term, "chicken");
                assert!(all);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_theme_flags_conflict() {
        assert!(Cli::try_parse_from(["mealdeck", "theme", "--dark", "--light"]).is_err());
    }
}
