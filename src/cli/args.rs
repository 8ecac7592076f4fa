//! Command-line argument definitions.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// bikeshare - Explore US bike share trip data interactively
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = crate::constants::DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Path to a config.toml (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of raw rows shown per page
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Maximum console width for raw rows
    #[arg(long)]
    pub width: Option<usize>,

    /// Maximum number of columns shown for raw rows
    #[arg(long)]
    pub max_columns: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level directive for the `-v` count.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let args = Args::parse_from(["bikeshare"]);
        assert!(args.config.is_none());
        assert!(args.chunk_size.is_none());
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(Args::parse_from(["bikeshare", "-v"]).log_level(), "info");
        assert_eq!(Args::parse_from(["bikeshare", "-vv"]).log_level(), "debug");
        assert_eq!(Args::parse_from(["bikeshare", "-vvvv"]).log_level(), "trace");
    }

    #[test]
    fn test_display_overrides() {
        let args = Args::parse_from(["bikeshare", "--width", "100", "--max-columns", "8"]);
        assert_eq!(args.width, Some(100));
        assert_eq!(args.max_columns, Some(8));
    }
}
