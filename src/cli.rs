use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;

/// Name of the output file when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "flattened_mdx.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub output_path: PathBuf,
    pub verbosity: u8,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            verbosity: 0,
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

fn command() -> Command {
    Command::new("flatdocs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flattens every .mdx file under a directory into one line of a text file")
        .arg(
            Arg::new("dir")
                .value_name("DIR")
                .help("Directory to search (defaults to the current directory)")
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Sets the output file path")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increases log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> Result<Config> {
    Ok(config_from(&command().get_matches()))
}

fn config_from(matches: &ArgMatches) -> Config {
    let root = matches
        .get_one::<String>("dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

    Config {
        root,
        output_path,
        verbosity: matches.get_count("verbose"),
    }
}

/// Installs the logger. `RUST_LOG` overrides the `-v` level.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> clap::error::Result<Config> {
        command().try_get_matches_from(args).map(|m| config_from(&m))
    }

    #[test]
    fn defaults_to_current_dir_and_fixed_output() {
        let config = parse_from(&["flatdocs"]).unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn accepts_dir_output_and_verbosity() {
        let config = parse_from(&["flatdocs", "docs", "-o", "out.txt", "-vv"]).unwrap();
        assert_eq!(config.root, PathBuf::from("docs"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(parse_from(&["flatdocs", "--extension", "md"]).is_err());
    }
}
