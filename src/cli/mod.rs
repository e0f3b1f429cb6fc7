//! Command-line interface implementation
//!
//! Parses the two positional arguments into a [`RenderConfig`] and hands
//! off to the render command.

mod render;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use crate::config::{RenderConfig, DEFAULT_OUTPUT};

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Mapstitch - composite map item tiles into a single PNG
#[derive(Parser, Debug)]
#[command(name = "mapstitch")]
#[command(about = "Mapstitch - composite map_<id>.dat tiles into a single PNG")]
#[command(version)]
pub struct Cli {
    /// Directory containing idcounts.dat and the map_<id>.dat files
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,

    /// Output PNG file
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Cli {
    pub fn config(&self) -> RenderConfig {
        RenderConfig::new(&self.input_dir, &self.output)
    }
}

/// Diagnostics go to stderr so stdout only carries the final result.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();
}

/// Run the CLI and return the process exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    render::run_render(&cli.config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mapstitch"]).unwrap();
        let config = cli.config();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.output(), Path::new("map.png"));
    }

    #[test]
    fn test_input_only() {
        let cli = Cli::try_parse_from(["mapstitch", "world/data"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("world/data"));
        assert_eq!(cli.output, PathBuf::from("map.png"));
    }

    #[test]
    fn test_input_and_output() {
        let cli = Cli::try_parse_from(["mapstitch", "data", "out/world.png"]).unwrap();
        let config = cli.config();
        assert_eq!(config.counter_path(), PathBuf::from("data/idcounts.dat"));
        assert_eq!(config.output(), Path::new("out/world.png"));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["mapstitch", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
