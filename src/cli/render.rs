//! Render command implementation

use std::process::ExitCode;

use tracing::info;

use crate::config::RenderConfig;
use crate::pipeline::render_map;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the render and report the outcome.
pub fn run_render(config: &RenderConfig) -> ExitCode {
    match render_map(config) {
        Ok(summary) => {
            info!(
                maps = summary.maps_loaded,
                rendered = summary.maps_rendered,
                "Composite complete"
            );
            println!(
                "Saved: {} ({}x{})",
                config.output().display(),
                summary.width,
                summary.height
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
