//! End-to-end rendering: load, composite, save

use thiserror::Error;

use crate::bounds::Bounds;
use crate::composite::{render_registry, CompositeError};
use crate::config::RenderConfig;
use crate::loader::{load_registry, LoadError};
use crate::output::{save_png, OutputError};

/// Any fatal failure while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Composite(#[from] CompositeError),
    #[error("cannot write {path}: {source}")]
    Output {
        path: std::path::PathBuf,
        #[source]
        source: OutputError,
    },
}

/// What a successful render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub width: u32,
    pub height: u32,
    pub bounds: Bounds,
    /// Ids attempted, valid or not
    pub maps_loaded: usize,
    pub maps_rendered: usize,
}

/// Render every map under `config.input_dir` into `config.output`.
pub fn render_map(config: &RenderConfig) -> Result<RenderSummary, RenderError> {
    let registry = load_registry(config)?;
    let (canvas, bounds) = render_registry(&registry)?;

    save_png(&canvas, config.output())
        .map_err(|source| RenderError::Output { path: config.output.clone(), source })?;

    Ok(RenderSummary {
        width: canvas.width(),
        height: canvas.height(),
        bounds,
        maps_loaded: registry.len(),
        maps_rendered: registry.valid_count(),
    })
}
