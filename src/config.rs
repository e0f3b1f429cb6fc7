//! Render configuration threaded through the pipeline

use std::path::{Path, PathBuf};

/// Name of the record holding the highest allocated map id.
pub const COUNTER_FILE: &str = "idcounts.dat";

/// Default output path when none is given.
pub const DEFAULT_OUTPUT: &str = "map.png";

/// Where to read map records from and where to write the composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Directory holding `idcounts.dat` and `map_<id>.dat`
    pub input_dir: PathBuf,
    /// PNG file to write
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { input_dir: PathBuf::from("."), output: PathBuf::from(DEFAULT_OUTPUT) }
    }
}

impl RenderConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { input_dir: input_dir.into(), output: output.into() }
    }

    /// Path of the id counter record.
    pub fn counter_path(&self) -> PathBuf {
        self.input_dir.join(COUNTER_FILE)
    }

    /// Path of the record for map `id`.
    pub fn tile_path(&self, id: usize) -> PathBuf {
        self.input_dir.join(format!("map_{}.dat", id))
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
