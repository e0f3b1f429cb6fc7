//! Loading the id counter and the map tiles it covers

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fastnbt::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::RenderConfig;
use crate::nbt::{self, NbtError};
use crate::registry::TileRegistry;
use crate::tile::{MapFile, Rejection, Tile, TileRecord};

/// Where the counter tag holding the highest allocated map id may live,
/// in lookup order: the legacy root-level tag, then the `data` compound.
pub const COUNTER_PATHS: [&[&str]; 2] = [&["map"], &["data", "map"]];

/// Fatal failure reading the id counter.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read id counter {path}: {source}")]
    Counter {
        path: PathBuf,
        #[source]
        source: NbtError,
    },
}

/// Non-fatal failure loading a single tile.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("cannot parse {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: NbtError,
    },
    #[error("map {id} invalid: {reason}")]
    Invalid { id: usize, reason: Rejection },
}

/// Read the highest allocated map id from the counter record.
pub fn load_last_map_id(config: &RenderConfig) -> Result<i16, LoadError> {
    let path = config.counter_path();
    let counter = nbt::read_path::<Value>(&path)
        .and_then(|root| nbt::find_short(&root, &COUNTER_PATHS))
        .map_err(|source| LoadError::Counter { path, source })?;
    Ok(counter)
}

/// Number of map ids to attempt.
///
/// The counter stores the last id handed out, so ids `0..=last` exist.
pub fn map_count(last_id: i16) -> usize {
    usize::try_from(i32::from(last_id) + 1).unwrap_or(0)
}

/// Decode the record for map `id` without validating it.
pub fn decode_tile(config: &RenderConfig, id: usize) -> Result<TileRecord, TileError> {
    let path = config.tile_path(id);
    let file: MapFile =
        nbt::read_path(&path).map_err(|source| TileError::Decode { path: path.clone(), source })?;
    let mtime = fs::metadata(&path).and_then(|m| m.modified()).unwrap_or(UNIX_EPOCH);
    Ok(TileRecord::from_map_data(file.data, mtime))
}

/// Decode and validate the record for map `id`.
pub fn load_tile(config: &RenderConfig, id: usize) -> Result<Tile, TileError> {
    let record = decode_tile(config, id)?;
    info!(
        id,
        dimension = record.dimension,
        scale = record.scale,
        width = record.width,
        height = record.height,
        center_x = record.center_x,
        center_y = record.center_y,
        data_len = record.data_len,
        mtime = unix_seconds(record.mtime),
        "Decoded map"
    );
    record.validate(id).map_err(|reason| TileError::Invalid { id, reason })
}

/// Load every map id covered by the counter.
///
/// Tiles that fail to decode or validate leave an empty slot; only the
/// counter itself is fatal.
pub fn load_registry(config: &RenderConfig) -> Result<TileRegistry, LoadError> {
    let last_id = load_last_map_id(config)?;
    info!("Last map: {}", last_id);

    let count = map_count(last_id);
    let mut registry = TileRegistry::with_len(count);
    for id in 0..count {
        match load_tile(config, id) {
            Ok(tile) => {
                registry.insert(tile);
            }
            Err(e) => warn!("{}", e),
        }
    }

    info!(loaded = registry.len(), valid = registry.valid_count(), "Loaded maps");
    Ok(registry)
}

fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}
