//! Map tiles and the rules a decoded record must satisfy to be rendered

use std::time::SystemTime;

use fastnbt::ByteArray;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width and height of every accepted tile, in source pixels.
pub const TILE_SIZE: usize = 128;

/// Half of [`TILE_SIZE`], in source pixels.
pub const TILE_HALF: i64 = 64;

/// Largest accepted scale exponent.
pub const MAX_SCALE: u8 = 4;

/// The only dimension rendered.
pub const PRIMARY_DIMENSION: i32 = 0;

/// On-disk layout of `map_<id>.dat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MapFile {
    pub data: MapData,
}

/// The `data` compound of a map record.
#[derive(Debug, Serialize, Deserialize)]
pub struct MapData {
    pub scale: i8,
    pub dimension: i8,
    pub width: i16,
    pub height: i16,
    #[serde(rename = "xCenter")]
    pub x_center: i32,
    #[serde(rename = "zCenter")]
    pub z_center: i32,
    pub colors: ByteArray,
}

/// Why a decoded record was not accepted as a tile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("scale {0} outside 0..=4")]
    Scale(i32),
    #[error("dimension {0} is not the primary world")]
    Dimension(i32),
    #[error("size {width}x{height}, expected 128x128")]
    Size { width: i32, height: i32 },
    #[error("pixel data length {actual} does not match {expected}")]
    PixelData { expected: usize, actual: usize },
}

/// Raw fields of a decoded map record, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRecord {
    pub scale: i32,
    pub dimension: i32,
    pub width: i32,
    pub height: i32,
    pub center_x: i32,
    pub center_y: i32,
    /// Length of the stored color array
    pub data_len: usize,
    /// Color indices, present only if `data_len == width * height`
    pub pixels: Option<Vec<u8>>,
    pub mtime: SystemTime,
}

impl TileRecord {
    /// Build a record from decoded NBT fields.
    pub fn from_map_data(data: MapData, mtime: SystemTime) -> Self {
        let width = i32::from(data.width);
        let height = i32::from(data.height);
        let data_len = data.colors.len();
        let expected = i64::from(width) * i64::from(height);

        // Stored as signed bytes; the color index is the raw bit pattern.
        let pixels = usize::try_from(expected)
            .is_ok_and(|n| n == data_len)
            .then(|| data.colors.iter().map(|&b| b as u8).collect());

        Self {
            scale: i32::from(data.scale),
            dimension: i32::from(data.dimension),
            width,
            height,
            center_x: data.x_center,
            center_y: data.z_center,
            data_len,
            pixels,
            mtime,
        }
    }

    /// Apply the validity rules and turn the record into a tile with `id`.
    pub fn validate(self, id: usize) -> Result<Tile, Rejection> {
        if !(0..=i32::from(MAX_SCALE)).contains(&self.scale) {
            return Err(Rejection::Scale(self.scale));
        }
        if self.dimension != PRIMARY_DIMENSION {
            return Err(Rejection::Dimension(self.dimension));
        }
        if self.width != TILE_SIZE as i32 || self.height != TILE_SIZE as i32 {
            return Err(Rejection::Size { width: self.width, height: self.height });
        }
        let pixels = self.pixels.ok_or(Rejection::PixelData {
            expected: TILE_SIZE * TILE_SIZE,
            actual: self.data_len,
        })?;

        Tile::new(id, self.center_x, self.center_y, self.scale as u8, self.mtime, pixels)
    }
}

/// A validated 128x128 map tile.
///
/// Each source pixel covers a `2^scale` square of world units, so the tile
/// spans `center ± 64 * 2^scale` on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    id: usize,
    center_x: i32,
    center_y: i32,
    scale: u8,
    mtime: SystemTime,
    pixels: Box<[u8]>,
}

impl Tile {
    /// Create a tile, checking the scale range and the pixel buffer length.
    pub fn new(
        id: usize,
        center_x: i32,
        center_y: i32,
        scale: u8,
        mtime: SystemTime,
        pixels: Vec<u8>,
    ) -> Result<Self, Rejection> {
        if scale > MAX_SCALE {
            return Err(Rejection::Scale(i32::from(scale)));
        }
        if pixels.len() != TILE_SIZE * TILE_SIZE {
            return Err(Rejection::PixelData {
                expected: TILE_SIZE * TILE_SIZE,
                actual: pixels.len(),
            });
        }
        Ok(Self { id, center_x, center_y, scale, mtime, pixels: pixels.into_boxed_slice() })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// World x coordinate of the tile center.
    pub fn center_x(&self) -> i32 {
        self.center_x
    }

    /// World z coordinate of the tile center, used as the image y axis.
    pub fn center_y(&self) -> i32 {
        self.center_y
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn mtime(&self) -> SystemTime {
        self.mtime
    }

    /// Side length in world units of one source pixel.
    pub fn block_size(&self) -> u32 {
        1 << self.scale
    }

    /// Distance from the center to each edge, in world units.
    pub fn half_extent(&self) -> i64 {
        TILE_HALF << self.scale
    }

    /// Color index at source pixel `(x, y)`, row-major.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[x + TILE_SIZE * y]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
