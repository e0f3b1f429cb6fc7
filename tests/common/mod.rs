//! Shared fixture writers for integration tests
//!
//! Writes real `idcounts.dat` / `map_<id>.dat` records into a temp
//! directory so tests exercise the same decoding path as the binary.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use fastnbt::ByteArray;
use filetime::FileTime;
use flate2::write::GzEncoder;
use flate2::Compression;
use mapstitch::tile::{MapData, MapFile};
use serde::Serialize;

#[derive(Serialize)]
struct Counter {
    map: i16,
}

/// A map record to write, defaulting to a valid 128x128 tile at the origin.
pub struct MapSpec {
    pub scale: i8,
    pub dimension: i8,
    pub width: i16,
    pub height: i16,
    pub center: (i32, i32),
    pub colors: Vec<u8>,
}

impl MapSpec {
    pub fn filled(scale: i8, center: (i32, i32), index: u8) -> Self {
        Self {
            scale,
            dimension: 0,
            width: 128,
            height: 128,
            center,
            colors: vec![index; 128 * 128],
        }
    }
}

/// Write the id counter holding the last allocated id.
pub fn write_counter(dir: &Path, last_id: i16) {
    let bytes = fastnbt::to_bytes(&Counter { map: last_id }).unwrap();
    fs::write(dir.join("idcounts.dat"), bytes).unwrap();
}

/// Write `map_<id>.dat`, gzip-compressed.
pub fn write_map(dir: &Path, id: usize, spec: &MapSpec) {
    let file = MapFile {
        data: MapData {
            scale: spec.scale,
            dimension: spec.dimension,
            width: spec.width,
            height: spec.height,
            x_center: spec.center.0,
            z_center: spec.center.1,
            colors: ByteArray::new(spec.colors.iter().map(|&c| c as i8).collect()),
        },
    };
    let bytes = fastnbt::to_bytes(&file).unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&bytes).unwrap();
    fs::write(dir.join(format!("map_{}.dat", id)), encoder.finish().unwrap()).unwrap();
}

/// Set the modification time of `map_<id>.dat` to `secs` after the epoch.
pub fn set_map_mtime(dir: &Path, id: usize, secs: u64) {
    let path = dir.join(format!("map_{}.dat", id));
    filetime::set_file_mtime(path, FileTime::from_unix_time(secs as i64, 0)).unwrap();
}
