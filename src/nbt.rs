//! NBT record reading
//!
//! Map records are gzip-compressed NBT; the legacy id counter record is
//! stored raw. Both go through [`read_path`], which sniffs the gzip header.

use std::fs;
use std::io::Read;
use std::path::Path;

use fastnbt::Value;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use thiserror::Error;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Error type for NBT record decoding
#[derive(Debug, Error)]
pub enum NbtError {
    /// Reading or decompressing the record failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The byte stream is not valid NBT, or doesn't match the expected shape
    #[error("NBT parse error: {0}")]
    Parse(#[from] fastnbt::error::Error),
    /// No tag with the requested name exists anywhere in the tree
    #[error("missing tag '{0}'")]
    MissingTag(String),
    /// The tag exists but has the wrong type
    #[error("invalid tag type for '{name}', expected {expected}")]
    InvalidTagType { name: String, expected: &'static str },
}

/// Inflate `bytes` if they carry a gzip header, otherwise return them as-is.
pub fn decompress(bytes: Vec<u8>) -> Result<Vec<u8>, NbtError> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut out = Vec::new();
    GzDecoder::new(bytes.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}

/// Read and decode an NBT file into `T`.
pub fn read_path<T: DeserializeOwned>(path: &Path) -> Result<T, NbtError> {
    let bytes = decompress(fs::read(path)?)?;
    Ok(fastnbt::from_bytes(&bytes)?)
}

/// Follow `path` through nested compounds.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, name| match node {
        Value::Compound(map) => map.get(*name),
        _ => None,
    })
}

/// The Short tag at the first of `paths` that exists.
///
/// Paths are tried in order, so a tag closer to the front wins even if
/// later paths also resolve. Tags with the same name elsewhere in the tree
/// are never considered.
pub fn find_short(root: &Value, paths: &[&[&str]]) -> Result<i16, NbtError> {
    for path in paths {
        match get_path(root, path) {
            Some(Value::Short(v)) => return Ok(*v),
            Some(_) => {
                return Err(NbtError::InvalidTagType { name: path.join("."), expected: "Short" })
            }
            None => {}
        }
    }
    let tried: Vec<String> = paths.iter().map(|path| path.join(".")).collect();
    Err(NbtError::MissingTag(tried.join(" or ")))
}
