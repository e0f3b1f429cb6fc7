//! Mapstitch - library for compositing map item tiles
//!
//! This library provides functionality to:
//! - Load map records (`map_<id>.dat`) and the id counter (`idcounts.dat`)
//! - Validate tiles and compute the world-space bounding box
//! - Paint tiles in scale/recency order onto one canvas
//! - Resolve color indices through the fixed map palette and save a PNG

pub mod bounds;
pub mod cli;
pub mod composite;
pub mod config;
pub mod loader;
pub mod nbt;
pub mod order;
pub mod output;
pub mod palette;
pub mod pipeline;
pub mod registry;
pub mod tile;
