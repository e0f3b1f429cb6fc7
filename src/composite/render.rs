//! Painting tiles onto the canvas

use image::RgbaImage;
use tracing::info;

use super::canvas::{allocate_canvas, canvas_size, fill_canvas, paint_block};
use super::Result;
use crate::bounds::{compute_bounds, Bounds};
use crate::order::paint_order;
use crate::palette::{background_color, get_color, BACKGROUND_INDEX};
use crate::registry::TileRegistry;
use crate::tile::{Tile, TILE_HALF, TILE_SIZE};

/// Paint one tile onto a canvas whose top-left corner is at world
/// `(bounds.left, bounds.top)`.
///
/// Source pixel `(x, y)` covers the `2^scale` block whose top-left world
/// corner is `center + (x - 64, y - 64) * 2^scale`. Pixels holding the
/// background index are left untouched.
pub fn paint_tile(canvas: &mut RgbaImage, bounds: &Bounds, tile: &Tile) {
    let size = tile.block_size();
    let step = i64::from(size);
    let cx = i64::from(tile.center_x());
    let cy = i64::from(tile.center_y());

    for y in 0..TILE_SIZE {
        let world_y = cy + (y as i64 - TILE_HALF) * step;
        for x in 0..TILE_SIZE {
            let index = tile.pixel(x, y);
            if index == BACKGROUND_INDEX {
                continue;
            }
            let world_x = cx + (x as i64 - TILE_HALF) * step;
            paint_block(
                canvas,
                world_x - bounds.left,
                world_y - bounds.top,
                size,
                get_color(index),
            );
        }
    }
}

/// Composite every valid tile in `registry` onto a canvas covering `bounds`.
///
/// The canvas is pre-filled with the background color, then tiles are
/// painted in [`paint_order`] with opaque overwrites.
pub fn composite(registry: &TileRegistry, bounds: &Bounds) -> Result<RgbaImage> {
    let (width, height) = canvas_size(bounds)?;
    let mut canvas = allocate_canvas(width, height)?;
    fill_canvas(&mut canvas, background_color());

    for id in paint_order(registry) {
        let Some(tile) = registry.get(id) else {
            continue;
        };
        info!("Rendering map {}", id);
        paint_tile(&mut canvas, bounds, tile);
    }

    Ok(canvas)
}

/// Compute the bounding box of `registry` and composite it.
pub fn render_registry(registry: &TileRegistry) -> Result<(RgbaImage, Bounds)> {
    let bounds = compute_bounds(registry);
    info!(
        "Map: {} {} {} {} => {}x{}",
        bounds.left,
        bounds.right,
        bounds.top,
        bounds.bottom,
        bounds.width(),
        bounds.height()
    );
    let canvas = composite(registry, &bounds)?;
    Ok((canvas, bounds))
}
