//! Canvas allocation and block painting

use image::{Rgba, RgbaImage};

use super::error::CompositeError;
use super::Result;
use crate::bounds::Bounds;

/// Canvas width and height for `bounds`.
///
/// Fails on an empty box and on sizes the image buffer can't address.
pub fn canvas_size(bounds: &Bounds) -> Result<(u32, u32)> {
    let (width, height) = (bounds.width(), bounds.height());
    if bounds.is_empty() {
        return Err(CompositeError::EmptyCanvas { width, height });
    }
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(CompositeError::TooLarge { width, height }),
    }
}

/// Allocate a zeroed `width x height` canvas.
///
/// Uses a fallible reservation so an oversized canvas is reported instead
/// of aborting the process.
pub fn allocate_canvas(width: u32, height: u32) -> Result<RgbaImage> {
    let bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(CompositeError::TooLarge { width: i64::from(width), height: i64::from(height) })?;

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| CompositeError::Allocation { width, height, bytes })?;
    buf.resize(bytes, 0);

    RgbaImage::from_raw(width, height, buf)
        .ok_or(CompositeError::Allocation { width, height, bytes })
}

/// Set every pixel of the canvas to `color`.
pub fn fill_canvas(canvas: &mut RgbaImage, color: Rgba<u8>) {
    for pixel in canvas.pixels_mut() {
        *pixel = color;
    }
}

/// Write a `size x size` block of `color` with its top-left corner at
/// `(x, y)`.
///
/// The block is clipped to the canvas; parts outside it are dropped.
pub fn paint_block(canvas: &mut RgbaImage, x: i64, y: i64, size: u32, color: Rgba<u8>) {
    let size = i64::from(size);
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(size).min(i64::from(canvas.width()));
    let y1 = y.saturating_add(size).min(i64::from(canvas.height()));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}
