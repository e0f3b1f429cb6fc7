//! Map color palette
//!
//! Every stored map byte is a color index: the upper six bits select one of
//! the base colors below and the lower two bits select a shade multiplier.
//! Indices whose base lies beyond the table resolve to transparent.

use image::Rgba;

/// Color index reserved for "no data".
///
/// It still resolves to a color, which is used to pre-fill the canvas, but
/// painting never writes it over existing pixels.
pub const BACKGROUND_INDEX: u8 = 0;

/// Color returned for indices past the end of [`BASE_COLORS`].
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Base RGB colors, one per group of four color indices.
pub const BASE_COLORS: [[u8; 3]; 36] = [
    [214, 190, 150],
    [127, 178, 56],
    [247, 233, 163],
    [167, 167, 167],
    [255, 0, 0],
    [160, 160, 255],
    [167, 167, 167],
    [0, 124, 0],
    [255, 255, 255],
    [164, 168, 184],
    [183, 106, 47],
    [112, 112, 112],
    [64, 64, 255],
    [104, 83, 50],
    [255, 252, 245],
    [216, 127, 51],
    [178, 76, 216],
    [102, 153, 216],
    [229, 229, 51],
    [127, 204, 25],
    [242, 127, 165],
    [76, 76, 76],
    [153, 153, 153],
    [76, 127, 153],
    [127, 63, 178],
    [51, 76, 178],
    [102, 76, 51],
    [102, 127, 51],
    [153, 51, 51],
    [25, 25, 25],
    [250, 238, 77],
    [93, 219, 213],
    [74, 128, 255],
    [0, 217, 58],
    [21, 20, 31],
    [112, 2, 0],
];

/// Shade multipliers out of 255, selected by `index % 4`.
pub const SHADES: [u32; 4] = [180, 220, 255, 135];

/// Resolve a color index to an RGBA value.
///
/// Each channel is `base * shade / 255` with truncating division; the result
/// is fully opaque. Indices with `index / 4 >= BASE_COLORS.len()` resolve to
/// [`TRANSPARENT`].
///
/// # Examples
///
/// ```
/// use mapstitch::palette::get_color;
/// use image::Rgba;
///
/// // Base 2 (sand), shade 2 (full brightness)
/// assert_eq!(get_color(10), Rgba([247, 233, 163, 255]));
/// // Past the table
/// assert_eq!(get_color(255), Rgba([0, 0, 0, 0]));
/// ```
pub fn get_color(index: u8) -> Rgba<u8> {
    let base = usize::from(index / 4);
    let shade = SHADES[usize::from(index % 4)];

    let Some(rgb) = BASE_COLORS.get(base) else {
        return TRANSPARENT;
    };

    let channel = |c: u8| (u32::from(c) * shade / 255) as u8;
    Rgba([channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), 255])
}

/// Color used to pre-fill an empty canvas.
pub fn background_color() -> Rgba<u8> {
    get_color(BACKGROUND_INDEX)
}
