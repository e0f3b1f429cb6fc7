//! World-space bounding box of all valid tiles

use crate::registry::TileRegistry;
use crate::tile::Tile;

/// Axis-aligned world rectangle `[left, right) x [top, bottom)`.
///
/// An empty box keeps its sentinel extremes, so its width and height are
/// non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// Starting value before any tile has been seen.
    pub const EMPTY: Bounds =
        Bounds { left: i64::MAX, right: i64::MIN, top: i64::MAX, bottom: i64::MIN };

    /// Footprint of a single tile.
    pub fn of_tile(tile: &Tile) -> Self {
        let half = tile.half_extent();
        let cx = i64::from(tile.center_x());
        let cy = i64::from(tile.center_y());
        Self { left: cx - half, right: cx + half, top: cy - half, bottom: cy + half }
    }

    /// Grow to also cover `other`.
    pub fn include(&mut self, other: &Bounds) {
        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.min(other.top);
        self.bottom = self.bottom.max(other.bottom);
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains(&self, other: &Bounds) -> bool {
        self.left <= other.left
            && other.right <= self.right
            && self.top <= other.top
            && other.bottom <= self.bottom
    }

    pub fn width(&self) -> i64 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i64 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Smallest box covering the full footprint of every valid tile.
///
/// Returns [`Bounds::EMPTY`] when the registry holds no valid tile.
pub fn compute_bounds(registry: &TileRegistry) -> Bounds {
    let mut bounds = Bounds::EMPTY;
    for tile in registry.tiles() {
        bounds.include(&Bounds::of_tile(tile));
    }
    bounds
}
