//! Paint order - which tiles end up on top
//!
//! Coarse tiles are painted first so finer ones cover them; among tiles of
//! the same scale the most recently modified is painted last.

use std::cmp::Ordering;
use std::time::SystemTime;

use crate::registry::TileRegistry;
use crate::tile::Tile;

/// One registry slot as seen by the paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintSlot {
    pub id: usize,
    /// `(scale, mtime)` of the tile, `None` for an empty slot
    pub key: Option<(u8, SystemTime)>,
}

impl PaintSlot {
    pub fn of(id: usize, tile: Option<&Tile>) -> Self {
        Self { id, key: tile.map(|t| (t.scale(), t.mtime())) }
    }
}

/// Compare two slots by paint order.
///
/// - Present tiles: larger scale first, then older `mtime` first, then
///   lower id first.
/// - Empty slots sort after every present tile, by id among themselves.
///   They are skipped when painting, so their position has no effect.
pub fn paint_cmp(a: &PaintSlot, b: &PaintSlot) -> Ordering {
    match (a.key, b.key) {
        (Some((scale_a, mtime_a)), Some((scale_b, mtime_b))) => scale_b
            .cmp(&scale_a)
            .then(mtime_a.cmp(&mtime_b))
            .then(a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

impl Ord for PaintSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        paint_cmp(self, other)
    }
}

impl PartialOrd for PaintSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Every id in the registry, in the order tiles should be painted.
pub fn paint_order(registry: &TileRegistry) -> Vec<usize> {
    let mut slots: Vec<PaintSlot> =
        registry.slots().map(|(id, tile)| PaintSlot::of(id, tile)).collect();
    slots.sort();
    slots.into_iter().map(|slot| slot.id).collect()
}
