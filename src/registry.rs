//! Tile registry - loaded tiles indexed by map id

use crate::tile::Tile;

/// Dense table of tiles indexed by map id.
///
/// Slot `i` holds the tile with id `i`, or `None` if that record could not be
/// decoded or was rejected. A tile's slot is always taken from its own id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TileRegistry {
    slots: Vec<Option<Tile>>,
}

impl TileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with `len` empty slots.
    pub fn with_len(len: usize) -> Self {
        let mut registry = Self::new();
        registry.grow_to(len);
        registry
    }

    /// Store `tile` in the slot for its id, growing the table with empty
    /// slots if needed. Returns the tile previously held there.
    pub fn insert(&mut self, tile: Tile) -> Option<Tile> {
        let id = tile.id();
        self.grow_to(id + 1);
        self.slots[id].replace(tile)
    }

    fn grow_to(&mut self, len: usize) {
        if self.slots.len() < len {
            self.slots.resize_with(len, || None);
        }
    }

    /// Number of slots, valid or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The tile for `id`, if that slot exists and holds a tile.
    pub fn get(&self, id: usize) -> Option<&Tile> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// All slots in id order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<&Tile>)> {
        self.slots.iter().enumerate().map(|(id, slot)| (id, slot.as_ref()))
    }

    /// Only the valid tiles, in id order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().flatten()
    }

    pub fn valid_count(&self) -> usize {
        self.tiles().count()
    }
}

/// Each item covers one more slot; a tile still lands at its own id.
impl FromIterator<Option<Tile>> for TileRegistry {
    fn from_iter<I: IntoIterator<Item = Option<Tile>>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (position, tile) in iter.into_iter().enumerate() {
            registry.grow_to(position + 1);
            if let Some(tile) = tile {
                registry.insert(tile);
            }
        }
        registry
    }
}
