use macroquad::prelude::Rect;
use std::fmt;

/// Key into the sprite atlas.
///
/// Map JSON may give ids as integers or strings; both normalize to the
/// same key, so `TileId::from(43)` and `TileId::from("43")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileId(String);

impl TileId {
    /// Wrap an already-normalized id.
    pub fn new(id: impl Into<String>) -> Self {
        TileId(id.into())
    }

    /// The normalized key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TileId {
    fn from(id: &str) -> Self {
        TileId(id.to_owned())
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        TileId(id.to_string())
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single tile placed at a grid cell. Owned by its layer, immutable once
/// loaded.
#[derive(Debug, Clone)]
pub struct TilePlacement {
    /// Sprite lookup key
    pub id: TileId,
    /// Grid column
    pub gx: u32,
    /// Grid row
    pub gy: u32,
}

impl TilePlacement {
    /// Pixel rectangle covered by this tile.
    pub fn rect(&self, tile_size: u32) -> Rect {
        let ts = tile_size as f32;
        Rect::new(self.gx as f32 * ts, self.gy as f32 * ts, ts, ts)
    }
}

/// A named group of tiles sharing one collision flag.
///
/// The flag applies uniformly: every tile of a `collider` layer blocks
/// movement, there is no per-tile override.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Layer identifier, also the fallback-color and draw-order key
    pub name: String,
    /// Whether every tile in this layer blocks movement
    pub collider: bool,
    /// Placements in document order
    pub tiles: Vec<TilePlacement>,
}
