use crate::error::MapError;
use crate::layer::Layer;
use crate::loader::json_loader;
use macroquad::prelude::Rect;
use std::path::Path;

/// A loaded tile map. Immutable after load.
#[derive(Debug, Clone)]
pub struct TileMap {
    /// Pixels per tile edge, always positive
    pub tile_size: u32,
    /// Map width in tiles
    pub map_width: u32,
    /// Map height in tiles
    pub map_height: u32,
    /// Layers in document order
    pub layers: Vec<Layer>,
}

impl TileMap {
    /// Parse a map from its JSON description.
    pub fn load_from_str(json: &str) -> Result<Self, MapError> {
        json_loader::decode_map_str(json)
    }

    /// Load a map from a file path, only supporting JSON for now.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        json_loader::decode_map_file(path.as_ref())
    }

    /// Map width in pixels.
    pub fn px_width(&self) -> f32 {
        (self.map_width * self.tile_size) as f32
    }

    /// Map height in pixels.
    pub fn px_height(&self) -> f32 {
        (self.map_height * self.tile_size) as f32
    }

    /// Obstacle rectangles: every tile of every collider layer.
    ///
    /// Built once after load; movement resolution only ever reads it.
    pub fn walls(&self) -> Vec<Rect> {
        self.layers
            .iter()
            .filter(|layer| layer.collider)
            .flat_map(|layer| layer.tiles.iter().map(|tile| tile.rect(self.tile_size)))
            .collect()
    }
}
