use macroquad::prelude::Rect;

/// The single moving entity. Position is the top-left corner of its
/// bounding box, in pixels.
#[derive(Debug, Clone)]
pub struct Player {
    /// Current bounding box
    pub rect: Rect,
    /// Pixels moved per step, per axis
    pub speed: f32,
}

impl Player {
    /// Place the player at a grid cell.
    ///
    /// `size` may be a few pixels under the tile size so corners do not
    /// snag on wall seams.
    pub fn at_cell(gx: u32, gy: u32, tile_size: u32, size: f32, speed: f32) -> Self {
        let ts = tile_size as f32;
        Player {
            rect: Rect::new(gx as f32 * ts, gy as f32 * ts, size, size),
            speed,
        }
    }
}
