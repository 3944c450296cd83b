#![warn(missing_docs)]

//! Layered tile-map scene & collision model for Macroquad.
//!
//! Loads a JSON map description (named layers of sparse tile placements,
//! each layer carrying one collision flag), resolves tile sprites against a
//! single spritesheet atlas with a flat-color fallback, and steps a player
//! rectangle against the solid tiles under a configurable collision policy.

mod atlas;
mod error;
mod layer;
mod loader {
    pub mod json_loader;
}
mod map;
mod picker;
mod render {
    pub mod draw;
    pub mod order;
}
mod scene {
    pub mod clock;
    pub mod input;
    pub mod model;
    pub mod player;
}

pub use atlas::{fallback_color, SpriteAtlas, TileVisual};
pub use error::{AtlasError, MapError};
pub use layer::{Layer, TileId, TilePlacement};
pub use map::TileMap;
pub use picker::{PickerView, TilePick};
pub use render::draw::{draw_pickups, draw_player, draw_tiles};
pub use render::order::{build_draw_list, LayerOrder, TileDraw};
pub use scene::clock::StepClock;
pub use scene::input::{quit_requested, InputIntent};
pub use scene::model::{CollisionMode, Pickup, Scene, SceneConfig};
pub use scene::player::Player;
