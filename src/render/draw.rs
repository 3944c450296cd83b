use crate::atlas::{SpriteAtlas, TileVisual};
use crate::render::order::TileDraw;
use crate::scene::model::Pickup;
use crate::scene::player::Player;
use macroquad::prelude::*;

/// Draw a prepared tile sequence, back to front.
pub fn draw_tiles(list: &[TileDraw], atlas: &SpriteAtlas) {
    for tile in list {
        draw_visual(tile.dest, tile.visual, atlas);
    }
}

/// Draw the live pickup set, above the map tiles.
pub fn draw_pickups(pickups: &[Pickup], atlas: &SpriteAtlas, layer: &str) {
    for pickup in pickups {
        draw_visual(pickup.rect, atlas.resolve(&pickup.id, layer), atlas);
    }
}

/// Draw the player. Call last: the player is always on top.
pub fn draw_player(player: &Player, color: Color) {
    let r = player.rect;
    draw_rectangle(r.x, r.y, r.w, r.h, color);
}

fn draw_visual(dest: Rect, visual: TileVisual, atlas: &SpriteAtlas) {
    match visual {
        TileVisual::Sprite(src) => {
            if let Some(texture) = atlas.texture() {
                draw_texture_ex(
                    texture,
                    dest.x,
                    dest.y,
                    WHITE,
                    DrawTextureParams {
                        source: Some(src),
                        dest_size: Some(vec2(dest.w, dest.h)),
                        ..Default::default()
                    },
                );
            }
        }
        TileVisual::Fill(color) => draw_rectangle(dest.x, dest.y, dest.w, dest.h, color),
    }
}
