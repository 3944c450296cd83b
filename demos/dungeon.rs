// Dungeon crawl: bordered room, solid walls, collectible pickups.
//
// Runs fine without the spritesheet on disk; every tile then renders as
// its layer's flat color.

use anyhow::Context;
use macroquad::prelude::*;
use macroquad_tilescene::{
    build_draw_list, draw_pickups, draw_player, draw_tiles, quit_requested, CollisionMode,
    InputIntent, LayerOrder, Scene, SceneConfig, SpriteAtlas, StepClock, TileId, TileMap,
};
use std::collections::HashMap;

const MAP_PATH: &str = "demos/assets/dungeon.json";
const SHEET_PATH: &str = "demos/assets/spritesheet.png";
const TILE_SIZE: u32 = 16;
const PICKUP_LAYER: &str = "Pickups";

// Back-to-front: floor at the bottom, collectibles on top.
fn layer_order() -> LayerOrder {
    LayerOrder::new([
        "Floor",
        "Walls",
        "Walls sides",
        "Walls pillars",
        "Doors",
        "Traps",
        "Miscs",
        "Gargoyles",
        PICKUP_LAYER,
    ])
}

#[rustfmt::skip]
const SHEET: &[(u32, (f32, f32))] = &[
    // floor
    (43, (48.0, 80.0)),
    // walls
    (27, (48.0, 48.0)), (28, (64.0, 48.0)), (29, (80.0, 48.0)),
    (35, (48.0, 64.0)), (36, (64.0, 64.0)),
    (37, (80.0, 64.0)), (38, (96.0, 64.0)), (39, (112.0, 64.0)),
    (40, (0.0, 80.0)), (41, (16.0, 80.0)), (42, (32.0, 80.0)),
    // doors
    (0, (0.0, 0.0)), (1, (16.0, 0.0)), (2, (32.0, 0.0)), (3, (48.0, 0.0)),
    (4, (64.0, 0.0)), (5, (80.0, 0.0)), (6, (96.0, 0.0)), (7, (112.0, 0.0)),
    (8, (0.0, 16.0)), (9, (16.0, 16.0)),
    // gargoyles and props
    (30, (96.0, 48.0)), (31, (112.0, 48.0)), (32, (0.0, 64.0)),
    (33, (16.0, 64.0)), (34, (32.0, 64.0)),
    (10, (32.0, 16.0)), (11, (48.0, 16.0)), (12, (64.0, 16.0)),
    (13, (80.0, 16.0)), (14, (96.0, 16.0)), (15, (112.0, 16.0)),
    (16, (0.0, 32.0)), (17, (16.0, 32.0)), (18, (32.0, 32.0)),
    (19, (48.0, 32.0)), (20, (64.0, 32.0)), (21, (80.0, 32.0)),
    // items and traps
    (22, (96.0, 32.0)), (23, (112.0, 32.0)), (24, (0.0, 48.0)),
    (25, (16.0, 48.0)), (26, (32.0, 48.0)),
];

fn sprite_mapping() -> HashMap<TileId, Vec2> {
    SHEET
        .iter()
        .map(|&(id, (x, y))| (TileId::from(id), vec2(x, y)))
        .collect()
}

fn load_map() -> anyhow::Result<TileMap> {
    TileMap::load_from_file(MAP_PATH).with_context(|| format!("Loading map {}", MAP_PATH))
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Dungeon".into(),
        window_width: 320,
        window_height: 320,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let map = match load_map() {
        Ok(map) => map,
        Err(err) => {
            error!("{:#}", err);
            return;
        }
    };
    request_new_screen_size(map.px_width(), map.px_height());

    let atlas = SpriteAtlas::load_or_fallback(SHEET_PATH, TILE_SIZE, sprite_mapping()).await;

    let cfg = SceneConfig {
        collision: CollisionMode::Block,
        pickup_layer: Some(PICKUP_LAYER.to_owned()),
        start: (10, 10),
        inset: 0.0,
        speed: 3.0,
    };
    let mut scene = Scene::from_map(&map, &cfg);

    let draw_list = build_draw_list(&map, &layer_order(), &atlas, Some(PICKUP_LAYER));
    let player_color = if atlas.texture().is_some() { RED } else { BLUE };

    let mut clock = StepClock::new(60.0);

    loop {
        if quit_requested() {
            break;
        }

        let input = InputIntent::poll();
        for _ in 0..clock.tick(get_frame_time()) {
            scene.step(input);
        }

        clear_background(BLACK);
        draw_tiles(&draw_list, &atlas);
        draw_pickups(scene.pickups(), &atlas, PICKUP_LAYER);
        draw_player(&scene.player, player_color);

        draw_text(
            &format!("Items: {}", scene.collected()),
            10.0,
            20.0,
            24.0,
            WHITE,
        );

        next_frame().await;
    }
}
