// Island walk: slide collision along the rock ring, WASD or arrows,
// F1 toggles the collision debug overlay, Escape quits.

use anyhow::Context;
use macroquad::prelude::*;
use macroquad_tilescene::{
    build_draw_list, draw_player, draw_tiles, quit_requested, CollisionMode, InputIntent,
    LayerOrder, Scene, SceneConfig, SpriteAtlas, StepClock, TileId, TileMap,
};
use std::collections::HashMap;

const MAP_PATH: &str = "demos/assets/island.json";
const SHEET_PATH: &str = "demos/assets/spritesheet.png";
const TILE_SIZE: u32 = 64;

fn layer_order() -> LayerOrder {
    LayerOrder::new([
        "Background",
        "Sand",
        "Grass",
        "Rocks",
        "Small rocks",
        "Stairs",
        "Cliff",
        "Buildings",
    ])
}

#[rustfmt::skip]
const SHEET: &[(u32, (f32, f32))] = &[
    // background water
    (107, (192.0, 832.0)),
    // sand
    (97, (64.0, 768.0)), (98, (128.0, 768.0)), (99, (192.0, 768.0)),
    (100, (256.0, 768.0)), (101, (320.0, 768.0)), (102, (384.0, 768.0)),
    (103, (448.0, 768.0)), (104, (0.0, 832.0)), (105, (64.0, 832.0)),
    (106, (192.0, 832.0)),
    // grass
    (76, (256.0, 576.0)), (77, (320.0, 576.0)), (78, (384.0, 576.0)),
    (79, (448.0, 576.0)), (80, (0.0, 640.0)), (81, (64.0, 640.0)),
    (82, (128.0, 640.0)), (83, (192.0, 640.0)), (84, (256.0, 640.0)),
    // rocks
    (85, (320.0, 640.0)), (86, (384.0, 640.0)), (87, (448.0, 640.0)),
    (88, (0.0, 704.0)), (89, (64.0, 704.0)), (90, (128.0, 704.0)),
    (91, (192.0, 704.0)), (92, (256.0, 704.0)), (93, (320.0, 704.0)),
    // buildings
    (0, (0.0, 0.0)), (1, (64.0, 0.0)), (2, (128.0, 0.0)),
    (3, (192.0, 0.0)), (4, (256.0, 0.0)), (5, (320.0, 0.0)),
    (6, (384.0, 0.0)), (7, (448.0, 0.0)), (8, (0.0, 64.0)),
    (9, (64.0, 64.0)), (10, (128.0, 64.0)), (11, (192.0, 64.0)),
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
        window_title: "Island".into(),
        window_width: 896,
        window_height: 640,
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
        collision: CollisionMode::Slide,
        pickup_layer: None,
        start: (5, 5),
        inset: 4.0,
        speed: 4.0,
    };
    let mut scene = Scene::from_map(&map, &cfg);

    let draw_list = build_draw_list(&map, &layer_order(), &atlas, None);

    let mut clock = StepClock::new(60.0);
    let mut show_debug = false;

    loop {
        if quit_requested() {
            break;
        }
        if is_key_pressed(KeyCode::F1) {
            show_debug = !show_debug;
        }

        let input = InputIntent::poll();
        for _ in 0..clock.tick(get_frame_time()) {
            scene.step(input);
        }

        clear_background(BLACK);
        draw_tiles(&draw_list, &atlas);
        draw_player(&scene.player, BLUE);

        if show_debug {
            for wall in scene.walls() {
                draw_rectangle_lines(wall.x, wall.y, wall.w, wall.h, 1.0, RED);
            }
            let lines = [
                format!(
                    "Position: ({:.0}, {:.0})",
                    scene.player.rect.x, scene.player.rect.y
                ),
                format!("Tiles drawn: {}", draw_list.len()),
                format!("Solid tiles: {}", scene.walls().len()),
                "Arrows/WASD: move | F1: debug | ESC: quit".to_owned(),
            ];
            for (i, line) in lines.iter().enumerate() {
                draw_text(line, 10.0, 20.0 + i as f32 * 25.0, 24.0, WHITE);
            }
        }

        next_frame().await;
    }
}
