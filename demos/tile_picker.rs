// Spritesheet inspector: pan with right-drag, zoom with the wheel, left
// click prints the tile's grid cell and linear id.

use macroquad::prelude::*;
use macroquad_tilescene::{quit_requested, PickerView, TilePick};

const SHEET_PATH: &str = "demos/assets/spritesheet.png";
const TILE_SIZE: u32 = 64;

fn window_conf() -> Conf {
    Conf {
        window_title: "Tile Picker".into(),
        window_width: 800,
        window_height: 1000,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let texture = match load_texture(SHEET_PATH).await {
        Ok(texture) => texture,
        Err(err) => {
            error!("Loading spritesheet {}: {:?}", SHEET_PATH, err);
            return;
        }
    };
    texture.set_filter(FilterMode::Nearest);

    let sheet_w = texture.width() as u32;
    let sheet_h = texture.height() as u32;

    let mut view = PickerView::new();
    let mut selected: Option<TilePick> = None;
    let mut last_mouse = Vec2::ZERO;

    loop {
        if quit_requested() {
            break;
        }

        let mouse: Vec2 = mouse_position().into();

        let (_, wheel_y) = mouse_wheel();
        if wheel_y > 0.0 {
            view.zoom_by(0.1);
        } else if wheel_y < 0.0 {
            view.zoom_by(-0.1);
        }

        if is_mouse_button_pressed(MouseButton::Right) {
            last_mouse = mouse;
        }
        if is_mouse_button_down(MouseButton::Right) {
            view.pan_by(mouse - last_mouse);
            last_mouse = mouse;
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(pick) = view.tile_at(mouse, TILE_SIZE, sheet_w, sheet_h) {
                info!("Tile ({}, {}) -> id {}", pick.gx, pick.gy, pick.id);
                selected = Some(pick);
            }
        }

        clear_background(Color::from_rgba(40, 40, 40, 255));

        let scaled = vec2(sheet_w as f32, sheet_h as f32) * view.zoom;
        draw_texture_ex(
            &texture,
            view.offset.x,
            view.offset.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(scaled),
                ..Default::default()
            },
        );

        draw_grid_lines(view, sheet_w, sheet_h);

        if let Some(pick) = selected {
            let cell = TILE_SIZE as f32 * view.zoom;
            draw_rectangle_lines(
                view.offset.x + pick.gx as f32 * cell,
                view.offset.y + pick.gy as f32 * cell,
                cell,
                cell,
                2.0,
                YELLOW,
            );
            draw_text(
                &format!("id {} at ({}, {})", pick.id, pick.gx, pick.gy),
                10.0,
                screen_height() - 12.0,
                24.0,
                YELLOW,
            );
        }

        next_frame().await;
    }
}

fn draw_grid_lines(view: PickerView, sheet_w: u32, sheet_h: u32) {
    let cell = TILE_SIZE as f32 * view.zoom;
    let w = sheet_w as f32 * view.zoom;
    let h = sheet_h as f32 * view.zoom;
    let grid = Color::new(1.0, 1.0, 1.0, 0.4);

    let mut x = 0.0;
    while x <= w {
        draw_line(view.offset.x + x, view.offset.y, view.offset.x + x, view.offset.y + h, 1.0, grid);
        x += cell;
    }
    let mut y = 0.0;
    while y <= h {
        draw_line(view.offset.x, view.offset.y + y, view.offset.x + w, view.offset.y + y, 1.0, grid);
        y += cell;
    }
}
