use macroquad::prelude::*;

/// Directional intent for one simulation step.
///
/// Opposing keys held at once do not cancel: right wins over left and down
/// wins over up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    /// Move left
    pub left: bool,
    /// Move right
    pub right: bool,
    /// Move up
    pub up: bool,
    /// Move down
    pub down: bool,
}

impl InputIntent {
    /// Read the arrow keys and WASD.
    pub fn poll() -> Self {
        InputIntent {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        }
    }

    /// Per-axis velocity at the given speed.
    pub fn velocity(&self, speed: f32) -> (f32, f32) {
        let mut dx = 0.0;
        if self.left {
            dx = -speed;
        }
        if self.right {
            dx = speed;
        }
        let mut dy = 0.0;
        if self.up {
            dy = -speed;
        }
        if self.down {
            dy = speed;
        }
        (dx, dy)
    }
}

/// True once on the frame the exit key is hit.
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
