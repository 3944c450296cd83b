use crate::layer::TileId;
use crate::map::TileMap;
use crate::scene::input::InputIntent;
use crate::scene::player::Player;
use macroquad::prelude::Rect;

/// How the player's step interacts with walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    /// Resolve-and-clamp per axis: the moving edge snaps to the touching
    /// wall edge, and the other axis still applies, so diagonal movement
    /// slides along walls.
    Slide,
    /// Reject the whole step if the tentative rectangle overlaps any wall.
    Block,
}

/// Scene construction parameters.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Collision policy for player movement
    pub collision: CollisionMode,
    /// Non-colliding layer whose tiles become collectibles
    pub pickup_layer: Option<String>,
    /// Player starting grid cell
    pub start: (u32, u32),
    /// Pixels shaved off the player's tile-sized bounding box
    pub inset: f32,
    /// Pixels moved per step, per axis
    pub speed: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            collision: CollisionMode::Slide,
            pickup_layer: None,
            start: (5, 5),
            inset: 4.0,
            speed: 4.0,
        }
    }
}

/// A collectible tile still on the field.
#[derive(Debug, Clone)]
pub struct Pickup {
    /// Sprite lookup key
    pub id: TileId,
    /// Pixel rectangle tested against the player
    pub rect: Rect,
}

/// Per-frame game state: the player, the wall set and the live pickups.
///
/// The update step owns all of it exclusively; rendering only reads the
/// already-finalized state. `step` performs no I/O and cannot fail.
pub struct Scene {
    /// The moving entity, mutated once per step
    pub player: Player,
    walls: Vec<Rect>,
    pickups: Vec<Pickup>,
    collected: u32,
    mode: CollisionMode,
}

impl Scene {
    /// Build the runtime scene from a loaded map.
    ///
    /// Walls come from every collider layer. Pickups come from
    /// `cfg.pickup_layer` when that layer exists and is non-colliding.
    pub fn from_map(map: &TileMap, cfg: &SceneConfig) -> Self {
        let walls = map.walls();

        let mut pickups = Vec::new();
        if let Some(pickup_layer) = cfg.pickup_layer.as_deref() {
            for layer in &map.layers {
                if layer.name == pickup_layer && !layer.collider {
                    pickups.extend(layer.tiles.iter().map(|tile| Pickup {
                        id: tile.id.clone(),
                        rect: tile.rect(map.tile_size),
                    }));
                }
            }
        }

        let size = map.tile_size as f32 - cfg.inset;
        let player = Player::at_cell(cfg.start.0, cfg.start.1, map.tile_size, size, cfg.speed);

        Scene {
            player,
            walls,
            pickups,
            collected: 0,
            mode: cfg.collision,
        }
    }

    /// Advance the simulation one step: move per the collision mode, then
    /// collect any pickups the finalized position overlaps.
    pub fn step(&mut self, input: InputIntent) {
        let (dx, dy) = input.velocity(self.player.speed);

        match self.mode {
            CollisionMode::Slide => {
                if dx != 0.0 {
                    self.move_axis(dx, 0.0);
                }
                if dy != 0.0 {
                    self.move_axis(0.0, dy);
                }
            }
            CollisionMode::Block => {
                let mut next = self.player.rect;
                next.x += dx;
                next.y += dy;
                if !self.walls.iter().any(|wall| intersects(&next, wall)) {
                    self.player.rect = next;
                }
            }
        }

        self.collect_overlapping();
    }

    fn move_axis(&mut self, dx: f32, dy: f32) {
        let rect = &mut self.player.rect;
        rect.x += dx;
        rect.y += dy;

        for wall in &self.walls {
            if intersects(rect, wall) {
                if dx > 0.0 {
                    rect.x = wall.x - rect.w;
                } else if dx < 0.0 {
                    rect.x = wall.x + wall.w;
                } else if dy > 0.0 {
                    rect.y = wall.y - rect.h;
                } else if dy < 0.0 {
                    rect.y = wall.y + wall.h;
                }
            }
        }
    }

    fn collect_overlapping(&mut self) {
        let player = self.player.rect;
        let before = self.pickups.len();
        self.pickups.retain(|pickup| !intersects(&player, &pickup.rect));
        self.collected += (before - self.pickups.len()) as u32;
    }

    /// Obstacle rectangles the player collides with.
    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// Collectibles still on the field.
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// Unique pickups collected so far.
    pub fn collected(&self) -> u32 {
        self.collected
    }
}

// Touching edges do not collide, so a player clamped flush against a wall
// can still slide along it.
fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
