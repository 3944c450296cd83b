use crate::error::AtlasError;
use crate::layer::TileId;
use macroquad::prelude::*;
use std::collections::HashMap;

/// How a tile should be drawn: a source rectangle into the spritesheet, or
/// a flat fill when no sprite is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileVisual {
    /// Blit this region of the atlas texture
    Sprite(Rect),
    /// Fill the destination with this color
    Fill(Color),
}

/// Spritesheet plus the id → source-offset lookup.
///
/// The texture is optional: without it every lookup degrades to the
/// layer-keyed fallback color, so a tile is always renderable.
pub struct SpriteAtlas {
    texture: Option<Texture2D>,
    mapping: HashMap<TileId, Vec2>,
    tile_size: u32,
}

impl SpriteAtlas {
    /// Load the sheet texture. Fails with [`AtlasError`] if the image
    /// cannot be read or decoded.
    pub async fn load(
        path: &str,
        tile_size: u32,
        mapping: HashMap<TileId, Vec2>,
    ) -> Result<Self, AtlasError> {
        let texture = load_texture(path).await.map_err(|source| AtlasError {
            path: path.to_owned(),
            source,
        })?;
        texture.set_filter(FilterMode::Nearest);
        Ok(SpriteAtlas {
            texture: Some(texture),
            mapping,
            tile_size,
        })
    }

    /// Load the sheet, or warn and continue without it. The degrade path:
    /// every tile then renders as its layer's flat color.
    pub async fn load_or_fallback(
        path: &str,
        tile_size: u32,
        mapping: HashMap<TileId, Vec2>,
    ) -> Self {
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Nearest);
                SpriteAtlas {
                    texture: Some(texture),
                    mapping,
                    tile_size,
                }
            }
            Err(source) => {
                let err = AtlasError {
                    path: path.to_owned(),
                    source,
                };
                warn!("{}; tiles will render as flat colors", err);
                Self::untextured(tile_size, mapping)
            }
        }
    }

    /// An atlas with no backing texture; every lookup takes the
    /// fallback-color path.
    pub fn untextured(tile_size: u32, mapping: HashMap<TileId, Vec2>) -> Self {
        SpriteAtlas {
            texture: None,
            mapping,
            tile_size,
        }
    }

    /// The sheet texture, if it loaded.
    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }

    /// Pixels per sprite edge.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Resolve a tile id to its visual.
    ///
    /// Unknown ids and a missing texture are not errors: both select a flat
    /// fill keyed by the owning layer's name.
    pub fn resolve(&self, id: &TileId, layer: &str) -> TileVisual {
        match (&self.texture, self.mapping.get(id)) {
            (Some(_), Some(src)) => {
                let ts = self.tile_size as f32;
                TileVisual::Sprite(Rect::new(src.x, src.y, ts, ts))
            }
            _ => TileVisual::Fill(fallback_color(layer)),
        }
    }
}

/// Flat fill color for tiles that cannot be drawn from the sheet, keyed by
/// the owning layer's name. Unrecognized layers get a neutral gray.
pub fn fallback_color(layer: &str) -> Color {
    match layer {
        "Floor" => Color::from_rgba(100, 100, 100, 255),
        "Walls" => Color::from_rgba(255, 255, 255, 255),
        "Walls sides" => Color::from_rgba(200, 200, 200, 255),
        "Doors" => Color::from_rgba(139, 69, 19, 255),
        "Traps" => Color::from_rgba(255, 0, 0, 255),
        "Pickups" => Color::from_rgba(0, 255, 0, 255),
        "Background" => Color::from_rgba(50, 50, 150, 255),
        "Sand" => Color::from_rgba(210, 180, 140, 255),
        "Grass" => Color::from_rgba(100, 180, 100, 255),
        "Rocks" => Color::from_rgba(100, 100, 100, 255),
        "Cliff" => Color::from_rgba(120, 80, 50, 255),
        "Buildings" => Color::from_rgba(150, 150, 150, 255),
        _ => Color::from_rgba(100, 100, 100, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> HashMap<TileId, Vec2> {
        [(TileId::from(43), vec2(48.0, 80.0))].into_iter().collect()
    }

    #[test]
    fn untextured_atlas_always_resolves_to_a_fill() {
        let atlas = SpriteAtlas::untextured(16, mapping());
        // mapped id, but no texture
        assert_eq!(
            atlas.resolve(&TileId::from(43), "Grass"),
            TileVisual::Fill(fallback_color("Grass"))
        );
        // unmapped id
        assert_eq!(
            atlas.resolve(&TileId::from(999), "Walls"),
            TileVisual::Fill(fallback_color("Walls"))
        );
    }

    #[test]
    fn unknown_layer_names_fall_back_to_gray() {
        assert_eq!(
            fallback_color("No Such Layer"),
            Color::from_rgba(100, 100, 100, 255)
        );
    }

    #[test]
    fn fill_colors_are_distinct_per_known_layer() {
        assert_ne!(fallback_color("Sand"), fallback_color("Grass"));
        assert_ne!(fallback_color("Pickups"), fallback_color("Traps"));
    }
}
