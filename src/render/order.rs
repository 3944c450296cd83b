use crate::atlas::{SpriteAtlas, TileVisual};
use crate::map::TileMap;
use macroquad::prelude::Rect;

/// Back-to-front preference order over layer names.
///
/// Names listed earlier paint first (furthest back). Unlisted names rank
/// just above every listed one, so stray layers still draw.
#[derive(Debug, Clone)]
pub struct LayerOrder {
    names: Vec<String>,
}

impl LayerOrder {
    /// Build an order from layer names, back to front.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LayerOrder {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Draw rank for a layer name; the sentinel `len` for unlisted names.
    pub fn rank(&self, name: &str) -> usize {
        self.names
            .iter()
            .position(|n| n == name)
            .unwrap_or(self.names.len())
    }
}

/// One renderable tile: destination rectangle plus resolved visual.
#[derive(Debug, Clone, Copy)]
pub struct TileDraw {
    /// Where on the map the tile lands, in pixels
    pub dest: Rect,
    /// Sprite region or fallback fill
    pub visual: TileVisual,
}

/// Flatten a map into a back-to-front draw sequence.
///
/// Stable sort by layer rank: ties keep document order, so tiles within a
/// layer and equally-ranked layers never reorder. `exclude_layer` skips the
/// layer whose tiles are drawn live elsewhere (the pickup set).
pub fn build_draw_list(
    map: &TileMap,
    order: &LayerOrder,
    atlas: &SpriteAtlas,
    exclude_layer: Option<&str>,
) -> Vec<TileDraw> {
    let mut ranked: Vec<(usize, TileDraw)> = Vec::new();
    for layer in &map.layers {
        if exclude_layer == Some(layer.name.as_str()) {
            continue;
        }
        let rank = order.rank(&layer.name);
        for tile in &layer.tiles {
            ranked.push((
                rank,
                TileDraw {
                    dest: tile.rect(map.tile_size),
                    visual: atlas.resolve(&tile.id, &layer.name),
                },
            ));
        }
    }
    ranked.sort_by_key(|&(rank, _)| rank);
    ranked.into_iter().map(|(_, draw)| draw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::fallback_color;
    use std::collections::HashMap;

    fn order() -> LayerOrder {
        LayerOrder::new(["Background", "Grass", "Buildings"])
    }

    fn atlas() -> SpriteAtlas {
        SpriteAtlas::untextured(16, HashMap::new())
    }

    // Layers arrive front-first to force a reorder.
    const SHUFFLED_MAP: &str = r#"
    {
        "tileSize": 16,
        "mapWidth": 4,
        "mapHeight": 4,
        "layers": [
            { "name": "Buildings", "collider": true,
              "tiles": [ { "id": 5, "x": 3, "y": 3 } ] },
            { "name": "Background", "collider": false,
              "tiles": [ { "id": 1, "x": 0, "y": 0 }, { "id": 2, "x": 1, "y": 0 } ] },
            { "name": "Grass", "collider": false,
              "tiles": [ { "id": 3, "x": 2, "y": 0 } ] }
        ]
    }
    "#;

    #[test]
    fn rank_follows_the_order_with_a_sentinel_for_unknowns() {
        let order = order();
        assert_eq!(order.rank("Background"), 0);
        assert_eq!(order.rank("Buildings"), 2);
        assert_eq!(order.rank("Lava"), 3);
    }

    #[test]
    fn draw_list_paints_back_to_front() {
        let map = TileMap::load_from_str(SHUFFLED_MAP).unwrap();
        let list = build_draw_list(&map, &order(), &atlas(), None);
        assert_eq!(list.len(), 4);

        // Background first, Buildings last, despite document order.
        assert_eq!(list[0].dest, Rect::new(0.0, 0.0, 16.0, 16.0));
        assert_eq!(list[3].dest, Rect::new(48.0, 48.0, 16.0, 16.0));
    }

    #[test]
    fn tiles_within_a_layer_keep_insertion_order() {
        let map = TileMap::load_from_str(SHUFFLED_MAP).unwrap();
        let list = build_draw_list(&map, &order(), &atlas(), None);

        // The two Background tiles stay in document order.
        assert_eq!(list[0].dest.x, 0.0);
        assert_eq!(list[1].dest.x, 16.0);
    }

    #[test]
    fn unknown_layers_draw_above_known_ones_in_document_order() {
        let json = r#"
        {
            "tileSize": 16, "mapWidth": 2, "mapHeight": 2,
            "layers": [
                { "name": "Mystery B", "collider": false, "tiles": [ { "id": 1, "x": 0, "y": 0 } ] },
                { "name": "Buildings", "collider": false, "tiles": [ { "id": 2, "x": 1, "y": 0 } ] },
                { "name": "Mystery A", "collider": false, "tiles": [ { "id": 3, "x": 0, "y": 1 } ] }
            ]
        }
        "#;
        let map = TileMap::load_from_str(json).unwrap();
        let list = build_draw_list(&map, &order(), &atlas(), None);

        // Buildings (rank 2) first, then both sentinel-ranked layers in
        // document order.
        assert_eq!(list[0].dest, Rect::new(16.0, 0.0, 16.0, 16.0));
        assert_eq!(list[1].dest, Rect::new(0.0, 0.0, 16.0, 16.0));
        assert_eq!(list[2].dest, Rect::new(0.0, 16.0, 16.0, 16.0));
    }

    #[test]
    fn excluded_layer_is_left_out() {
        let map = TileMap::load_from_str(SHUFFLED_MAP).unwrap();
        let list = build_draw_list(&map, &order(), &atlas(), Some("Grass"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn untextured_atlas_yields_a_fill_for_every_tile() {
        let map = TileMap::load_from_str(SHUFFLED_MAP).unwrap();
        let list = build_draw_list(&map, &order(), &atlas(), None);
        assert!(list
            .iter()
            .all(|draw| matches!(draw.visual, TileVisual::Fill(_))));
        assert_eq!(
            list[0].visual,
            TileVisual::Fill(fallback_color("Background"))
        );
    }
}
