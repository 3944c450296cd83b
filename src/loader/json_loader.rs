use crate::error::MapError;
use crate::layer::{Layer, TileId, TilePlacement};
use crate::map::TileMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMap {
    tile_size: u32,
    map_width: u32,
    map_height: u32,
    layers: Vec<RawLayer>,
}

#[derive(Deserialize)]
struct RawLayer {
    name: String,
    collider: bool,
    tiles: Vec<RawTile>,
}

#[derive(Deserialize)]
struct RawTile {
    id: RawTileId,
    x: u32,
    y: u32,
}

// Authoring tools emit ids as numbers or strings interchangeably.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTileId {
    Num(u64),
    Name(String),
}

impl From<RawTileId> for TileId {
    fn from(raw: RawTileId) -> Self {
        match raw {
            RawTileId::Num(n) => TileId::new(n.to_string()),
            RawTileId::Name(s) => TileId::new(s),
        }
    }
}

pub fn decode_map_str(json: &str) -> Result<TileMap, MapError> {
    let raw: RawMap = serde_json::from_str(json)?;

    if raw.tile_size == 0 {
        return Err(MapError::InvalidTileSize);
    }

    let layers = raw
        .layers
        .into_iter()
        .map(|l| Layer {
            name: l.name,
            collider: l.collider,
            tiles: l
                .tiles
                .into_iter()
                .map(|t| TilePlacement {
                    id: t.id.into(),
                    gx: t.x,
                    gy: t.y,
                })
                .collect(),
        })
        .collect();

    Ok(TileMap {
        tile_size: raw.tile_size,
        map_width: raw.map_width,
        map_height: raw.map_height,
        layers,
    })
}

pub fn decode_map_file(path: &Path) -> Result<TileMap, MapError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(MapError::UnsupportedFormat(path.display().to_string()));
    }

    let txt = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_map_str(&txt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_MAP: &str = r#"
    {
        "tileSize": 64,
        "mapWidth": 4,
        "mapHeight": 3,
        "layers": [
            {
                "name": "Sand",
                "collider": false,
                "tiles": [ { "id": 97, "x": 0, "y": 0 }, { "id": "98", "x": 1, "y": 0 } ]
            },
            {
                "name": "Rocks",
                "collider": true,
                "tiles": [ { "id": 85, "x": 2, "y": 1 } ]
            }
        ]
    }
    "#;

    #[test]
    fn decodes_layers_and_tiles_in_document_order() {
        let map = decode_map_str(VALID_MAP).expect("valid map should decode");
        assert_eq!(map.tile_size, 64);
        assert_eq!(map.map_width, 4);
        assert_eq!(map.map_height, 3);
        assert_eq!(map.layers.len(), 2);

        let sand = &map.layers[0];
        assert_eq!(sand.name, "Sand");
        assert!(!sand.collider);
        assert_eq!(sand.tiles.len(), 2);
        assert_eq!(sand.tiles[0].id, TileId::from(97));
        assert_eq!((sand.tiles[1].gx, sand.tiles[1].gy), (1, 0));

        let rocks = &map.layers[1];
        assert!(rocks.collider);
    }

    #[test]
    fn numeric_and_string_ids_decode_to_equal_keys() {
        let map = decode_map_str(VALID_MAP).unwrap();
        // "98" was given as a string in the JSON
        assert_eq!(map.layers[0].tiles[1].id, TileId::from(98));
    }

    #[test]
    fn missing_tile_size_is_a_parse_error() {
        let json = r#"{ "mapWidth": 1, "mapHeight": 1, "layers": [] }"#;
        let err = decode_map_str(json).unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        let json = r#"{ "tileSize": 0, "mapWidth": 1, "mapHeight": 1, "layers": [] }"#;
        let err = decode_map_str(json).unwrap_err();
        assert!(matches!(err, MapError::InvalidTileSize));
    }

    #[test]
    fn negative_tile_coordinates_are_a_parse_error() {
        let json = r#"
        {
            "tileSize": 16, "mapWidth": 2, "mapHeight": 2,
            "layers": [
                { "name": "L", "collider": false, "tiles": [ { "id": 1, "x": -1, "y": 0 } ] }
            ]
        }
        "#;
        let err = decode_map_str(json).unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
    }

    #[test]
    fn tile_entry_without_id_is_a_parse_error() {
        let json = r#"
        {
            "tileSize": 16, "mapWidth": 1, "mapHeight": 1,
            "layers": [
                { "name": "L", "collider": false, "tiles": [ { "x": 0, "y": 0 } ] }
            ]
        }
        "#;
        let err = decode_map_str(json).unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
    }

    #[test]
    fn decode_ignores_extra_fields() {
        let json = r#"
        {
            "tileSize": 16, "mapWidth": 1, "mapHeight": 1,
            "editorVersion": "ignored",
            "layers": [
                { "name": "L", "collider": false, "opacity": 0.5, "tiles": [] }
            ]
        }
        "#;
        let map = decode_map_str(json).expect("unknown fields should be ignored");
        assert_eq!(map.layers[0].name, "L");
    }
}
