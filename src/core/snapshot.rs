use serde::{Deserialize, Serialize};

use crate::core::levels::{entity_code, tile_code};
use crate::core::{Board, Tile, Vec2};

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    width: i32,
    height: i32,
    tiles: Vec<Vec<i32>>,
    entities: Vec<JsonEntity>,
    moves: usize,
    unresolved_boxes: usize,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEntity {
    id: usize,
    kind: i32,
    i: i32,
    j: i32,
    progress: f64,
}

/// Serializes a board snapshot for external renderers. Tile and entity kind
/// fields reuse the level-format cell codes.
pub fn get_json_data(board: &Board) -> String {
    let tiles: Vec<Vec<i32>> = (0..board.height())
        .map(|i| {
            (0..board.width())
                .map(|j| {
                    let tile = board.static_tile(Vec2 { i, j }).unwrap_or(Tile::Floor);
                    tile_code(tile)
                })
                .collect()
        })
        .collect();

    let entities: Vec<JsonEntity> = board
        .entities()
        .map(|(id, entity)| JsonEntity {
            id: id.0,
            kind: entity_code(entity.kind),
            i: entity.position.i,
            j: entity.position.j,
            progress: entity.progress,
        })
        .collect();

    let json_data = JsonData {
        width: board.width(),
        height: board.height(),
        tiles,
        entities,
        moves: board.move_count(),
        unresolved_boxes: board.box_counts().unresolved(),
    };
    serde_json::to_string_pretty(&json_data).unwrap()
}
