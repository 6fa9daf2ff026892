mod board;
mod consts;
mod history;
mod levels;
mod model_helpers;
mod models;
mod snapshot;

pub use board::{Board, BoxCounts};
pub use consts::*;
pub use history::{MoveHistory, MoveRecord};
pub use levels::{LevelData, LoadError, parse_level, read_level_file};
pub use models::{
    Direction, Entity, EntityId, EntityKind, MoveOutcome, Tile, UndoOutcome, Vec2,
};
pub use snapshot::get_json_data;
