use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::{EntityKind, Tile, Vec2};

// Cell codes of the level text format. One integer per cell, rows separated
// by newlines, columns by whitespace.
const FLOOR: i32 = 0;
const PLAYER: i32 = 1;
const LIGHT_BOX: i32 = 2;
const HEAVY_BOX: i32 = 3;
const WALL: i32 = 4;
const TARGET: i32 = 5;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    EmptyLevel,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    BadCode {
        row: usize,
        column: usize,
        code: String,
    },
    MissingPlayer,
    ExtraPlayer {
        at: Vec2,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "cannot read level source: {}", err),
            LoadError::EmptyLevel => write!(f, "level source contains no rows"),
            LoadError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            LoadError::BadCode { row, column, code } => {
                write!(f, "unrecognized cell code {:?} at row {} column {}", code, row, column)
            }
            LoadError::MissingPlayer => write!(f, "level has no player cell"),
            LoadError::ExtraPlayer { at } => {
                write!(f, "level has more than one player, second at row {} column {}", at.i, at.j)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

/// Parsed but not yet rule-checked level: the static tile layer plus the
/// entities authored on top of it, in reading order.
pub struct LevelData {
    pub grid: Vec<Vec<Tile>>,
    pub entities: Vec<(EntityKind, Vec2)>,
}

/// Parses the integer-code level text. Blank lines are skipped; every
/// remaining row must have the same column count. An entity code leaves a
/// floor tile behind and appends the entity at that cell.
pub fn parse_level(source: &str) -> Result<LevelData, LoadError> {
    let mut grid: Vec<Vec<Tile>> = Vec::new();
    let mut entities: Vec<(EntityKind, Vec2)> = Vec::new();

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let i = grid.len();
        let mut row = Vec::new();

        for token in line.split_whitespace() {
            let j = row.len();
            let position = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            let code = token.parse::<i32>().map_err(|_| LoadError::BadCode {
                row: i,
                column: j,
                code: token.to_string(),
            })?;
            let tile = match code {
                FLOOR => Tile::Floor,
                WALL => Tile::Wall,
                TARGET => Tile::Target,
                PLAYER => {
                    entities.push((EntityKind::Player, position));
                    Tile::Floor
                }
                LIGHT_BOX => {
                    entities.push((EntityKind::LightBox, position));
                    Tile::Floor
                }
                HEAVY_BOX => {
                    entities.push((EntityKind::HeavyBox, position));
                    Tile::Floor
                }
                _ => {
                    return Err(LoadError::BadCode {
                        row: i,
                        column: j,
                        code: token.to_string(),
                    });
                }
            };
            row.push(tile);
        }

        if let Some(first) = grid.first() {
            if row.len() != first.len() {
                return Err(LoadError::RaggedRow {
                    row: i,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        grid.push(row);
    }

    if grid.is_empty() || grid[0].is_empty() {
        return Err(LoadError::EmptyLevel);
    }

    Ok(LevelData { grid, entities })
}

pub fn read_level_file<P: AsRef<Path>>(path: P) -> Result<LevelData, LoadError> {
    parse_level(&fs::read_to_string(path)?)
}

pub(crate) fn tile_code(tile: Tile) -> i32 {
    match tile {
        Tile::Floor => FLOOR,
        Tile::Wall => WALL,
        Tile::Target => TARGET,
    }
}

pub(crate) fn entity_code(kind: EntityKind) -> i32 {
    match kind {
        EntityKind::Player => PLAYER,
        EntityKind::LightBox => LIGHT_BOX,
        EntityKind::HeavyBox => HEAVY_BOX,
    }
}
