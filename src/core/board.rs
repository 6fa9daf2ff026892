use std::path::Path;

use bimap::BiMap;

use crate::core::history::{MoveHistory, MoveRecord};
use crate::core::levels::{self, LevelData, LoadError};
use crate::core::{
    Direction, Entity, EntityId, EntityKind, MoveOutcome, SETTLE_SPEED, Tile, UndoOutcome, Vec2,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoxCounts {
    pub light: usize,
    pub heavy: usize,
    pub unresolved_light: usize,
    pub unresolved_heavy: usize,
}

impl BoxCounts {
    pub fn unresolved(&self) -> usize {
        self.unresolved_light + self.unresolved_heavy
    }
}

/// The board state machine: a fixed rectangular tile layer overlaid by an
/// arena of movable entities. Sole owner of both layers; every lookup hands
/// out copies or ids, never references into the arena.
pub struct Board {
    grid: Vec<Vec<Tile>>,
    entities: Vec<Entity>,
    occupancy: BiMap<Vec2, EntityId>,
    player: EntityId,
    history: MoveHistory,
    light_boxes: usize,
    heavy_boxes: usize,
    targets: usize,
    unresolved_light: usize,
    unresolved_heavy: usize,
}

impl Board {
    pub fn load(source: &str) -> Result<Board, LoadError> {
        Board::from_level(levels::parse_level(source)?)
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
        Board::from_level(levels::read_level_file(path)?)
    }

    fn from_level(level: LevelData) -> Result<Board, LoadError> {
        let mut entities = Vec::with_capacity(level.entities.len());
        let mut occupancy = BiMap::new();
        let mut player = None;
        let mut light_boxes = 0;
        let mut heavy_boxes = 0;

        for (index, &(kind, position)) in level.entities.iter().enumerate() {
            let id = EntityId(index);
            match kind {
                EntityKind::Player => {
                    if player.is_some() {
                        return Err(LoadError::ExtraPlayer { at: position });
                    }
                    player = Some(id);
                }
                EntityKind::LightBox => light_boxes += 1,
                EntityKind::HeavyBox => heavy_boxes += 1,
            }
            occupancy.insert(position, id);
            entities.push(Entity {
                kind,
                position,
                progress: 1.0,
            });
        }
        let player = player.ok_or(LoadError::MissingPlayer)?;

        let targets = level
            .grid
            .iter()
            .flatten()
            .filter(|&&tile| tile == Tile::Target)
            .count();

        // Nothing starts resolved: the format cannot author a box on a
        // target, so the unresolved counts equal the totals.
        Ok(Board {
            grid: level.grid,
            entities,
            occupancy,
            player,
            history: MoveHistory::new(),
            light_boxes,
            heavy_boxes,
            targets,
            unresolved_light: light_boxes,
            unresolved_heavy: heavy_boxes,
        })
    }

    /// Attempts to walk the player one cell in `direction`, pushing at most
    /// one box ahead of it. Disallowed moves are ordinary `Blocked` results,
    /// never errors; the board is unchanged by them.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let delta = direction.delta();
        let next = self.entities[self.player.0].position + delta;

        if !self.in_bounds(next) || self.tile(next) == Tile::Wall {
            return MoveOutcome::Blocked;
        }

        let outcome = match self.occupancy.get_by_left(&next).copied() {
            None => {
                self.begin_move(self.player, next);
                MoveOutcome::PlayerMove
            }
            Some(occupant) => {
                // Heavy boxes only become pushable once every light box
                // rests on a target.
                if self.entities[occupant.0].kind == EntityKind::HeavyBox
                    && self.unresolved_light > 0
                {
                    return MoveOutcome::Blocked;
                }

                let box_next = next + delta;
                if !self.in_bounds(box_next)
                    || self.tile(box_next) == Tile::Wall
                    || self.occupancy.contains_left(&box_next)
                {
                    return MoveOutcome::Blocked;
                }

                // The box vacates `next` before the player claims it.
                self.begin_move(occupant, box_next);
                self.begin_move(self.player, next);
                MoveOutcome::PlayerAndBoxMove(occupant)
            }
        };

        let pushed = match outcome {
            MoveOutcome::PlayerAndBoxMove(id) => Some(id),
            _ => None,
        };
        self.history.push(MoveRecord { direction, pushed });
        self.recount_unresolved();
        outcome
    }

    /// Pops the most recent move and walks the affected entities back. An
    /// instantaneous correction: positions snap, progress is left as-is.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(record) = self.history.pop() else {
            return UndoOutcome::NothingToUndo;
        };
        let delta = record.direction.inverse().delta();

        // The player retreats first, freeing its cell for the pushed box.
        let player_prev = self.entities[self.player.0].position + delta;
        self.snap_to(self.player, player_prev);

        let outcome = match record.pushed {
            None => UndoOutcome::PlayerMove,
            Some(id) => {
                let box_prev = self.entities[id.0].position + delta;
                self.snap_to(id, box_prev);
                UndoOutcome::PlayerAndBoxMove(id)
            }
        };
        self.recount_unresolved();
        outcome
    }

    /// Advances every entity's settling progress. The only place frame time
    /// enters the model; progress is monotonic and clamped at 1.0.
    pub fn tick(&mut self, elapsed: f64) {
        let gained = elapsed.max(0.0) * SETTLE_SPEED;
        for entity in &mut self.entities {
            entity.progress = (entity.progress + gained).min(1.0);
        }
    }

    /// True once every box rests on a target AND every entity has settled.
    /// A level is not finished while a box is still mid-slide.
    pub fn is_finished(&self) -> bool {
        self.unresolved_light + self.unresolved_heavy == 0
            && self.entities.iter().all(|entity| entity.is_settled())
    }

    pub fn static_tile(&self, position: Vec2) -> Option<Tile> {
        if self.in_bounds(position) {
            Some(self.tile(position))
        } else {
            None
        }
    }

    pub fn entity_at(&self, position: Vec2) -> Option<(EntityId, Entity)> {
        let id = *self.occupancy.get_by_left(&position)?;
        Some((id, self.entities[id.0]))
    }

    pub fn entity(&self, id: EntityId) -> Option<Entity> {
        self.entities.get(id.0).copied()
    }

    pub fn entities(&self) -> impl Iterator<Item = (EntityId, Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, &entity)| (EntityId(index), entity))
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn box_counts(&self) -> BoxCounts {
        BoxCounts {
            light: self.light_boxes,
            heavy: self.heavy_boxes,
            unresolved_light: self.unresolved_light,
            unresolved_heavy: self.unresolved_heavy,
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    fn in_bounds(&self, position: Vec2) -> bool {
        position.i >= 0 && position.i < self.height() && position.j >= 0 && position.j < self.width()
    }

    fn tile(&self, position: Vec2) -> Tile {
        self.grid[position.i as usize][position.j as usize]
    }

    /// Relocates an entity and starts it settling toward the new cell.
    fn begin_move(&mut self, id: EntityId, position: Vec2) {
        self.snap_to(id, position);
        self.entities[id.0].progress = 0.0;
    }

    /// Relocates an entity without restarting its settling animation.
    fn snap_to(&mut self, id: EntityId, position: Vec2) {
        self.occupancy.remove_by_right(&id);
        self.occupancy.insert(position, id);
        self.entities[id.0].position = position;
    }

    fn recount_unresolved(&mut self) {
        let mut unresolved_light = self.light_boxes;
        let mut unresolved_heavy = self.heavy_boxes;
        for entity in &self.entities {
            if self.grid[entity.position.i as usize][entity.position.j as usize] == Tile::Target {
                match entity.kind {
                    EntityKind::LightBox => unresolved_light -= 1,
                    EntityKind::HeavyBox => unresolved_heavy -= 1,
                    EntityKind::Player => {}
                }
            }
        }
        self.unresolved_light = unresolved_light;
        self.unresolved_heavy = unresolved_heavy;
    }
}
