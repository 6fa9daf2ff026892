#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Floor,
    Wall,
    Target,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Player,
    LightBox,
    HeavyBox,
}

/// Stable handle into the board's entity arena. Assigned at load, never
/// reused or reassigned for the lifetime of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EntityId(pub usize);

/// A movable occupant of the grid. `progress` is interpolation completion
/// toward `position` since the entity last moved: 0.0 just moved, 1.0 settled.
#[derive(Clone, Copy, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec2,
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Blocked,
    PlayerMove,
    PlayerAndBoxMove(EntityId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndoOutcome {
    NothingToUndo,
    PlayerMove,
    PlayerAndBoxMove(EntityId),
}
