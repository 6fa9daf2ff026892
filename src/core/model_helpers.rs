use std::ops::Add;

use crate::core::{Direction, Entity, EntityKind, Vec2};

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + other.i,
            j: self.j + other.j,
        }
    }
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

impl EntityKind {
    pub fn is_box(self) -> bool {
        matches!(self, EntityKind::LightBox | EntityKind::HeavyBox)
    }
}

impl Entity {
    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }
}
