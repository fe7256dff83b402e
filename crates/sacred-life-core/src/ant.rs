use crate::color::ColorId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cardinal facing of an ant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in turn-right order, usable for indexed random picks.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Unit step along this facing; y grows downward.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

/// A positioned, directional actor with a color identity and lifecycle state.
///
/// `owned_cells` is a non-authoritative cache of coordinates this ant has
/// deposited structure onto; the authoritative ownership signal is color
/// equality between the cell and the ant. A `BTreeSet` keeps the fallback
/// release pass deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ant {
    pub id: String,
    pub x: usize,
    pub y: usize,
    pub dir: Direction,
    pub color: ColorId,
    /// Accumulated feeding count; crossing the configured threshold triggers
    /// reproduction.
    pub fullness: u32,
    /// Remaining ticks before death by old age.
    pub life_duration: u32,
    pub owned_cells: BTreeSet<(usize, usize)>,
}

impl Ant {
    pub fn new(
        id: impl Into<String>,
        x: usize,
        y: usize,
        dir: Direction,
        color: ColorId,
        life_duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            dir,
            color,
            fullness: 1,
            life_duration,
            owned_cells: BTreeSet::new(),
        }
    }
}
