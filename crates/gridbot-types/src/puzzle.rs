//! Static puzzle definitions.
//!
//! A [`Puzzle`] is loaded once per selection and never mutated. The
//! engine assumes every position in it lies inside the grid; the catalog
//! is responsible for checking that.

use crate::{Command, Direction, Position};
use serde::{Deserialize, Serialize};

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    /// Create a new grid size.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Whether `pos` lies in `[0, cols) x [0, rows)`.
    pub fn contains(&self, pos: Position) -> bool {
        let in_cols = u32::try_from(pos.x).is_ok_and(|x| x < self.cols);
        let in_rows = u32::try_from(pos.y).is_ok_and(|y| y < self.rows);
        in_cols && in_rows
    }
}

/// Where the robot starts and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPose {
    #[serde(flatten)]
    pub position: Position,
    pub dir: Direction,
}

/// Obstacle flavour. Only affects rendering; every kind blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Rock,
    Water,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(flatten)]
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectibleKind {
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    #[serde(flatten)]
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: CollectibleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wheel segment colour for this difficulty.
    pub fn color(self) -> &'static str {
        match self {
            Self::Easy => "#22c55e",
            Self::Medium => "#f59e0b",
            Self::Hard => "#ef4444",
        }
    }
}

/// Conjunctive success flags. A puzzle with neither flag set always passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCondition {
    pub reach_goal: bool,
    #[serde(default)]
    pub collect_all_stars: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub short_kid_hint: String,
    pub grid_size: GridSize,
    pub start: StartPose,
    pub goal: Position,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub collectibles: Vec<Collectible>,
    pub allowed_commands: Vec<Command>,
    pub success_condition: SuccessCondition,
}

impl Puzzle {
    /// Whether the robot may not enter `pos`: off the grid or on any obstacle.
    pub fn is_blocked(&self, pos: Position) -> bool {
        !self.grid_size.contains(pos) || self.obstacles.iter().any(|o| o.position == pos)
    }

    /// Whether a star collectible is defined at `pos`.
    pub fn star_at(&self, pos: Position) -> bool {
        self.collectibles
            .iter()
            .any(|c| c.kind == CollectibleKind::Star && c.position == pos)
    }

    /// Number of star collectibles defined in the puzzle.
    pub fn star_count(&self) -> usize {
        self.collectibles
            .iter()
            .filter(|c| c.kind == CollectibleKind::Star)
            .count()
    }

    /// The wheel-selector entry for this puzzle.
    pub fn wheel_segment(&self) -> WheelSegment {
        WheelSegment {
            id: self.id.clone(),
            title: self.title.clone(),
            difficulty: self.difficulty,
            color: self.difficulty.color().to_string(),
        }
    }
}

/// One slice of the puzzle-selection wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub color: String,
}
