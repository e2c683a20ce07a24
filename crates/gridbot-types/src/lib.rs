//! Shared types for the gridbot puzzle engine.
//!
//! This crate defines the grid geometry, the command set, puzzle
//! definitions, robot state, execution steps and catalog diagnostics
//! used by every other gridbot crate.

mod command;
mod diagnostic;
mod error;
mod geometry;
mod puzzle;
mod state;

pub use command::Command;
pub use diagnostic::{
    Diagnostic, DiagnosticCategory, DiagnosticCode, DiagnosticReport, MAX_DIAGNOSTICS,
};
pub use error::{ParseCommandError, ParseDirectionError};
pub use geometry::{Direction, Position};
pub use puzzle::{
    Collectible, CollectibleKind, Difficulty, GridSize, Obstacle, ObstacleKind, Puzzle,
    StartPose, SuccessCondition, WheelSegment,
};
pub use state::{ExecutionStep, MessageKind, RobotState};
