//! Robot state and execution steps.

use crate::{Direction, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The robot's pose plus the stars it has picked up during the current run.
///
/// Each execution step owns its own copy; a later step never aliases the
/// collected set of an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotState {
    #[serde(flatten)]
    pub position: Position,
    pub dir: Direction,
    #[serde(default)]
    pub collected_stars: BTreeSet<Position>,
}

impl RobotState {
    /// A robot at `position` facing `dir` with nothing collected.
    pub fn new(position: Position, dir: Direction) -> Self {
        Self {
            position,
            dir,
            collected_stars: BTreeSet::new(),
        }
    }

    pub fn has_collected(&self, pos: Position) -> bool {
        self.collected_stars.contains(&pos)
    }

    pub fn stars_collected(&self) -> usize {
        self.collected_stars.len()
    }
}

/// Classification of a step message.
///
/// `Error` marks a fatal step: the run halts right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Error,
    Success,
}

/// One entry of an execution trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    pub robot_state: RobotState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageKind>,
}

impl ExecutionStep {
    /// A silent step.
    pub fn silent(robot_state: RobotState) -> Self {
        Self {
            robot_state,
            message: None,
            message_type: None,
        }
    }

    /// A step carrying a classified message.
    pub fn with_message(
        robot_state: RobotState,
        kind: MessageKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            robot_state,
            message: Some(message.into()),
            message_type: Some(kind),
        }
    }

    /// Whether this step terminates the run.
    pub fn is_fatal(&self) -> bool {
        self.message_type == Some(MessageKind::Error)
    }
}
