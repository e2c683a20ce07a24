use crate::ParseCommandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A block the player can place in a program.
///
/// `Repeat2` and `Repeat3` are meta-commands: they never act on the robot
/// and are rewritten away by the expander before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    Move,
    TurnLeft,
    TurnRight,
    PickStar,
    #[serde(rename = "REPEAT_2")]
    Repeat2,
    #[serde(rename = "REPEAT_3")]
    Repeat3,
}

impl Command {
    /// Every command, in block-tray order.
    pub const ALL: [Command; 6] = [
        Command::Move,
        Command::TurnLeft,
        Command::TurnRight,
        Command::PickStar,
        Command::Repeat2,
        Command::Repeat3,
    ];

    /// Whether this is a repeat meta-command.
    pub fn is_meta(self) -> bool {
        matches!(self, Self::Repeat2 | Self::Repeat3)
    }

    /// Total number of times a repeat runs its target (the target itself
    /// included). `None` for primitive commands.
    pub fn repeat_count(self) -> Option<usize> {
        match self {
            Self::Repeat2 => Some(2),
            Self::Repeat3 => Some(3),
            _ => None,
        }
    }

    /// Wire name, e.g. `TURN_LEFT`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::TurnLeft => "TURN_LEFT",
            Self::TurnRight => "TURN_RIGHT",
            Self::PickStar => "PICK_STAR",
            Self::Repeat2 => "REPEAT_2",
            Self::Repeat3 => "REPEAT_3",
        }
    }

    /// Short block label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Move => "Move",
            Self::TurnLeft => "Left",
            Self::TurnRight => "Right",
            Self::PickStar => "Pick",
            Self::Repeat2 => "x2",
            Self::Repeat3 => "x3",
        }
    }

    /// One-line description for the help hover.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Move => "Go 1 step forward",
            Self::TurnLeft => "Turn left (no movement)",
            Self::TurnRight => "Turn right (no movement)",
            Self::PickStar => "Pick a star if you're standing on it",
            Self::Repeat2 => "Repeat the last action 2 times",
            Self::Repeat3 => "Repeat the last action 3 times",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}
