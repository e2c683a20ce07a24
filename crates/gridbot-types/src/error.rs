//! Wire-format parse errors.

use thiserror::Error;

/// A command name that is not part of the command set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct ParseCommandError(pub String);

/// A direction code other than `N`, `E`, `S` or `W`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: {0}")]
pub struct ParseDirectionError(pub String);
