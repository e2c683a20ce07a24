//! Step executor.
//!
//! Interprets a meta-command-free program against a puzzle, one pure
//! transition per command, stopping after the first fatal step.

use crate::evaluator::{evaluate, Verdict};
use crate::expander::expand;
use crate::trace::Trace;
use gridbot_types::{Command, ExecutionStep, MessageKind, Puzzle, RobotState};
use serde::Serialize;
use tracing::{debug, trace, warn};

pub const MSG_BUMP: &str = "Bump! Can't go there!";
pub const MSG_GOT_STAR: &str = "Got a star!";
pub const MSG_NO_STAR: &str = "No star here!";

/// The puzzle's declared start state with an empty collected set.
pub fn initial_state(puzzle: &Puzzle) -> RobotState {
    RobotState::new(puzzle.start.position, puzzle.start.dir)
}

/// Apply one command to `state`.
///
/// Depends only on the command, the current state and the puzzle. The
/// returned step owns a fresh copy of the state.
pub fn step(command: Command, state: &RobotState, puzzle: &Puzzle) -> ExecutionStep {
    let mut next = state.clone();

    match command {
        Command::Move => match state.position.step(state.dir) {
            // A target past the i32 range is off any grid.
            Some(target) if !puzzle.is_blocked(target) => {
                next.position = target;
                ExecutionStep::silent(next)
            }
            _ => ExecutionStep::with_message(next, MessageKind::Error, MSG_BUMP),
        },
        Command::TurnLeft => {
            next.dir = state.dir.turn_left();
            ExecutionStep::silent(next)
        }
        Command::TurnRight => {
            next.dir = state.dir.turn_right();
            ExecutionStep::silent(next)
        }
        Command::PickStar => {
            let here = state.position;
            if puzzle.star_at(here) && !state.has_collected(here) {
                next.collected_stars.insert(here);
                ExecutionStep::with_message(next, MessageKind::Success, MSG_GOT_STAR)
            } else {
                ExecutionStep::with_message(next, MessageKind::Info, MSG_NO_STAR)
            }
        }
        Command::Repeat2 | Command::Repeat3 => {
            warn!(%command, "meta-command reached the executor; passing state through");
            ExecutionStep::silent(next)
        }
    }
}

/// Execute an expanded program from the puzzle's start state.
///
/// The trace begins with the initial state and holds one step per command
/// processed, ending early right after a fatal step.
pub fn execute(commands: &[Command], puzzle: &Puzzle) -> Trace {
    let mut steps = Vec::with_capacity(commands.len() + 1);
    let mut current = initial_state(puzzle);
    steps.push(ExecutionStep::silent(current.clone()));

    for (index, &command) in commands.iter().enumerate() {
        let next = step(command, &current, puzzle);
        trace!(
            index,
            %command,
            position = %next.robot_state.position,
            dir = %next.robot_state.dir,
            "step"
        );
        current = next.robot_state.clone();
        let fatal = next.is_fatal();
        steps.push(next);

        if fatal {
            debug!(
                puzzle = %puzzle.id,
                index,
                remaining = commands.len() - index - 1,
                "run halted on blocked move"
            );
            break;
        }
    }

    Trace::from_steps(steps)
}

/// Everything the front end needs after pressing "Run".
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// The program after repeat expansion.
    pub expanded: Vec<Command>,
    pub trace: Trace,
    /// Evaluated against the final step only; never a success when the
    /// run halted on a bump.
    pub verdict: Verdict,
}

/// Expand, execute and evaluate `program` in one call.
pub fn run(program: &[Command], puzzle: &Puzzle) -> RunOutcome {
    let expanded = expand(program);
    let trace = execute(&expanded, puzzle);
    let mut verdict = evaluate(trace.final_state(), puzzle);
    // A bump ends the run as a failure, wherever the robot stands.
    if trace.halted() {
        verdict.success = false;
    }

    debug!(
        puzzle = %puzzle.id,
        program_len = program.len(),
        expanded_len = expanded.len(),
        steps = trace.len(),
        success = verdict.success,
        "run complete"
    );

    RunOutcome {
        expanded,
        trace,
        verdict,
    }
}
