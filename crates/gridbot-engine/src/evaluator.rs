//! Success evaluation against a puzzle's success condition.

use gridbot_types::{Puzzle, RobotState};
use serde::Serialize;

/// Detailed pass/fail report for a final robot state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub success: bool,
    /// `None` when the puzzle does not require reaching the goal.
    pub goal_reached: Option<bool>,
    pub stars_collected: usize,
    pub total_stars: usize,
}

/// Evaluate `state` as the final state of a run.
///
/// Conditions are conjunctive. With neither flag set every state passes.
pub fn evaluate(state: &RobotState, puzzle: &Puzzle) -> Verdict {
    let condition = puzzle.success_condition;
    let stars_collected = state.stars_collected();
    let total_stars = puzzle.star_count();

    let goal_reached = condition
        .reach_goal
        .then(|| state.position == puzzle.goal);
    let stars_ok = !condition.collect_all_stars || stars_collected == total_stars;

    Verdict {
        success: goal_reached.unwrap_or(true) && stars_ok,
        goal_reached,
        stars_collected,
        total_stars,
    }
}

/// Whether `state` solves `puzzle`.
pub fn check_success(state: &RobotState, puzzle: &Puzzle) -> bool {
    evaluate(state, puzzle).success
}
