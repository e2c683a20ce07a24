//! Puzzle well-formedness checks.
//!
//! The engine trusts its puzzles; these checks are where that trust is
//! earned. Every problem is reported, not just the first.

use gridbot_types::{Diagnostic, DiagnosticCode, DiagnosticReport, Position, Puzzle};

/// Validate every puzzle in `puzzles`.
pub fn validate(puzzles: &[Puzzle]) -> DiagnosticReport {
    let mut report = DiagnosticReport::empty();
    for puzzle in puzzles {
        validate_puzzle(puzzle, &mut report);
    }
    report
}

/// Validate a single puzzle, appending to `report`.
pub fn validate_puzzle(puzzle: &Puzzle, report: &mut DiagnosticReport) {
    let id = puzzle.id.as_str();
    let grid = puzzle.grid_size;

    if grid.rows == 0 || grid.cols == 0 {
        report.push(Diagnostic::new(
            id,
            DiagnosticCode::EMPTY_GRID,
            format!("grid {}x{} has no cells", grid.rows, grid.cols),
        ));
    } else {
        check_placements(puzzle, report);
    }

    if puzzle.success_condition.collect_all_stars && puzzle.star_count() == 0 {
        report.push(Diagnostic::new(
            id,
            DiagnosticCode::NO_STARS_TO_COLLECT,
            "collectAllStars is set but the puzzle has no stars",
        ));
    }

    if puzzle.allowed_commands.is_empty() {
        report.push(Diagnostic::new(
            id,
            DiagnosticCode::NO_ALLOWED_COMMANDS,
            "allowedCommands is empty",
        ));
    }
}

fn check_placements(puzzle: &Puzzle, report: &mut DiagnosticReport) {
    let id = puzzle.id.as_str();
    let grid = puzzle.grid_size;
    let outside = |what: &str, pos: Position| {
        format!("{what} {pos} is outside the {}x{} grid", grid.rows, grid.cols)
    };

    let start = puzzle.start.position;
    if !grid.contains(start) {
        report.push(Diagnostic::new(
            id,
            DiagnosticCode::START_OUT_OF_BOUNDS,
            outside("start", start),
        ));
    }
    if !grid.contains(puzzle.goal) {
        report.push(Diagnostic::new(
            id,
            DiagnosticCode::GOAL_OUT_OF_BOUNDS,
            outside("goal", puzzle.goal),
        ));
    }
    for obstacle in &puzzle.obstacles {
        if !grid.contains(obstacle.position) {
            report.push(Diagnostic::new(
                id,
                DiagnosticCode::OBSTACLE_OUT_OF_BOUNDS,
                outside("obstacle", obstacle.position),
            ));
        }
    }
    for collectible in &puzzle.collectibles {
        if !grid.contains(collectible.position) {
            report.push(Diagnostic::new(
                id,
                DiagnosticCode::COLLECTIBLE_OUT_OF_BOUNDS,
                outside("collectible", collectible.position),
            ));
        }
    }

    let on_obstacle = |pos: Position| puzzle.obstacles.iter().any(|o| o.position == pos);
    if on_obstacle(start) {
        report.push(Diagnostic::new(
            id,
            DiagnosticCode::START_ON_OBSTACLE,
            format!("start {start} is covered by an obstacle"),
        ));
    }
    if on_obstacle(puzzle.goal) {
        report.push(Diagnostic::new(
            id,
            DiagnosticCode::GOAL_ON_OBSTACLE,
            format!("goal {} is covered by an obstacle", puzzle.goal),
        ));
    }
}
