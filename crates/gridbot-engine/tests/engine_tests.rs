//! Integration tests for the gridbot engine.
//!
//! Covers:
//! - repeat expansion properties
//! - trace shape (initial step, one step per command, early halt)
//! - bumping into edges and obstacles
//! - star collection
//! - success evaluation on the final step only, never after a bump
//! - replay determinism

use gridbot_engine::{
    check_success, execute, expand, initial_state, run, MSG_BUMP, MSG_GOT_STAR, MSG_NO_STAR,
};
use gridbot_types::{
    Collectible, CollectibleKind, Command, Difficulty, Direction, GridSize, MessageKind, Obstacle,
    ObstacleKind, Position, Puzzle, StartPose, SuccessCondition,
};
use Command::*;

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// A puzzle with no obstacles, no stars and a reach-goal condition.
fn open_grid(rows: u32, cols: u32, start: Position, dir: Direction, goal: Position) -> Puzzle {
    Puzzle {
        id: "test".into(),
        title: "Test".into(),
        difficulty: Difficulty::Easy,
        short_kid_hint: String::new(),
        grid_size: GridSize::new(rows, cols),
        start: StartPose {
            position: start,
            dir,
        },
        goal,
        obstacles: vec![],
        collectibles: vec![],
        allowed_commands: Command::ALL.to_vec(),
        success_condition: SuccessCondition {
            reach_goal: true,
            collect_all_stars: false,
        },
    }
}

fn with_stars(mut puzzle: Puzzle, stars: &[(i32, i32)]) -> Puzzle {
    puzzle.collectibles = stars
        .iter()
        .map(|&(x, y)| Collectible {
            position: pos(x, y),
            kind: CollectibleKind::Star,
        })
        .collect();
    puzzle.success_condition.collect_all_stars = true;
    puzzle
}

fn with_obstacle(mut puzzle: Puzzle, x: i32, y: i32, kind: ObstacleKind) -> Puzzle {
    puzzle.obstacles.push(Obstacle {
        position: pos(x, y),
        kind,
    });
    puzzle
}

// ══════════════════════════════════════════════════════════════════════════════
// Expansion
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn expand_never_yields_meta_commands() {
    let programs: Vec<Vec<Command>> = vec![
        vec![],
        vec![Repeat2, Repeat3],
        vec![Move, Repeat3, TurnLeft, Repeat2, Repeat2, PickStar],
        vec![Repeat3, Repeat3, Move, Repeat3, Repeat3],
    ];
    for program in programs {
        assert!(
            expand(&program).iter().all(|c| !c.is_meta()),
            "meta-command survived expansion of {program:?}"
        );
    }
}

#[test]
fn expand_documented_examples() {
    assert!(expand(&[Repeat2]).is_empty());
    assert_eq!(expand(&[Move, Repeat2]), vec![Move, Move]);
    assert_eq!(expand(&[Move, Repeat3]), vec![Move, Move, Move]);
    assert_eq!(expand(&[Move, Repeat2, Repeat2]), vec![Move, Move, Move]);
}

#[test]
fn expand_length_accounts_for_dropped_repeats() {
    let program = [Repeat2, Move, Repeat3, Repeat2];
    // 1 dropped repeat, Move + 2 + 1
    assert_eq!(expand(&program).len(), 4);
}

// ══════════════════════════════════════════════════════════════════════════════
// Trace shape
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn empty_program_yields_initial_step_only() {
    let p = open_grid(3, 3, pos(1, 1), Direction::West, pos(2, 2));
    let trace = execute(&[], &p);
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.initial_state(), &initial_state(&p));
    assert!(trace.final_step().message.is_none());
    assert!(!trace.halted());
}

#[test]
fn first_step_is_declared_start_state() {
    let p = open_grid(5, 5, pos(2, 3), Direction::South, pos(0, 0));
    let trace = execute(&[TurnLeft, Move, PickStar], &p);
    let first = &trace.steps()[0];
    assert_eq!(first.robot_state.position, pos(2, 3));
    assert_eq!(first.robot_state.dir, Direction::South);
    assert!(first.robot_state.collected_stars.is_empty());
    assert!(first.message.is_none());
}

#[test]
fn one_step_per_command_when_nothing_blocks() {
    let p = open_grid(4, 4, pos(0, 0), Direction::East, pos(3, 3));
    let program = [Move, Move, Move, TurnRight, Move, Move, Move];
    let trace = execute(&program, &p);
    assert_eq!(trace.len(), program.len() + 1);
    assert_eq!(trace.final_state().position, pos(3, 3));
    assert_eq!(trace.final_state().dir, Direction::South);
}

#[test]
fn scenario_move_twice_to_goal() {
    let p = open_grid(3, 3, pos(0, 0), Direction::East, pos(2, 0));
    let outcome = run(&[Move, Move], &p);
    assert_eq!(outcome.trace.len(), 3);
    assert_eq!(outcome.trace.final_state().position, pos(2, 0));
    assert_eq!(outcome.trace.final_state().dir, Direction::East);
    assert!(outcome.verdict.success);
    assert!(check_success(outcome.trace.final_state(), &p));
}

#[test]
fn up_to_reveals_prefix() {
    let p = open_grid(3, 3, pos(0, 0), Direction::East, pos(2, 0));
    let trace = execute(&[Move, Move], &p);
    let prefix = trace.up_to(1);
    assert_eq!(prefix.len(), 2);
    assert_eq!(prefix[1].robot_state.position, pos(1, 0));
}

// ══════════════════════════════════════════════════════════════════════════════
// Bumps
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn scenario_bump_off_top_edge() {
    let p = open_grid(3, 3, pos(0, 0), Direction::North, pos(2, 2));
    let trace = execute(&[Move], &p);
    assert_eq!(trace.len(), 2);
    let last = trace.final_step();
    assert_eq!(last.message.as_deref(), Some(MSG_BUMP));
    assert_eq!(last.message_type, Some(MessageKind::Error));
    assert_eq!(last.robot_state.position, pos(0, 0));
    assert!(trace.halted());
}

#[test]
fn bump_on_every_edge() {
    let cases = [
        (pos(0, 0), Direction::West),
        (pos(2, 0), Direction::East),
        (pos(1, 2), Direction::South),
        (pos(1, 0), Direction::North),
    ];
    for (start, dir) in cases {
        let p = open_grid(3, 3, start, dir, pos(1, 1));
        let trace = execute(&[Move], &p);
        assert!(trace.halted(), "expected bump from {start} facing {dir}");
        assert_eq!(trace.final_state().position, start);
    }
}

#[test]
fn bump_halts_remaining_commands() {
    let p = open_grid(3, 3, pos(1, 1), Direction::East, pos(2, 1));
    // Second move leaves the grid; the turn and final move must not run.
    let trace = execute(&[Move, Move, TurnLeft, Move], &p);
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.final_state().position, pos(2, 1));
    assert_eq!(trace.final_state().dir, Direction::East);
}

#[test]
fn every_obstacle_kind_blocks() {
    for kind in [ObstacleKind::Rock, ObstacleKind::Water, ObstacleKind::Wall] {
        let p = with_obstacle(
            open_grid(1, 3, pos(0, 0), Direction::East, pos(2, 0)),
            1,
            0,
            kind,
        );
        let outcome = run(&[Move, Move], &p);
        assert_eq!(outcome.trace.len(), 2, "{kind:?} did not block");
        assert!(outcome.trace.halted());
        assert!(!outcome.verdict.success);
    }
}

#[test]
fn only_one_error_step_and_it_is_last() {
    let p = with_obstacle(
        open_grid(3, 3, pos(0, 1), Direction::East, pos(2, 1)),
        1,
        1,
        ObstacleKind::Rock,
    );
    let trace = execute(&expand(&[TurnLeft, Move, TurnRight, Move, Repeat3]), &p);
    let errors: Vec<usize> = trace
        .steps()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_fatal())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(errors, vec![trace.len() - 1]);
}

#[test]
fn bump_after_reaching_goal_is_not_success() {
    let p = open_grid(1, 3, pos(0, 0), Direction::East, pos(2, 0));
    let outcome = run(&[Move, Move, Move], &p);
    assert!(outcome.trace.halted());
    assert_eq!(outcome.trace.final_state().position, pos(2, 0));
    assert_eq!(outcome.verdict.goal_reached, Some(true));
    assert!(!outcome.verdict.success);
}

#[test]
fn move_past_i32_range_bumps_instead_of_overflowing() {
    let edge = pos(i32::MAX, 0);
    let p = open_grid(1, u32::MAX, edge, Direction::East, edge);
    let outcome = run(&[Move, TurnLeft], &p);
    assert_eq!(outcome.trace.len(), 2);
    assert_eq!(outcome.trace.final_state().position, edge);
    assert_eq!(outcome.trace.final_step().message.as_deref(), Some(MSG_BUMP));
    assert!(!outcome.verdict.success);

    let p = open_grid(1, 3, pos(0, 0), Direction::West, pos(2, 0));
    let trace = execute(&[Move], &p);
    assert!(trace.halted());
}

// ══════════════════════════════════════════════════════════════════════════════
// Stars
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn pick_star_collects_exactly_once() {
    let p = with_stars(
        open_grid(1, 3, pos(0, 0), Direction::East, pos(2, 0)),
        &[(1, 0)],
    );
    let trace = execute(&[Move, PickStar, PickStar, Move], &p);
    let steps = trace.steps();
    assert_eq!(steps[2].message.as_deref(), Some(MSG_GOT_STAR));
    assert_eq!(steps[2].message_type, Some(MessageKind::Success));
    assert_eq!(steps[2].robot_state.stars_collected(), 1);
    assert_eq!(steps[3].message.as_deref(), Some(MSG_NO_STAR));
    assert_eq!(steps[3].message_type, Some(MessageKind::Info));
    assert_eq!(steps[3].robot_state.stars_collected(), 1);
    assert!(!trace.halted());
    assert_eq!(trace.len(), 5);
}

#[test]
fn pick_star_on_empty_cell_is_not_fatal() {
    let p = open_grid(1, 3, pos(0, 0), Direction::East, pos(2, 0));
    let trace = execute(&[PickStar, Move, Move], &p);
    assert_eq!(trace.len(), 4);
    assert_eq!(trace.steps()[1].message.as_deref(), Some(MSG_NO_STAR));
    assert_eq!(trace.final_state().position, pos(2, 0));
}

#[test]
fn earlier_steps_keep_their_own_star_snapshot() {
    let p = with_stars(
        open_grid(1, 3, pos(0, 0), Direction::East, pos(2, 0)),
        &[(1, 0), (2, 0)],
    );
    let trace = execute(&[Move, PickStar, Move, PickStar], &p);
    let counts: Vec<usize> = trace
        .steps()
        .iter()
        .map(|s| s.robot_state.stars_collected())
        .collect();
    assert_eq!(counts, vec![0, 0, 1, 1, 2]);
}

#[test]
fn collect_all_stars_and_reach_goal() {
    let p = with_stars(
        open_grid(1, 3, pos(0, 0), Direction::East, pos(2, 0)),
        &[(1, 0), (2, 0)],
    );
    let partial = run(&[Move, Move, PickStar], &p);
    assert_eq!(partial.verdict.stars_collected, 1);
    assert_eq!(partial.verdict.total_stars, 2);
    assert!(!partial.verdict.success);

    let full = run(&[Move, PickStar, Move, PickStar], &p);
    assert_eq!(full.verdict.goal_reached, Some(true));
    assert!(full.verdict.success);
}

// ══════════════════════════════════════════════════════════════════════════════
// Repeats through the full run
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn run_expands_repeats_before_executing() {
    let p = open_grid(1, 4, pos(0, 0), Direction::East, pos(3, 0));
    let outcome = run(&[Move, Repeat3], &p);
    assert_eq!(outcome.expanded, vec![Move, Move, Move]);
    assert_eq!(outcome.trace.len(), 4);
    assert!(outcome.verdict.success);
}

#[test]
fn leading_repeat_is_harmless() {
    let p = open_grid(1, 4, pos(0, 0), Direction::East, pos(1, 0));
    let outcome = run(&[Repeat2, Move], &p);
    assert_eq!(outcome.expanded, vec![Move]);
    assert!(outcome.verdict.success);
}

#[test]
fn passing_the_goal_mid_run_does_not_count() {
    let p = open_grid(1, 4, pos(0, 0), Direction::East, pos(1, 0));
    let outcome = run(&[Move, Move], &p);
    assert_eq!(outcome.trace.steps()[1].robot_state.position, pos(1, 0));
    assert!(!outcome.verdict.success);
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn replay_is_deterministic_100_iterations() {
    let p = with_obstacle(
        with_stars(
            open_grid(4, 4, pos(0, 0), Direction::East, pos(3, 3)),
            &[(1, 0), (3, 1)],
        ),
        2,
        2,
        ObstacleKind::Wall,
    );
    let program = [
        Move, PickStar, Move, Move, TurnRight, Move, PickStar, Repeat2, Move, Move,
    ];
    let first = run(&program, &p);
    let digest = first.trace.digest().unwrap();

    for i in 0..100 {
        let again = run(&program, &p);
        assert_eq!(again.trace, first.trace, "trace mismatch at iteration {i}");
        assert_eq!(again.trace.digest().unwrap(), digest, "digest mismatch at iteration {i}");
    }
}

#[test]
fn run_outcome_json_shape() {
    let p = open_grid(3, 3, pos(0, 0), Direction::North, pos(2, 2));
    let outcome = run(&[Move], &p);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["expanded"], serde_json::json!(["MOVE"]));
    assert_eq!(json["trace"][1]["messageType"], "error");
    assert_eq!(json["trace"][1]["robotState"]["x"], 0);
    assert_eq!(json["verdict"]["success"], false);
}
