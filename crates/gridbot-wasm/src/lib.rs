//! Gridbot engine as a WASM module for the browser front end.
//!
//! Every function takes and returns JSON strings so the front end can
//! hand over its own puzzle and program objects unchanged.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { run_program, get_puzzle } from 'gridbot-wasm';
//!
//! await init();
//!
//! const puzzle = get_puzzle("first-steps");
//! const result = JSON.parse(run_program('["MOVE","REPEAT_3"]', puzzle));
//! // { expanded: [...], trace: [...], verdict: { success: true, ... }, digest: "..." }
//! ```
//!
//! Malformed input never panics; it yields `{"error": "..."}`.

use gridbot_catalog::{Catalog, CatalogError};
use gridbot_engine::{RunOutcome, Trace};
use gridbot_types::{Command, Puzzle, RobotState};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use wasm_bindgen::prelude::*;

/// Why a binding call could not produce a result.
#[derive(Debug, Error)]
enum BindingError {
    #[error("invalid {what}: {source}")]
    Json {
        what: &'static str,
        source: serde_json::Error,
    },

    #[error("puzzle not found: {0}")]
    UnknownPuzzle(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct RunResponse {
    #[serde(flatten)]
    outcome: RunOutcome,
    digest: String,
}

#[derive(Serialize)]
struct CommandInfo {
    command: Command,
    label: &'static str,
    summary: &'static str,
}

fn parse<T: DeserializeOwned>(json: &str, what: &'static str) -> Result<T, BindingError> {
    serde_json::from_str(json).map_err(|source| BindingError::Json { what, source })
}

fn respond<T: Serialize>(result: Result<T, BindingError>) -> String {
    let rendered = match result {
        Ok(value) => serde_json::to_string(&value),
        Err(e) => {
            debug!(error = %e, "binding call rejected");
            serde_json::to_string(&ErrorResponse {
                error: e.to_string(),
            })
        }
    };
    rendered.unwrap_or_else(|e| format!(r#"{{"error":"Serialization error: {}"}}"#, e))
}

fn load_program_and_puzzle(
    program_json: &str,
    puzzle_json: &str,
) -> Result<(Vec<Command>, Puzzle), BindingError> {
    let program: Vec<Command> = parse(program_json, "program")?;
    let puzzle: Puzzle = parse(puzzle_json, "puzzle")?;
    Ok((program, puzzle))
}

fn success_of(state_json: &str, puzzle_json: &str) -> Result<bool, BindingError> {
    let state: RobotState = parse(state_json, "robot state")?;
    let puzzle: Puzzle = parse(puzzle_json, "puzzle")?;
    Ok(gridbot_engine::check_success(&state, &puzzle))
}

fn run_response(program_json: &str, puzzle_json: &str) -> Result<RunResponse, BindingError> {
    let (program, puzzle) = load_program_and_puzzle(program_json, puzzle_json)?;
    let outcome = gridbot_engine::run(&program, &puzzle);
    let digest = outcome.trace.digest()?;
    Ok(RunResponse { outcome, digest })
}

fn builtin_puzzle(id: &str) -> Result<Puzzle, BindingError> {
    let catalog = Catalog::builtin()?;
    catalog
        .get(id)
        .cloned()
        .ok_or_else(|| BindingError::UnknownPuzzle(id.to_string()))
}

fn expanded_trace(program_json: &str, puzzle_json: &str) -> Result<Trace, BindingError> {
    let (program, puzzle) = load_program_and_puzzle(program_json, puzzle_json)?;
    let expanded = gridbot_engine::expand(&program);
    Ok(gridbot_engine::execute(&expanded, &puzzle))
}

/// Install the browser console as the `tracing` subscriber.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default();
}

/// Expand `REPEAT_2` / `REPEAT_3` in a program.
///
/// Input: `["MOVE","REPEAT_2"]`. Output: `["MOVE","MOVE"]`.
#[wasm_bindgen]
pub fn expand_program(program_json: &str) -> String {
    let program = parse::<Vec<Command>>(program_json, "program");
    respond(program.map(|program| gridbot_engine::expand(&program)))
}

/// Expand a program and execute it against a puzzle.
///
/// Returns the full trace: a list of `{ robotState, message?, messageType? }`.
#[wasm_bindgen]
pub fn execute_program(program_json: &str, puzzle_json: &str) -> String {
    respond(expanded_trace(program_json, puzzle_json))
}

/// The first `n + 1` steps of a program's trace (the initial step included).
#[wasm_bindgen]
pub fn trace_up_to(program_json: &str, puzzle_json: &str, n: u32) -> String {
    let trace = expanded_trace(program_json, puzzle_json);
    respond(trace.map(|trace| trace.up_to(n as usize).to_vec()))
}

/// Expand, execute and evaluate a program in one call.
///
/// Returns `{ expanded, trace, verdict, digest }`. `digest` is the SHA-256
/// of `trace` as serialized here, so equal traces give equal digests.
#[wasm_bindgen]
pub fn run_program(program_json: &str, puzzle_json: &str) -> String {
    respond(run_response(program_json, puzzle_json))
}

/// Whether a final robot state solves a puzzle. Returns `true` or `false`.
#[wasm_bindgen]
pub fn check_success(state_json: &str, puzzle_json: &str) -> String {
    respond(success_of(state_json, puzzle_json))
}

/// The puzzle's start state with nothing collected.
#[wasm_bindgen]
pub fn initial_state(puzzle_json: &str) -> String {
    let puzzle = parse::<Puzzle>(puzzle_json, "puzzle");
    respond(puzzle.map(|puzzle| gridbot_engine::initial_state(&puzzle)))
}

/// Look up a built-in puzzle by id.
#[wasm_bindgen]
pub fn get_puzzle(id: &str) -> String {
    respond(builtin_puzzle(id))
}

/// Segments for the puzzle-selection wheel, in catalog order.
#[wasm_bindgen]
pub fn wheel_segments() -> String {
    respond(
        Catalog::builtin()
            .map(|catalog| catalog.wheel_segments())
            .map_err(BindingError::from),
    )
}

/// Labels and descriptions for every command block.
#[wasm_bindgen]
pub fn command_palette() -> String {
    let palette: Vec<CommandInfo> = Command::ALL
        .into_iter()
        .map(|command| CommandInfo {
            command,
            label: command.label(),
            summary: command.summary(),
        })
        .collect();
    respond(Ok(palette))
}

/// Return the engine version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
