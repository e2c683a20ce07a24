//! Gridbot program engine.
//!
//! ```text
//! Program → Expander → Executor (+ Puzzle) → Trace → Evaluator → verdict
//! ```
//!
//! Every operation is a pure, synchronous computation over immutable
//! inputs. A blocked move is reported through an `error`-classified
//! [`ExecutionStep`](gridbot_types::ExecutionStep), never as a Rust error.

pub mod evaluator;
pub mod executor;
pub mod expander;
pub mod trace;

pub use evaluator::{check_success, evaluate, Verdict};
pub use executor::{
    execute, initial_state, run, step, RunOutcome, MSG_BUMP, MSG_GOT_STAR, MSG_NO_STAR,
};
pub use expander::expand;
pub use trace::Trace;
