//! Execution traces.

use gridbot_types::{ExecutionStep, RobotState};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// The ordered steps of one run.
///
/// Always holds at least the initial step. Serializes as a plain list of
/// steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<ExecutionStep>,
}

impl Trace {
    /// Wrap executor output. `steps` must start with the initial step.
    pub(crate) fn from_steps(steps: Vec<ExecutionStep>) -> Self {
        debug_assert!(!steps.is_empty(), "trace must contain the initial step");
        Self { steps }
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a trace built by the executor.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn initial_state(&self) -> &RobotState {
        &self.steps[0].robot_state
    }

    pub fn final_step(&self) -> &ExecutionStep {
        &self.steps[self.steps.len() - 1]
    }

    /// State the success check looks at.
    pub fn final_state(&self) -> &RobotState {
        &self.final_step().robot_state
    }

    /// Whether the run ended on a blocked move.
    pub fn halted(&self) -> bool {
        self.final_step().is_fatal()
    }

    /// Steps `0..=n`, clamped to the trace length.
    pub fn up_to(&self, n: usize) -> &[ExecutionStep] {
        let end = n.saturating_add(1).min(self.steps.len());
        &self.steps[..end]
    }

    /// SHA-256 of the trace's canonical JSON form, as lowercase hex.
    ///
    /// The hashed bytes are exactly what the trace serializes to, so a
    /// front end can recompute the digest from the JSON it received.
    pub fn digest(&self) -> serde_json::Result<String> {
        let canonical = serde_json::to_vec(self)?;
        Ok(format!("{:x}", Sha256::digest(&canonical)))
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a ExecutionStep;
    type IntoIter = std::slice::Iter<'a, ExecutionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
