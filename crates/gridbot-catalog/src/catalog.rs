use crate::error::{CatalogError, Result};
use crate::validate::validate;
use gridbot_types::{Puzzle, WheelSegment};
use std::collections::BTreeSet;
use tracing::{debug, warn};

const BUILTIN_PUZZLES: &str = include_str!("puzzles.json");

/// An ordered, validated set of puzzles.
///
/// Order is preserved: it is the order segments appear on the wheel.
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and malformed puzzles.
    pub fn from_puzzles(puzzles: Vec<Puzzle>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for puzzle in &puzzles {
            if !seen.insert(puzzle.id.as_str()) {
                warn!(id = %puzzle.id, "duplicate puzzle id in catalog");
                return Err(CatalogError::DuplicateId(puzzle.id.clone()));
            }
        }

        let report = validate(&puzzles);
        if report.has_diagnostics() {
            warn!(diagnostics = report.total, "catalog failed validation");
            return Err(CatalogError::Invalid(report));
        }

        debug!(puzzles = puzzles.len(), "catalog loaded");
        Ok(Self { puzzles })
    }

    /// Parse a JSON list of puzzles.
    pub fn from_json(json: &str) -> Result<Self> {
        let puzzles: Vec<Puzzle> = serde_json::from_str(json)?;
        Self::from_puzzles(puzzles)
    }

    /// The starter catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PUZZLES)
    }

    pub fn get(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// One wheel segment per puzzle, in catalog order.
    pub fn wheel_segments(&self) -> Vec<WheelSegment> {
        self.puzzles.iter().map(Puzzle::wheel_segment).collect()
    }
}
