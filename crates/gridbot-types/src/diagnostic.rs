use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of diagnostics stored in a report.
pub const MAX_DIAGNOSTICS: usize = 20;

/// Diagnostic category, determined by code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Grid,
    Placement,
    Rules,
}

/// Numeric puzzle diagnostic code (P100–P399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiagnosticCode(pub u16);

impl DiagnosticCode {
    // ── Grid (P100–P199) ──
    pub const EMPTY_GRID: Self = Self(100);

    // ── Placement (P200–P299) ──
    pub const START_OUT_OF_BOUNDS: Self = Self(200);
    pub const GOAL_OUT_OF_BOUNDS: Self = Self(201);
    pub const OBSTACLE_OUT_OF_BOUNDS: Self = Self(202);
    pub const COLLECTIBLE_OUT_OF_BOUNDS: Self = Self(203);
    pub const START_ON_OBSTACLE: Self = Self(204);
    pub const GOAL_ON_OBSTACLE: Self = Self(205);

    // ── Rules (P300–P399) ──
    pub const NO_STARS_TO_COLLECT: Self = Self(300);
    pub const NO_ALLOWED_COMMANDS: Self = Self(301);

    pub fn category(self) -> DiagnosticCategory {
        match self.0 {
            100..=199 => DiagnosticCategory::Grid,
            200..=299 => DiagnosticCategory::Placement,
            _ => DiagnosticCategory::Rules,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::Placement => write!(f, "placement"),
            Self::Rules => write!(f, "rules"),
        }
    }
}

/// A structured problem found in a puzzle definition.
///
/// Front ends render these directly; they must not parse the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Id of the offending puzzle.
    pub puzzle_id: String,
    pub code: DiagnosticCode,
    /// Derived from `code`.
    pub category: DiagnosticCategory,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        puzzle_id: impl Into<String>,
        code: DiagnosticCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            puzzle_id: puzzle_id.into(),
            code,
            category: code.category(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.puzzle_id, self.code, self.category, self.message
        )
    }
}

/// All diagnostics for a catalog, capped at [`MAX_DIAGNOSTICS`] stored entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
    pub total: usize,
}

impl DiagnosticReport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_diagnostics(&self) -> bool {
        self.total > 0
    }

    /// Record a diagnostic. Past the cap it is counted but not stored.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.diagnostics.len() < MAX_DIAGNOSTICS {
            self.diagnostics.push(diagnostic);
        }
        self.total += 1;
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.diagnostics {
            writeln!(f, "{d}")?;
        }
        if self.total > self.diagnostics.len() {
            writeln!(f, "... and {} more", self.total - self.diagnostics.len())?;
        }
        Ok(())
    }
}
