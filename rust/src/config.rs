//! Configuration types for plan evaluation.

use pyo3::prelude::*;

use crate::error::PlanError;

/// How tasks with equal early start are ordered in the final sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Lexicographic task identifier; independent of input order.
    #[default]
    Identifier,
    /// Position in the input collection.
    InputOrder,
}

impl TieBreak {
    pub fn parse(name: &str) -> Result<Self, PlanError> {
        match name {
            "identifier" => Ok(Self::Identifier),
            "input_order" => Ok(Self::InputOrder),
            other => Err(PlanError::InvalidConfig(format!(
                "Unknown tie break: {}",
                other
            ))),
        }
    }
}

/// Configuration for a plan evaluation.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlanConfig {
    /// Tie break for equal early starts: "identifier" or "input_order"
    #[pyo3(get, set)]
    pub tie_break: String,
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            tie_break: "identifier".to_string(),
            verbosity: 0,
        }
    }
}

impl PlanConfig {
    pub fn tie_break(&self) -> Result<TieBreak, PlanError> {
        TieBreak::parse(&self.tie_break)
    }
}

#[pymethods]
impl PlanConfig {
    #[new]
    #[pyo3(signature = (tie_break=None, verbosity=None))]
    fn new(tie_break: Option<String>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            tie_break: tie_break.unwrap_or(defaults.tie_break),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "PlanConfig(tie_break={:?}, verbosity={})",
            self.tie_break, self.verbosity
        )
    }
}
