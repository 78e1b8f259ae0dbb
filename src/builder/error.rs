//! Build errors for machine definitions and schemas.

use crate::core::{HookPhase, StateId};
use thiserror::Error;

/// A single problem found while validating a machine definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("No states declared. Call .state(name) before .build()")]
    NoStates,

    #[error("State '{state}' lists undeclared source state '{from}'")]
    UndeclaredSource { state: StateId, from: StateId },

    #[error("{phase} hook registered for undeclared state '{state}'")]
    UndeclaredHookState { state: StateId, phase: HookPhase },
}

/// Every violation found by [`MachineBuilder::build`](super::MachineBuilder::build).
///
/// Validation does not stop at the first problem; all of them are reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid machine definition: {}", render(.violations))]
pub struct BuildError {
    violations: Vec<Violation>,
}

impl BuildError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors reading or writing a [`MachineSchema`](super::MachineSchema).
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
