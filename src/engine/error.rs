//! Errors returned while driving a host through a transition.

use crate::core::{display_optional, HookError, HookPhase, StateId};
use crate::host::AccessError;
use thiserror::Error;

/// Errors that can occur during transitions
#[derive(Debug, Error)]
pub enum TransitionError {
    /// No declared path leads from the current state to the target.
    /// Raised before any hook runs or any state is written.
    #[error("Cannot transition from {} to {to}", display_optional(.from))]
    InvalidState { from: Option<StateId>, to: StateId },

    /// A hook failed; steps after it did not run.
    #[error("{phase} hook for state '{state}' failed: {source}")]
    HookFailed {
        phase: HookPhase,
        state: StateId,
        #[source]
        source: HookError,
    },

    #[error("State field could not be written: {0}")]
    StateField(#[from] AccessError),
}

impl TransitionError {
    /// Whether this is the rejection of an undeclared path.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
