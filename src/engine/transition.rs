//! Report of a completed transition.

use crate::core::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single completed transition.
///
/// Returned by the engine once every hook has run; it is never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: StateId,
    /// The state being transitioned to
    pub to: StateId,
    /// When the new state was written
    pub at: DateTime<Utc>,
}

impl Transition {
    /// Whether the host re-entered the state it was already in.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}
