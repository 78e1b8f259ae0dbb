//! Errors raised while reading or writing a host's state field.

use thiserror::Error;

/// Errors a host may report from [`StateHost::write_state`](super::StateHost::write_state).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Host has no state field named '{field}'")]
    UnknownField { field: String },
}
