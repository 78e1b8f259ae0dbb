//! Host entities and the accessor that reaches their state field.
//!
//! A host owns exactly one "current state" value. The machine never stores
//! it; every read and write goes through [`get_state`] and [`set_state`],
//! which resolve the field name on each call:
//!
//! 1. the instance override ([`StateHost::state_field_override`]), if any,
//! 2. otherwise the type-level name ([`StateHost::STATE_FIELD`]),
//! 3. which defaults to [`DEFAULT_STATE_FIELD`].
//!
//! Nothing is cached, so an override switched on after construction is
//! honoured by the very next access.
//!
//! # Example
//!
//! ```rust
//! use statecraft::core::StateId;
//! use statecraft::host::{self, AccessError, StateHost};
//!
//! #[derive(Default)]
//! struct Ticket {
//!     state: Option<StateId>,
//!     review_state: Option<StateId>,
//!     column: Option<String>,
//! }
//!
//! impl StateHost for Ticket {
//!     fn state_field_override(&self) -> Option<&str> {
//!         self.column.as_deref()
//!     }
//!
//!     fn read_state(&self, field: &str) -> Option<StateId> {
//!         match field {
//!             "state" => self.state.clone(),
//!             "review_state" => self.review_state.clone(),
//!             _ => None,
//!         }
//!     }
//!
//!     fn write_state(&mut self, field: &str, state: StateId) -> Result<(), AccessError> {
//!         match field {
//!             "state" => self.state = Some(state),
//!             "review_state" => self.review_state = Some(state),
//!             other => return Err(AccessError::UnknownField { field: other.to_string() }),
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut ticket = Ticket::default();
//! host::set_state(&mut ticket, "open".into()).unwrap();
//! assert_eq!(ticket.state.as_ref().map(|s| s.as_str()), Some("open"));
//!
//! ticket.column = Some("review_state".to_string());
//! assert_eq!(host::get_state(&ticket), None);
//! ```

mod error;

pub use error::AccessError;

use crate::core::StateId;
use tracing::debug;

/// Field name used when neither the type nor the instance overrides it.
pub const DEFAULT_STATE_FIELD: &str = "state";

/// An entity whose single state field is governed by a machine.
///
/// Hosts sharing one machine definition must not be mutated from several
/// threads at once without external synchronization; `&mut` access is
/// what keeps a transition's steps atomic with respect to other callers.
pub trait StateHost {
    /// Type-level name of the state field.
    const STATE_FIELD: &'static str = DEFAULT_STATE_FIELD;

    /// Per-instance field name, taking precedence over [`Self::STATE_FIELD`].
    fn state_field_override(&self) -> Option<&str> {
        None
    }

    /// Read the state stored under `field`; `None` when absent or unknown.
    fn read_state(&self, field: &str) -> Option<StateId>;

    /// Store `state` under `field`.
    fn write_state(&mut self, field: &str, state: StateId) -> Result<(), AccessError>;
}

/// Resolve which field the next access should use.
pub fn resolve_field<H: StateHost + ?Sized>(host: &H) -> &str {
    host.state_field_override().unwrap_or(H::STATE_FIELD)
}

pub fn get_state<H: StateHost + ?Sized>(host: &H) -> Option<StateId> {
    host.read_state(resolve_field(host))
}

pub fn set_state<H: StateHost + ?Sized>(host: &mut H, state: StateId) -> Result<(), AccessError> {
    let field = resolve_field(host).to_owned();
    host.write_state(&field, state)
}

/// Write `initial` only if the host has no state yet.
///
/// Returns whether a write happened. Hosts call this once while being
/// constructed, before any transition is attempted.
pub fn initialize_if_absent<H: StateHost + ?Sized>(
    host: &mut H,
    initial: &StateId,
) -> Result<bool, AccessError> {
    if get_state(host).is_some() {
        return Ok(false);
    }

    debug!(field = %resolve_field(host), state = %initial, "initializing host state");
    set_state(host, initial.clone())?;
    Ok(true)
}
