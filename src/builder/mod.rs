//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder, a data-driven schema and macros
//! for declaring machines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod schema;

pub use error::{BuildError, SchemaError, Violation};
pub use machine::MachineBuilder;
pub use schema::{MachineSchema, StateDecl};

use crate::core::StateId;

/// Start a builder for a straight pipeline: each state is entered only
/// from the one declared before it.
///
/// # Example
///
/// ```
/// use statecraft::builder::pipeline;
/// use statecraft::core::StateId;
/// use statecraft::host::{AccessError, StateHost};
///
/// struct Parcel;
///
/// impl StateHost for Parcel {
///     fn read_state(&self, _field: &str) -> Option<StateId> { None }
///     fn write_state(&mut self, _field: &str, _state: StateId) -> Result<(), AccessError> { Ok(()) }
/// }
///
/// let machine = pipeline::<Parcel, _, _>(["packed", "shipped", "delivered"])
///     .build()
///     .unwrap();
///
/// assert!(machine.can_transition("packed", "shipped"));
/// assert!(!machine.can_transition("packed", "delivered"));
/// assert!(machine.is_terminal("delivered"));
/// ```
pub fn pipeline<H, I, S>(states: I) -> MachineBuilder<H>
where
    I: IntoIterator<Item = S>,
    S: Into<StateId>,
{
    let mut previous: Option<StateId> = None;
    let mut builder = MachineBuilder::new();
    for state in states {
        let state = state.into();
        builder = match previous.take() {
            None => builder.state_from(state.clone(), Vec::<StateId>::new()),
            Some(prev) => builder.state_from(state.clone(), [prev]),
        };
        previous = Some(state);
    }
    builder
}
