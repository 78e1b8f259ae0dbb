//! The transition engine.
//!
//! This module drives host entities through their machine:
//!
//! - **Definition**: `MachineDefinition` freezes the registry and hook table
//! - **Transitions**: validate, exit hooks, write, enter hooks, after hooks
//! - **Hosts**: the `Stateful` trait exposes the runtime operations on a host type
//!
//! All execution is synchronous; each step finishes before the next starts.

mod error;
mod machine;
mod stateful;
mod transition;

pub use error::TransitionError;
pub use machine::{Initializer, MachineDefinition};
pub use stateful::Stateful;
pub use transition::Transition;
