//! Statecraft: a small declarative state machine for host entities
//!
//! Statecraft governs a single "current state" field on any host type. You
//! declare the legal states once per type, each with the states it may be
//! entered from, and attach hooks for entering, exiting and completing a
//! transition. The frozen definition is shared by every instance.
//!
//! # Core Concepts
//!
//! - **StateId**: canonical state names, so `"archived"` and an enum variant compare equal
//! - **Registry**: ordered states with their allowed sources; the first is initial
//! - **Hooks**: enter/exit callbacks per state plus after-transition callbacks
//! - **Host**: the `StateHost` accessor contract, resolved per call
//! - **Engine**: validated transitions with a fixed hook order
//!
//! # Example
//!
//! ```rust
//! use std::sync::OnceLock;
//! use statecraft::builder::MachineBuilder;
//! use statecraft::core::StateId;
//! use statecraft::engine::{MachineDefinition, Stateful, TransitionError};
//! use statecraft::host::{AccessError, StateHost};
//!
//! #[derive(Default)]
//! struct Task {
//!     state: Option<StateId>,
//! }
//!
//! impl Task {
//!     fn new() -> Self {
//!         let mut task = Task::default();
//!         task.initialize_state().expect("state field is writable");
//!         task
//!     }
//! }
//!
//! impl StateHost for Task {
//!     fn read_state(&self, _field: &str) -> Option<StateId> {
//!         self.state.clone()
//!     }
//!
//!     fn write_state(&mut self, _field: &str, state: StateId) -> Result<(), AccessError> {
//!         self.state = Some(state);
//!         Ok(())
//!     }
//! }
//!
//! impl Stateful for Task {
//!     fn machine() -> &'static MachineDefinition<Self> {
//!         static MACHINE: OnceLock<MachineDefinition<Task>> = OnceLock::new();
//!         MACHINE.get_or_init(|| {
//!             MachineBuilder::new()
//!                 .state("new")
//!                 .state_from("wip", ["new"])
//!                 .state_from("review", ["new", "wip"])
//!                 .state_from("accepted", ["review"])
//!                 .state_from("archived", ["accepted"])
//!                 .build()
//!                 .expect("kanban machine is valid")
//!         })
//!     }
//! }
//!
//! let mut task = Task::new();
//! assert!(task.is("new"));
//!
//! task.transition_to("wip").unwrap();
//! task.transition_to("review").unwrap();
//!
//! let err = task.transition_to("archived").unwrap_err();
//! assert!(matches!(err, TransitionError::InvalidState { .. }));
//! assert!(task.is("review"));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod host;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{HookError, HookResult, StateId};
pub use crate::engine::{MachineDefinition, Stateful, Transition, TransitionError};
pub use crate::host::{AccessError, StateHost};
