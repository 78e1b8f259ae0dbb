//! Runtime operations available on every host type bound to a machine.

use crate::core::StateId;
use crate::engine::error::TransitionError;
use crate::engine::machine::MachineDefinition;
use crate::engine::transition::Transition;
use crate::host::StateHost;

/// A host type whose state field is governed by one shared machine.
///
/// Implementors only supply [`Stateful::machine`]; everything else is
/// provided. The constructor must call [`Stateful::initialize_state`]
/// before the first transition.
///
/// Transitions take `&mut self`, so two threads can only race on one host
/// if the caller wraps it in its own lock.
///
/// # Example
///
/// ```rust
/// use std::sync::OnceLock;
/// use statecraft::builder::MachineBuilder;
/// use statecraft::core::StateId;
/// use statecraft::engine::{MachineDefinition, Stateful};
/// use statecraft::host::{AccessError, StateHost};
///
/// struct Door {
///     state: Option<StateId>,
/// }
///
/// impl Door {
///     fn new() -> Self {
///         let mut door = Door { state: None };
///         door.initialize_state().expect("state field is writable");
///         door
///     }
/// }
///
/// impl StateHost for Door {
///     fn read_state(&self, _field: &str) -> Option<StateId> {
///         self.state.clone()
///     }
///
///     fn write_state(&mut self, _field: &str, state: StateId) -> Result<(), AccessError> {
///         self.state = Some(state);
///         Ok(())
///     }
/// }
///
/// impl Stateful for Door {
///     fn machine() -> &'static MachineDefinition<Self> {
///         static MACHINE: OnceLock<MachineDefinition<Door>> = OnceLock::new();
///         MACHINE.get_or_init(|| {
///             MachineBuilder::new()
///                 .state("closed")
///                 .state("open")
///                 .build()
///                 .expect("door machine is valid")
///         })
///     }
/// }
///
/// let mut door = Door::new();
/// assert!(door.is("closed"));
///
/// door.transition_to("open").unwrap();
/// assert!(door.is("open"));
///
/// // "closed" was declared first, so it only accepts itself as a source.
/// assert!(!door.can_transition_to("closed"));
/// assert!(door.transition_to("closed").is_err());
/// ```
pub trait Stateful: StateHost + Sized + 'static {
    /// The definition shared by every instance of this type.
    fn machine() -> &'static MachineDefinition<Self>;

    /// Set the initial state if none is present; call once from the constructor.
    fn initialize_state(&mut self) -> Result<bool, TransitionError> {
        Self::machine().initialize_if_absent(self)
    }

    fn current_state(&self) -> Option<StateId> {
        Self::machine().current_state(self)
    }

    fn is(&self, state: impl Into<StateId>) -> bool {
        Self::machine().is(self, state)
    }

    fn can_transition_to(&self, state: impl Into<StateId>) -> bool {
        Self::machine().can_transition_to(self, state)
    }

    fn transition_to(&mut self, state: impl Into<StateId>) -> Result<Transition, TransitionError> {
        Self::machine().transition_to(self, state)
    }
}
