//! Machine definitions and the transition engine.

use crate::core::{
    display_optional, HookPhase, HookTable, StateDefinition, StateHook, StateId, StateRegistry,
};
use crate::engine::error::TransitionError;
use crate::engine::transition::Transition;
use crate::host::{self, StateHost};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Boxed initializer a host framework can run after constructing a host.
pub type Initializer<H> = Box<dyn Fn(&mut H) -> Result<bool, TransitionError> + Send + Sync>;

/// The full state vocabulary and hook table for one host type.
///
/// Built once through [`MachineBuilder`](crate::builder::MachineBuilder) and
/// frozen afterwards. Every host instance borrows the same definition, so it
/// is typically kept in a `static` `OnceLock` or behind an `Arc`.
pub struct MachineDefinition<H> {
    registry: StateRegistry,
    hooks: HookTable<H>,
    initial: StateId,
}

impl<H> MachineDefinition<H> {
    /// Assemble a definition; `None` when no state was declared.
    pub(crate) fn from_parts(registry: StateRegistry, hooks: HookTable<H>) -> Option<Self> {
        let initial = registry.initial_state()?.clone();
        Some(Self {
            registry,
            hooks,
            initial,
        })
    }

    /// The first-declared state, written into fresh hosts.
    pub fn initial_state(&self) -> &StateId {
        &self.initial
    }

    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    pub fn hooks(&self) -> &HookTable<H> {
        &self.hooks
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.registry.states().map(StateDefinition::name)
    }

    pub fn is_declared(&self, state: impl Into<StateId>) -> bool {
        self.registry.is_declared(&state.into())
    }

    pub fn allowed_sources(&self, state: impl Into<StateId>) -> Option<&[StateId]> {
        self.registry
            .get(&state.into())
            .map(StateDefinition::allowed_sources)
    }

    pub fn successors(&self, state: impl Into<StateId>) -> Vec<StateId> {
        let state = state.into();
        self.registry.successors(&state).cloned().collect()
    }

    pub fn is_terminal(&self, state: impl Into<StateId>) -> bool {
        self.registry.is_terminal(&state.into())
    }

    /// Registry-level check; undeclared targets count as unrestricted.
    pub fn can_transition(&self, current: impl Into<StateId>, target: impl Into<StateId>) -> bool {
        self.registry.can_transition(&current.into(), &target.into())
    }
}

impl<H: StateHost> MachineDefinition<H> {
    /// Write the initial state into `host` unless it already has one.
    pub fn initialize_if_absent(&self, host: &mut H) -> Result<bool, TransitionError> {
        Ok(host::initialize_if_absent(host, &self.initial)?)
    }

    /// Package [`Self::initialize_if_absent`] for a post-construction hook.
    pub fn initializer(self: &Arc<Self>) -> Initializer<H>
    where
        H: 'static,
    {
        let machine = Arc::clone(self);
        Box::new(move |host: &mut H| machine.initialize_if_absent(host))
    }

    pub fn current_state(&self, host: &H) -> Option<StateId> {
        host::get_state(host)
    }

    /// Compare the host's state against `state` by canonical identity.
    pub fn is(&self, host: &H, state: impl Into<StateId>) -> bool {
        let state: StateId = state.into();
        host::get_state(host).is_some_and(|current| current == state)
    }

    /// Whether [`Self::transition_to`] would pass validation right now.
    pub fn can_transition_to(&self, host: &H, target: impl Into<StateId>) -> bool {
        let target = target.into();
        host::get_state(host).is_some_and(|current| self.registry.has_path(&current, &target))
    }

    /// Move `host` to `target`.
    ///
    /// Steps, in order: validate the path, run the old state's exit hooks,
    /// write the new state, run the new state's enter hooks, then run every
    /// after-transition hook with `(old, new)`.
    ///
    /// Validation failures leave the host untouched. A failing hook stops
    /// the remaining steps; if it was an enter or after-transition hook the
    /// new state has already been written.
    pub fn transition_to(
        &self,
        host: &mut H,
        target: impl Into<StateId>,
    ) -> Result<Transition, TransitionError> {
        let target = target.into();

        let from = match host::get_state(host) {
            Some(from) if self.registry.has_path(&from, &target) => from,
            from => {
                warn!(from = %display_optional(&from), to = %target, "rejected transition");
                return Err(TransitionError::InvalidState { from, to: target });
            }
        };

        run_state_hooks(HookPhase::Exit, &from, self.hooks.exit_hooks(&from), host)?;

        host::set_state(host, target.clone())?;
        let at = Utc::now();

        run_state_hooks(HookPhase::Enter, &target, self.hooks.enter_hooks(&target), host)?;

        let after = self.hooks.after_hooks();
        if !after.is_empty() {
            trace!(phase = %HookPhase::AfterTransition, hooks = after.len(), "running hooks");
        }
        for hook in after {
            hook(host, &from, &target).map_err(|source| TransitionError::HookFailed {
                phase: HookPhase::AfterTransition,
                state: target.clone(),
                source,
            })?;
        }

        debug!(from = %from, to = %target, "transition complete");
        Ok(Transition {
            from,
            to: target,
            at,
        })
    }
}

fn run_state_hooks<H>(
    phase: HookPhase,
    state: &StateId,
    hooks: &[StateHook<H>],
    host: &mut H,
) -> Result<(), TransitionError> {
    if hooks.is_empty() {
        return Ok(());
    }

    trace!(phase = %phase, state = %state, hooks = hooks.len(), "running hooks");
    for hook in hooks {
        hook(host).map_err(|source| TransitionError::HookFailed {
            phase,
            state: state.clone(),
            source,
        })?;
    }
    Ok(())
}

impl<H> fmt::Debug for MachineDefinition<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineDefinition")
            .field("initial", &self.initial)
            .field("registry", &self.registry)
            .field("hooks", &self.hooks)
            .finish()
    }
}
