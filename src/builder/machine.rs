//! Builder for constructing machine definitions.

use crate::builder::error::{BuildError, Violation};
use crate::builder::schema::MachineSchema;
use crate::core::{HookPhase, HookResult, HookTable, StateId, StateRegistry};
use crate::engine::MachineDefinition;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for declaring states and hooks with a fluent API.
///
/// States are declared in order; the first one becomes the initial state.
/// A state declared with [`state`](Self::state) accepts every state declared
/// up to that point (itself included), so declaration order matters.
pub struct MachineBuilder<H> {
    registry: StateRegistry,
    hooks: HookTable<H>,
}

impl<H> MachineBuilder<H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            registry: StateRegistry::new(),
            hooks: HookTable::new(),
        }
    }

    /// Seed a builder with the states described by `schema`, in order.
    pub fn from_schema(schema: &MachineSchema) -> Self {
        Self::new().schema(schema)
    }

    /// Declare every state in `schema`, in order.
    pub fn schema(mut self, schema: &MachineSchema) -> Self {
        for decl in &schema.states {
            self.registry
                .declare_state(decl.name.clone(), decl.from.as_ref().map(|from| from.iter()));
        }
        self
    }

    /// Declare a state that accepts every state declared so far.
    pub fn state(mut self, name: impl Into<StateId>) -> Self {
        self.registry.declare_state(name, None::<Vec<StateId>>);
        self
    }

    /// Declare a state that only accepts the listed source states.
    pub fn state_from<I, S>(mut self, name: impl Into<StateId>, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.registry.declare_state(name, Some(sources));
        self
    }

    /// Run `hook` each time `state` is entered.
    pub fn on_enter<F>(mut self, state: impl Into<StateId>, hook: F) -> Self
    where
        F: Fn(&mut H) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.on_enter(state, hook);
        self
    }

    /// Run `hook` each time `state` is exited.
    pub fn on_exit<F>(mut self, state: impl Into<StateId>, hook: F) -> Self
    where
        F: Fn(&mut H) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.on_exit(state, hook);
        self
    }

    /// Run `hook` with `(old, new)` after every transition.
    pub fn after_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut H, &StateId, &StateId) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.after_transition(hook);
        self
    }

    /// Validate and freeze the definition.
    /// Returns every violation found, not just the first.
    pub fn build(self) -> Result<MachineDefinition<H>, BuildError> {
        match self.validate() {
            Validation::Success(_) => MachineDefinition::from_parts(self.registry, self.hooks)
                .ok_or_else(|| BuildError::new(vec![Violation::NoStates])),
            Validation::Failure(violations) => {
                Err(BuildError::new(violations.iter().cloned().collect()))
            }
        }
    }

    fn validate(&self) -> Validation<(), NonEmptyVec<Violation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> = Vec::new();

        if self.registry.is_empty() {
            checks.push(Validation::fail(Violation::NoStates));
        }

        // Snapshot sources are declared by construction; only explicit ones can dangle.
        for definition in self.registry.states() {
            if !definition.has_explicit_sources() {
                continue;
            }
            for from in definition.allowed_sources() {
                let check = if self.registry.is_declared(from) {
                    Validation::success(())
                } else {
                    Validation::fail(Violation::UndeclaredSource {
                        state: definition.name().clone(),
                        from: from.clone(),
                    })
                };
                checks.push(check);
            }
        }

        for phase in [HookPhase::Exit, HookPhase::Enter] {
            for state in self.hooks.hooked_states(phase) {
                if !self.registry.is_declared(state) {
                    checks.push(Validation::fail(Violation::UndeclaredHookState {
                        state: state.clone(),
                        phase,
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<H> Default for MachineBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
