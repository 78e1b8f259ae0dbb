//! Declared states and the sources each one may be entered from.

use super::state::StateId;
use std::collections::HashMap;

/// A declared state together with the states it accepts transitions from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateDefinition {
    name: StateId,
    allowed_sources: Vec<StateId>,
    explicit: bool,
}

impl StateDefinition {
    pub fn name(&self) -> &StateId {
        &self.name
    }

    /// Source states, in the order they were given (or declared, for snapshots).
    pub fn allowed_sources(&self) -> &[StateId] {
        &self.allowed_sources
    }

    /// Whether the sources were listed explicitly rather than snapshotted.
    pub fn has_explicit_sources(&self) -> bool {
        self.explicit
    }

    pub fn accepts_from(&self, source: &StateId) -> bool {
        self.allowed_sources.contains(source)
    }
}

/// Insertion-ordered registry of declared states.
///
/// The first state ever declared becomes the initial state. A state declared
/// without explicit sources snapshots every state declared up to and
/// including itself; states declared afterwards are *not* added later.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateId, StateRegistry};
///
/// let mut registry = StateRegistry::new();
/// registry.declare_state("new", None::<Vec<StateId>>);
/// registry.declare_state("wip", Some(["new"]));
/// registry.declare_state("done", None::<Vec<StateId>>);
///
/// assert_eq!(registry.initial_state().map(|s| s.as_str()), Some("new"));
/// assert!(registry.has_path(&"new".into(), &"wip".into()));
/// assert!(registry.has_path(&"wip".into(), &"done".into()));
/// // "new" was declared first, so it never accepts "done" as a source.
/// assert!(!registry.has_path(&"done".into(), &"new".into()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateRegistry {
    states: Vec<StateDefinition>,
    index: HashMap<StateId, usize>,
    initial: Option<StateId>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, optionally restricted to the given source states.
    ///
    /// Declaring the same name twice replaces its sources but keeps both its
    /// first position and the initial state.
    pub fn declare_state<I, S>(&mut self, name: impl Into<StateId>, sources: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        let name = name.into();
        let slot = match self.index.get(&name) {
            Some(&slot) => slot,
            None => {
                self.states.push(StateDefinition {
                    name: name.clone(),
                    allowed_sources: Vec::new(),
                    explicit: false,
                });
                self.index.insert(name.clone(), self.states.len() - 1);
                self.states.len() - 1
            }
        };

        let (allowed_sources, explicit) = match sources {
            Some(sources) => (dedup(sources.into_iter().map(Into::into)), true),
            None => (self.states.iter().map(|s| s.name.clone()).collect(), false),
        };

        let definition = &mut self.states[slot];
        definition.allowed_sources = allowed_sources;
        definition.explicit = explicit;

        if self.initial.is_none() {
            self.initial = Some(name);
        }
    }

    /// First-declared state; `None` only while nothing is declared.
    pub fn initial_state(&self) -> Option<&StateId> {
        self.initial.as_ref()
    }

    pub fn get(&self, state: &StateId) -> Option<&StateDefinition> {
        self.index.get(state).map(|&slot| &self.states[slot])
    }

    pub fn is_declared(&self, state: &StateId) -> bool {
        self.index.contains_key(state)
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &StateDefinition> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Permissive legality check: an undeclared target is unrestricted.
    pub fn can_transition(&self, current: &StateId, target: &StateId) -> bool {
        self.get(target)
            .is_none_or(|definition| definition.accepts_from(current))
    }

    /// Strict check used before any transition runs: the target must be
    /// declared and list `from` among its sources.
    pub fn has_path(&self, from: &StateId, to: &StateId) -> bool {
        self.get(to)
            .is_some_and(|definition| definition.accepts_from(from))
    }

    /// States that can be entered from `state`, in declaration order.
    pub fn successors<'a>(&'a self, state: &'a StateId) -> impl Iterator<Item = &'a StateId> + 'a {
        self.states
            .iter()
            .filter(move |definition| definition.accepts_from(state))
            .map(|definition| &definition.name)
    }

    /// A declared state with no outgoing edges.
    pub fn is_terminal(&self, state: &StateId) -> bool {
        self.is_declared(state) && self.successors(state).next().is_none()
    }
}

fn dedup(sources: impl Iterator<Item = StateId>) -> Vec<StateId> {
    let mut unique: Vec<StateId> = Vec::new();
    for source in sources {
        if !unique.contains(&source) {
            unique.push(source);
        }
    }
    unique
}
