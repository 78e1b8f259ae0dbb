//! Lifecycle hooks bound to entering and exiting states.
//!
//! Hooks take the host as an explicit `&mut H` parameter so they can read
//! and mutate it, and return a [`HookResult`] so failures propagate to the
//! caller of the transition.

use super::state::StateId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Error type hooks may return; anything implementing `Error` converts via `?`.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by every hook.
pub type HookResult = Result<(), HookError>;

/// Hook run when a specific state is entered or exited.
pub type StateHook<H> = Arc<dyn Fn(&mut H) -> HookResult + Send + Sync>;

/// Hook run after every transition with `(old_state, new_state)`.
pub type AfterHook<H> = Arc<dyn Fn(&mut H, &StateId, &StateId) -> HookResult + Send + Sync>;

/// Which stage of a transition a hook belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPhase {
    /// Runs for the old state, before the state value changes
    Exit,

    /// Runs for the new state, right after the state value changes
    Enter,

    /// Runs last, once per transition, for every transition
    AfterTransition,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exit => "exit",
            Self::Enter => "enter",
            Self::AfterTransition => "after-transition",
        };
        f.write_str(name)
    }
}

/// Ordered hook lists for one machine definition.
///
/// Registration order is preserved and duplicates are kept; the same
/// closure registered twice runs twice.
pub struct HookTable<H> {
    enter: HashMap<StateId, Vec<StateHook<H>>>,
    exit: HashMap<StateId, Vec<StateHook<H>>>,
    after: Vec<AfterHook<H>>,
}

impl<H> HookTable<H> {
    pub fn new() -> Self {
        Self {
            enter: HashMap::new(),
            exit: HashMap::new(),
            after: Vec::new(),
        }
    }

    pub fn on_enter<F>(&mut self, state: impl Into<StateId>, hook: F)
    where
        F: Fn(&mut H) -> HookResult + Send + Sync + 'static,
    {
        self.enter.entry(state.into()).or_default().push(Arc::new(hook));
    }

    pub fn on_exit<F>(&mut self, state: impl Into<StateId>, hook: F)
    where
        F: Fn(&mut H) -> HookResult + Send + Sync + 'static,
    {
        self.exit.entry(state.into()).or_default().push(Arc::new(hook));
    }

    pub fn after_transition<F>(&mut self, hook: F)
    where
        F: Fn(&mut H, &StateId, &StateId) -> HookResult + Send + Sync + 'static,
    {
        self.after.push(Arc::new(hook));
    }

    pub fn enter_hooks(&self, state: &StateId) -> &[StateHook<H>] {
        self.enter.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn exit_hooks(&self, state: &StateId) -> &[StateHook<H>] {
        self.exit.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn after_hooks(&self) -> &[AfterHook<H>] {
        &self.after
    }

    /// States that have at least one hook for `phase`, sorted by name.
    ///
    /// `AfterTransition` hooks are not bound to a state and yield nothing.
    pub fn hooked_states(&self, phase: HookPhase) -> Vec<&StateId> {
        let mut states: Vec<&StateId> = match phase {
            HookPhase::Enter => self.enter.keys().collect(),
            HookPhase::Exit => self.exit.keys().collect(),
            HookPhase::AfterTransition => Vec::new(),
        };
        states.sort();
        states
    }
}

impl<H> Default for HookTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for HookTable<H> {
    fn clone(&self) -> Self {
        Self {
            enter: self.enter.clone(),
            exit: self.exit.clone(),
            after: self.after.clone(),
        }
    }
}

impl<H> fmt::Debug for HookTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = |hooks: &HashMap<StateId, Vec<StateHook<H>>>| {
            let mut counts: Vec<(String, usize)> = hooks
                .iter()
                .map(|(state, list)| (state.to_string(), list.len()))
                .collect();
            counts.sort();
            counts
        };
        f.debug_struct("HookTable")
            .field("enter", &counts(&self.enter))
            .field("exit", &counts(&self.exit))
            .field("after", &self.after.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        log: Vec<String>,
    }

    #[test]
    fn hooks_keep_registration_order() {
        let mut table: HookTable<Probe> = HookTable::new();
        table.on_enter("wip", |p: &mut Probe| {
            p.log.push("first".into());
            Ok(())
        });
        table.on_enter("wip", |p: &mut Probe| {
            p.log.push("second".into());
            Ok(())
        });

        let mut probe = Probe::default();
        for hook in table.enter_hooks(&"wip".into()) {
            hook(&mut probe).unwrap();
        }

        assert_eq!(probe.log, vec!["first", "second"]);
    }

    #[test]
    fn identical_hooks_are_not_deduplicated() {
        let mut table: HookTable<Probe> = HookTable::new();
        let hook = |p: &mut Probe| {
            p.log.push("tick".into());
            Ok(())
        };
        table.on_exit("new", hook);
        table.on_exit("new", hook);

        assert_eq!(table.exit_hooks(&"new".into()).len(), 2);
    }

    #[test]
    fn unknown_state_has_no_hooks() {
        let table: HookTable<Probe> = HookTable::new();
        assert!(table.enter_hooks(&"missing".into()).is_empty());
        assert!(table.exit_hooks(&"missing".into()).is_empty());
        assert!(table.after_hooks().is_empty());
    }

    #[test]
    fn after_hooks_receive_both_states() {
        let mut table: HookTable<Probe> = HookTable::new();
        table.after_transition(|p: &mut Probe, from: &StateId, to: &StateId| {
            p.log.push(format!("{from}->{to}"));
            Ok(())
        });

        let mut probe = Probe::default();
        for hook in table.after_hooks() {
            hook(&mut probe, &"new".into(), &"wip".into()).unwrap();
        }

        assert_eq!(probe.log, vec!["new->wip"]);
    }

    #[test]
    fn hooked_states_are_sorted_per_phase() {
        let mut table: HookTable<Probe> = HookTable::new();
        table.on_enter("b", |_: &mut Probe| Ok(()));
        table.on_enter("a", |_: &mut Probe| Ok(()));
        table.on_exit("c", |_: &mut Probe| Ok(()));

        let enter: Vec<&str> = table
            .hooked_states(HookPhase::Enter)
            .into_iter()
            .map(StateId::as_str)
            .collect();
        assert_eq!(enter, vec!["a", "b"]);
        assert_eq!(table.hooked_states(HookPhase::Exit).len(), 1);
        assert!(table.hooked_states(HookPhase::AfterTransition).is_empty());
    }

    #[test]
    fn phase_names_are_readable() {
        assert_eq!(HookPhase::Exit.to_string(), "exit");
        assert_eq!(HookPhase::AfterTransition.to_string(), "after-transition");
    }
}
