//! Property-based tests for the transition engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines and transition requests.

use proptest::prelude::*;
use statecraft::builder::MachineBuilder;
use statecraft::core::StateId;
use statecraft::engine::{MachineDefinition, TransitionError};
use statecraft::host::{AccessError, StateHost};

#[derive(Default)]
struct Host {
    state: Option<StateId>,
    changes: Vec<(StateId, StateId)>,
}

impl StateHost for Host {
    fn read_state(&self, _field: &str) -> Option<StateId> {
        self.state.clone()
    }

    fn write_state(&mut self, _field: &str, state: StateId) -> Result<(), AccessError> {
        self.state = Some(state);
        Ok(())
    }
}

fn name(index: usize) -> StateId {
    StateId::from(format!("s{index}"))
}

/// Each entry declares `s{i}`; `Some(indices)` lists explicit sources.
type Declarations = Vec<Option<Vec<usize>>>;

prop_compose! {
    fn arbitrary_declarations()(count in 1..6usize)(
        decls in prop::collection::vec(
            prop::option::of(prop::collection::vec(0..count, 0..4)),
            count,
        )
    ) -> Declarations {
        decls
    }
}

fn build(decls: &Declarations) -> MachineDefinition<Host> {
    let mut builder = MachineBuilder::new();
    for (index, sources) in decls.iter().enumerate() {
        builder = match sources {
            Some(sources) => builder.state_from(name(index), sources.iter().map(|&s| name(s))),
            None => builder.state(name(index)),
        };
    }
    builder
        .after_transition(|host: &mut Host, from: &StateId, to: &StateId| {
            host.changes.push((from.clone(), to.clone()));
            Ok(())
        })
        .build()
        .unwrap()
}

fn fresh(machine: &MachineDefinition<Host>) -> Host {
    let mut host = Host::default();
    machine.initialize_if_absent(&mut host).unwrap();
    host
}

proptest! {
    #[test]
    fn fresh_host_starts_in_first_declared_state(decls in arbitrary_declarations()) {
        let machine = build(&decls);
        let host = fresh(&machine);

        prop_assert_eq!(machine.current_state(&host), Some(name(0)));
    }

    #[test]
    fn transition_succeeds_iff_it_was_allowed(
        decls in arbitrary_declarations(),
        requests in prop::collection::vec(0..7usize, 1..20),
    ) {
        let machine = build(&decls);
        let mut host = fresh(&machine);

        for request in requests {
            let target = name(request);
            let before = host.state.clone();
            let allowed = machine.can_transition_to(&host, target.clone());

            match machine.transition_to(&mut host, target.clone()) {
                Ok(transition) => {
                    prop_assert!(allowed);
                    prop_assert_eq!(Some(&transition.from), before.as_ref());
                    prop_assert_eq!(&transition.to, &target);
                    prop_assert_eq!(host.state.as_ref(), Some(&target));
                }
                Err(err) => {
                    prop_assert!(!allowed);
                    let is_invalid = matches!(
                        &err,
                        TransitionError::InvalidState { from, to } if *from == before && *to == target
                    );
                    prop_assert!(is_invalid);
                    prop_assert_eq!(&host.state, &before);
                }
            }
        }
    }

    #[test]
    fn after_hooks_receive_old_and_new_state(
        decls in arbitrary_declarations(),
        requests in prop::collection::vec(0..6usize, 1..20),
    ) {
        let machine = build(&decls);
        let mut host = fresh(&machine);
        let mut expected = Vec::new();

        for request in requests {
            let before = host.state.clone();
            if let Ok(transition) = machine.transition_to(&mut host, name(request)) {
                prop_assert_eq!(before, Some(transition.from.clone()));
                expected.push((transition.from, transition.to));
            }
        }

        prop_assert_eq!(host.changes, expected);
    }

    #[test]
    fn snapshot_sources_never_include_later_states(count in 1..8usize) {
        let decls: Declarations = vec![None; count];
        let machine = build(&decls);

        for (index, state) in machine.states().enumerate() {
            let sources = machine.allowed_sources(state).unwrap();
            prop_assert_eq!(sources.len(), index + 1);
            prop_assert!(sources.iter().all(|s| machine.states().position(|x| x == s) <= Some(index)));
        }
    }

    #[test]
    fn is_matches_text_and_id_forms(decls in arbitrary_declarations()) {
        let machine = build(&decls);
        let host = fresh(&machine);

        prop_assert!(machine.is(&host, "s0"));
        prop_assert!(machine.is(&host, String::from("s0")));
        prop_assert!(machine.is(&host, name(0)));
    }
}
