//! Macros for ergonomic state declarations.

/// Declare an enum whose variants name machine states.
///
/// Each variant converts into a [`StateId`](crate::core::StateId) using its
/// variant name, or the string literal given after `=`. Because the
/// conversion is canonical, a variant and its text compare equal under
/// `is`.
///
/// # Example
///
/// ```
/// use statecraft::core::StateId;
/// use statecraft::state_enum;
///
/// state_enum! {
///     pub enum Lane {
///         Backlog = "backlog",
///         Doing = "doing",
///         Done,
///     }
/// }
///
/// assert_eq!(StateId::from(Lane::Doing), StateId::from("doing"));
/// assert_eq!(Lane::Done.name(), "Done");
/// assert_eq!(Lane::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (@name $variant:ident $text:literal) => {
        $text
    };
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $text:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Canonical state name of this variant.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@name $variant $($text)?)),*
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::core::StateId {
            fn from(state: $name) -> Self {
                $crate::core::StateId::new(state.name())
            }
        }

        impl ::std::convert::From<&$name> for $crate::core::StateId {
            fn from(state: &$name) -> Self {
                $crate::core::StateId::new(state.name())
            }
        }
    };
}

/// Generate per-state convenience methods on a [`Stateful`](crate::engine::Stateful) host.
///
/// Each entry `state => transition_method, predicate_method;` expands into
/// a thin wrapper over `transition_to(state)` and one over `is(state)`.
///
/// # Example
///
/// ```
/// use std::sync::OnceLock;
/// use statecraft::builder::MachineBuilder;
/// use statecraft::core::StateId;
/// use statecraft::engine::{MachineDefinition, Stateful};
/// use statecraft::host::{AccessError, StateHost};
/// use statecraft::state_shortcuts;
///
/// struct Job {
///     state: Option<StateId>,
/// }
///
/// impl StateHost for Job {
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
/// impl Stateful for Job {
///     fn machine() -> &'static MachineDefinition<Self> {
///         static MACHINE: OnceLock<MachineDefinition<Job>> = OnceLock::new();
///         MACHINE.get_or_init(|| {
///             MachineBuilder::new()
///                 .state("queued")
///                 .state_from("running", ["queued"])
///                 .build()
///                 .expect("job machine is valid")
///         })
///     }
/// }
///
/// state_shortcuts! {
///     impl Job {
///         "queued" => requeue, is_queued;
///         "running" => run, is_running;
///     }
/// }
///
/// let mut job = Job { state: None };
/// job.initialize_state().unwrap();
/// assert!(job.is_queued());
///
/// job.run().unwrap();
/// assert!(job.is_running());
/// assert!(job.requeue().is_err());
/// ```
#[macro_export]
macro_rules! state_shortcuts {
    (
        impl $host:ty {
            $( $state:expr => $transition:ident, $predicate:ident; )*
        }
    ) => {
        impl $host {
            $(
                pub fn $transition(
                    &mut self,
                ) -> ::std::result::Result<$crate::engine::Transition, $crate::engine::TransitionError> {
                    <Self as $crate::engine::Stateful>::transition_to(self, $state)
                }

                pub fn $predicate(&self) -> bool {
                    <Self as $crate::engine::Stateful>::is(self, $state)
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    state_enum! {
        enum Phase {
            Draft = "draft",
            Review = "review",
            Shipped,
        }
    }

    #[test]
    fn state_enum_maps_variants_to_names() {
        assert_eq!(Phase::Draft.name(), "draft");
        assert_eq!(Phase::Shipped.name(), "Shipped");
        assert_eq!(StateId::from(Phase::Review), StateId::from("review"));
        assert_eq!(StateId::from(&Phase::Draft), "draft");
    }

    #[test]
    fn state_enum_lists_all_variants() {
        assert_eq!(Phase::ALL, &[Phase::Draft, Phase::Review, Phase::Shipped]);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicLane {
                A,
                B,
            }
        }

        assert_eq!(StateId::from(PublicLane::B), "B");
        let _lane = PublicLane::A;
    }
}
