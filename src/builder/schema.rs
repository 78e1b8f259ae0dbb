//! Data-driven machine declarations.
//!
//! A [`MachineSchema`] lists states in declaration order, each with an
//! optional explicit source list. It carries no hooks; attach those in code
//! after seeding a [`MachineBuilder`](super::MachineBuilder) from the schema.

use crate::builder::error::SchemaError;
use crate::core::StateId;
use crate::engine::MachineDefinition;
use serde::{Deserialize, Serialize};

/// One state declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDecl {
    pub name: StateId,

    /// Explicit sources; when absent, every state declared so far is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<StateId>>,
}

/// Ordered list of state declarations.
///
/// # Example
///
/// ```rust
/// use statecraft::builder::MachineSchema;
///
/// let schema = MachineSchema::from_json(r#"{
///     "states": [
///         { "name": "new" },
///         { "name": "wip", "from": ["new"] }
///     ]
/// }"#).unwrap();
///
/// assert_eq!(schema.states.len(), 2);
/// assert!(schema.states[0].from.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSchema {
    #[serde(default)]
    pub states: Vec<StateDecl>,
}

impl MachineSchema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe an existing definition.
    ///
    /// Every state is written with its resolved sources, so rebuilding from
    /// the schema reproduces the same edges regardless of snapshot order.
    pub fn describe<H>(machine: &MachineDefinition<H>) -> Self {
        let states = machine
            .registry()
            .states()
            .map(|definition| StateDecl {
                name: definition.name().clone(),
                from: Some(definition.allowed_sources().to_vec()),
            })
            .collect();
        Self { states }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;
    use crate::host::{AccessError, StateHost};

    struct Probe;

    impl StateHost for Probe {
        fn read_state(&self, _field: &str) -> Option<StateId> {
            None
        }

        fn write_state(&mut self, _field: &str, _state: StateId) -> Result<(), AccessError> {
            Ok(())
        }
    }

    #[test]
    fn missing_states_key_means_empty_schema() {
        let schema = MachineSchema::from_json("{}").unwrap();
        assert!(schema.states.is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = MachineSchema::from_json("{\"states\": [").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
        assert!(err.to_string().starts_with("Schema is not valid JSON"));
    }

    #[test]
    fn absent_from_is_not_serialized() {
        let schema = MachineSchema {
            states: vec![StateDecl {
                name: "new".into(),
                from: None,
            }],
        };

        let json = schema.to_json().unwrap();
        assert!(!json.contains("from"));
    }

    #[test]
    fn describe_pins_snapshot_sources() {
        // "late" is redeclared after "extra", so its snapshot now includes it.
        let machine = MachineBuilder::<Probe>::new()
            .state("early")
            .state("late")
            .state("extra")
            .state("late")
            .build()
            .unwrap();

        let schema = MachineSchema::describe(&machine);
        let rebuilt = MachineBuilder::<Probe>::from_schema(&schema).build().unwrap();

        for state in machine.states() {
            assert_eq!(
                machine.allowed_sources(state),
                rebuilt.allowed_sources(state)
            );
        }
        assert!(rebuilt.can_transition("extra", "late"));
    }
}
