//! Canonical state identifiers.
//!
//! Every state a machine knows about is named by a [`StateId`]. Text,
//! owned strings and `state_enum!` variants all normalize into the same
//! canonical form, so lookups and comparisons never depend on which
//! representation the caller happened to use.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Canonical identifier for a declared state.
///
/// Cloning is cheap: the name is shared behind an `Arc<str>`.
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateId;
///
/// let from_text = StateId::from("archived");
/// let from_owned = StateId::from(String::from("archived"));
///
/// assert_eq!(from_text, from_owned);
/// assert_eq!(from_text.as_str(), "archived");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(Arc<str>);

impl StateId {
    /// Create a state identifier from anything string-like.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The canonical name of this state.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({:?})", &*self.0)
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&String> for StateId {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&StateId> for StateId {
    fn from(state: &StateId) -> Self {
        state.clone()
    }
}

impl PartialEq<str> for StateId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Render an optional state for diagnostics, `(none)` when absent.
pub(crate) fn display_optional(state: &Option<StateId>) -> String {
    match state {
        Some(state) => state.to_string(),
        None => "(none)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn representations_normalize_to_one_identity() {
        let text = StateId::from("wip");
        let owned = StateId::from("wip".to_string());
        let borrowed = StateId::from(&"wip".to_string());

        assert_eq!(text, owned);
        assert_eq!(owned, borrowed);
        assert_eq!(text, "wip");
    }

    #[test]
    fn distinct_names_are_distinct_states() {
        assert_ne!(StateId::from("new"), StateId::from("New"));
    }

    #[test]
    fn lookup_by_str_through_borrow() {
        let mut map = HashMap::new();
        map.insert(StateId::from("review"), 3);

        assert_eq!(map.get("review"), Some(&3));
    }

    #[test]
    fn serializes_as_plain_string() {
        let state = StateId::from("accepted");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"accepted\"");

        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn optional_display_marks_absent_state() {
        assert_eq!(display_optional(&None), "(none)");
        assert_eq!(display_optional(&Some(StateId::from("new"))), "new");
    }
}
