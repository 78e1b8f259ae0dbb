//! Core state machine vocabulary.
//!
//! This module contains the definition-time building blocks:
//! - Canonical state identifiers via `StateId`
//! - The ordered state registry with per-state allowed sources
//! - Hook tables for enter, exit and after-transition callbacks
//!
//! Nothing here touches a host entity; the engine wires these together.

mod hooks;
mod registry;
mod state;

pub use hooks::{AfterHook, HookError, HookPhase, HookResult, HookTable, StateHook};
pub use registry::{StateDefinition, StateRegistry};
pub use state::StateId;

pub(crate) use state::display_optional;
