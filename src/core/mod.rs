//! Core state machine types.
//!
//! This module contains the data the engine operates on:
//! - The declarative `Configuration` and its per-state `StateSpec`
//! - The cursor-based `StateHistory` used for undo/redo
//! - Error types for configuration and transitions
//!
//! Nothing in this module performs I/O.

mod config;
mod error;
mod history;

pub use config::{Configuration, StateSpec};
pub use error::{ConfigError, TransitionError};
pub use history::{StateHistory, StateTransition, TransitionCause};
