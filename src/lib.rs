//! Statebook: a declarative finite state machine engine with undo/redo
//!
//! A machine is described by a [`Configuration`]: an initial state and a
//! transition table mapping `(state, event)` to a destination state. The
//! [`StateMachine`] tracks the current state, applies direct and event-driven
//! transitions, and records every change in a linear history that supports
//! undo, redo, reset and clear.
//!
//! # Core Concepts
//!
//! - **Configuration**: Immutable, validated once at construction
//! - **Transitions**: `change_state` jumps directly, `trigger` follows an event
//! - **History**: Cursor-based undo/redo; a new change drops the redo tail
//!
//! # Example
//!
//! ```rust
//! use statebook::{fsm_config, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: normal;
//!     normal { study => busy },
//!     busy { get_tired => sleeping, get_hungry => hungry },
//!     hungry { eat => normal },
//!     sleeping { get_hungry => hungry, get_up => normal },
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! assert_eq!(machine.change_state("busy").unwrap(), "busy");
//! assert_eq!(machine.trigger("get_hungry").unwrap(), "hungry");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "busy");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "hungry");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::ConfigurationBuilder;
pub use crate::core::{
    ConfigError, Configuration, StateHistory, StateSpec, StateTransition, TransitionCause,
    TransitionError,
};
pub use crate::engine::StateMachine;
