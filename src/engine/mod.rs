//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **Direct transitions**: `change_state` jumps to any declared state
//! - **Event transitions**: `trigger` follows the current state's table
//! - **History**: every change is recorded and can be undone or redone
//!
//! All operations are synchronous and complete before returning.

mod machine;

pub use machine::StateMachine;
