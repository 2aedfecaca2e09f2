//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and the `fsm_config!` macro for
//! declaring states and transitions with minimal boilerplate.

pub mod configuration;
pub mod macros;

pub use configuration::ConfigurationBuilder;
