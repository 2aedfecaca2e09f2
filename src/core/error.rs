//! Error types for configuration and transitions.

use thiserror::Error;

/// Errors raised while building or validating a [`Configuration`].
///
/// [`Configuration`]: crate::core::Configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Configuration declares no states")]
    Empty,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitial,

    #[error("Initial state '{initial}' is not declared")]
    UnknownInitial { initial: String },

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigError>),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by a rejected transition. The machine is left untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("State '{state}' is not declared")]
    UnknownState { state: String },

    #[error("Event '{event}' is not defined for state '{state}'")]
    UnknownEvent { event: String, state: String },
}
