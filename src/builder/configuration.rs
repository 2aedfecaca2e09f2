//! Builder for constructing configurations.

use crate::core::{ConfigError, Configuration, StateSpec};
use std::collections::BTreeMap;

/// Builder for constructing configurations with a fluent API.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    initial: Option<String>,
    states: BTreeMap<String, StateSpec>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again keeps its transitions.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition, declaring `from` if needed.
    /// A repeated `(from, event)` pair replaces the earlier destination.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .insert(event, to);
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing or validation fails.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitial)?;
        Configuration::new(initial, self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigurationBuilder::new().state("idle").build();

        assert!(matches!(result, Err(ConfigError::MissingInitial)));
    }

    #[test]
    fn builder_requires_states() {
        let result = ConfigurationBuilder::new().initial("idle").build();

        assert!(matches!(result, Err(ConfigError::Empty)));
    }

    #[test]
    fn fluent_api_builds_configuration() {
        let config = ConfigurationBuilder::new()
            .initial("idle")
            .transition("idle", "start", "running")
            .transition("running", "stop", "idle")
            .state("idle")
            .build()
            .unwrap();

        assert_eq!(config.initial(), "idle");
        assert_eq!(config.target("idle", "start"), Some("running"));
        assert_eq!(config.target("running", "stop"), Some("idle"));
    }

    #[test]
    fn undeclared_target_fails_build() {
        let result = ConfigurationBuilder::new()
            .initial("idle")
            .transition("idle", "start", "running")
            .build();

        assert!(matches!(result, Err(ConfigError::UnknownTarget { .. })));
    }

    #[test]
    fn repeated_transition_overwrites() {
        let config = ConfigurationBuilder::new()
            .initial("a")
            .state("b")
            .state("c")
            .transition("a", "go", "b")
            .transition("a", "go", "c")
            .build()
            .unwrap();

        assert_eq!(config.target("a", "go"), Some("c"));
    }
}
