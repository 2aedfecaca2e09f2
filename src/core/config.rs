//! Declarative machine configuration.
//!
//! A configuration names the initial state and maps every state to its
//! transition table (event → destination). It is immutable once built and
//! is owned by exactly one [`StateMachine`](crate::engine::StateMachine).

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Transition table of a single state.
///
/// A state without entries has no outgoing events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSpec {
    #[serde(default)]
    transitions: BTreeMap<String, String>,
}

impl StateSpec {
    /// Create a spec with no outgoing events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the destination for `event`.
    pub fn with_transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(event, target);
        self
    }

    pub(crate) fn insert(&mut self, event: impl Into<String>, target: impl Into<String>) {
        self.transitions.insert(event.into(), target.into());
    }

    /// Destination for `event`, if defined.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// All (event, destination) pairs in event order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.transitions
            .iter()
            .map(|(event, target)| (event.as_str(), target.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<E, T> FromIterator<(E, T)> for StateSpec
where
    E: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (E, T)>>(iter: I) -> Self {
        let mut spec = StateSpec::new();
        for (event, target) in iter {
            spec.insert(event, target);
        }
        spec
    }
}

/// Immutable description of a finite state machine.
///
/// `new`, `from_json` and `from_value` validate. A value produced by plain
/// `serde` deserialization is unchecked until passed to
/// [`StateMachine::new`](crate::engine::StateMachine::new), which validates again.
///
/// # Example
///
/// ```rust
/// use statebook::core::{Configuration, StateSpec};
/// use std::collections::BTreeMap;
///
/// let mut states = BTreeMap::new();
/// states.insert("idle".to_string(), StateSpec::new().with_transition("start", "running"));
/// states.insert("running".to_string(), StateSpec::new().with_transition("stop", "idle"));
///
/// let config = Configuration::new("idle", states).unwrap();
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.target("idle", "start"), Some("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    initial: String,
    states: BTreeMap<String, StateSpec>,
}

impl Configuration {
    /// Build and validate a configuration.
    pub fn new(
        initial: impl Into<String>,
        states: BTreeMap<String, StateSpec>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            initial: initial.into(),
            states,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// The expected shape is
    /// `{"initial": "...", "states": {"<state>": {"transitions": {"<event>": "<dest>"}}}}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Configuration::from_json`] for an already parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration, reporting every problem at once.
    ///
    /// The initial state and every transition destination must be declared.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.contains_state(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::UnknownInitial {
                initial: self.initial.clone(),
            })
        });

        for (state, spec) in &self.states {
            for (event, target) in spec.transitions() {
                checks.push(if self.contains_state(target) {
                    Validation::success(())
                } else {
                    Validation::fail(ConfigError::UnknownTarget {
                        state: state.clone(),
                        event: event.to_string(),
                        target: target.to_string(),
                    })
                });
            }
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                let mut errors: Vec<ConfigError> = errors.iter().cloned().collect();
                if errors.len() == 1 {
                    Err(errors.remove(0))
                } else {
                    Err(ConfigError::Invalid(errors))
                }
            }
        }
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Declared state ids in order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn state(&self, id: &str) -> Option<&StateSpec> {
        self.states.get(id)
    }

    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Destination reached by firing `event` in `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|spec| spec.target(event))
    }

    /// States whose transition table defines `event`.
    pub fn states_with_event(&self, event: &str) -> BTreeSet<&str> {
        self.states
            .iter()
            .filter(|(_, spec)| spec.target(event).is_some())
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
