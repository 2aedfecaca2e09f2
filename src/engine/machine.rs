//! State machine that applies transitions and tracks undo/redo history.

use crate::core::{
    ConfigError, Configuration, StateHistory, StateTransition, TransitionCause, TransitionError,
};
use chrono::Utc;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Finite state machine driven by a [`Configuration`].
///
/// Every validity check reads only the configuration owned by this instance.
/// Failed transitions leave the machine untouched.
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    current: String,
    history: StateHistory,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        config.validate()?;
        let current = config.initial().to_string();
        debug!(
            initial = %current,
            states = config.states().count(),
            "state machine created"
        );
        Ok(Self {
            config,
            current,
            history: StateHistory::new(),
        })
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Declared states, or only those defining `event` when one is given.
    pub fn states(&self, event: Option<&str>) -> BTreeSet<&str> {
        match event {
            Some(event) => self.config.states_with_event(event),
            None => self.config.states().collect(),
        }
    }

    /// Events that `trigger` accepts in the current state.
    pub fn events(&self) -> BTreeSet<&str> {
        self.config
            .state(&self.current)
            .map(|spec| spec.transitions().map(|(event, _)| event).collect())
            .unwrap_or_default()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Jump to `state` unconditionally.
    pub fn change_state(&mut self, state: &str) -> Result<&str, TransitionError> {
        if !self.config.contains_state(state) {
            debug!(state, current = %self.current, "rejected change to undeclared state");
            return Err(TransitionError::UnknownState {
                state: state.to_string(),
            });
        }
        Ok(self.enter(state.to_string(), TransitionCause::Direct))
    }

    /// Fire `event` from the current state.
    pub fn trigger(&mut self, event: &str) -> Result<&str, TransitionError> {
        let Some(target) = self.config.target(&self.current, event) else {
            debug!(event, current = %self.current, "rejected undefined event");
            return Err(TransitionError::UnknownEvent {
                event: event.to_string(),
                state: self.current.clone(),
            });
        };
        let target = target.to_string();
        Ok(self.enter(target, TransitionCause::Event(event.to_string())))
    }

    /// Return to the initial state. The reset itself is undoable.
    pub fn reset(&mut self) -> &mut Self {
        let initial = self.config.initial().to_string();
        self.enter(initial, TransitionCause::Reset);
        self
    }

    /// Restore the state active before the latest recorded change.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(transition) = self.history.step_back() else {
            trace!(current = %self.current, "nothing to undo");
            return false;
        };
        debug!(from = %self.current, to = %transition.from, "undo");
        self.current = transition.from.clone();
        true
    }

    /// Re-apply the most recently undone change.
    ///
    /// Returns `false` when nothing has been undone since the last change.
    pub fn redo(&mut self) -> bool {
        let Some(transition) = self.history.step_forward() else {
            trace!(current = %self.current, "nothing to redo");
            return false;
        };
        debug!(from = %self.current, to = %transition.to, "redo");
        self.current = transition.to.clone();
        true
    }

    /// Forget all history. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    fn enter(&mut self, target: String, cause: TransitionCause) -> &str {
        let from = std::mem::replace(&mut self.current, target);
        debug!(from = %from, to = %self.current, cause = ?cause, "state changed");
        self.history.record(StateTransition {
            from,
            to: self.current.clone(),
            cause,
            timestamp: Utc::now(),
        });
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateSpec;
    use std::collections::BTreeMap;

    fn traffic_light() -> Configuration {
        let mut states = BTreeMap::new();
        states.insert(
            "red".to_string(),
            StateSpec::new().with_transition("next", "green"),
        );
        states.insert(
            "green".to_string(),
            StateSpec::new().with_transition("next", "yellow"),
        );
        states.insert(
            "yellow".to_string(),
            StateSpec::new().with_transition("next", "red"),
        );
        states.insert("off".to_string(), StateSpec::new());
        Configuration::new("red", states).unwrap()
    }

    #[test]
    fn new_rejects_unvalidated_empty_configuration() {
        let config: Configuration = serde_json::from_value(serde_json::json!({
            "initial": "red",
            "states": {}
        }))
        .unwrap();

        assert!(matches!(
            StateMachine::new(config),
            Err(ConfigError::Empty)
        ));
    }

    #[test]
    fn new_rejects_unvalidated_unknown_initial() {
        let config: Configuration = serde_json::from_value(serde_json::json!({
            "initial": "blue",
            "states": { "red": {} }
        }))
        .unwrap();

        match StateMachine::new(config) {
            Err(ConfigError::UnknownInitial { initial }) => assert_eq!(initial, "blue"),
            other => panic!("Expected UnknownInitial, got {other:?}"),
        }
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = StateMachine::new(traffic_light()).unwrap();
        assert_eq!(machine.state(), "red");
        assert!(!machine.can_undo());
        assert!(!machine.can_redo());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn trigger_follows_transition_table() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();

        assert_eq!(machine.trigger("next"), Ok("green"));
        assert_eq!(machine.trigger("next"), Ok("yellow"));
        assert_eq!(machine.trigger("next"), Ok("red"));

        let causes: Vec<_> = machine
            .history()
            .transitions()
            .iter()
            .map(|t| t.cause.clone())
            .collect();
        assert!(causes
            .iter()
            .all(|c| *c == TransitionCause::Event("next".to_string())));
    }

    #[test]
    fn undefined_event_leaves_machine_untouched() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();
        machine.change_state("off").unwrap();

        assert_eq!(
            machine.trigger("next"),
            Err(TransitionError::UnknownEvent {
                event: "next".to_string(),
                state: "off".to_string(),
            })
        );
        assert_eq!(machine.state(), "off");
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn change_to_undeclared_state_is_rejected() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();

        assert_eq!(
            machine.change_state("blue"),
            Err(TransitionError::UnknownState {
                state: "blue".to_string()
            })
        );
        assert_eq!(machine.state(), "red");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn reset_is_recorded_and_chainable() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();
        machine.trigger("next").unwrap();

        assert_eq!(machine.reset().state(), "red");
        assert_eq!(machine.history().len(), 2);
        assert_eq!(
            machine.history().transitions()[1].cause,
            TransitionCause::Reset
        );

        assert!(machine.undo());
        assert_eq!(machine.state(), "green");
    }

    #[test]
    fn reset_from_initial_still_records() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();
        machine.reset();

        assert_eq!(machine.state(), "red");
        assert!(machine.can_undo());
    }

    #[test]
    fn undo_redo_walks_history() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();
        machine.trigger("next").unwrap();
        machine.trigger("next").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.state(), "green");
        assert!(machine.undo());
        assert_eq!(machine.state(), "red");
        assert!(!machine.undo());

        assert!(machine.redo());
        assert_eq!(machine.state(), "green");
        assert!(machine.redo());
        assert_eq!(machine.state(), "yellow");
        assert!(!machine.redo());
    }

    #[test]
    fn change_after_undo_discards_redo() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();
        machine.trigger("next").unwrap();
        machine.trigger("next").unwrap();
        machine.undo();

        machine.change_state("off").unwrap();

        assert!(!machine.redo());
        assert_eq!(machine.state(), "off");
        assert_eq!(machine.history().get_path(), vec!["red", "green", "off"]);
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();
        machine.trigger("next").unwrap();
        machine.trigger("next").unwrap();
        machine.undo();

        machine.clear_history();

        assert_eq!(machine.state(), "green");
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn states_query_filters_by_event() {
        let machine = StateMachine::new(traffic_light()).unwrap();

        let all: Vec<_> = machine.states(None).into_iter().collect();
        assert_eq!(all, vec!["green", "off", "red", "yellow"]);

        let with_next: Vec<_> = machine.states(Some("next")).into_iter().collect();
        assert_eq!(with_next, vec!["green", "red", "yellow"]);

        assert!(machine.states(Some("blink")).is_empty());
    }

    #[test]
    fn events_reflect_current_state() {
        let mut machine = StateMachine::new(traffic_light()).unwrap();
        assert_eq!(machine.events().into_iter().collect::<Vec<_>>(), vec!["next"]);

        machine.change_state("off").unwrap();
        assert!(machine.events().is_empty());
    }

    #[test]
    fn machines_do_not_share_configuration() {
        let mut states = BTreeMap::new();
        states.insert("solo".to_string(), StateSpec::new());
        let solo = Configuration::new("solo", states).unwrap();

        let mut lights = StateMachine::new(traffic_light()).unwrap();
        let mut other = StateMachine::new(solo).unwrap();

        assert!(other.change_state("green").is_err());
        assert_eq!(lights.change_state("green"), Ok("green"));
        assert_eq!(other.state(), "solo");
    }
}
