//! Linear undo/redo history of state changes.
//!
//! Every mutating call on a machine is recorded as a [`StateTransition`].
//! A cursor splits the list into an undoable prefix and a redoable tail.
//! Recording a new transition drops the redoable tail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCause {
    /// Unconditional jump via `change_state`.
    Direct,
    /// Event fired via `trigger`.
    Event(String),
    /// Return to the initial state via `reset`.
    Reset,
}

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use statebook::core::{StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "idle".to_string(),
///     to: "running".to_string(),
///     cause: TransitionCause::Event("start".to_string()),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state that was active before the change
    pub from: String,
    /// The state that became active
    pub to: String,
    /// The operation that caused the change
    pub cause: TransitionCause,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state changes with an undo/redo cursor.
///
/// Entries before the cursor can be undone, entries at or after it can be
/// redone.
///
/// # Example
///
/// ```rust
/// use statebook::core::{StateHistory, StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: "a".to_string(),
///     to: "b".to_string(),
///     cause: TransitionCause::Direct,
///     timestamp: Utc::now(),
/// });
///
/// let undone = history.step_back().unwrap();
/// assert_eq!(undone.from, "a");
/// assert!(history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
    cursor: usize,
}

/// Unchecked wire form of [`StateHistory`].
#[derive(Deserialize)]
struct RawHistory {
    transitions: Vec<StateTransition>,
    cursor: usize,
}

impl TryFrom<RawHistory> for StateHistory {
    type Error = String;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.cursor > raw.transitions.len() {
            return Err(format!(
                "history cursor {} is past the last of {} transitions",
                raw.cursor,
                raw.transitions.len()
            ));
        }
        Ok(Self {
            transitions: raw.transitions,
            cursor: raw.cursor,
        })
    }
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition, discarding anything that could have been redone.
    pub fn record(&mut self, transition: StateTransition) {
        self.transitions.truncate(self.cursor);
        self.transitions.push(transition);
        self.cursor = self.transitions.len();
    }

    /// Move the cursor back one step.
    ///
    /// Returns the transition being undone; its `from` is the state to restore.
    pub fn step_back(&mut self) -> Option<&StateTransition> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.transitions.get(self.cursor)
    }

    /// Move the cursor forward one step.
    ///
    /// Returns the transition being redone; its `to` is the state to restore.
    pub fn step_forward(&mut self) -> Option<&StateTransition> {
        if self.cursor == self.transitions.len() {
            return None;
        }
        self.cursor += 1;
        self.transitions.get(self.cursor - 1)
    }

    /// Forget every recorded transition.
    pub fn clear(&mut self) {
        self.transitions.clear();
        self.cursor = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.transitions.len()
    }

    /// Number of undoable steps.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All recorded transitions, including the redoable tail.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Previously active states that `undo` can return to, oldest first.
    pub fn previous_states(&self) -> Vec<&str> {
        self.undoable().iter().map(|t| t.from.as_str()).collect()
    }

    /// Path of states traversed up to the cursor.
    ///
    /// Starts with the `from` of the first transition, then the `to` of each
    /// undoable transition. Empty when nothing can be undone.
    pub fn get_path(&self) -> Vec<&str> {
        let undoable = self.undoable();
        let mut path = Vec::with_capacity(undoable.len() + 1);
        if let Some(first) = undoable.first() {
            path.push(first.from.as_str());
        }
        path.extend(undoable.iter().map(|t| t.to.as_str()));
        path
    }

    fn undoable(&self) -> &[StateTransition] {
        &self.transitions[..self.cursor]
    }
}
