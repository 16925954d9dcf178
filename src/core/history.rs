//! Lifecycle transition history.
//!
//! An append-only, immutable record of the transitions applied to a single
//! rental. Recording returns a new history; the old one is untouched.

use super::state::State;
use crate::rental::ActorRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use rentflow::core::StateTransition;
/// use rentflow::rental::{ActorRole, RentalStatus};
///
/// let transition = StateTransition {
///     from: RentalStatus::RentalConfirmed,
///     to: RentalStatus::RentalActive,
///     timestamp: Utc::now(),
///     actor: ActorRole::Owner,
/// };
/// assert_eq!(transition.actor, ActorRole::Owner);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// Role that triggered the transition
    pub actor: ActorRole,
}

/// Ordered history of applied transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use rentflow::core::{StateHistory, StateTransition};
/// use rentflow::rental::{ActorRole, RentalStatus};
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: RentalStatus::RentalConfirmed,
///         to: RentalStatus::RentalActive,
///         timestamp: Utc::now(),
///         actor: ActorRole::Owner,
///     })
///     .record(StateTransition {
///         from: RentalStatus::RentalActive,
///         to: RentalStatus::RentalCompleted,
///         timestamp: Utc::now(),
///         actor: ActorRole::Admin,
///     });
///
/// assert_eq!(history.get_path().len(), 3);
/// assert_eq!(history.last_actor(), Some(ActorRole::Admin));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is not modified.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Path of states traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` for an empty history, or when timestamps run backwards.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Current state according to the history, if anything was recorded.
    pub fn current(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Role behind the most recent transition.
    pub fn last_actor(&self) -> Option<ActorRole> {
        self.transitions.last().map(|t| t.actor)
    }

    /// All transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
