//! Lifecycle engine: option computation, request validation and pure apply.

use super::guard::RuleContext;
use super::rule::{standard_rules, TransitionOption, TransitionRule};
use crate::config::EngineConfig;
use crate::core::{StateHistory, StateTransition};
use crate::enforcement::{
    EnforcementContext, EnforcementRules, TransitionError, TransitionRequest, Violation,
};
use crate::rental::{ActorRole, RentalSnapshot, RentalStatus};
use chrono::{DateTime, Utc};
use stillwater::validation::Validation;

/// Outcome of applying a request: the new snapshot and its history record.
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedTransition {
    pub snapshot: RentalSnapshot,
    pub transition: StateTransition<RentalStatus>,
}

impl AppliedTransition {
    /// Append this transition to a history, returning the new history.
    pub fn record_into(&self, history: &StateHistory<RentalStatus>) -> StateHistory<RentalStatus> {
        history.record(self.transition.clone())
    }
}

/// Decides which transitions are legal for a rental, who may trigger them
/// and when.
///
/// The engine holds no per-rental state. It is `Send + Sync` and can be
/// shared across threads as-is.
#[derive(Clone, Debug)]
pub struct LifecycleEngine {
    config: EngineConfig,
    rules: Vec<TransitionRule>,
    enforcement: EnforcementRules,
}

impl Default for LifecycleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl LifecycleEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            rules: standard_rules(),
            enforcement: EnforcementRules::default(),
        }
    }

    /// Add host checks run by [`validate`](Self::validate).
    pub fn with_enforcement(mut self, enforcement: EnforcementRules) -> Self {
        self.enforcement = enforcement;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }

    /// [`next_transitions_at`](Self::next_transitions_at) against the wall clock.
    pub fn next_transitions(
        &self,
        rental: &RentalSnapshot,
        role: ActorRole,
    ) -> Vec<TransitionOption> {
        self.next_transitions_at(rental, role, Utc::now())
    }

    /// Legal next statuses for `role` at `now`, in rule-table order.
    ///
    /// Never fails: viewers and terminal statuses get an empty list.
    ///
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use rentflow::engine::LifecycleEngine;
    /// use rentflow::rental::{ActorRole, RentalSnapshot, RentalStatus};
    ///
    /// let now = Utc::now();
    /// let rental = RentalSnapshot::new("r-1", "o-1", now, now + Duration::days(2));
    /// let engine = LifecycleEngine::default();
    ///
    /// let options = engine.next_transitions_at(&rental, ActorRole::Owner, now);
    /// assert_eq!(options[0].to, RentalStatus::ProposalPendingRenter);
    /// assert!(options[0].requires_proposal_valid_until);
    /// assert_eq!(options[1].to, RentalStatus::Cancelled);
    ///
    /// assert!(engine.next_transitions_at(&rental, ActorRole::Viewer, now).is_empty());
    /// ```
    pub fn next_transitions_at(
        &self,
        rental: &RentalSnapshot,
        role: ActorRole,
        now: DateTime<Utc>,
    ) -> Vec<TransitionOption> {
        if !role.is_participant() || rental.status.is_terminal() {
            return Vec::new();
        }

        let ctx = RuleContext::new(rental, role, now);
        let options: Vec<TransitionOption> = self
            .rules
            .iter()
            .filter(|rule| rule.can_offer(&ctx))
            .map(|rule| rule.option(&self.config.labels))
            .collect();

        tracing::trace!(
            rental_id = %rental.id,
            status = %rental.status,
            role = %role,
            options = options.len(),
            "computed transition options"
        );

        options
    }

    /// [`can_transition_at`](Self::can_transition_at) against the wall clock.
    pub fn can_transition(
        &self,
        rental: &RentalSnapshot,
        role: ActorRole,
        to: RentalStatus,
    ) -> bool {
        self.can_transition_at(rental, role, to, Utc::now())
    }

    /// Whether `to` is among the options offered to `role` at `now`.
    pub fn can_transition_at(
        &self,
        rental: &RentalSnapshot,
        role: ActorRole,
        to: RentalStatus,
        now: DateTime<Utc>,
    ) -> bool {
        self.next_transitions_at(rental, role, now)
            .iter()
            .any(|option| option.to == to)
    }

    /// Check a request, reporting every violated rule.
    pub fn validate(
        &self,
        rental: &RentalSnapshot,
        request: &TransitionRequest,
        now: DateTime<Utc>,
    ) -> Result<TransitionOption, TransitionError> {
        let offered = self.next_transitions_at(rental, request.role, now);
        let ctx = EnforcementContext {
            rental,
            request,
            now,
            offered: &offered,
        };
        let rejected = |violations: Vec<Violation>| {
            tracing::debug!(
                rental_id = %rental.id,
                from = %rental.status,
                to = %request.to,
                role = %request.role,
                violations = violations.len(),
                "transition request rejected"
            );
            TransitionError::Rejected {
                rental_id: rental.id.clone(),
                to: request.to,
                violations,
            }
        };

        match self.enforcement.enforce(&ctx) {
            Validation::Success(_) => ctx.offered_option().cloned().ok_or_else(|| {
                rejected(vec![Violation::NotOffered {
                    from: rental.status,
                    to: request.to,
                    role: request.role,
                }])
            }),
            Validation::Failure(violations) => Err(rejected(violations.iter().cloned().collect())),
        }
    }

    /// Validate and apply a request to a copy of the snapshot.
    ///
    /// The input is never modified. Entering `ProposalPendingRenter` stores
    /// the supplied deadline and clears both acceptance flags. An owner or
    /// renter acceptance sets that party's flag and confirms the rental
    /// immediately.
    pub fn apply_transition(
        &self,
        rental: &RentalSnapshot,
        request: &TransitionRequest,
        now: DateTime<Utc>,
    ) -> Result<AppliedTransition, TransitionError> {
        let option = self.validate(rental, request, now)?;

        let mut snapshot = rental.clone();
        snapshot.status = option.to;

        match (rental.status, option.to) {
            (_, RentalStatus::ProposalPendingRenter) => {
                snapshot.proposal_valid_until = request.proposal_valid_until;
                snapshot.owner_proposal_accepted = false;
                snapshot.renter_proposal_accepted = false;
            }
            (RentalStatus::ProposalPendingRenter, RentalStatus::RentalConfirmed) => {
                match request.role {
                    ActorRole::Owner => snapshot.owner_proposal_accepted = true,
                    ActorRole::Renter => snapshot.renter_proposal_accepted = true,
                    ActorRole::Admin | ActorRole::Viewer => {}
                }
            }
            _ => {}
        }

        tracing::debug!(
            rental_id = %rental.id,
            from = %rental.status,
            to = %option.to,
            role = %request.role,
            "transition applied"
        );

        Ok(AppliedTransition {
            snapshot,
            transition: StateTransition {
                from: rental.status,
                to: option.to,
                timestamp: now,
                actor: request.role,
            },
        })
    }
}
