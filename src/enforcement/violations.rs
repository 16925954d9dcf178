//! Violation errors raised by request enforcement.

use crate::rental::{ActorRole, RentalId, RentalStatus};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A single reason a transition request was refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("Role '{role}' may not change rentals")]
    ActorNotPermitted { role: ActorRole },

    #[error("Rental is in terminal status '{status}'")]
    TerminalStatus { status: RentalStatus },

    #[error("Transition '{from}' -> '{to}' is not offered to role '{role}'")]
    NotOffered {
        from: RentalStatus,
        to: RentalStatus,
        role: ActorRole,
    },

    #[error("A proposal deadline is required to send the proposal")]
    MissingProposalValidUntil,

    #[error("Proposal deadline {valid_until} is not after {now}")]
    ProposalDeadlineNotInFuture {
        valid_until: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("Proposal expired at {valid_until} (now: {now})")]
    ProposalExpired {
        valid_until: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("Role '{role}' already accepted this proposal")]
    AlreadyAccepted { role: ActorRole },

    #[error("Pickup cannot be marked before the rental starts at {start_date} (now: {now})")]
    PickupBeforeStart {
        start_date: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Errors returned when a transition request cannot be applied.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("Transition of rental '{rental_id}' to '{to}' rejected ({} violation(s))", .violations.len())]
    Rejected {
        rental_id: RentalId,
        to: RentalStatus,
        violations: Vec<Violation>,
    },
}

impl TransitionError {
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Rejected { violations, .. } => violations,
        }
    }
}
