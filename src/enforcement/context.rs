//! Requests and the context enforcement checks run against.

use crate::engine::TransitionOption;
use crate::rental::{ActorRole, RentalSnapshot, RentalStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transition the host wants to exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub role: ActorRole,
    pub to: RentalStatus,
    #[serde(default)]
    pub proposal_valid_until: Option<DateTime<Utc>>,
}

impl TransitionRequest {
    pub fn new(role: ActorRole, to: RentalStatus) -> Self {
        Self {
            role,
            to,
            proposal_valid_until: None,
        }
    }

    pub fn with_proposal_valid_until(mut self, valid_until: DateTime<Utc>) -> Self {
        self.proposal_valid_until = Some(valid_until);
        self
    }
}

/// Context provided to enforcement checks
#[derive(Clone, Debug)]
pub struct EnforcementContext<'a> {
    pub rental: &'a RentalSnapshot,
    pub request: &'a TransitionRequest,
    pub now: DateTime<Utc>,
    /// Options the engine offers this role right now.
    pub offered: &'a [TransitionOption],
}

impl EnforcementContext<'_> {
    /// The offered option matching the requested target, if any.
    pub fn offered_option(&self) -> Option<&TransitionOption> {
        self.offered.iter().find(|o| o.to == self.request.to)
    }

    pub fn is_accepting_proposal(&self) -> bool {
        self.rental.status == RentalStatus::ProposalPendingRenter
            && self.request.to == RentalStatus::RentalConfirmed
    }

    pub fn is_marking_pickup(&self) -> bool {
        self.rental.status == RentalStatus::RentalConfirmed
            && self.request.to == RentalStatus::RentalActive
    }
}
