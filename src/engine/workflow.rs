//! Canonical progress sequences for steppers.

use crate::rental::{RentalSnapshot, RentalStatus};
use serde::{Deserialize, Serialize};

pub const LEAD_WORKFLOW: [RentalStatus; 4] = [
    RentalStatus::LeadPending,
    RentalStatus::RentalConfirmed,
    RentalStatus::RentalActive,
    RentalStatus::RentalCompleted,
];

pub const DIRECT_WORKFLOW: [RentalStatus; 3] = [
    RentalStatus::RentalConfirmed,
    RentalStatus::RentalActive,
    RentalStatus::RentalCompleted,
];

/// Which plan a rental is displayed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    Lead,
    Direct,
}

impl WorkflowKind {
    pub fn steps(&self) -> &'static [RentalStatus] {
        match self {
            Self::Lead => &LEAD_WORKFLOW,
            Self::Direct => &DIRECT_WORKFLOW,
        }
    }
}

pub fn workflow_kind(rental: &RentalSnapshot) -> WorkflowKind {
    let on_lead_path = matches!(
        rental.status,
        RentalStatus::LeadPending
            | RentalStatus::ProposalPendingRenter
            | RentalStatus::Rejected
            | RentalStatus::Expired
    );

    if on_lead_path || rental.is_lead {
        WorkflowKind::Lead
    } else {
        WorkflowKind::Direct
    }
}

/// Happy-path sequence to render as a stepper.
///
/// A current status outside the chosen sequence is appended at the end,
/// except `ProposalPendingRenter`, which selects the lead sequence without
/// appearing in it.
///
/// ```rust
/// use chrono::Utc;
/// use rentflow::engine::workflow_steps;
/// use rentflow::rental::{RentalSnapshot, RentalStatus};
///
/// let rental = RentalSnapshot::new("r-1", "o-1", Utc::now(), Utc::now());
/// assert_eq!(
///     workflow_steps(&rental),
///     vec![
///         RentalStatus::LeadPending,
///         RentalStatus::RentalConfirmed,
///         RentalStatus::RentalActive,
///         RentalStatus::RentalCompleted,
///     ]
/// );
/// ```
pub fn workflow_steps(rental: &RentalSnapshot) -> Vec<RentalStatus> {
    let mut steps = workflow_kind(rental).steps().to_vec();

    if rental.status != RentalStatus::ProposalPendingRenter && !steps.contains(&rental.status) {
        steps.push(rental.status);
    }

    steps
}
