//! Declarative transition rules.
//!
//! Each rule names a source status, a target status, the roles allowed to
//! trigger it and an optional guard. The engine offers a rule when all
//! three match. Rule order is the order options are returned in.

use super::guard::{Guard, RuleContext};
use crate::config::TransitionLabels;
use crate::rental::{ActorRole, RentalStatus};
use serde::{Deserialize, Serialize};

/// A legal next status, as handed to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOption {
    pub to: RentalStatus,
    pub label: String,
    /// The host must supply `proposal_valid_until` when requesting this option.
    #[serde(default)]
    pub requires_proposal_valid_until: bool,
}

/// Which configured label a rule carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKey {
    SendProposal,
    Cancel,
    AcceptProposal,
    ConfirmRental,
    MarkPickup,
    MarkReturn,
}

impl LabelKey {
    pub fn resolve<'a>(&self, labels: &'a TransitionLabels) -> &'a str {
        match self {
            Self::SendProposal => &labels.send_proposal,
            Self::Cancel => &labels.cancel,
            Self::AcceptProposal => &labels.accept_proposal,
            Self::ConfirmRental => &labels.confirm_rental,
            Self::MarkPickup => &labels.mark_pickup,
            Self::MarkReturn => &labels.mark_return,
        }
    }
}

/// A single edge of the lifecycle graph.
#[derive(Clone, Debug)]
pub struct TransitionRule {
    pub from: RentalStatus,
    pub to: RentalStatus,
    pub roles: Vec<ActorRole>,
    pub guard: Option<Guard>,
    pub label: LabelKey,
    pub requires_proposal_valid_until: bool,
}

impl TransitionRule {
    /// A rule nobody may trigger yet; add roles with [`allow`](Self::allow).
    pub fn new(from: RentalStatus, to: RentalStatus, label: LabelKey) -> Self {
        Self {
            from,
            to,
            roles: Vec::new(),
            guard: None,
            label,
            requires_proposal_valid_until: false,
        }
    }

    pub fn allow(mut self, roles: &[ActorRole]) -> Self {
        self.roles.extend(roles.iter().copied().filter(|r| r.is_participant()));
        self
    }

    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    pub fn requiring_proposal_valid_until(mut self) -> Self {
        self.requires_proposal_valid_until = true;
        self
    }

    /// Check if this rule applies to the context (pure).
    pub fn can_offer(&self, ctx: &RuleContext<'_>) -> bool {
        if ctx.rental.status != self.from || !self.roles.contains(&ctx.role) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(ctx))
    }

    pub fn option(&self, labels: &TransitionLabels) -> TransitionOption {
        TransitionOption {
            to: self.to,
            label: self.label.resolve(labels).to_string(),
            requires_proposal_valid_until: self.requires_proposal_valid_until,
        }
    }
}

/// The rental lifecycle rule table.
pub fn standard_rules() -> Vec<TransitionRule> {
    use ActorRole::{Admin, Owner, Renter};
    use RentalStatus::*;

    vec![
        TransitionRule::new(LeadPending, ProposalPendingRenter, LabelKey::SendProposal)
            .allow(&[Owner, Admin])
            .requiring_proposal_valid_until(),
        TransitionRule::new(LeadPending, Cancelled, LabelKey::Cancel)
            .allow(&[Owner, Admin, Renter]),
        // Either party accepting confirms the rental; the counterpart's flag
        // is not required.
        TransitionRule::new(
            ProposalPendingRenter,
            RentalConfirmed,
            LabelKey::AcceptProposal,
        )
        .allow(&[Owner, Renter])
        .when(|ctx| ctx.proposal_is_valid() && !ctx.actor_has_accepted()),
        TransitionRule::new(
            ProposalPendingRenter,
            RentalConfirmed,
            LabelKey::ConfirmRental,
        )
        .allow(&[Admin])
        .when(|ctx| ctx.proposal_is_valid()),
        TransitionRule::new(ProposalPendingRenter, Cancelled, LabelKey::Cancel)
            .allow(&[Owner, Admin, Renter]),
        TransitionRule::new(RentalConfirmed, RentalActive, LabelKey::MarkPickup)
            .allow(&[Owner, Admin])
            .when(|ctx| ctx.role == Admin || ctx.has_started()),
        TransitionRule::new(RentalConfirmed, Cancelled, LabelKey::Cancel)
            .allow(&[Owner, Admin, Renter]),
        TransitionRule::new(RentalActive, RentalCompleted, LabelKey::MarkReturn)
            .allow(&[Owner, Admin]),
    ]
}
