//! Rental status vocabulary.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a rental.
///
/// The typical progression is
/// `LeadPending -> ProposalPendingRenter -> RentalConfirmed -> RentalActive -> RentalCompleted`.
/// `Cancelled`, `Rejected` and `Expired` are escape hatches; only
/// `Cancelled` is ever offered by the engine, the other two are set by
/// external processes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    LeadPending,
    ProposalPendingRenter,
    RentalConfirmed,
    RentalActive,
    RentalCompleted,
    Cancelled,
    Rejected,
    Expired,
}

/// Statuses no transition may leave.
pub const TERMINAL_STATUSES: [RentalStatus; 4] = [
    RentalStatus::Cancelled,
    RentalStatus::Rejected,
    RentalStatus::RentalCompleted,
    RentalStatus::Expired,
];

impl RentalStatus {
    /// Every status, in typical-progress order followed by the escape states.
    pub const ALL: [RentalStatus; 8] = [
        RentalStatus::LeadPending,
        RentalStatus::ProposalPendingRenter,
        RentalStatus::RentalConfirmed,
        RentalStatus::RentalActive,
        RentalStatus::RentalCompleted,
        RentalStatus::Cancelled,
        RentalStatus::Rejected,
        RentalStatus::Expired,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeadPending => "lead_pending",
            Self::ProposalPendingRenter => "proposal_pending_renter",
            Self::RentalConfirmed => "rental_confirmed",
            Self::RentalActive => "rental_active",
            Self::RentalCompleted => "rental_completed",
            Self::Cancelled => "cancelled",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Human label shown on badges and steppers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LeadPending => "Lead pendiente",
            Self::ProposalPendingRenter => "Propuesta pendiente",
            Self::RentalConfirmed => "Alquiler confirmado",
            Self::RentalActive => "Alquiler en curso",
            Self::RentalCompleted => "Alquiler completado",
            Self::Cancelled => "Cancelado",
            Self::Rejected => "Rechazado",
            Self::Expired => "Expirado",
        }
    }

    /// Badge style class.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::LeadPending => "badge-lead",
            Self::ProposalPendingRenter => "badge-warning",
            Self::RentalConfirmed => "badge-info",
            Self::RentalActive => "badge-primary",
            Self::RentalCompleted => "badge-success",
            Self::Cancelled | Self::Rejected => "badge-danger",
            Self::Expired => "badge-muted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        TERMINAL_STATUSES.contains(self)
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl State for RentalStatus {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn is_final(&self) -> bool {
        self.is_terminal()
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Rejected | Self::Expired)
    }
}
