//! Guard predicates gating transition rules.
//!
//! Guards are pure boolean functions over a [`RuleContext`]: the rental,
//! the acting role and the reference instant. They never read the clock
//! themselves.

use crate::rental::{ActorRole, RentalSnapshot};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Everything a guard may look at.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub rental: &'a RentalSnapshot,
    pub role: ActorRole,
    pub now: DateTime<Utc>,
}

impl<'a> RuleContext<'a> {
    pub fn new(rental: &'a RentalSnapshot, role: ActorRole, now: DateTime<Utc>) -> Self {
        Self { rental, role, now }
    }

    pub fn proposal_is_valid(&self) -> bool {
        proposal_is_valid(self.rental, self.now)
    }

    pub fn actor_has_accepted(&self) -> bool {
        has_actor_accepted_proposal(self.rental, self.role)
    }

    /// True once `now` has reached the rental's start instant.
    pub fn has_started(&self) -> bool {
        self.now >= self.rental.start_date
    }
}

/// A pending proposal may still be accepted at `now`.
///
/// The deadline instant itself is still valid; no deadline means always valid.
pub fn proposal_is_valid(rental: &RentalSnapshot, now: DateTime<Utc>) -> bool {
    rental
        .proposal_valid_until
        .is_none_or(|valid_until| now <= valid_until)
}

/// Acceptance flag for the given role. Roles without a flag never count as
/// having accepted.
pub fn has_actor_accepted_proposal(rental: &RentalSnapshot, role: ActorRole) -> bool {
    match role {
        ActorRole::Owner => rental.owner_proposal_accepted,
        ActorRole::Renter => rental.renter_proposal_accepted,
        ActorRole::Admin | ActorRole::Viewer => false,
    }
}

type Predicate = Arc<dyn Fn(&RuleContext<'_>) -> bool + Send + Sync>;

/// Pure predicate that decides whether a rule may be offered.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rentflow::engine::{Guard, RuleContext};
/// use rentflow::rental::{ActorRole, RentalSnapshot};
///
/// let start = Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 2, 12, 9, 0, 0).unwrap();
/// let rental = RentalSnapshot::new("r-1", "o-1", start, end);
///
/// let started = Guard::new(|ctx| ctx.has_started());
///
/// assert!(started.check(&RuleContext::new(&rental, ActorRole::Owner, start)));
/// assert!(!started.check(&RuleContext::new(
///     &rental,
///     ActorRole::Owner,
///     start - chrono::Duration::milliseconds(1),
/// )));
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Predicate,
}

impl Guard {
    /// Create a guard from a pure, thread-safe predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    pub fn check(&self, ctx: &RuleContext<'_>) -> bool {
        (self.predicate)(ctx)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn rental() -> RentalSnapshot {
        let start = Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 12, 9, 0, 0).unwrap();
        RentalSnapshot::new("r-1", "o-1", start, end)
    }

    #[test]
    fn proposal_without_deadline_is_always_valid() {
        let rental = rental();
        assert!(proposal_is_valid(&rental, Utc::now()));
        assert!(proposal_is_valid(&rental, rental.end_date + Duration::days(365)));
    }

    #[test]
    fn proposal_deadline_is_inclusive() {
        let deadline = Utc.with_ymd_and_hms(2024, 2, 5, 12, 0, 0).unwrap();
        let rental = RentalSnapshot {
            proposal_valid_until: Some(deadline),
            ..rental()
        };

        assert!(proposal_is_valid(&rental, deadline - Duration::milliseconds(1)));
        assert!(proposal_is_valid(&rental, deadline));
        assert!(!proposal_is_valid(&rental, deadline + Duration::milliseconds(1)));
    }

    #[test]
    fn acceptance_flag_follows_role() {
        let rental = RentalSnapshot {
            owner_proposal_accepted: true,
            renter_proposal_accepted: false,
            ..rental()
        };

        assert!(has_actor_accepted_proposal(&rental, ActorRole::Owner));
        assert!(!has_actor_accepted_proposal(&rental, ActorRole::Renter));

        let both = RentalSnapshot {
            owner_proposal_accepted: true,
            renter_proposal_accepted: true,
            ..rental
        };
        assert!(!has_actor_accepted_proposal(&both, ActorRole::Admin));
        assert!(!has_actor_accepted_proposal(&both, ActorRole::Viewer));
    }

    #[test]
    fn has_started_is_inclusive_of_start_instant() {
        let rental = rental();
        let at_start = RuleContext::new(&rental, ActorRole::Owner, rental.start_date);
        let before = RuleContext::new(
            &rental,
            ActorRole::Owner,
            rental.start_date - Duration::milliseconds(1),
        );

        assert!(at_start.has_started());
        assert!(!before.has_started());
    }

    #[test]
    fn guard_is_deterministic() {
        let rental = rental();
        let ctx = RuleContext::new(&rental, ActorRole::Renter, rental.start_date);
        let guard = Guard::new(|ctx| ctx.proposal_is_valid());

        assert_eq!(guard.check(&ctx), guard.check(&ctx));
    }
}
