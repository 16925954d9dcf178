//! Enforcement rules for transition requests using Validation.

use crate::enforcement::context::EnforcementContext;
use crate::enforcement::violations::Violation;
use crate::engine::has_actor_accepted_proposal;
use crate::rental::{ActorRole, RentalStatus};
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ValidationCheck = Arc<
    dyn Fn(&EnforcementContext<'_>) -> Validation<(), NonEmptyVec<Violation>> + Send + Sync,
>;

/// Enforcement rules for transition requests.
/// Uses Validation to accumulate ALL violations.
#[derive(Clone, Default)]
pub struct EnforcementRules {
    pub(crate) required_checks: Vec<ValidationCheck>,
}

impl EnforcementRules {
    /// Enforce the built-in lifecycle checks plus any host checks.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, ctx: &EnforcementContext<'_>) -> Validation<(), NonEmptyVec<Violation>> {
        let rental = ctx.rental;
        let request = ctx.request;
        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> = Vec::new();

        checks.push(check(request.role.is_participant(), || {
            Violation::ActorNotPermitted { role: request.role }
        }));

        checks.push(check(!rental.status.is_terminal(), || {
            Violation::TerminalStatus {
                status: rental.status,
            }
        }));

        checks.push(check(ctx.offered_option().is_some(), || Violation::NotOffered {
            from: rental.status,
            to: request.to,
            role: request.role,
        }));

        // Sending a proposal needs a deadline strictly in the future
        if request.to == RentalStatus::ProposalPendingRenter {
            let deadline = match request.proposal_valid_until {
                None => Validation::fail(Violation::MissingProposalValidUntil),
                Some(valid_until) if valid_until <= ctx.now => {
                    Validation::fail(Violation::ProposalDeadlineNotInFuture {
                        valid_until,
                        now: ctx.now,
                    })
                }
                Some(_) => Validation::success(()),
            };
            checks.push(deadline);
        }

        if ctx.is_accepting_proposal() {
            if let Some(valid_until) = rental.proposal_valid_until {
                checks.push(check(ctx.now <= valid_until, || Violation::ProposalExpired {
                    valid_until,
                    now: ctx.now,
                }));
            }
            checks.push(check(
                !has_actor_accepted_proposal(rental, request.role),
                || Violation::AlreadyAccepted { role: request.role },
            ));
        }

        if ctx.is_marking_pickup() && request.role == ActorRole::Owner {
            checks.push(check(ctx.now >= rental.start_date, || {
                Violation::PickupBeforeStart {
                    start_date: rental.start_date,
                    now: ctx.now,
                }
            }));
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(ctx));
        }

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(|_| ())
    }

    /// Number of host-supplied checks.
    pub fn custom_check_count(&self) -> usize {
        self.required_checks.len()
    }
}

impl fmt::Debug for EnforcementRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnforcementRules")
            .field("required_checks", &self.required_checks.len())
            .finish()
    }
}

fn check<F>(passed: bool, violation: F) -> Validation<(), NonEmptyVec<Violation>>
where
    F: FnOnce() -> Violation,
{
    if passed {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}
