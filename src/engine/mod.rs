//! Rental transition engine.
//!
//! Given a rental snapshot, an already-resolved actor role and a reference
//! instant, the engine computes the legal next statuses and validates
//! requests against them. It performs no I/O and keeps no state between
//! calls; applying a transition yields a new snapshot for the host to
//! persist.

mod guard;
mod machine;
mod rule;
mod workflow;

pub use guard::{has_actor_accepted_proposal, proposal_is_valid, Guard, RuleContext};
pub use machine::{AppliedTransition, LifecycleEngine};
pub use rule::{standard_rules, LabelKey, TransitionOption, TransitionRule};
pub use workflow::{workflow_kind, workflow_steps, WorkflowKind, DIRECT_WORKFLOW, LEAD_WORKFLOW};
