//! Validation-based enforcement of transition requests.
//!
//! Before a host applies a transition it can ask why a request would be
//! refused. Checks use stillwater's `Validation` so every violated rule is
//! reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use rentflow::enforcement::{EnforcementBuilder, EnforcementRules};
//!
//! let rules: EnforcementRules = EnforcementBuilder::new()
//!     .require_pred(
//!         |ctx| ctx.rental.renter_id.is_some(),
//!         "A renter must be assigned".to_string(),
//!     )
//!     .build();
//! assert_eq!(rules.custom_check_count(), 1);
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::EnforcementBuilder;
pub use context::{EnforcementContext, TransitionRequest};
pub use rules::EnforcementRules;
pub use violations::{TransitionError, Violation};
