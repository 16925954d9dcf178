//! Builder API for adding host checks to enforcement.

use crate::enforcement::context::EnforcementContext;
use crate::enforcement::rules::{EnforcementRules, ValidationCheck};
use crate::enforcement::violations::Violation;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for enforcement rules.
///
/// The built-in lifecycle checks always run; the builder only adds to them.
pub struct EnforcementBuilder {
    required_checks: Vec<ValidationCheck>,
}

impl EnforcementBuilder {
    pub fn new() -> Self {
        Self {
            required_checks: Vec::new(),
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&EnforcementContext<'_>) -> Validation<(), NonEmptyVec<Violation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Arc::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&EnforcementContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.require(move |ctx| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(Violation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        })
    }

    pub fn build(self) -> EnforcementRules {
        EnforcementRules {
            required_checks: self.required_checks,
        }
    }
}

impl Default for EnforcementBuilder {
    fn default() -> Self {
        Self::new()
    }
}
