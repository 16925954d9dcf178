//! Core State trait for lifecycle states.
//!
//! Lifecycle states are plain values. The trait exposes pure inspection
//! methods that the history and checkpoint layers rely on.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states.
///
/// All methods are pure. A state describes where a record currently sits
/// in its lifecycle; it never carries the record itself.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: states are copied into history and compared
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: states travel inside snapshots and checkpoints
///
/// # Example
///
/// ```rust
/// use rentflow::core::State;
/// use rentflow::rental::RentalStatus;
///
/// assert_eq!(RentalStatus::RentalActive.name(), "rental_active");
/// assert!(RentalStatus::Cancelled.is_final());
/// assert!(!RentalStatus::LeadPending.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable machine name, used in logs and wire formats.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No transition may ever leave a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this state ends the lifecycle without reaching its goal.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
