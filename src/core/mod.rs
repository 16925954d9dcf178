//! Core lifecycle types.
//!
//! This module contains the domain-independent pieces:
//! - State definitions via the `State` trait
//! - Immutable history of applied transitions
//!
//! Everything here is pure.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
