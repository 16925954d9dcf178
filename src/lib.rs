//! Rentflow: a pure rental lifecycle engine
//!
//! A rental is shared by two parties who do not trust each other, an owner
//! and a renter, optionally overseen by an administrator. Rentflow decides
//! which status transitions are legal right now, who may trigger them and
//! which deadlines gate them. It also classifies rental collections for
//! dashboards and calendars.
//!
//! The crate never performs I/O. Hosts pass in snapshots, an already
//! resolved [`ActorRole`](rental::ActorRole) and a reference instant, and
//! persist whatever comes back.
//!
//! # Modules
//!
//! - [`rental`]: status, role and snapshot vocabulary
//! - [`engine`]: transition rules, workflow steps, validation and pure apply
//! - [`enforcement`]: violation-accumulating request checks
//! - [`classify`]: filtering, status buckets, counts and calendar lookups
//! - [`checkpoint`]: versioned snapshot envelopes
//! - [`config`]: labels and other engine parameters
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use rentflow::engine::LifecycleEngine;
//! use rentflow::enforcement::TransitionRequest;
//! use rentflow::rental::{ActorRole, RentalSnapshot, RentalStatus};
//!
//! let now = Utc::now();
//! let lead = RentalSnapshot::new("r-1", "owner-1", now + Duration::days(3), now + Duration::days(5));
//! let engine = LifecycleEngine::default();
//!
//! let request = TransitionRequest::new(ActorRole::Owner, RentalStatus::ProposalPendingRenter)
//!     .with_proposal_valid_until(now + Duration::days(1));
//! let applied = engine.apply_transition(&lead, &request, now).unwrap();
//!
//! let options = engine.next_transitions_at(&applied.snapshot, ActorRole::Renter, now);
//! assert_eq!(options[0].to, RentalStatus::RentalConfirmed);
//! assert_eq!(options[0].label, "Aceptar propuesta");
//! ```

pub mod checkpoint;
pub mod classify;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod engine;
pub mod rental;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::{workflow_steps, LifecycleEngine, TransitionOption};
pub use rental::{ActorRole, RentalSnapshot, RentalStatus};
