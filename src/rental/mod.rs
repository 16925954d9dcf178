//! Shared rental vocabulary: statuses, roles and snapshots.

mod role;
mod snapshot;
mod status;

pub use role::ActorRole;
pub use snapshot::{OwnerType, RentalId, RentalSnapshot};
pub use status::{RentalStatus, TERMINAL_STATUSES};
