//! Immutable view of a rental at decision time.

use super::status::RentalStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque rental identifier.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentalId(String);

impl RentalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh random identifier for records created outside a store.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RentalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RentalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Kind of account that owns the rented product.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerType {
    #[default]
    User,
    Company,
}

/// A rental as seen by the engine.
///
/// Snapshots are produced by an external store. The engine reads them and
/// returns decisions or new values; it never mutates one in place.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RentalSnapshot {
    pub id: RentalId,
    pub status: RentalStatus,
    /// True until the rental becomes a binding agreement.
    pub is_lead: bool,
    pub owner_id: String,
    #[serde(default)]
    pub owner_type: OwnerType,
    #[serde(default)]
    pub renter_id: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Deadline for accepting a pending proposal. `None` means no deadline.
    #[serde(default)]
    pub proposal_valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner_proposal_accepted: bool,
    #[serde(default)]
    pub renter_proposal_accepted: bool,

    // searchable display fields
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub renter_name: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_location: Option<String>,
}

impl RentalSnapshot {
    /// A fresh lead as a store would create it.
    pub fn new(
        id: impl Into<RentalId>,
        owner_id: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            status: RentalStatus::LeadPending,
            is_lead: true,
            owner_id: owner_id.into(),
            owner_type: OwnerType::User,
            renter_id: None,
            start_date,
            end_date,
            proposal_valid_until: None,
            owner_proposal_accepted: false,
            renter_proposal_accepted: false,
            product_name: String::new(),
            renter_name: None,
            owner_name: None,
            owner_location: None,
        }
    }

    /// Text fields matched by free-text search.
    pub(crate) fn search_fields(&self) -> [Option<&str>; 4] {
        [
            Some(self.product_name.as_str()),
            self.renter_name.as_deref(),
            self.owner_name.as_deref(),
            self.owner_location.as_deref(),
        ]
    }
}
