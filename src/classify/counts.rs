//! Lead / upcoming / past tallies.

use crate::rental::RentalSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Independent tallies, not a partition: `leads` ignores dates, and
/// `upcoming` / `past` only look at non-lead rentals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalCounts {
    pub leads: usize,
    pub upcoming: usize,
    pub past: usize,
}

/// [`calculate_rental_counts_at`] against the wall clock.
pub fn calculate_rental_counts(rentals: &[RentalSnapshot]) -> RentalCounts {
    calculate_rental_counts_at(rentals, Utc::now())
}

/// A rental ending exactly at `now` is still upcoming.
pub fn calculate_rental_counts_at(rentals: &[RentalSnapshot], now: DateTime<Utc>) -> RentalCounts {
    rentals
        .iter()
        .fold(RentalCounts::default(), |mut counts, rental| {
            if rental.is_lead {
                counts.leads += 1;
            } else if rental.end_date >= now {
                counts.upcoming += 1;
            } else {
                counts.past += 1;
            }
            counts
        })
}
