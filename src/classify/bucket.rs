//! Status buckets used by dashboard tabs.

use crate::rental::{RentalSnapshot, RentalStatus};
use serde::{Deserialize, Serialize};

pub const CANCELLED_SET: [RentalStatus; 3] = [
    RentalStatus::Cancelled,
    RentalStatus::Rejected,
    RentalStatus::Expired,
];

pub const COMPLETED_SET: [RentalStatus; 1] = [RentalStatus::RentalCompleted];

/// Operational bucket of a status. Anything neither cancelled nor
/// completed is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Pending,
    Cancelled,
    Completed,
}

impl StatusBucket {
    pub fn of(status: RentalStatus) -> Self {
        if CANCELLED_SET.contains(&status) {
            Self::Cancelled
        } else if COMPLETED_SET.contains(&status) {
            Self::Completed
        } else {
            Self::Pending
        }
    }

    pub fn contains(&self, status: RentalStatus) -> bool {
        Self::of(status) == *self
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Rentals per bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub pending: usize,
    pub cancelled: usize,
    pub completed: usize,
}

pub fn count_by_bucket(rentals: &[RentalSnapshot]) -> BucketCounts {
    rentals
        .iter()
        .fold(BucketCounts::default(), |mut counts, rental| {
            match StatusBucket::of(rental.status) {
                StatusBucket::Pending => counts.pending += 1,
                StatusBucket::Cancelled => counts.cancelled += 1,
                StatusBucket::Completed => counts.completed += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn buckets_partition_every_status() {
        let expected = [
            (RentalStatus::LeadPending, StatusBucket::Pending),
            (RentalStatus::ProposalPendingRenter, StatusBucket::Pending),
            (RentalStatus::RentalConfirmed, StatusBucket::Pending),
            (RentalStatus::RentalActive, StatusBucket::Pending),
            (RentalStatus::RentalCompleted, StatusBucket::Completed),
            (RentalStatus::Cancelled, StatusBucket::Cancelled),
            (RentalStatus::Rejected, StatusBucket::Cancelled),
            (RentalStatus::Expired, StatusBucket::Cancelled),
        ];

        for (status, bucket) in expected {
            assert_eq!(StatusBucket::of(status), bucket, "{status}");
            assert!(bucket.contains(status));
        }
    }

    #[test]
    fn parse_accepts_filter_names() {
        assert_eq!(StatusBucket::parse("pending"), Some(StatusBucket::Pending));
        assert_eq!(StatusBucket::parse("completed"), Some(StatusBucket::Completed));
        assert_eq!(StatusBucket::parse("all"), None);
    }

    #[test]
    fn count_by_bucket_tallies_each_rental_once() {
        let now = Utc::now();
        let rentals: Vec<RentalSnapshot> = [
            RentalStatus::LeadPending,
            RentalStatus::RentalActive,
            RentalStatus::Rejected,
            RentalStatus::RentalCompleted,
        ]
        .into_iter()
        .map(|status| RentalSnapshot {
            status,
            ..RentalSnapshot::new("r", "o", now, now)
        })
        .collect();

        assert_eq!(
            count_by_bucket(&rentals),
            BucketCounts {
                pending: 2,
                cancelled: 1,
                completed: 1,
            }
        );
        assert_eq!(count_by_bucket(&[]), BucketCounts::default());
    }
}
