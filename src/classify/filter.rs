//! Search, date-range and status filtering of rental collections.

use super::bucket::StatusBucket;
use crate::rental::RentalSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter criteria. Every criterion left at its default matches all
/// rentals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalFilter {
    /// Case-insensitive text matched against product, renter, owner and
    /// owner location.
    pub search_query: String,
    /// Substring of the rental id.
    pub rental_id: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status_filter: Option<StatusBucket>,
}

impl RentalFilter {
    /// All criteria must hold.
    pub fn matches(&self, rental: &RentalSnapshot) -> bool {
        self.matches_text(rental)
            && self.matches_id(rental)
            && self.matches_dates(rental)
            && self.matches_status(rental)
    }

    fn matches_text(&self, rental: &RentalSnapshot) -> bool {
        if self.search_query.is_empty() {
            return true;
        }

        let query = self.search_query.to_lowercase();
        rental
            .search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_id(&self, rental: &RentalSnapshot) -> bool {
        rental.id.as_str().contains(self.rental_id.as_str())
    }

    fn matches_dates(&self, rental: &RentalSnapshot) -> bool {
        let (start, end) = (rental.start_date, rental.end_date);

        match (self.start_date, self.end_date) {
            (Some(from), Some(to)) => {
                (start >= from && start <= to)
                    || (end >= from && end <= to)
                    || (start <= from && end >= to)
                    || (start >= from && end <= to)
            }
            (Some(from), None) => start >= from || end >= from,
            (None, Some(to)) => start <= to || end <= to,
            (None, None) => true,
        }
    }

    fn matches_status(&self, rental: &RentalSnapshot) -> bool {
        self.status_filter
            .is_none_or(|bucket| bucket.contains(rental.status))
    }
}

/// Matching rentals, ordered by start date.
///
/// The sort is stable: rentals starting at the same instant keep their
/// input order.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rentflow::classify::{filter_rentals, RentalFilter};
/// use rentflow::rental::RentalSnapshot;
///
/// let day = |d| Utc.with_ymd_and_hms(2024, 2, d, 0, 0, 0).unwrap();
/// let rentals = vec![
///     RentalSnapshot::new("r2", "o", day(20), day(22)),
///     RentalSnapshot::new("r1", "o", day(10), day(12)),
/// ];
/// let filter = RentalFilter {
///     start_date: Some(day(9)),
///     end_date: Some(day(15)),
///     ..RentalFilter::default()
/// };
///
/// let found = filter_rentals(&rentals, &filter);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id.as_str(), "r1");
/// ```
pub fn filter_rentals(rentals: &[RentalSnapshot], filter: &RentalFilter) -> Vec<RentalSnapshot> {
    let mut matched: Vec<RentalSnapshot> = rentals
        .iter()
        .filter(|rental| filter.matches(rental))
        .cloned()
        .collect();
    matched.sort_by_key(|rental| rental.start_date);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rental::RentalStatus;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, d, 12, 0, 0).unwrap()
    }

    fn rental(id: &str, start: u32, end: u32) -> RentalSnapshot {
        RentalSnapshot::new(id, "o-1", day(start), day(end))
    }

    fn ids(rentals: &[RentalSnapshot]) -> Vec<&str> {
        rentals.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_matches_everything_sorted_by_start() {
        let rentals = vec![rental("c", 20, 21), rental("a", 5, 6), rental("b", 10, 28)];
        let found = filter_rentals(&rentals, &RentalFilter::default());
        assert_eq!(ids(&found), vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_is_stable_for_equal_starts() {
        let rentals = vec![rental("x", 10, 11), rental("y", 10, 15), rental("w", 3, 4)];
        let found = filter_rentals(&rentals, &RentalFilter::default());
        assert_eq!(ids(&found), vec!["w", "x", "y"]);
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let bike = RentalSnapshot {
            product_name: "Bicicleta de montaña".to_string(),
            ..rental("1", 1, 2)
        };
        let by_renter = RentalSnapshot {
            renter_name: Some("Lucía Pérez".to_string()),
            ..rental("2", 1, 2)
        };
        let by_location = RentalSnapshot {
            owner_location: Some("Valencia Centro".to_string()),
            ..rental("3", 1, 2)
        };
        let by_owner = RentalSnapshot {
            owner_name: Some("Rent&Go SL".to_string()),
            ..rental("4", 1, 2)
        };
        let rentals = vec![bike, by_renter, by_location, by_owner];

        let search = |q: &str| {
            let filter = RentalFilter {
                search_query: q.to_string(),
                ..RentalFilter::default()
            };
            filter_rentals(&rentals, &filter)
                .into_iter()
                .map(|r| r.id.as_str().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(search("BICICLETA"), vec!["1"]);
        assert_eq!(search("pérez"), vec!["2"]);
        assert_eq!(search("valencia"), vec!["3"]);
        assert_eq!(search("rent&go"), vec!["4"]);
        assert!(search("kayak").is_empty());
    }

    #[test]
    fn rental_id_is_a_substring_match() {
        let rentals = vec![rental("abc-123", 1, 2), rental("xyz-456", 1, 2)];
        let filter = RentalFilter {
            rental_id: "123".to_string(),
            ..RentalFilter::default()
        };
        assert_eq!(ids(&filter_rentals(&rentals, &filter)), vec!["abc-123"]);
    }

    #[test]
    fn range_overlap_is_inclusive() {
        let rentals = vec![
            rental("before", 1, 4),
            rental("touch-start", 2, 5),
            rental("inside", 6, 7),
            rental("spanning", 1, 28),
            rental("touch-end", 9, 12),
            rental("after", 10, 12),
        ];
        let filter = RentalFilter {
            start_date: Some(day(5)),
            end_date: Some(day(9)),
            ..RentalFilter::default()
        };

        assert_eq!(
            ids(&filter_rentals(&rentals, &filter)),
            vec!["spanning", "touch-start", "inside", "touch-end"]
        );
    }

    #[test]
    fn single_bound_checks_either_endpoint() {
        let rentals = vec![rental("early", 1, 3), rental("late", 20, 25)];

        let from = RentalFilter {
            start_date: Some(day(3)),
            ..RentalFilter::default()
        };
        assert_eq!(ids(&filter_rentals(&rentals, &from)), vec!["early", "late"]);

        let from_later = RentalFilter {
            start_date: Some(day(4)),
            ..RentalFilter::default()
        };
        assert_eq!(ids(&filter_rentals(&rentals, &from_later)), vec!["late"]);

        let until = RentalFilter {
            end_date: Some(day(19)),
            ..RentalFilter::default()
        };
        assert_eq!(ids(&filter_rentals(&rentals, &until)), vec!["early"]);
    }

    #[test]
    fn status_filter_uses_buckets() {
        let rentals: Vec<RentalSnapshot> = [
            ("lead", RentalStatus::LeadPending),
            ("done", RentalStatus::RentalCompleted),
            ("gone", RentalStatus::Expired),
            ("off", RentalStatus::Cancelled),
        ]
        .into_iter()
        .map(|(id, status)| RentalSnapshot {
            status,
            ..rental(id, 1, 2)
        })
        .collect();

        let by = |bucket| RentalFilter {
            status_filter: Some(bucket),
            ..RentalFilter::default()
        };

        assert_eq!(
            ids(&filter_rentals(&rentals, &by(StatusBucket::Pending))),
            vec!["lead"]
        );
        assert_eq!(
            ids(&filter_rentals(&rentals, &by(StatusBucket::Completed))),
            vec!["done"]
        );
        assert_eq!(
            ids(&filter_rentals(&rentals, &by(StatusBucket::Cancelled))),
            vec!["gone", "off"]
        );
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let rentals = vec![
            RentalSnapshot {
                product_name: "Kayak".to_string(),
                ..rental("k-1", 1, 2)
            },
            RentalSnapshot {
                product_name: "Kayak".to_string(),
                status: RentalStatus::Cancelled,
                ..rental("k-2", 1, 2)
            },
        ];
        let filter = RentalFilter {
            search_query: "kayak".to_string(),
            status_filter: Some(StatusBucket::Pending),
            ..RentalFilter::default()
        };

        assert_eq!(ids(&filter_rentals(&rentals, &filter)), vec!["k-1"]);
    }
}
