//! Calendar-day occupancy.

use crate::rental::RentalSnapshot;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Calendar days are taken in the timezone of `date`.
fn covers_day<Tz: TimeZone>(rental: &RentalSnapshot, day: NaiveDate, tz: &Tz) -> bool {
    let first = rental.start_date.with_timezone(tz).date_naive();
    let last = rental.end_date.with_timezone(tz).date_naive();
    first <= day && day <= last
}

/// True when any rental spans the calendar day of `date`, both ends
/// inclusive and time of day ignored.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rentflow::classify::has_rentals_on_date;
/// use rentflow::rental::RentalSnapshot;
///
/// let rental = RentalSnapshot::new(
///     "r-1",
///     "o-1",
///     Utc.with_ymd_and_hms(2024, 2, 10, 18, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 2, 12, 8, 0, 0).unwrap(),
/// );
///
/// let morning_of_first_day = Utc.with_ymd_and_hms(2024, 2, 10, 7, 0, 0).unwrap();
/// assert!(has_rentals_on_date(&[rental.clone()], morning_of_first_day));
///
/// let day_after = Utc.with_ymd_and_hms(2024, 2, 13, 0, 0, 0).unwrap();
/// assert!(!has_rentals_on_date(&[rental], day_after));
/// ```
pub fn has_rentals_on_date<Tz: TimeZone>(rentals: &[RentalSnapshot], date: DateTime<Tz>) -> bool {
    let tz = date.timezone();
    let day = date.date_naive();
    rentals.iter().any(|rental| covers_day(rental, day, &tz))
}

/// Rentals spanning the calendar day of `date`, in input order.
pub fn rentals_on_date<Tz: TimeZone>(
    rentals: &[RentalSnapshot],
    date: DateTime<Tz>,
) -> Vec<&RentalSnapshot> {
    let tz = date.timezone();
    let day = date.date_naive();
    rentals
        .iter()
        .filter(|rental| covers_day(rental, day, &tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn rental(id: &str, start: (u32, u32), end: (u32, u32)) -> RentalSnapshot {
        RentalSnapshot::new(
            id,
            "o-1",
            Utc.with_ymd_and_hms(2024, 2, start.0, start.1, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, end.0, end.1, 0, 0).unwrap(),
        )
    }

    #[test]
    fn boundaries_are_inclusive_by_day() {
        let rentals = vec![rental("a", (10, 18), (12, 8))];

        let last_day_late = Utc.with_ymd_and_hms(2024, 2, 12, 23, 59, 59).unwrap();
        let day_before = Utc.with_ymd_and_hms(2024, 2, 9, 23, 59, 59).unwrap();

        assert!(has_rentals_on_date(&rentals, last_day_late));
        assert!(!has_rentals_on_date(&rentals, day_before));
    }

    #[test]
    fn empty_collection_has_no_rentals() {
        assert!(!has_rentals_on_date(&[], Utc::now()));
        assert!(rentals_on_date(&[], Utc::now()).is_empty());
    }

    #[test]
    fn days_follow_the_query_timezone() {
        // 23:00 UTC on the 12th is already the 13th at UTC+2
        let rentals = vec![rental("a", (10, 9), (12, 23))];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        let thirteenth_local = plus_two.with_ymd_and_hms(2024, 2, 13, 10, 0, 0).unwrap();
        assert!(has_rentals_on_date(&rentals, thirteenth_local));

        let thirteenth_utc = Utc.with_ymd_and_hms(2024, 2, 13, 10, 0, 0).unwrap();
        assert!(!has_rentals_on_date(&rentals, thirteenth_utc));
    }

    #[test]
    fn rentals_on_date_lists_every_match() {
        let rentals = vec![
            rental("a", (1, 9), (5, 9)),
            rental("b", (4, 9), (8, 9)),
            rental("c", (7, 9), (9, 9)),
        ];
        let fifth = Utc.with_ymd_and_hms(2024, 2, 5, 20, 0, 0).unwrap();

        let ids: Vec<&str> = rentals_on_date(&rentals, fifth)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
