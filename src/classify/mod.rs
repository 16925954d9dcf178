//! Read-only classification of rental collections.
//!
//! Filters, buckets and tallies rentals for dashboards and calendars. Every
//! function is stateless and linear in the number of rentals.

mod bucket;
mod calendar;
mod counts;
mod filter;

pub use bucket::{count_by_bucket, BucketCounts, StatusBucket, CANCELLED_SET, COMPLETED_SET};
pub use calendar::{has_rentals_on_date, rentals_on_date};
pub use counts::{calculate_rental_counts, calculate_rental_counts_at, RentalCounts};
pub use filter::{filter_rentals, RentalFilter};
