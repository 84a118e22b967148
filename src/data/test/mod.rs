mod car;
mod company;
mod order;
mod rating;

use chrono::{Duration, NaiveDate};

/// Fixed reference day for repository tests, which never compare against today.
pub fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 1).unwrap() + Duration::days(offset)
}
