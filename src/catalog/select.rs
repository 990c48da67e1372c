use chrono::NaiveDate;

use crate::foundation::error::{DailyJokeError, DailyJokeResult};

/// Position of a date within the repeating catalog cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateCursor {
    /// Whole days from the start date to today; negative before the start date.
    pub days_passed: i64,
    /// `days_passed` wrapped into `[0, catalog_len)`.
    pub index: usize,
}

impl DateCursor {
    pub fn new(start: NaiveDate, today: NaiveDate, catalog_len: usize) -> DailyJokeResult<Self> {
        let days_passed = days_passed(start, today);
        let index = joke_index(days_passed, catalog_len)?;
        Ok(Self { days_passed, index })
    }
}

pub fn days_passed(start: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(start).num_days()
}

/// Euclidean modulo, so dates before the start date still land in range.
pub fn joke_index(days_passed: i64, catalog_len: usize) -> DailyJokeResult<usize> {
    if catalog_len == 0 {
        return Err(DailyJokeError::config(
            "cannot select from an empty joke catalog",
        ));
    }
    let len = i64::try_from(catalog_len)
        .map_err(|_| DailyJokeError::config("joke catalog too large"))?;
    let wrapped = days_passed.rem_euclid(len);
    usize::try_from(wrapped).map_err(|_| DailyJokeError::config("joke index out of range"))
}

/// Current civil date in `tz`.
pub fn today_in(tz: chrono_tz::Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/select.rs"]
mod tests;
