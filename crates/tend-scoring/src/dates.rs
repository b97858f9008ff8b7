//! Day-granularity date helpers. Every "today" is the current UTC calendar day.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tend_core::{TendError, TendResult};

/// Current UTC calendar day.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current instant truncated to UTC midnight.
pub fn start_of_today() -> DateTime<Utc> {
    midnight(today())
}

/// `start_of_today()` minus `n` days, saturating at the earliest
/// representable instant.
pub fn days_ago(n: u32) -> DateTime<Utc> {
    start_of_today()
        .checked_sub_signed(Duration::days(i64::from(n)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// UTC midnight at the start of `day`.
pub fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// True iff both instants fall on the same UTC calendar day.
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whole calendar days from `date` to `today`. Negative for future dates.
pub fn days_between(date: DateTime<Utc>, today: NaiveDate) -> i64 {
    (today - date.date_naive()).num_days()
}

/// Human label for how long ago `date` was, relative to the current day.
///
/// Future dates are outside the contract: they fall through the same
/// arithmetic and produce labels like `"-2 days ago"`. Use
/// [`try_relative_day`] to reject them instead.
pub fn relative_day(date: DateTime<Utc>) -> String {
    relative_day_on(date, today())
}

/// [`relative_day`] against a pinned `today`.
pub fn relative_day_on(date: DateTime<Utc>, today: NaiveDate) -> String {
    match days_between(date, today) {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d => format!("{} months ago", d / 30),
    }
}

/// Fail-fast variant of [`relative_day`].
pub fn try_relative_day(date: DateTime<Utc>) -> TendResult<String> {
    try_relative_day_on(date, today())
}

pub fn try_relative_day_on(date: DateTime<Utc>, today: NaiveDate) -> TendResult<String> {
    let diff = days_between(date, today);
    if diff < 0 {
        tracing::warn!(days_ahead = -diff, "relative_day called with a future date");
        return Err(TendError::FutureDate { days_ahead: -diff });
    }
    Ok(relative_day_on(date, today))
}
