//! Start-time token normalization.
//!
//! Tokens look like `Nov 12 Mon 9:00am`. The date part is validated but only
//! the weekday and time of day survive into the [`TimeLabel`].

use crate::error::{Error, Result};
use crate::time_label::TimeLabel;
use chrono::{Month, NaiveDate, Weekday};

/// Parse a start-time token into a [`TimeLabel`].
///
/// ```
/// use curbtime::parse_start_token;
///
/// let label = parse_start_token("Nov 12 Mon 9:00am").unwrap();
/// assert_eq!(label.to_string(), "Monday at 09:00am");
/// ```
pub fn parse_start_token(token: &str) -> Result<TimeLabel> {
    parse(token).ok_or_else(|| Error::UnparseableTimeToken { token: token.to_string() })
}

fn parse(token: &str) -> Option<TimeLabel> {
    let caps = regex!(r"(?i)^([a-z]+)\s+(\d{1,2})\s+([a-z]+)\s+(\d{1,2}):(\d{2})\s*([ap]m)$").captures(token.trim())?;

    let month: Month = caps.get(1)?.as_str().parse().ok()?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    // Leap year so Feb 29 is accepted; the year itself is never used.
    NaiveDate::from_ymd_opt(2024, month.number_from_month(), day)?;

    let weekday: Weekday = caps.get(3)?.as_str().parse().ok()?;

    let hour12: u32 = caps.get(4)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(5)?.as_str().parse().ok()?;
    if !(1..=12).contains(&hour12) {
        return None;
    }
    let pm = caps.get(6)?.as_str().eq_ignore_ascii_case("pm");
    let hour = hour12 % 12 + if pm { 12 } else { 0 };

    TimeLabel::new(weekday, hour, minute)
}
