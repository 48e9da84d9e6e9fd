use chrono::{NaiveTime, Timelike, Weekday};
use std::fmt;

/// A recurring weekly moment, e.g. "Monday at 09:00am".
///
/// Equality and hashing cover the weekday, hour and minute only, so this is
/// the key free-parking windows are bucketed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeLabel {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl TimeLabel {
    /// Build a label from a weekday and a 24-hour `hour`/`minute`.
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> Option<Self> {
        Some(Self { weekday, time: NaiveTime::from_hms_opt(hour, minute, 0)? })
    }

    /// Hour of day on the 24-hour clock.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", weekday_name(self.weekday), self.time.format("%I:%M%P"))
    }
}

/// Full English weekday name (chrono's `Display` only gives the short form).
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
