//! Suspension calendar summarization.

use crate::grammar::join_list;
use crate::{CalendarDay, CalendarItem};

pub const ALTERNATE_SIDE_PARKING: &str = "Alternate Side Parking";
pub const SUSPENDED: &str = "SUSPENDED";
const METERS_SUSPENDED: &str = "meters are suspended";

/// Suspension dates and meter exceptions collected from a calendar feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuspensionSummary {
    /// `"Weekday, MM/DD"` per suspended item, in calendar order.
    pub dates: Vec<String>,
    /// Exception names without their trailing year, deduplicated, in
    /// first-seen order.
    pub exceptions: Vec<String>,
}

impl SuspensionSummary {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.exceptions.is_empty()
    }

    /// Render the summary sentence(s). Empty when nothing is suspended.
    pub fn render(&self) -> String {
        let mut message = String::new();

        if !self.dates.is_empty() {
            message.push_str("By the way, alternate side parking is suspended on ");
            message.push_str(&join_list(&self.dates));
            message.push_str(". ");
        }

        if !self.exceptions.is_empty() {
            message.push_str("Meters are in effect except for ");
            message.push_str(&join_list(&self.exceptions));
            message.push('.');
        }

        message.trim().to_string()
    }
}

/// Collect alternate-side suspensions and meter exceptions from `days`.
pub fn summarize(days: &[CalendarDay]) -> SuspensionSummary {
    let mut summary = SuspensionSummary::default();

    for day in days {
        let formatted = day.date.format("%A, %m/%d").to_string();

        for item in day.items.iter().filter(|item| is_asp_suspension(item)) {
            summary.dates.push(formatted.clone());

            let meters_suspended = item.details.as_deref().is_some_and(|d| d.contains(METERS_SUSPENDED));
            if !meters_suspended {
                continue;
            }
            let Some(name) = item.exception_name.as_deref() else {
                tracing::debug!(date = %formatted, "meter suspension without an exception name");
                continue;
            };

            let name = strip_year(name);
            if !summary.exceptions.iter().any(|seen| seen == name) {
                summary.exceptions.push(name.to_string());
            }
        }
    }

    tracing::debug!(dates = summary.dates.len(), exceptions = summary.exceptions.len(), "summarized calendar");
    summary
}

fn is_asp_suspension(item: &CalendarItem) -> bool {
    item.kind == ALTERNATE_SIDE_PARKING && item.status == SUSPENDED
}

/// Drop a trailing `<whitespace><4 digits>` year, e.g. `"Christmas Day 2023"`.
fn strip_year(name: &str) -> &str {
    match regex!(r"\s+\d{4}$").find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}
