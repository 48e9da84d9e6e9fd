//! Street-parking regulation parsing and ranking.
//!
//! Two independent pipelines:
//!
//! - regulation rule strings are parsed into weekly [`TimeLabel`]s, counted,
//!   filtered to business hours and ranked ([`aggregate_and_rank`]);
//! - a suspension calendar is condensed into a short summary
//!   ([`summarize_suspensions`]).
//!
//! [`reply`] joins the two into the text sent back to a user.

#[macro_use]
mod macros;
mod api;
mod calendar;
mod engine;
mod error;
mod feed;
mod grammar;
mod render;
mod rules;

mod time_label;

pub use api::{
    Options, RankDetails, RankResultVerbose, aggregate_and_rank, aggregate_and_rank_verbose, reply,
    summarize_suspensions,
};
pub use calendar::{SuspensionSummary, summarize};
pub use engine::{AggregateStats, HourRange, RankedWindow, TimeBucket, aggregate, rank};
pub use error::{Error, Result};
pub use feed::{CalendarPayload, RegulationPayload, parse_date_id};
pub use grammar::{join_list, ordinal};
pub use render::{FALLBACK_REPLY, NO_WINDOWS, compose_reply, render_windows};
pub use rules::{extract_start_token, label_for_rule, parse_start_token};
pub use time_label::TimeLabel;

use chrono::NaiveDate;

// --- Input records -----------------------------------------------------------

/// One curb segment's active parking rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegulationFeature {
    /// Free-form rule sentence, e.g.
    /// `"Free Parking From Nov 12 Mon 9:00am Until Nov 12 Mon 10:30am"`.
    pub rule_text: String,
}

/// One day of the suspension calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub items: Vec<CalendarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarItem {
    /// e.g. `"Alternate Side Parking"`.
    pub kind: String,
    /// e.g. `"SUSPENDED"` or `"IN EFFECT"`.
    pub status: String,
    pub details: Option<String>,
    pub exception_name: Option<String>,
}

#[cfg(test)]
mod tests;
