use crate::engine::{self, AggregateStats, HourRange, RankedWindow, TimeBucket};
use crate::render::{compose_reply, render_windows};
use crate::{CalendarDay, RegulationFeature, calendar};
use std::time::Duration;

/// Options that affect ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Number of windows to return.
    pub top_n: usize,
    /// Hours of the day a window may start in.
    pub hours: HourRange,
}

impl Default for Options {
    fn default() -> Self {
        Self { top_n: 3, hours: HourRange::default() }
    }
}

/// Additional details returned by [`aggregate_and_rank_verbose`].
#[derive(Debug, Clone)]
pub struct RankDetails {
    /// Every bucket before filtering, in first-encountered order.
    pub bucket: TimeBucket,
    pub stats: AggregateStats,
    pub total: Duration,
    pub aggregate: Duration,
    pub rank: Duration,
}

/// Result from [`aggregate_and_rank_verbose`].
#[derive(Debug, Clone)]
pub struct RankResultVerbose {
    pub windows: Vec<RankedWindow>,
    pub message: String,
    pub details: RankDetails,
}

/// Rank the best free-parking windows in `features` and render them for `place`.
///
/// # Example
/// ```
/// use curbtime::{Options, RegulationFeature, aggregate_and_rank};
///
/// let features = vec![RegulationFeature {
///     rule_text: "Free Parking From Nov 12 Mon 9:00am Until Nov 12 Mon 10:30am".to_string(),
/// }];
/// let (windows, message) = aggregate_and_rank(&features, "Broadway", &Options::default());
/// assert_eq!(windows.len(), 1);
/// assert!(message.starts_with("The best time to park near Broadway is Monday at 09:00am"));
/// ```
pub fn aggregate_and_rank(
    features: &[RegulationFeature],
    place: &str,
    options: &Options,
) -> (Vec<RankedWindow>, String) {
    let windows = engine::run(features, options.top_n, options.hours);
    let message = render_windows(place, &windows);
    (windows, message)
}

/// Like [`aggregate_and_rank`], plus the full bucket, counters and timings.
pub fn aggregate_and_rank_verbose(features: &[RegulationFeature], place: &str, options: &Options) -> RankResultVerbose {
    let run = engine::run_with_metrics(features, options.top_n, options.hours);
    let message = render_windows(place, &run.windows);

    RankResultVerbose {
        windows: run.windows,
        message,
        details: RankDetails {
            bucket: run.bucket,
            stats: run.stats,
            total: run.metrics.total,
            aggregate: run.metrics.aggregate,
            rank: run.metrics.rank,
        },
    }
}

/// Render the suspension summary for `days`; empty when nothing is suspended.
pub fn summarize_suspensions(days: &[CalendarDay]) -> String {
    calendar::summarize(days).render()
}

/// Full reply: ranked windows for `place`, then any suspensions.
pub fn reply(features: &[RegulationFeature], days: &[CalendarDay], place: &str, options: &Options) -> String {
    let (_, windows_message) = aggregate_and_rank(features, place, options);
    compose_reply(&windows_message, &summarize_suspensions(days))
}
