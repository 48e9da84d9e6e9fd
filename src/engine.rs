//! Aggregation and ranking engine.
//!
//! Finding the best free-parking windows is a short pipeline:
//!
//! ```text
//! RegulationFeature ── label_for_rule ──┐   (rules/)
//!                                       │    - extract_start_token
//!                                       │    - parse_start_token
//!                                       v
//!                           aggregate (aggregate.rs)
//!                             - skip non free-parking rules
//!                             - skip + log malformed records
//!                             - count per TimeLabel (first-seen order)
//!                                       │
//!                                       v
//!                             rank (rank.rs)
//!                             - keep labels inside HourRange
//!                             - stable sort by count, take top N
//!                                       │
//!                                       v
//!                              Vec<RankedWindow>
//! ```
//!
//! Every stage is a pure function over its inputs. Nothing is cached between
//! runs, so independent runs can happen concurrently.
//!
//! ## Responsibilities by module
//!
//! - `aggregate.rs`: `TimeBucket` and the skip-and-continue aggregation loop.
//! - `rank.rs`: `HourRange`, `RankedWindow` and the ranking step.
//! - `metrics.rs`: per-run counters and timings for reporting.

#[path = "engine/aggregate.rs"]
mod aggregate;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/rank.rs"]
mod rank;

pub use aggregate::{TimeBucket, aggregate};
pub use metrics::{AggregateStats, RunMetrics, RunResult};
pub use rank::{HourRange, RankedWindow, rank};

use crate::RegulationFeature;
use std::time::Instant;

/// Aggregate `features`, rank the buckets and return timing details.
pub fn run_with_metrics(features: &[RegulationFeature], top_n: usize, hours: HourRange) -> RunResult {
    let total_start = Instant::now();
    let (bucket, stats) = aggregate(features);
    let aggregate_elapsed = total_start.elapsed();

    let rank_start = Instant::now();
    let windows = rank(&bucket, top_n, hours);
    let rank_elapsed = rank_start.elapsed();

    tracing::info!(
        records = stats.records,
        free_parking = stats.free_parking,
        skipped = stats.skipped(),
        windows = windows.len(),
        "ranked free parking windows"
    );

    RunResult {
        bucket,
        windows,
        stats,
        metrics: RunMetrics { total: total_start.elapsed(), aggregate: aggregate_elapsed, rank: rank_elapsed },
    }
}

/// Convenience wrapper that discards counters and timings.
pub fn run(features: &[RegulationFeature], top_n: usize, hours: HourRange) -> Vec<RankedWindow> {
    run_with_metrics(features, top_n, hours).windows
}
