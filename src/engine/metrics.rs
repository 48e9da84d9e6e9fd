//! Run counters and timings.
//!
//! `aggregate_and_rank_verbose` surfaces these for the CLI report; the plain
//! entry points discard them.

use crate::engine::aggregate::TimeBucket;
use crate::engine::rank::RankedWindow;
use std::time::Duration;

/// What happened to each record of an aggregation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateStats {
    /// Records handed to the aggregator.
    pub records: usize,
    /// Records that produced a time label.
    pub free_parking: usize,
    /// Free-parking rules without a usable `From ... Until` clause.
    pub malformed: usize,
    /// Start tokens that did not parse.
    pub unparseable: usize,
    /// Distinct labels in the bucket.
    pub buckets: usize,
}

impl AggregateStats {
    pub fn skipped(&self) -> usize {
        self.malformed + self.unparseable
    }
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent parsing and bucketing.
    pub aggregate: Duration,
    /// Time spent filtering and sorting.
    pub rank: Duration,
}

/// Engine output bundled with counters and timings.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub bucket: TimeBucket,
    pub windows: Vec<RankedWindow>,
    pub stats: AggregateStats,
    pub metrics: RunMetrics,
}
