//! Bucketing of free-parking start times.

use crate::RegulationFeature;
use crate::engine::metrics::AggregateStats;
use crate::error::Error;
use crate::rules::label_for_rule;
use crate::time_label::TimeLabel;
use std::collections::HashMap;

/// Occurrence counts per [`TimeLabel`], iterated in first-encountered order.
///
/// The iteration order is what breaks ties when ranking, so it must stay
/// insertion order rather than hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeBucket {
    entries: Vec<(TimeLabel, usize)>,
    index: HashMap<TimeLabel, usize>,
}

impl TimeBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `label`.
    pub fn record(&mut self, label: TimeLabel) {
        self.add(label, 1);
    }

    /// Add `count` occurrences of `label`. A zero count is ignored so every
    /// stored count stays >= 1.
    pub fn add(&mut self, label: TimeLabel, count: usize) {
        if count == 0 {
            return;
        }
        match self.index.get(&label) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(label, self.entries.len());
                self.entries.push((label, count));
            }
        }
    }

    pub fn get(&self, label: &TimeLabel) -> Option<usize> {
        self.index.get(label).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeLabel, usize)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(TimeLabel, usize)> for TimeBucket {
    fn from_iter<I: IntoIterator<Item = (TimeLabel, usize)>>(iter: I) -> Self {
        let mut bucket = TimeBucket::new();
        for (label, count) in iter {
            bucket.add(label, count);
        }
        bucket
    }
}

/// Parse every feature and count free-parking start times.
///
/// Non-free-parking rules are skipped silently. Malformed rules and
/// unparseable start tokens are logged and skipped; one bad record never
/// hides the rest of the batch.
pub fn aggregate(features: &[RegulationFeature]) -> (TimeBucket, AggregateStats) {
    let mut bucket = TimeBucket::new();
    let mut stats = AggregateStats { records: features.len(), ..AggregateStats::default() };

    for feature in features {
        match label_for_rule(&feature.rule_text) {
            Ok(Some(label)) => {
                tracing::debug!(rule = %feature.rule_text, %label, "free parking window");
                stats.free_parking += 1;
                bucket.record(label);
            }
            Ok(None) => {}
            Err(err @ Error::MalformedRuleText { .. }) => {
                tracing::warn!(error = %err, "skipping regulation");
                stats.malformed += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping regulation");
                stats.unparseable += 1;
            }
        }
    }

    stats.buckets = bucket.len();
    (bucket, stats)
}
