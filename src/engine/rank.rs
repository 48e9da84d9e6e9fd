//! Business-hours filtering and ranking of aggregated windows.

use crate::engine::aggregate::TimeBucket;
use crate::time_label::TimeLabel;

/// Half-open hour-of-day range `[start, end)` on the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub const BUSINESS: HourRange = HourRange { start: 9, end: 18 };

    pub fn contains(&self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::BUSINESS
    }
}

/// A ranked free-parking window: when restrictions end and on how many streets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedWindow {
    pub label: TimeLabel,
    pub count: usize,
}

/// Keep windows starting inside `hours`, order by count (descending) and
/// return at most `top_n`.
///
/// The sort is stable: equal counts keep the bucket's first-encountered order.
pub fn rank(bucket: &TimeBucket, top_n: usize, hours: HourRange) -> Vec<RankedWindow> {
    let mut windows: Vec<RankedWindow> = bucket
        .iter()
        .filter(|(label, _)| hours.contains(label.hour()))
        .map(|(label, count)| RankedWindow { label, count })
        .collect();

    windows.sort_by(|a, b| b.count.cmp(&a.count));
    windows.truncate(top_n);
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn label(weekday: Weekday, hour: u32, minute: u32) -> TimeLabel {
        TimeLabel::new(weekday, hour, minute).unwrap()
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let a = label(Weekday::Mon, 9, 0);
        let b = label(Weekday::Tue, 10, 0);
        let c = label(Weekday::Wed, 11, 0);
        let bucket: TimeBucket = [(a, 5), (b, 5), (c, 2)].into_iter().collect();

        let ranked = rank(&bucket, 2, HourRange::default());
        assert_eq!(ranked, vec![RankedWindow { label: a, count: 5 }, RankedWindow { label: b, count: 5 }]);
    }

    #[test]
    fn higher_counts_rank_first() {
        let a = label(Weekday::Mon, 9, 0);
        let b = label(Weekday::Thu, 14, 30);
        let bucket: TimeBucket = [(a, 1), (b, 4)].into_iter().collect();

        let ranked = rank(&bucket, 3, HourRange::default());
        assert_eq!(ranked.iter().map(|w| w.count).collect::<Vec<_>>(), vec![4, 1]);
        assert_eq!(ranked[0].label, b);
    }

    #[test]
    fn business_hours_boundaries() {
        let cases = [
            (label(Weekday::Mon, 8, 0), false),
            (label(Weekday::Mon, 8, 59), false),
            (label(Weekday::Mon, 9, 0), true),
            (label(Weekday::Mon, 17, 59), true),
            (label(Weekday::Mon, 18, 0), false),
            (label(Weekday::Mon, 0, 30), false),
            (label(Weekday::Mon, 12, 0), true),
        ];

        for (l, expected) in cases {
            let bucket: TimeBucket = [(l, 1)].into_iter().collect();
            let kept = !rank(&bucket, 3, HourRange::default()).is_empty();
            assert_eq!(kept, expected, "label: {l}");
        }
    }

    #[test]
    fn custom_range_is_honoured() {
        let early = label(Weekday::Fri, 7, 0);
        let bucket: TimeBucket = [(early, 3)].into_iter().collect();

        assert!(rank(&bucket, 3, HourRange::default()).is_empty());
        assert_eq!(rank(&bucket, 3, HourRange { start: 6, end: 9 }).len(), 1);
    }

    #[test]
    fn fewer_than_n_returns_all_and_zero_n_returns_none() {
        let bucket: TimeBucket = [(label(Weekday::Sat, 10, 0), 2)].into_iter().collect();
        assert_eq!(rank(&bucket, 5, HourRange::default()).len(), 1);
        assert!(rank(&bucket, 0, HourRange::default()).is_empty());
        assert!(rank(&TimeBucket::new(), 3, HourRange::default()).is_empty());
    }
}
