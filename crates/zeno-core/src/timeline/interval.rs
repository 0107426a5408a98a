//! Half-open minute intervals and the merge used by gap computation.

use std::cmp::Ordering;

use super::MINUTES_PER_DAY;

/// `[start, end)` in minutes of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    /// Returns `None` unless `start < end <= MINUTES_PER_DAY`.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        if start >= end || end > MINUTES_PER_DAY {
            return None;
        }
        Some(Self { start, end })
    }

    /// The whole day, `[0, 1440)`.
    pub fn day() -> Self {
        Self {
            start: 0,
            end: MINUTES_PER_DAY,
        }
    }

    /// Length in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn can_fit(&self, minutes: u32) -> bool {
        self.duration() >= minutes
    }

    /// Grow by `buffer` on both sides, clipped to the day.
    pub fn expand(&self, buffer: u32) -> Self {
        Self {
            start: self.start.saturating_sub(buffer),
            end: self.end.saturating_add(buffer).min(MINUTES_PER_DAY),
        }
    }
}

/// Orders by `(start, end)`.
pub fn interval_order(a: &Interval, b: &Interval) -> Ordering {
    a.start.cmp(&b.start).then(a.end.cmp(&b.end))
}

/// Coalesce overlapping or touching intervals.
///
/// The result is sorted and pairwise separated by at least one minute.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(interval_order);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for current in sorted {
        match merged.last_mut() {
            Some(last) if current.start <= last.end => {
                last.end = last.end.max(current.end);
            }
            _ => merged.push(current),
        }
    }
    merged
}

/// Free intervals of `[0, MINUTES_PER_DAY)` not covered by `occupied`.
///
/// `occupied` must be sorted by start, as returned by [`merge_intervals`].
pub fn complement(occupied: &[Interval]) -> Vec<Interval> {
    let mut gaps = Vec::with_capacity(occupied.len() + 1);
    let mut cursor = 0;
    for region in occupied {
        if cursor < region.start {
            gaps.push(Interval {
                start: cursor,
                end: region.start,
            });
        }
        cursor = cursor.max(region.end);
    }
    if cursor < MINUTES_PER_DAY {
        gaps.push(Interval {
            start: cursor,
            end: MINUTES_PER_DAY,
        });
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn constructor_rejects_empty_and_out_of_day() {
        assert!(Interval::new(10, 10).is_none());
        assert!(Interval::new(20, 10).is_none());
        assert!(Interval::new(0, 1441).is_none());
        assert_eq!(Interval::new(0, 1440), Some(Interval::day()));
    }

    #[test]
    fn expand_clips_to_day_bounds() {
        assert_eq!(iv(5, 30).expand(15), iv(0, 45));
        assert_eq!(iv(1430, 1440).expand(15), iv(1415, 1440));
        assert_eq!(iv(100, 200).expand(0), iv(100, 200));
    }

    #[test]
    fn merge_joins_overlapping_and_touching() {
        let merged = merge_intervals(&[iv(50, 60), iv(0, 10), iv(10, 20), iv(15, 30)]);
        assert_eq!(merged, vec![iv(0, 30), iv(50, 60)]);
    }

    #[test]
    fn merge_keeps_nested_interval_end() {
        let merged = merge_intervals(&[iv(0, 100), iv(10, 20)]);
        assert_eq!(merged, vec![iv(0, 100)]);
    }

    #[test]
    fn merge_of_nothing_is_nothing() {
        assert!(merge_intervals(&[]).is_empty());
    }

    #[test]
    fn complement_covers_leading_middle_and_trailing() {
        let gaps = complement(&[iv(60, 120), iv(300, 360)]);
        assert_eq!(gaps, vec![iv(0, 60), iv(120, 300), iv(360, 1440)]);
    }

    #[test]
    fn complement_of_full_day_is_empty() {
        assert!(complement(&[Interval::day()]).is_empty());
        assert_eq!(complement(&[]), vec![Interval::day()]);
    }
}
