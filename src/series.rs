//! The day-indexed series of infected counts produced by a scenario driver.

use serde::{Deserialize, Serialize};

/// One row of simulation output: the total number of infected people at the
/// end of `day`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct DayRecord {
    pub day: u32,
    pub infected: u64,
}

/// An ordered, append-only sequence of daily infected counts, indexed from
/// day 0. Day values increase by exactly 1 per appended record, and because
/// each day's count is derived additively from the prior day's, the infected
/// counts never decrease.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySeries {
    records: Vec<DayRecord>,
}

impl DaySeries {
    /// Creates a series holding the day-0 record.
    #[must_use]
    pub fn with_starting(starting_infected: u64) -> Self {
        Self {
            records: vec![DayRecord {
                day: 0,
                infected: starting_infected,
            }],
        }
    }

    /// Appends the count for the next day.
    pub fn push(&mut self, infected: u64) {
        let day = u32::try_from(self.records.len()).expect("day index overflow");
        self.records.push(DayRecord { day, infected });
    }

    /// The most recently recorded infected count.
    #[must_use]
    pub fn last_infected(&self) -> u64 {
        self.records.last().expect("series is never empty").infected
    }

    /// The most recently recorded day index.
    #[must_use]
    pub fn last_day(&self) -> u32 {
        self.records.last().expect("series is never empty").day
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A series always contains at least the day-0 record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// The infected counts in day order, without the day indices.
    #[must_use]
    pub fn infected_counts(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.infected).collect()
    }
}

impl<'a> IntoIterator for &'a DaySeries {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::DaySeries;

    #[test]
    fn starts_at_day_zero() {
        let series = DaySeries::with_starting(10);
        assert_eq!(series.len(), 1);
        assert_eq!(series.last_day(), 0);
        assert_eq!(series.last_infected(), 10);
    }

    #[test]
    fn push_assigns_consecutive_days() {
        let mut series = DaySeries::with_starting(10);
        series.push(12);
        series.push(15);
        let days: Vec<u32> = series.records().iter().map(|r| r.day).collect();
        assert_eq!(days, vec![0, 1, 2]);
        assert_eq!(series.last_day(), 2);
        assert_eq!(series.last_infected(), 15);
    }

    #[test]
    fn infected_counts_in_day_order() {
        let mut series = DaySeries::with_starting(1);
        series.push(2);
        series.push(4);
        assert_eq!(series.infected_counts(), vec![1, 2, 4]);
    }

    #[test]
    fn iterates_over_records() {
        let mut series = DaySeries::with_starting(3);
        series.push(6);
        let mut iter = (&series).into_iter();
        assert_eq!(iter.next().unwrap().infected, 3);
        assert_eq!(iter.next().unwrap().infected, 6);
        assert!(iter.next().is_none());
    }
}
