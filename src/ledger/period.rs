use chrono::{Datelike, NaiveDate};

/// First calendar day of the month containing `date`.
pub fn bucket_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

fn next_month_start(from: NaiveDate) -> NaiveDate {
    let mut year = from.year();
    let mut month = from.month() + 1;
    if month > 12 {
        month = 1;
        year += 1;
    }
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Lazy walk over consecutive month buckets, yielding each bucket's first
/// day, starting at the bucket that contains the anchor.
#[derive(Debug, Clone)]
pub struct MonthSequence {
    next: NaiveDate,
    remaining: u32,
}

impl MonthSequence {
    pub fn new(anchor: NaiveDate, count: u32) -> Self {
        Self {
            next: bucket_start(anchor),
            remaining: count,
        }
    }
}

impl Iterator for MonthSequence {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next = next_month_start(current);
        self.remaining -= 1;
        Some(current)
    }
}
