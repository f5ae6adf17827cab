//! Scheduling window and time span models.
//!
//! Defines when exams may take place: the calendar date range, excluded
//! weekdays, and the daily operating hours that candidate slots are
//! enumerated from.
//!
//! # Time Model
//! Dates are calendar dates (`chrono::NaiveDate`). Times of day are minutes
//! from midnight. A slot is a `(date, TimeSpan)` pair.
//!
//! # Precedence
//! Excluded weekdays override the date range. A date is usable iff:
//! - It falls within `[start_date, end_date]`, AND
//! - Its weekday is NOT in `excluded_weekdays`.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A time interval within one day, in minutes from midnight.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSpan {
    /// Interval start (minutes from midnight, inclusive).
    pub start_min: u32,
    /// Interval end (minutes from midnight, exclusive).
    pub end_min: u32,
}

impl TimeSpan {
    /// Creates a new time span.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Duration of this span (minutes).
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a minute-of-day falls within this span.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two spans overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }

    /// Returns this span extended by a cool-down buffer at its end.
    ///
    /// Used when checking room occupancy and student back-to-back exams:
    /// the room and the students are considered busy until the buffer ends.
    pub fn padded(&self, break_min: u32) -> Self {
        Self {
            start_min: self.start_min,
            end_min: self.end_min + break_min,
        }
    }

    /// Formats the start as `HH:MM`.
    pub fn start_label(&self) -> String {
        format!("{:02}:{:02}", self.start_min / 60, self.start_min % 60)
    }
}

/// The calendar window a scheduling run may place exams in.
///
/// Combines a date range with excluded weekdays and daily operating hours.
/// Candidate slot starts are enumerated from `day_start_min` in steps of
/// `slot_step_min`; an exam must end by `day_end_min`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamWindow {
    /// First usable date (inclusive).
    pub start_date: NaiveDate,
    /// Last usable date (inclusive).
    pub end_date: NaiveDate,
    /// Weekdays on which no exam may be scheduled.
    pub excluded_weekdays: Vec<Weekday>,
    /// Daily operating start (minutes from midnight).
    pub day_start_min: u32,
    /// Daily operating end (minutes from midnight).
    pub day_end_min: u32,
    /// Granularity of candidate start times (minutes).
    pub slot_step_min: u32,
    /// Cool-down between consecutive exams in the same room or for the
    /// same students (minutes).
    pub break_min: u32,
}

impl ExamWindow {
    /// Creates a window over `[start_date, end_date]` with default hours
    /// (09:00-17:00), 15-minute slot steps, and a 15-minute break.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            excluded_weekdays: Vec::new(),
            day_start_min: 9 * 60,
            day_end_min: 17 * 60,
            slot_step_min: 15,
            break_min: 15,
        }
    }

    /// Sets the daily operating hours (minutes from midnight).
    pub fn with_hours(mut self, day_start_min: u32, day_end_min: u32) -> Self {
        self.day_start_min = day_start_min;
        self.day_end_min = day_end_min;
        self
    }

    /// Sets the candidate start-time granularity.
    pub fn with_slot_step(mut self, slot_step_min: u32) -> Self {
        self.slot_step_min = slot_step_min;
        self
    }

    /// Sets the cool-down between consecutive exams.
    pub fn with_break(mut self, break_min: u32) -> Self {
        self.break_min = break_min;
        self
    }

    /// Excludes a weekday from the window.
    pub fn without_weekday(mut self, weekday: Weekday) -> Self {
        if !self.excluded_weekdays.contains(&weekday) {
            self.excluded_weekdays.push(weekday);
        }
        self
    }

    /// Excludes Saturday and Sunday.
    pub fn without_weekends(self) -> Self {
        self.without_weekday(Weekday::Sat)
            .without_weekday(Weekday::Sun)
    }

    /// Whether a date is inside the window and not on an excluded weekday.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date
            && date <= self.end_date
            && !self.excluded_weekdays.contains(&date.weekday())
    }

    /// All usable dates, in calendar order.
    pub fn usable_dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
            .filter(|d| !self.excluded_weekdays.contains(&d.weekday()))
            .collect()
    }

    /// Candidate start times for an exam of the given duration, in
    /// enumeration order (earliest first).
    ///
    /// The last candidate is the latest start such that the exam still
    /// ends by `day_end_min`. Returns an empty list when the duration
    /// does not fit the operating hours at all.
    pub fn slot_starts(&self, duration_min: u32) -> Vec<u32> {
        if self.slot_step_min == 0
            || duration_min == 0
            || self.day_start_min + duration_min > self.day_end_min
        {
            return Vec::new();
        }
        let latest = self.day_end_min - duration_min;
        (self.day_start_min..=latest)
            .step_by(self.slot_step_min as usize)
            .collect()
    }

    /// Whether a span lies fully within the operating hours.
    pub fn fits_operating_hours(&self, span: &TimeSpan) -> bool {
        span.start_min >= self.day_start_min && span.end_min <= self.day_end_min
    }
}
