//! Pure placement checks.
//!
//! Side-effect-free predicates shared by the timetable scheduler and the
//! seating assigner. Every commit in either engine is preceded by these
//! checks; they are independently testable and never touch engine state.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Classroom, Exam, TimeSpan};

/// Whether two same-day time spans intersect.
#[inline]
pub fn spans_overlap(a: &TimeSpan, b: &TimeSpan) -> bool {
    a.overlaps(b)
}

/// Whether two exams intersect in time.
///
/// True iff they fall on the same date and their spans overlap. Spans
/// carry each exam's actual end time, so courses with duration overrides
/// compare correctly even when their start times differ.
pub fn exams_overlap(a: &Exam, b: &Exam) -> bool {
    a.date == b.date && a.span.overlaps(&b.span)
}

/// Whether placing one more exam for `class_level` on `date` would push
/// that level past `daily_cap`.
///
/// `level_of` maps course IDs to class levels; committed exams of unknown
/// courses are ignored.
pub fn daily_count_exceeded(
    committed: &[Exam],
    level_of: &HashMap<String, u8>,
    class_level: u8,
    date: NaiveDate,
    daily_cap: u32,
) -> bool {
    let count = committed
        .iter()
        .filter(|e| e.date == date)
        .filter(|e| level_of.get(&e.course_id) == Some(&class_level))
        .count() as u32;
    count >= daily_cap
}

/// Whether a set of classrooms can seat the given number of students.
///
/// Uses each room's exam capacity (administrative capacity bounded by the
/// exam-spaced seat layout).
pub fn capacity_sufficient(rooms: &[Classroom], student_count: usize) -> bool {
    let total: u32 = rooms.iter().map(|r| r.exam_capacity()).sum();
    total as usize >= student_count
}
