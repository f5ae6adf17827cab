//! Timetable (solution) model.
//!
//! A timetable is the complete set of committed exam placements produced
//! by one scheduling run. The scheduler only ever returns fully valid
//! timetables; [`Timetable::audit`] re-checks the invariants independently
//! and reports typed violations, which keeps the engine honest in tests.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Course, Exam, ExamWindow};
use crate::conflict::ConflictGraph;

/// A complete exam timetable (solution to a scheduling run).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed exam placements.
    pub exams: Vec<Exam>,
}

/// An invariant violation found by [`Timetable::audit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Related entity (course or classroom ID).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Two conflicting courses overlap in time on the same date.
    ConflictOverlap,
    /// A class level exceeds its daily exam cap.
    DailyCapExceeded,
    /// An exam lies outside the window or operating hours.
    OutsideWindow,
    /// A classroom hosts two overlapping exams.
    RoomDoubleBooked,
}

impl Violation {
    fn new(kind: ViolationKind, entity_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exam placement.
    pub fn add_exam(&mut self, exam: Exam) {
        self.exams.push(exam);
    }

    /// Number of committed exams.
    pub fn exam_count(&self) -> usize {
        self.exams.len()
    }

    /// Whether the timetable holds no exams.
    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    /// Finds the exam for a course.
    pub fn exam_for_course(&self, course_id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.course_id == course_id)
    }

    /// All exams on a date.
    pub fn exams_on(&self, date: NaiveDate) -> Vec<&Exam> {
        self.exams.iter().filter(|e| e.date == date).collect()
    }

    /// Distinct exam dates, in calendar order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.exams.iter().map(|e| e.date).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Number of distinct days carrying at least one exam.
    pub fn days_used(&self) -> usize {
        self.dates().len()
    }

    /// Exam count per date.
    pub fn load_by_date(&self) -> HashMap<NaiveDate, usize> {
        let mut load = HashMap::new();
        for e in &self.exams {
            *load.entry(e.date).or_insert(0) += 1;
        }
        load
    }

    /// Sorts exams by (date, start time, course ID).
    pub fn sort_chronological(&mut self) {
        self.exams
            .sort_by(|a, b| (a.date, a.span.start_min, &a.course_id).cmp(&(b.date, b.span.start_min, &b.course_id)));
    }

    /// Independently re-checks the scheduling invariants.
    ///
    /// Checks, against the inputs of the run that produced this timetable:
    /// 1. No two conflicting courses overlap in time on the same date.
    /// 2. No class level exceeds `daily_cap` exams on one date.
    /// 3. Every exam lies within the window and operating hours.
    /// 4. No classroom hosts two overlapping exams.
    ///
    /// Returns all violations found; an empty list means the timetable
    /// satisfies every invariant.
    pub fn audit(
        &self,
        graph: &ConflictGraph,
        window: &ExamWindow,
        courses: &[Course],
        daily_cap: u32,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        let level_of: HashMap<&str, u8> =
            courses.iter().map(|c| (c.id.as_str(), c.class_level)).collect();

        // Pairwise checks: conflict overlap and room double-booking.
        for (i, a) in self.exams.iter().enumerate() {
            for b in self.exams.iter().skip(i + 1) {
                if a.date != b.date || !a.span.overlaps(&b.span) {
                    continue;
                }
                if graph.in_conflict(&a.course_id, &b.course_id) {
                    violations.push(Violation::new(
                        ViolationKind::ConflictOverlap,
                        a.course_id.clone(),
                        format!(
                            "Courses '{}' and '{}' share students but overlap on {}",
                            a.course_id, b.course_id, a.date
                        ),
                    ));
                }
                for room in a.room_ids() {
                    if b.uses_room(room) {
                        violations.push(Violation::new(
                            ViolationKind::RoomDoubleBooked,
                            room,
                            format!(
                                "Room '{}' hosts '{}' and '{}' at overlapping times on {}",
                                room, a.course_id, b.course_id, a.date
                            ),
                        ));
                    }
                }
            }
        }

        // Window containment.
        for e in &self.exams {
            if !window.contains_date(e.date) || !window.fits_operating_hours(&e.span) {
                violations.push(Violation::new(
                    ViolationKind::OutsideWindow,
                    e.course_id.clone(),
                    format!(
                        "Exam for '{}' at {} {} lies outside the scheduling window",
                        e.course_id,
                        e.date,
                        e.span.start_label()
                    ),
                ));
            }
        }

        // Per-level daily caps.
        let mut daily: HashMap<(u8, NaiveDate), u32> = HashMap::new();
        for e in &self.exams {
            if let Some(&level) = level_of.get(e.course_id.as_str()) {
                *daily.entry((level, e.date)).or_insert(0) += 1;
            }
        }
        for ((level, date), count) in daily {
            if count > daily_cap {
                violations.push(Violation::new(
                    ViolationKind::DailyCapExceeded,
                    format!("level-{level}"),
                    format!("Class level {level} has {count} exams on {date} (cap {daily_cap})"),
                ));
            }
        }

        violations
    }
}
