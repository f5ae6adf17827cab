//! Exam record model.
//!
//! An exam is the committed placement of one course in the timetable:
//! a date, a time span, and the rooms that host it. Exams are created by
//! the scheduler and immutable once committed; a new run for the same
//! course set replaces the previous records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeSpan;

/// Exam category. Each scheduling run targets exactly one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamType {
    /// Mid-semester exam.
    Midterm,
    /// End-of-semester exam.
    Final,
    /// Makeup (resit) exam.
    Makeup,
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExamType::Midterm => "midterm",
            ExamType::Final => "final",
            ExamType::Makeup => "makeup",
        };
        f.write_str(label)
    }
}

/// Seats reserved in one classroom for one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAllocation {
    /// Hosting classroom.
    pub classroom_id: String,
    /// Students allotted to this room.
    pub seats: u32,
}

impl RoomAllocation {
    /// Creates a room allocation.
    pub fn new(classroom_id: impl Into<String>, seats: u32) -> Self {
        Self {
            classroom_id: classroom_id.into(),
            seats,
        }
    }
}

/// A committed exam placement.
///
/// The time span's end is the start plus the resolved course duration, so
/// overlap comparisons between exams with different durations are exact.
/// A large course may span several rooms; the allocations are ordered by
/// fill priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// Scheduled course.
    pub course_id: String,
    /// Exam category of the run that produced this record.
    pub exam_type: ExamType,
    /// Calendar date.
    pub date: NaiveDate,
    /// Time window (minutes from midnight, end exclusive).
    pub span: TimeSpan,
    /// Hosting rooms in fill order.
    pub rooms: Vec<RoomAllocation>,
}

impl Exam {
    /// Creates an exam record from a start time and duration.
    pub fn new(
        course_id: impl Into<String>,
        exam_type: ExamType,
        date: NaiveDate,
        start_min: u32,
        duration_min: u32,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            exam_type,
            date,
            span: TimeSpan::new(start_min, start_min + duration_min),
            rooms: Vec::new(),
        }
    }

    /// Adds a room allocation.
    pub fn with_room(mut self, classroom_id: impl Into<String>, seats: u32) -> Self {
        self.rooms.push(RoomAllocation::new(classroom_id, seats));
        self
    }

    /// Exam duration (minutes).
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.span.duration_min()
    }

    /// Total seats reserved across all rooms.
    pub fn total_seats(&self) -> u32 {
        self.rooms.iter().map(|r| r.seats).sum()
    }

    /// IDs of the hosting rooms, in fill order.
    pub fn room_ids(&self) -> Vec<&str> {
        self.rooms.iter().map(|r| r.classroom_id.as_str()).collect()
    }

    /// Whether a classroom hosts part of this exam.
    pub fn uses_room(&self, classroom_id: &str) -> bool {
        self.rooms.iter().any(|r| r.classroom_id == classroom_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exam_span_from_duration() {
        let e = Exam::new("c-101", ExamType::Final, date(2025, 1, 6), 540, 75);
        assert_eq!(e.span.start_min, 540);
        assert_eq!(e.span.end_min, 615);
        assert_eq!(e.duration_min(), 75);
    }

    #[test]
    fn test_exam_rooms() {
        let e = Exam::new("c-101", ExamType::Midterm, date(2025, 1, 6), 540, 75)
            .with_room("r-big", 60)
            .with_room("r-small", 15);

        assert_eq!(e.total_seats(), 75);
        assert_eq!(e.room_ids(), vec!["r-big", "r-small"]);
        assert!(e.uses_room("r-small"));
        assert!(!e.uses_room("r-other"));
    }

    #[test]
    fn test_exam_type_display() {
        assert_eq!(ExamType::Midterm.to_string(), "midterm");
        assert_eq!(ExamType::Final.to_string(), "final");
        assert_eq!(ExamType::Makeup.to_string(), "makeup");
    }

    #[test]
    fn test_exam_serde_roundtrip() {
        let e = Exam::new("c-101", ExamType::Makeup, date(2025, 1, 6), 600, 90).with_room("r1", 30);
        let json = serde_json::to_string(&e).unwrap();
        let back: Exam = serde_json::from_str(&json).unwrap();
        assert_eq!(back.course_id, "c-101");
        assert_eq!(back.span, e.span);
        assert_eq!(back.rooms, e.rooms);
    }
}
