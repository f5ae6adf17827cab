//! Seat assignment model.
//!
//! A seating plan is the committed, all-or-nothing result of distributing
//! one exam's students across its rooms' seats. Plans are produced by the
//! seating assigner and replace any previous plan for the same exam.

use serde::{Deserialize, Serialize};

use super::SeatPos;

/// One student placed in one seat for one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// Course whose exam this seat belongs to.
    pub course_id: String,
    /// Hosting classroom.
    pub classroom_id: String,
    /// Seat coordinate within the classroom.
    pub seat: SeatPos,
    /// Seated student.
    pub student_id: String,
}

impl SeatAssignment {
    /// Creates a seat assignment.
    pub fn new(
        course_id: impl Into<String>,
        classroom_id: impl Into<String>,
        seat: SeatPos,
        student_id: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            classroom_id: classroom_id.into(),
            seat,
            student_id: student_id.into(),
        }
    }
}

/// The complete seating plan for one exam.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatingPlan {
    /// Course whose exam this plan covers.
    pub course_id: String,
    /// Seat assignments, in placement order.
    pub assignments: Vec<SeatAssignment>,
}

impl SeatingPlan {
    /// Creates an empty plan for a course.
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            assignments: Vec::new(),
        }
    }

    /// Adds an assignment.
    pub fn add(&mut self, assignment: SeatAssignment) {
        self.assignments.push(assignment);
    }

    /// Number of seated students.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the plan seats nobody.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Finds a student's seat.
    pub fn seat_of(&self, student_id: &str) -> Option<(&str, SeatPos)> {
        self.assignments
            .iter()
            .find(|a| a.student_id == student_id)
            .map(|a| (a.classroom_id.as_str(), a.seat))
    }

    /// Finds the student occupying a seat.
    pub fn occupant(&self, classroom_id: &str, seat: SeatPos) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.classroom_id == classroom_id && a.seat == seat)
            .map(|a| a.student_id.as_str())
    }

    /// Number of students seated in a classroom.
    pub fn count_in_room(&self, classroom_id: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.classroom_id == classroom_id)
            .count()
    }
}
