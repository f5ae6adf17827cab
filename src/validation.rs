//! Input validation for scheduling runs.
//!
//! Checks structural integrity of courses, students, classrooms, and the
//! scheduling window before any placement attempt. Detects:
//! - Duplicate IDs
//! - Inverted or empty scheduling windows
//! - Zero-capacity classrooms
//! - Non-positive exam durations
//! - Duration overrides naming unknown courses
//!
//! All violations are collected and reported together; the engines reject
//! invalid input before touching any placement state.

use std::collections::{HashMap, HashSet};

use crate::models::{Classroom, Course, ExamWindow, Student};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// The scheduling window is inverted, empty, or degenerate.
    InvalidWindow,
    /// A classroom cannot seat anyone.
    InvalidCapacity,
    /// An exam duration is zero.
    InvalidDuration,
    /// The per-level daily exam cap is zero.
    InvalidDailyCap,
    /// A duration override names a course outside the run.
    UnknownCourse,
    /// An exam's room allocation names a classroom outside the candidates.
    UnknownClassroom,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the inputs of a timetable scheduling run.
///
/// Checks:
/// 1. No duplicate course, student, or classroom IDs
/// 2. Window end date not before start date; operating hours non-empty;
///    slot step positive; at least one usable date
/// 3. Every classroom can seat at least one student under exam spacing
/// 4. Default duration and all overrides are positive
/// 5. Every duration override names a course in the run
/// 6. The daily cap admits at least one exam per level per day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule_inputs(
    courses: &[Course],
    students: &[Student],
    classrooms: &[Classroom],
    window: &ExamWindow,
    default_duration_min: u32,
    duration_overrides: &HashMap<String, u32>,
    daily_cap: u32,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    let mut student_ids = HashSet::new();
    for s in students {
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
    }

    errors.extend(classroom_errors(classrooms));
    errors.extend(window_errors(window));

    if default_duration_min == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "Default exam duration must be positive",
        ));
    }
    for c in courses {
        if c.duration_min == Some(0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Course '{}' has a zero exam duration", c.id),
            ));
        }
    }
    for (course_id, &duration) in duration_overrides {
        if duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Duration override for '{course_id}' must be positive"),
            ));
        }
        if !course_ids.contains(course_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!("Duration override references unknown course '{course_id}'"),
            ));
        }
    }

    if daily_cap == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDailyCap,
            "Daily exam cap must admit at least one exam",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the inputs of a seating run.
///
/// Checks candidate classrooms for duplicate IDs and zero capacity, and
/// the enrolled students for duplicate IDs.
pub fn validate_seating_inputs(classrooms: &[Classroom], students: &[Student]) -> ValidationResult {
    let mut errors = classroom_errors(classrooms);

    let mut student_ids = HashSet::new();
    for s in students {
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn classroom_errors(classrooms: &[Classroom]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut room_ids = HashSet::new();

    for room in classrooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", room.id),
            ));
        }
        if room.exam_capacity() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Classroom '{}' cannot seat any student", room.id),
            ));
        }
    }

    errors
}

fn window_errors(window: &ExamWindow) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if window.end_date < window.start_date {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            format!(
                "Window end {} precedes start {}",
                window.end_date, window.start_date
            ),
        ));
    } else if window.usable_dates().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            "Every date in the window falls on an excluded weekday",
        ));
    }

    if window.day_end_min <= window.day_start_min {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            "Daily operating hours are empty",
        ));
    }

    if window.slot_step_min == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            "Slot step must be positive",
        ));
    }

    errors
}
