//! Course model.
//!
//! A course is the unit of scheduling: each selected course receives
//! exactly one exam slot per run. Enrollment is owned by [`Student`]
//! records and derived into a conflict graph; the course itself carries
//! only scheduling metadata.
//!
//! [`Student`]: super::Student

use serde::{Deserialize, Serialize};

/// A course whose exam is to be scheduled.
///
/// # Duration
/// `duration_min` is an optional per-course override; `None` means the
/// scheduling run's default exam duration applies. Overlap checks always
/// use the resolved duration, so two same-day exams with different
/// durations are compared by their actual end times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Course code (e.g., "MATH101").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Academic year/grade this course belongs to (1-based).
    pub class_level: u8,
    /// Exam duration override (minutes). `None` = run default.
    pub duration_min: Option<u32>,
}

impl Course {
    /// Creates a new course with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            code: id.clone(),
            id,
            name: String::new(),
            class_level: 1,
            duration_min: None,
        }
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the class level (academic year).
    pub fn with_class_level(mut self, class_level: u8) -> Self {
        self.class_level = class_level;
        self
    }

    /// Sets a per-course exam duration (minutes).
    pub fn with_duration(mut self, duration_min: u32) -> Self {
        self.duration_min = Some(duration_min);
        self
    }

    /// Resolves the exam duration against a run default (minutes).
    #[inline]
    pub fn resolved_duration(&self, default_min: u32) -> u32 {
        self.duration_min.unwrap_or(default_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("c-101")
            .with_code("MATH101")
            .with_name("Calculus I")
            .with_class_level(1)
            .with_duration(90);

        assert_eq!(c.id, "c-101");
        assert_eq!(c.code, "MATH101");
        assert_eq!(c.name, "Calculus I");
        assert_eq!(c.class_level, 1);
        assert_eq!(c.duration_min, Some(90));
    }

    #[test]
    fn test_course_defaults() {
        let c = Course::new("c-1");
        assert_eq!(c.code, "c-1");
        assert_eq!(c.class_level, 1);
        assert_eq!(c.duration_min, None);
    }

    #[test]
    fn test_resolved_duration() {
        let with_override = Course::new("a").with_duration(120);
        let without = Course::new("b");
        assert_eq!(with_override.resolved_duration(75), 120);
        assert_eq!(without.resolved_duration(75), 75);
    }
}
