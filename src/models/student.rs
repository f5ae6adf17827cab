//! Student model.
//!
//! Students carry the enrollment data the conflict graph is derived from.
//! A student enrolled in zero or one course never constrains scheduling.

use serde::{Deserialize, Serialize};

/// A student with an enrolled-course set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Student number (institutional identifier).
    pub number: String,
    /// Human-readable name.
    pub name: String,
    /// Academic year/grade (1-based).
    pub class_level: u8,
    /// IDs of the courses this student is enrolled in.
    pub enrolled: Vec<String>,
}

impl Student {
    /// Creates a new student with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            number: id.clone(),
            id,
            name: String::new(),
            class_level: 1,
            enrolled: Vec::new(),
        }
    }

    /// Sets the student number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the student name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the class level (academic year).
    pub fn with_class_level(mut self, class_level: u8) -> Self {
        self.class_level = class_level;
        self
    }

    /// Enrolls the student in a course.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.enrolled.push(course_id.into());
        self
    }

    /// Whether the student is enrolled in a course.
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.enrolled.iter().any(|c| c == course_id)
    }

    /// Number of enrolled courses.
    pub fn enrollment_count(&self) -> usize {
        self.enrolled.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("s-1")
            .with_number("20250001")
            .with_name("Ada Lovelace")
            .with_class_level(2)
            .with_course("c-101")
            .with_course("c-102");

        assert_eq!(s.id, "s-1");
        assert_eq!(s.number, "20250001");
        assert_eq!(s.class_level, 2);
        assert_eq!(s.enrollment_count(), 2);
        assert!(s.is_enrolled_in("c-101"));
        assert!(!s.is_enrolled_in("c-999"));
    }

    #[test]
    fn test_student_defaults() {
        let s = Student::new("s-2");
        assert_eq!(s.number, "s-2");
        assert_eq!(s.enrollment_count(), 0);
    }
}
