//! Run context for ordering rule evaluation.

use std::collections::HashMap;

use crate::conflict::ConflictGraph;
use crate::models::Student;

/// Derived per-run state passed to ordering rules.
///
/// Carries the conflict degrees and enrollment counts the degree- and
/// size-based rules need, plus the run's default exam duration for
/// duration-aware rules.
#[derive(Debug, Clone)]
pub struct OrderingContext {
    /// Conflict degree per course (course_id → conflicting-course count).
    pub conflict_degrees: HashMap<String, usize>,
    /// Enrollment per course (course_id → student count).
    pub enrollment_counts: HashMap<String, usize>,
    /// Default exam duration (minutes) for courses without an override.
    pub default_duration_min: u32,
}

impl Default for OrderingContext {
    fn default() -> Self {
        Self {
            conflict_degrees: HashMap::new(),
            enrollment_counts: HashMap::new(),
            default_duration_min: 75,
        }
    }
}

impl OrderingContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the context from the conflict graph and the roster.
    pub fn derive(graph: &ConflictGraph, students: &[Student], default_duration_min: u32) -> Self {
        let mut enrollment_counts: HashMap<String, usize> = HashMap::new();
        for student in students {
            for course in &student.enrolled {
                *enrollment_counts.entry(course.clone()).or_insert(0) += 1;
            }
        }

        let conflict_degrees = enrollment_counts
            .keys()
            .map(|c| (c.clone(), graph.degree(c)))
            .collect();

        Self {
            conflict_degrees,
            enrollment_counts,
            default_duration_min,
        }
    }

    /// Sets a course's conflict degree.
    pub fn with_degree(mut self, course_id: impl Into<String>, degree: usize) -> Self {
        self.conflict_degrees.insert(course_id.into(), degree);
        self
    }

    /// Sets a course's enrollment count.
    pub fn with_enrollment(mut self, course_id: impl Into<String>, count: usize) -> Self {
        self.enrollment_counts.insert(course_id.into(), count);
        self
    }

    /// Conflict degree for a course (0 if unknown).
    pub fn degree(&self, course_id: &str) -> usize {
        self.conflict_degrees.get(course_id).copied().unwrap_or(0)
    }

    /// Enrollment count for a course (0 if unknown).
    pub fn enrollment(&self, course_id: &str) -> usize {
        self.enrollment_counts.get(course_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_counts_enrollments() {
        let students = vec![
            Student::new("s-1").with_course("a").with_course("b"),
            Student::new("s-2").with_course("a"),
        ];
        let graph = ConflictGraph::build(&students);
        let ctx = OrderingContext::derive(&graph, &students, 75);

        assert_eq!(ctx.enrollment("a"), 2);
        assert_eq!(ctx.enrollment("b"), 1);
        assert_eq!(ctx.degree("a"), 1);
        assert_eq!(ctx.degree("b"), 1);
        assert_eq!(ctx.enrollment("zzz"), 0);
    }

    #[test]
    fn test_builder_setters() {
        let ctx = OrderingContext::new()
            .with_degree("a", 5)
            .with_enrollment("a", 40);
        assert_eq!(ctx.degree("a"), 5);
        assert_eq!(ctx.enrollment("a"), 40);
    }
}
