//! Enrollment conflict graph.
//!
//! Derives, from student enrollment data, which pairs of courses share at
//! least one student and therefore must not sit exams in overlapping time
//! windows. Vertices are courses; an edge means shared enrollment.
//!
//! The graph is an immutable value: it is rebuilt from scratch whenever
//! enrollment data changes and passed explicitly to the scheduler, never
//! mutated incrementally in place.
//!
//! # Complexity
//! For S students averaging C enrolled courses each, construction is
//! O(S * C^2). Conflicts only materialize through shared students; course
//! pairs are never compared exhaustively, so the total course count does
//! not enter the bound.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::Student;

/// Symmetric course-conflict relation derived from enrollments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictGraph {
    edges: HashMap<String, HashSet<String>>,
}

impl ConflictGraph {
    /// Builds the conflict graph from student enrollments.
    ///
    /// For every student, all pairs of that student's enrolled courses are
    /// linked. Students enrolled in zero or one course contribute nothing.
    /// Duplicate enrollments of the same course are ignored; a course
    /// never conflicts with itself.
    pub fn build(students: &[Student]) -> Self {
        let mut edges: HashMap<String, HashSet<String>> = HashMap::new();

        for student in students {
            let courses: Vec<&String> = {
                let mut seen = HashSet::new();
                student
                    .enrolled
                    .iter()
                    .filter(|c| seen.insert(c.as_str()))
                    .collect()
            };
            for (i, a) in courses.iter().enumerate() {
                for b in courses.iter().skip(i + 1) {
                    edges
                        .entry((*a).clone())
                        .or_default()
                        .insert((*b).clone());
                    edges
                        .entry((*b).clone())
                        .or_default()
                        .insert((*a).clone());
                }
            }
        }

        Self { edges }
    }

    /// Courses in conflict with the given course.
    pub fn conflicts_of(&self, course_id: &str) -> Option<&HashSet<String>> {
        self.edges.get(course_id)
    }

    /// Whether two courses share at least one student.
    pub fn in_conflict(&self, a: &str, b: &str) -> bool {
        self.edges.get(a).is_some_and(|set| set.contains(b))
    }

    /// Number of conflicting courses (vertex degree).
    ///
    /// The classic most-constrained-first coloring heuristic orders
    /// courses by descending degree.
    pub fn degree(&self, course_id: &str) -> usize {
        self.edges.get(course_id).map_or(0, |set| set.len())
    }

    /// Number of courses that appear in at least one conflict.
    pub fn course_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct conflicting course pairs.
    pub fn pair_count(&self) -> usize {
        self.edges.values().map(|set| set.len()).sum::<usize>() / 2
    }

    /// Whether no conflicts exist at all.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
