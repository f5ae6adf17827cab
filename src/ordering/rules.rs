//! Built-in ordering rules.
//!
//! # Score Convention
//! All rules return lower scores for courses that should be visited
//! earlier.
//!
//! # References
//! - Welsh & Powell (1967): largest-degree-first vertex ordering
//! - Carter, Laporte & Lee (1996), "Examination timetabling"

use super::{OrderingContext, OrderingRule, RuleScore};
use crate::models::Course;

/// Highest conflict degree first.
///
/// The classic graph-coloring heuristic: the courses entangled with the
/// most other courses have the fewest feasible slots and are placed
/// before their options run out.
#[derive(Debug, Clone, Copy)]
pub struct ConflictDegree;

impl OrderingRule for ConflictDegree {
    fn name(&self) -> &'static str {
        "CONFLICT-DEGREE"
    }

    fn evaluate(&self, course: &Course, context: &OrderingContext) -> RuleScore {
        -(context.degree(&course.id) as f64)
    }

    fn description(&self) -> &'static str {
        "Most conflicting courses first"
    }
}

/// Largest enrollment first.
///
/// Bigger courses need more combined room capacity, so they get first
/// pick of rooms.
#[derive(Debug, Clone, Copy)]
pub struct LargestEnrollment;

impl OrderingRule for LargestEnrollment {
    fn name(&self) -> &'static str {
        "LARGEST-ENROLLMENT"
    }

    fn evaluate(&self, course: &Course, context: &OrderingContext) -> RuleScore {
        -(context.enrollment(&course.id) as f64)
    }

    fn description(&self) -> &'static str {
        "Largest student count first"
    }
}

/// Lowest class level first.
#[derive(Debug, Clone, Copy)]
pub struct ClassLevelAsc;

impl OrderingRule for ClassLevelAsc {
    fn name(&self) -> &'static str {
        "CLASS-LEVEL"
    }

    fn evaluate(&self, course: &Course, _context: &OrderingContext) -> RuleScore {
        course.class_level as f64
    }

    fn description(&self) -> &'static str {
        "Lowest class level first"
    }
}

/// Shortest exam first.
///
/// Short exams pack more easily around already-placed long ones.
#[derive(Debug, Clone, Copy)]
pub struct ShortestDuration;

impl OrderingRule for ShortestDuration {
    fn name(&self) -> &'static str {
        "SHORTEST-DURATION"
    }

    fn evaluate(&self, course: &Course, context: &OrderingContext) -> RuleScore {
        course.resolved_duration(context.default_duration_min) as f64
    }

    fn description(&self) -> &'static str {
        "Shortest exam duration first"
    }
}
