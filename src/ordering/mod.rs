//! Course-visit ordering for the timetable scheduler.
//!
//! The scheduler is deterministic for a fixed course-visit order, so the
//! order is produced by an explicit, composable rule chain rather than
//! ad-hoc sorting. The default chain schedules the most-constrained
//! courses first.
//!
//! # Usage
//!
//! ```
//! use u_examtime::ordering::{OrderingEngine, OrderingContext};
//! use u_examtime::ordering::rules;
//!
//! let engine = OrderingEngine::new()
//!     .with_rule(rules::ConflictDegree)
//!     .with_rule(rules::LargestEnrollment);
//!
//! let context = OrderingContext::new();
//! // let order = engine.sort_indices(&courses, &context);
//! ```
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"
//! - Carter, Laporte & Lee (1996), "Examination timetabling: Algorithmic
//!   strategies and applications"

mod context;
mod engine;
pub mod rules;

pub use context::OrderingContext;
pub use engine::{OrderingEngine, TieBreaker};

use std::fmt::Debug;

use crate::models::Course;

/// Score returned by an ordering rule.
///
/// Lower scores = scheduled earlier. Descending criteria (degree,
/// enrollment) negate their value.
pub type RuleScore = f64;

/// A rule that scores a course's scheduling urgency.
///
/// # Score Convention
/// **Lower score = visited earlier.** Rules should return smaller values
/// for courses that are harder to place.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "CONFLICT-DEGREE").
    fn name(&self) -> &'static str;

    /// Evaluates a course's urgency given the run context.
    ///
    /// Returns a score where lower = earlier.
    fn evaluate(&self, course: &Course, context: &OrderingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
