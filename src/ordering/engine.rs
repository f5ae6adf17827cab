//! Sequential rule chain for course ordering.
//!
//! Rules are evaluated in chain order; a later rule only decides when all
//! earlier rules tie. The final tie-breaker pins down a total order so a
//! scheduling run is exactly reproducible.

use std::sync::Arc;

use super::{rules, OrderingContext, OrderingRule};
use crate::models::Course;

/// How courses that tie on every rule are finally ordered.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep the caller's input order (stable sort).
    #[default]
    InputOrder,
    /// Deterministic by course ID (lexicographic).
    ById,
}

/// A composable course-ordering engine.
///
/// # Example
/// ```
/// use u_examtime::ordering::{OrderingEngine, TieBreaker};
/// use u_examtime::ordering::rules;
///
/// let engine = OrderingEngine::new()
///     .with_rule(rules::ConflictDegree)
///     .with_rule(rules::LargestEnrollment)
///     .with_tie_breaker(TieBreaker::ById);
/// ```
#[derive(Clone)]
pub struct OrderingEngine {
    rules: Vec<Arc<dyn OrderingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl OrderingEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
            epsilon: 1e-9,
        }
    }

    /// The scheduler's default chain: conflict degree, then enrollment,
    /// then course ID.
    pub fn most_constrained_first() -> Self {
        Self::new()
            .with_rule(rules::ConflictDegree)
            .with_rule(rules::LargestEnrollment)
            .with_tie_breaker(TieBreaker::ById)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts courses by the rule chain.
    ///
    /// Returns indices into the course slice, earliest-visited first.
    pub fn sort_indices(&self, courses: &[Course], context: &OrderingContext) -> Vec<usize> {
        if courses.is_empty() {
            return Vec::new();
        }

        let mut indices: Vec<usize> = (0..courses.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&courses[a], &courses[b], context));
        indices
    }

    fn compare(&self, a: &Course, b: &Course, context: &OrderingContext) -> std::cmp::Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        match &self.tie_breaker {
            TieBreaker::InputOrder => std::cmp::Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for OrderingEngine {
    fn default() -> Self {
        Self::most_constrained_first()
    }
}

impl std::fmt::Debug for OrderingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
