//! Engine error types.
//!
//! All errors here are recoverable by the caller: adjust the inputs
//! (widen the window, add rooms, fix the data) and rerun. Neither engine
//! ever commits partial state on failure.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a timetable scheduling run.
#[derive(Debug, Clone, Error)]
pub enum ScheduleError {
    /// The inputs were rejected before any placement attempt.
    #[error("invalid scheduling input: {}", format_validation(.0))]
    InvalidInput(Vec<ValidationError>),

    /// No valid slot was found for one or more courses within the
    /// backtracking bound. The timetable is discarded in full.
    #[error("no feasible slot for {} course(s): {}", .unplaceable.len(), .unplaceable.join(", "))]
    Infeasible {
        /// Courses that could not be placed.
        unplaceable: Vec<String>,
    },
}

/// Failure of a seating run.
#[derive(Debug, Clone, Error)]
pub enum SeatingError {
    /// The inputs were rejected before any placement attempt.
    #[error("invalid seating input: {}", format_validation(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The enrolled students outnumber the available seats.
    #[error("capacity shortfall: {required} students for {available} seats ({shortfall} short)")]
    CapacityShortfall {
        /// Students to seat.
        required: usize,
        /// Seats available across all candidate rooms.
        available: usize,
        /// `required - available`.
        shortfall: usize,
    },
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
