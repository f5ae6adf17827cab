//! Timetable scheduling engine and KPI evaluation.
//!
//! Places every selected course into a `(date, start time, rooms)` slot
//! honoring the hard constraints, or reports the courses it cannot place.
//!
//! # Algorithm
//!
//! `ExamScheduler` visits courses most-constrained-first and commits each
//! to the earliest feasible slot, undoing recent placements within a
//! bounded backtracking budget when a course gets stuck. The result is a
//! feasible timetable, not a provably day-minimal one.
//!
//! # KPI
//!
//! `TimetableKpi` measures the best-effort objectives: days used, daily
//! load balance, and window utilization.
//!
//! # References
//!
//! - Welsh & Powell (1967), graph-coloring bound applied to timetabling
//! - Carter, Laporte & Lee (1996), "Examination timetabling: Algorithmic
//!   strategies and applications"

mod engine;
mod kpi;

pub use engine::{ExamScheduler, ScheduleRequest};
pub use kpi::TimetableKpi;
