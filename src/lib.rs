//! Exam timetabling framework for the U-Engine ecosystem.
//!
//! Schedules university exams and assigns student seating without
//! conflicts. The crate is pure computation over in-memory records:
//! persistence, import/export, rendering, and authentication belong to
//! host-side collaborators that feed it plain data and store what it
//! returns.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Student`, `Classroom`,
//!   `ExamWindow`, `Exam`, `Timetable`, `SeatingPlan`
//! - **`conflict`**: Enrollment-derived course conflict graph
//! - **`validation`**: Input integrity checks (duplicate IDs, inverted
//!   windows, zero capacities, zero durations)
//! - **`checks`**: Pure overlap/cap/capacity predicates shared by both
//!   engines
//! - **`ordering`**: Composable course-visit ordering rules
//! - **`scheduler`**: Greedy slot assignment with bounded backtracking,
//!   plus timetable KPIs
//! - **`seating`**: Seeded random seat distribution
//!
//! # Concurrency
//!
//! A scheduling run is a single-threaded batch over a full input
//! snapshot; it returns a complete result or an error, never partial
//! state. Independent runs may proceed in parallel on disjoint course
//! sets, each with its own conflict graph.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of
//!   a graph and its application to timetabling problems"
//! - Carter, Laporte & Lee (1996), "Examination timetabling: Algorithmic
//!   strategies and applications"

pub mod checks;
pub mod conflict;
pub mod error;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod seating;
pub mod validation;
