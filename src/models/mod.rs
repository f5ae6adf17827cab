//! Exam scheduling domain models.
//!
//! Provides the core data types for representing exam timetabling
//! problems and solutions: the externally supplied records (courses,
//! students, classrooms), the run configuration (scheduling window), and
//! the records this crate produces (exams, timetables, seating plans).
//!
//! # Lifecycle
//!
//! | Type | Origin |
//! |------|--------|
//! | `Course`, `Student`, `Classroom` | Supplied by the host's import layer |
//! | `ExamWindow` | Run configuration |
//! | `Exam`, `Timetable`, `SeatingPlan` | Produced here, immutable once committed |

mod calendar;
mod classroom;
mod course;
mod exam;
mod seating;
mod student;
mod timetable;

pub use calendar::{ExamWindow, TimeSpan};
pub use classroom::{Classroom, SeatGroup, SeatPos};
pub use course::Course;
pub use exam::{Exam, ExamType, RoomAllocation};
pub use seating::{SeatAssignment, SeatingPlan};
pub use student::Student;
pub use timetable::{Timetable, Violation, ViolationKind};
