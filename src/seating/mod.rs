//! Randomized seat assignment for committed exams.
//!
//! Distributes one exam's enrolled students across its rooms' seats:
//! students are shuffled with an injected random source (so seating is
//! not exploitable alphabetical order, yet replays exactly under a fixed
//! seed), then walked against the deterministic seat layout.
//!
//! # Algorithm
//!
//! 1. Validate the candidate rooms and enrolled students.
//! 2. Verify combined capacity covers the enrollment; fail with the
//!    numeric deficit otherwise.
//! 3. Shuffle the student list (Fisher-Yates via `rand`).
//! 4. Walk rooms in fill order and seats in layout order, one student
//!    per seat, spilling into the next room when one fills up.
//!
//! The resulting plan is committed all-or-nothing: any failure leaves no
//! partial seating records.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::SeatingError;
use crate::models::{Classroom, Exam, SeatAssignment, SeatingPlan, Student};
use crate::validation::{validate_seating_inputs, ValidationError, ValidationErrorKind};

/// Seat assigner for one exam at a time.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_examtime::models::{Classroom, Exam, ExamType, SeatGroup, Student};
/// use u_examtime::seating::SeatAssigner;
///
/// let exam = Exam::new(
///     "c-101",
///     ExamType::Final,
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     540,
///     75,
/// );
/// let students = vec![Student::new("s-1").with_course("c-101")];
/// let rooms = vec![Classroom::new("r-1", 5, 3, SeatGroup::Three)];
///
/// let plan = SeatAssigner::new()
///     .assign_seeded(&exam, &students, &rooms, 42)
///     .unwrap();
/// assert_eq!(plan.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatAssigner;

impl SeatAssigner {
    /// Creates a seat assigner.
    pub fn new() -> Self {
        Self
    }

    /// Assigns seats using a caller-provided random source.
    ///
    /// `students` is the exam's enrolled set; `classrooms` are the
    /// candidate rooms in fill order. When the exam carries room
    /// allocations, they fix the fill order and per-room seat budgets
    /// instead, and every allocated room must appear among the
    /// candidates.
    ///
    /// Returns the complete plan, or an error; no partial plan is ever
    /// produced. An exam with zero enrolled students yields an empty
    /// plan.
    pub fn assign<R: Rng>(
        &self,
        exam: &Exam,
        students: &[Student],
        classrooms: &[Classroom],
        rng: &mut R,
    ) -> Result<SeatingPlan, SeatingError> {
        validate_seating_inputs(classrooms, students).map_err(SeatingError::InvalidInput)?;

        let walk = room_walk(exam, classrooms)?;

        let available: usize = walk.iter().map(|(_, budget)| *budget).sum();
        if students.len() > available {
            return Err(SeatingError::CapacityShortfall {
                required: students.len(),
                available,
                shortfall: students.len() - available,
            });
        }

        let mut shuffled: Vec<&Student> = students.iter().collect();
        shuffled.shuffle(rng);

        let mut plan = SeatingPlan::new(exam.course_id.clone());
        let mut next = shuffled.into_iter();
        'rooms: for (room, budget) in walk {
            for seat in room.seat_coordinates().into_iter().take(budget) {
                let Some(student) = next.next() else {
                    break 'rooms;
                };
                plan.add(SeatAssignment::new(
                    exam.course_id.clone(),
                    room.id.clone(),
                    seat,
                    student.id.clone(),
                ));
            }
        }

        debug!(course = %exam.course_id, seated = plan.len(), "seating plan committed");
        Ok(plan)
    }

    /// Assigns seats from a seed, for reproducible runs.
    pub fn assign_seeded(
        &self,
        exam: &Exam,
        students: &[Student],
        classrooms: &[Classroom],
        seed: u64,
    ) -> Result<SeatingPlan, SeatingError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.assign(exam, students, classrooms, &mut rng)
    }
}

/// Resolves the room fill order and per-room seat budgets.
///
/// With allocations: allocation order, budget = min(allocated seats, room
/// exam capacity). Without: candidate order, budget = room exam capacity.
fn room_walk<'a>(
    exam: &Exam,
    classrooms: &'a [Classroom],
) -> Result<Vec<(&'a Classroom, usize)>, SeatingError> {
    if exam.rooms.is_empty() {
        return Ok(classrooms
            .iter()
            .map(|room| (room, room.exam_capacity() as usize))
            .collect());
    }

    let mut walk = Vec::with_capacity(exam.rooms.len());
    for allocation in &exam.rooms {
        let Some(room) = classrooms.iter().find(|r| r.id == allocation.classroom_id) else {
            return Err(SeatingError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::UnknownClassroom,
                format!(
                    "Exam for '{}' allocates unknown classroom '{}'",
                    exam.course_id, allocation.classroom_id
                ),
            )]));
        };
        let budget = allocation.seats.min(room.exam_capacity()) as usize;
        walk.push((room, budget));
    }
    Ok(walk)
}
