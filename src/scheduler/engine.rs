//! Greedy timetable scheduler with bounded backtracking.
//!
//! # Algorithm
//!
//! 1. Order courses by the configured rule chain (default: descending
//!    conflict degree, the most-constrained-first coloring heuristic).
//! 2. For each course, enumerate `(date, start)` candidates in window
//!    order and commit the first feasible one.
//! 3. A candidate is feasible iff no conflicting course overlaps it, the
//!    class level stays under its daily cap, and rooms free for the whole
//!    span can seat the enrollment.
//! 4. A stuck course unschedules the most recently placed course that
//!    blocks it and resumes from that point, within a fixed backtracking
//!    budget. Exhausting the budget marks the course unplaceable.
//!
//! The search state is an explicit decision stack, so undo is exact and a
//! run is deterministic for fixed inputs and ordering.
//!
//! # Reference
//! Carter, Laporte & Lee (1996), "Examination timetabling: Algorithmic
//! strategies and applications"

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::checks;
use crate::conflict::ConflictGraph;
use crate::error::ScheduleError;
use crate::models::{
    Classroom, Course, Exam, ExamType, ExamWindow, RoomAllocation, Student, TimeSpan, Timetable,
};
use crate::ordering::{OrderingContext, OrderingEngine};
use crate::validation::validate_schedule_inputs;

/// Input container for a scheduling run.
///
/// Carries the full input snapshot; the run never consults anything else.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Courses to place (one exam each).
    pub courses: Vec<Course>,
    /// Roster the conflict graph is derived from.
    pub students: Vec<Student>,
    /// Rooms available on every usable date.
    pub classrooms: Vec<Classroom>,
    /// Exam category of this run.
    pub exam_type: ExamType,
    /// Calendar window and operating hours.
    pub window: ExamWindow,
    /// Max exams per class level per date.
    pub daily_cap: u32,
    /// Exam duration for courses without an override (minutes).
    pub default_duration_min: u32,
    /// Run-level duration overrides (course ID → minutes). Takes
    /// precedence over `Course::duration_min`.
    pub duration_overrides: HashMap<String, u32>,
}

impl ScheduleRequest {
    /// Creates a request with the default daily cap (2) and default exam
    /// duration (75 minutes).
    pub fn new(
        courses: Vec<Course>,
        students: Vec<Student>,
        classrooms: Vec<Classroom>,
        exam_type: ExamType,
        window: ExamWindow,
    ) -> Self {
        Self {
            courses,
            students,
            classrooms,
            exam_type,
            window,
            daily_cap: 2,
            default_duration_min: 75,
            duration_overrides: HashMap::new(),
        }
    }

    /// Sets the per-level daily exam cap.
    pub fn with_daily_cap(mut self, daily_cap: u32) -> Self {
        self.daily_cap = daily_cap;
        self
    }

    /// Sets the default exam duration (minutes).
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_min = minutes;
        self
    }

    /// Adds a run-level duration override for one course.
    pub fn with_duration_override(mut self, course_id: impl Into<String>, minutes: u32) -> Self {
        self.duration_overrides.insert(course_id.into(), minutes);
        self
    }

    /// Resolves a course's exam duration: run override, then course
    /// override, then run default.
    pub fn duration_for(&self, course: &Course) -> u32 {
        self.duration_overrides
            .get(&course.id)
            .copied()
            .unwrap_or_else(|| course.resolved_duration(self.default_duration_min))
    }
}

/// Greedy exam scheduler with bounded backtracking.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_examtime::models::{Classroom, Course, ExamType, ExamWindow, SeatGroup, Student};
/// use u_examtime::scheduler::{ExamScheduler, ScheduleRequest};
///
/// let window = ExamWindow::new(
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
/// );
/// let request = ScheduleRequest::new(
///     vec![Course::new("c-101")],
///     vec![Student::new("s-1").with_course("c-101")],
///     vec![Classroom::new("r-1", 5, 3, SeatGroup::Three)],
///     ExamType::Final,
///     window,
/// );
///
/// let timetable = ExamScheduler::new().schedule(&request).unwrap();
/// assert_eq!(timetable.exam_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ExamScheduler {
    ordering: OrderingEngine,
    max_backtracks: usize,
}

impl ExamScheduler {
    /// Creates a scheduler with the default ordering (most-constrained
    /// first) and backtracking budget.
    pub fn new() -> Self {
        Self {
            ordering: OrderingEngine::most_constrained_first(),
            max_backtracks: 200,
        }
    }

    /// Sets the course-visit ordering.
    pub fn with_ordering(mut self, ordering: OrderingEngine) -> Self {
        self.ordering = ordering;
        self
    }

    /// Sets the backtracking budget (number of unschedule steps).
    pub fn with_backtrack_limit(mut self, max_backtracks: usize) -> Self {
        self.max_backtracks = max_backtracks;
        self
    }

    /// Runs the scheduler over a full input snapshot.
    ///
    /// Returns a complete, validated timetable, or an error naming every
    /// course left unplaced. Never returns a partial timetable.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<Timetable, ScheduleError> {
        validate_schedule_inputs(
            &request.courses,
            &request.students,
            &request.classrooms,
            &request.window,
            request.default_duration_min,
            &request.duration_overrides,
            request.daily_cap,
        )
        .map_err(ScheduleError::InvalidInput)?;

        let graph = ConflictGraph::build(&request.students);
        let context =
            OrderingContext::derive(&graph, &request.students, request.default_duration_min);
        let order = self.ordering.sort_indices(&request.courses, &context);

        let mut search = Search::new(request, &graph, &context);
        let mut next_candidate = vec![0usize; order.len()];
        let mut unplaceable: Vec<String> = Vec::new();
        let mut backtracks = 0usize;
        let mut pos = 0usize;

        while pos < order.len() {
            let course_idx = order[pos];
            let course_id = request.courses[course_idx].id.clone();

            if unplaceable.contains(&course_id) {
                pos += 1;
                continue;
            }

            match search.first_feasible(course_idx, next_candidate[pos]) {
                Some((cand_idx, rooms)) => {
                    search.commit(pos, course_idx, cand_idx, rooms);
                    pos += 1;
                }
                None => {
                    let blame = if backtracks < self.max_backtracks {
                        search.most_recent_blocker(course_idx)
                    } else {
                        None
                    };
                    match blame {
                        Some(stack_idx) => {
                            backtracks += 1;
                            let resume = search.unwind_to(stack_idx, &mut next_candidate);
                            debug!(
                                course = %course_id,
                                resume_pos = resume,
                                backtracks,
                                "backtracking"
                            );
                            pos = resume;
                        }
                        None => {
                            debug!(course = %course_id, "no feasible slot");
                            unplaceable.push(course_id);
                            pos += 1;
                        }
                    }
                }
            }
        }

        if !unplaceable.is_empty() {
            warn!(
                count = unplaceable.len(),
                "scheduling run infeasible under current constraints"
            );
            unplaceable.sort();
            return Err(ScheduleError::Infeasible { unplaceable });
        }

        let mut timetable = Timetable {
            exams: search.committed,
        };
        timetable.sort_chronological();
        debug!(
            exams = timetable.exam_count(),
            days = timetable.days_used(),
            "scheduling run committed"
        );
        Ok(timetable)
    }
}

impl Default for ExamScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// One committed placement decision.
struct Decision {
    /// Position in the visit order.
    pos: usize,
    /// Index into that course's candidate list.
    cand_idx: usize,
}

/// Mutable search state: committed exams plus the bookkeeping needed to
/// test feasibility and undo placements exactly.
struct Search<'a> {
    request: &'a ScheduleRequest,
    graph: &'a ConflictGraph,
    level_of: HashMap<String, u8>,
    enrollment: &'a HashMap<String, usize>,
    /// Per-course `(date, start)` candidates in enumeration order.
    candidates: Vec<Vec<(NaiveDate, u32)>>,
    /// Classroom indices, largest exam capacity first.
    rooms_by_size: Vec<usize>,
    /// Committed exams, in decision order.
    committed: Vec<Exam>,
    /// Padded busy spans per (date, classroom).
    room_busy: HashMap<(NaiveDate, String), Vec<TimeSpan>>,
    decisions: Vec<Decision>,
}

impl<'a> Search<'a> {
    fn new(
        request: &'a ScheduleRequest,
        graph: &'a ConflictGraph,
        context: &'a OrderingContext,
    ) -> Self {
        let level_of: HashMap<String, u8> = request
            .courses
            .iter()
            .map(|c| (c.id.clone(), c.class_level))
            .collect();

        let dates = request.window.usable_dates();
        let candidates = request
            .courses
            .iter()
            .map(|course| {
                let duration = request.duration_for(course);
                let starts = request.window.slot_starts(duration);
                dates
                    .iter()
                    .flat_map(|date| starts.iter().map(move |&s| (*date, s)))
                    .collect()
            })
            .collect();

        let mut rooms_by_size: Vec<usize> = (0..request.classrooms.len()).collect();
        rooms_by_size.sort_by(|&a, &b| {
            let ra = &request.classrooms[a];
            let rb = &request.classrooms[b];
            rb.exam_capacity()
                .cmp(&ra.exam_capacity())
                .then_with(|| ra.id.cmp(&rb.id))
        });

        Self {
            request,
            graph,
            level_of,
            enrollment: &context.enrollment_counts,
            candidates,
            rooms_by_size,
            committed: Vec::new(),
            room_busy: HashMap::new(),
            decisions: Vec::new(),
        }
    }

    /// Finds the first feasible candidate at or after `from`, along with
    /// the room allocation that makes it feasible.
    fn first_feasible(
        &self,
        course_idx: usize,
        from: usize,
    ) -> Option<(usize, Vec<RoomAllocation>)> {
        let course = &self.request.courses[course_idx];
        let duration = self.request.duration_for(course);

        for (cand_idx, &(date, start)) in self.candidates[course_idx].iter().enumerate().skip(from)
        {
            let span = TimeSpan::new(start, start + duration);
            let padded = span.padded(self.request.window.break_min);

            if checks::daily_count_exceeded(
                &self.committed,
                &self.level_of,
                course.class_level,
                date,
                self.request.daily_cap,
            ) {
                continue;
            }

            if self.conflicts_blocked(&course.id, date, &padded) {
                continue;
            }

            if let Some(rooms) = self.allocate_rooms(&course.id, date, &padded) {
                return Some((cand_idx, rooms));
            }
        }

        None
    }

    /// Whether any committed conflicting exam overlaps the padded span.
    fn conflicts_blocked(&self, course_id: &str, date: NaiveDate, padded: &TimeSpan) -> bool {
        let Some(conflicts) = self.graph.conflicts_of(course_id) else {
            return false;
        };
        self.committed.iter().any(|exam| {
            exam.date == date
                && conflicts.contains(&exam.course_id)
                && checks::spans_overlap(
                    &exam.span.padded(self.request.window.break_min),
                    padded,
                )
        })
    }

    /// Greedily picks rooms free during the padded span, largest first,
    /// until the enrollment fits. `None` when the free capacity is short.
    fn allocate_rooms(
        &self,
        course_id: &str,
        date: NaiveDate,
        padded: &TimeSpan,
    ) -> Option<Vec<RoomAllocation>> {
        let mut needed = self.enrollment.get(course_id).copied().unwrap_or(0) as u32;
        if needed == 0 {
            return Some(Vec::new());
        }

        let mut allocations = Vec::new();
        for &room_idx in &self.rooms_by_size {
            let room = &self.request.classrooms[room_idx];
            if self.room_occupied(date, &room.id, padded) {
                continue;
            }
            let seats = needed.min(room.exam_capacity());
            allocations.push(RoomAllocation::new(room.id.clone(), seats));
            needed -= seats;
            if needed == 0 {
                return Some(allocations);
            }
        }

        None
    }

    fn room_occupied(&self, date: NaiveDate, room_id: &str, padded: &TimeSpan) -> bool {
        self.room_busy
            .get(&(date, room_id.to_string()))
            .is_some_and(|spans| spans.iter().any(|s| checks::spans_overlap(s, padded)))
    }

    /// Commits a placement and records the decision.
    fn commit(
        &mut self,
        pos: usize,
        course_idx: usize,
        cand_idx: usize,
        rooms: Vec<RoomAllocation>,
    ) {
        let course = &self.request.courses[course_idx];
        let duration = self.request.duration_for(course);
        let (date, start) = self.candidates[course_idx][cand_idx];

        let mut exam = Exam::new(
            course.id.clone(),
            self.request.exam_type,
            date,
            start,
            duration,
        );
        let padded = exam.span.padded(self.request.window.break_min);
        for allocation in rooms {
            self.room_busy
                .entry((date, allocation.classroom_id.clone()))
                .or_default()
                .push(padded);
            exam.rooms.push(allocation);
        }

        debug!(
            course = %course.id,
            date = %date,
            start = %exam.span.start_label(),
            rooms = exam.rooms.len(),
            "placed exam"
        );
        self.committed.push(exam);
        self.decisions.push(Decision { pos, cand_idx });
    }

    /// Finds the most recent decision whose course blocks the given one:
    /// either they share students, or they share a class level (and so
    /// compete for the daily cap).
    ///
    /// `decisions` and `committed` are parallel stacks, so the returned
    /// index addresses both.
    fn most_recent_blocker(&self, course_idx: usize) -> Option<usize> {
        let course = &self.request.courses[course_idx];
        (0..self.committed.len()).rev().find(|&i| {
            let placed = &self.committed[i];
            self.graph.in_conflict(&course.id, &placed.course_id)
                || self.level_of.get(&placed.course_id) == Some(&course.class_level)
        })
    }

    /// Pops every decision above and including `stack_idx`. The blamed
    /// decision's course resumes from its next candidate; every later
    /// position restarts from its first candidate, since the slots freed
    /// here may suit them better.
    ///
    /// Returns the visit-order position to resume from.
    fn unwind_to(&mut self, stack_idx: usize, next_candidate: &mut [usize]) -> usize {
        let resume_pos = self.decisions[stack_idx].pos;
        let mut blamed_cand = 0;

        while self.decisions.len() > stack_idx {
            let decision = match self.decisions.pop() {
                Some(d) => d,
                None => break,
            };
            let exam = match self.committed.pop() {
                Some(e) => e,
                None => break,
            };
            for room in exam.room_ids() {
                if let Some(spans) = self.room_busy.get_mut(&(exam.date, room.to_string())) {
                    spans.pop();
                }
            }
            blamed_cand = decision.cand_idx;
        }

        next_candidate[resume_pos] = blamed_cand + 1;
        for slot in next_candidate.iter_mut().skip(resume_pos + 1) {
            *slot = 0;
        }

        resume_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatGroup;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(id: &str, capacity: u32) -> Classroom {
        // rows sized so the layout never caps below `capacity`
        Classroom::new(id, capacity, 1, SeatGroup::Two).with_capacity(capacity)
    }

    fn window_days(days: u32) -> ExamWindow {
        ExamWindow::new(date(2025, 1, 6), date(2025, 1, 5 + days))
    }

    fn request(
        courses: Vec<Course>,
        students: Vec<Student>,
        classrooms: Vec<Classroom>,
        window: ExamWindow,
    ) -> ScheduleRequest {
        ScheduleRequest::new(courses, students, classrooms, ExamType::Final, window)
    }

    #[test]
    fn test_single_course() {
        let req = request(
            vec![Course::new("a")],
            vec![Student::new("s-1").with_course("a")],
            vec![room("r-1", 30)],
            window_days(3),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();

        assert_eq!(timetable.exam_count(), 1);
        let exam = timetable.exam_for_course("a").unwrap();
        assert_eq!(exam.date, date(2025, 1, 6));
        assert_eq!(exam.span.start_min, 540); // earliest slot
        assert_eq!(exam.total_seats(), 1);
    }

    #[test]
    fn test_unrelated_courses_share_first_day() {
        // No shared students, two rooms: both land on day 1.
        let req = request(
            vec![Course::new("a"), Course::new("b")],
            vec![
                Student::new("s-1").with_course("a"),
                Student::new("s-2").with_course("b"),
            ],
            vec![room("r-1", 30), room("r-2", 30)],
            window_days(3),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();

        assert_eq!(timetable.exam_count(), 2);
        assert_eq!(timetable.days_used(), 1);
    }

    #[test]
    fn test_shared_student_forces_separation() {
        // One student in both courses, one day: different, non-overlapping
        // (break-padded) slots on that day.
        let req = request(
            vec![Course::new("a"), Course::new("b")],
            vec![Student::new("s-1").with_course("a").with_course("b")],
            vec![room("r-1", 30), room("r-2", 30)],
            window_days(1),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();

        let a = timetable.exam_for_course("a").unwrap();
        let b = timetable.exam_for_course("b").unwrap();
        assert_eq!(a.date, b.date);
        assert!(!a.span.padded(15).overlaps(&b.span.padded(15)));
    }

    #[test]
    fn test_one_slot_two_conflicting_courses_infeasible() {
        // Operating hours admit exactly one 75-minute slot; the courses
        // share a student, so one of them cannot be placed.
        let window = window_days(1).with_hours(540, 615);
        let req = request(
            vec![Course::new("a"), Course::new("b")],
            vec![Student::new("s-1").with_course("a").with_course("b")],
            vec![room("r-1", 30)],
            window,
        );
        let err = ExamScheduler::new().schedule(&req).unwrap_err();

        match err {
            ScheduleError::Infeasible { unplaceable } => {
                assert!(!unplaceable.is_empty());
                assert!(unplaceable.iter().all(|c| c == "a" || c == "b"));
            }
            other => panic!("expected Infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_daily_cap_blocks_third_exam() {
        // Three level-1 courses, cap 2, one day: infeasible.
        let req = request(
            vec![Course::new("a"), Course::new("b"), Course::new("c")],
            vec![
                Student::new("s-1").with_course("a"),
                Student::new("s-2").with_course("b"),
                Student::new("s-3").with_course("c"),
            ],
            vec![room("r-1", 30)],
            window_days(1),
        );
        let err = ExamScheduler::new().schedule(&req).unwrap_err();

        match err {
            ScheduleError::Infeasible { unplaceable } => {
                assert!(!unplaceable.is_empty());
            }
            other => panic!("expected Infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_daily_cap_spills_to_second_day() {
        // Same three courses over two days: third lands on day 2.
        let req = request(
            vec![Course::new("a"), Course::new("b"), Course::new("c")],
            vec![
                Student::new("s-1").with_course("a"),
                Student::new("s-2").with_course("b"),
                Student::new("s-3").with_course("c"),
            ],
            vec![room("r-1", 30)],
            window_days(2),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();

        assert_eq!(timetable.exam_count(), 3);
        assert_eq!(timetable.days_used(), 2);
        assert_eq!(timetable.exams_on(date(2025, 1, 6)).len(), 2);
        assert_eq!(timetable.exams_on(date(2025, 1, 7)).len(), 1);
    }

    #[test]
    fn test_different_levels_have_independent_caps() {
        let req = request(
            vec![
                Course::new("a").with_class_level(1),
                Course::new("b").with_class_level(1),
                Course::new("c").with_class_level(2),
                Course::new("d").with_class_level(2),
            ],
            vec![
                Student::new("s-1").with_course("a"),
                Student::new("s-2").with_course("b"),
                Student::new("s-3").with_course("c"),
                Student::new("s-4").with_course("d"),
            ],
            vec![room("r-1", 30), room("r-2", 30)],
            window_days(1),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();
        assert_eq!(timetable.exam_count(), 4);
        assert_eq!(timetable.days_used(), 1);
    }

    #[test]
    fn test_duration_override_extends_conflict_shadow() {
        // 'long' runs 09:00-12:00; 'short' shares a student and must not
        // start before the padded end at 12:15 on the same day.
        let req = ScheduleRequest::new(
            vec![Course::new("long"), Course::new("short")],
            vec![Student::new("s-1").with_course("long").with_course("short")],
            vec![room("r-1", 30), room("r-2", 30)],
            ExamType::Final,
            window_days(1),
        )
        .with_duration_override("long", 180);

        let timetable = ExamScheduler::new().schedule(&req).unwrap();
        let long = timetable.exam_for_course("long").unwrap();
        let short = timetable.exam_for_course("short").unwrap();

        assert_eq!(long.duration_min(), 180);
        assert_eq!(short.duration_min(), 75);
        assert!(!long.span.padded(15).overlaps(&short.span.padded(15)));
    }

    #[test]
    fn test_large_course_spans_multiple_rooms() {
        let students: Vec<Student> = (0..50)
            .map(|i| Student::new(format!("s-{i:02}")).with_course("big"))
            .collect();
        let req = request(
            vec![Course::new("big")],
            students,
            vec![room("r-a", 30), room("r-b", 30)],
            window_days(1),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();

        let exam = timetable.exam_for_course("big").unwrap();
        assert_eq!(exam.total_seats(), 50);
        assert_eq!(exam.rooms.len(), 2);
        assert_eq!(exam.rooms[0].seats, 30); // largest room filled first
        assert_eq!(exam.rooms[1].seats, 20);
    }

    #[test]
    fn test_enrollment_exceeds_all_rooms() {
        let students: Vec<Student> = (0..40)
            .map(|i| Student::new(format!("s-{i:02}")).with_course("big"))
            .collect();
        let req = request(
            vec![Course::new("big")],
            students,
            vec![room("r-1", 30)],
            window_days(3),
        );
        let err = ExamScheduler::new().schedule(&req).unwrap_err();

        match err {
            ScheduleError::Infeasible { unplaceable } => {
                assert_eq!(unplaceable, vec!["big".to_string()]);
            }
            other => panic!("expected Infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_rooms_never_double_booked() {
        // One room, four unrelated courses across two levels: every pair
        // of exams in the room must be disjoint in time.
        let req = request(
            vec![
                Course::new("a").with_class_level(1),
                Course::new("b").with_class_level(2),
                Course::new("c").with_class_level(3),
                Course::new("d").with_class_level(4),
            ],
            vec![
                Student::new("s-1").with_course("a"),
                Student::new("s-2").with_course("b"),
                Student::new("s-3").with_course("c"),
                Student::new("s-4").with_course("d"),
            ],
            vec![room("r-1", 30)],
            window_days(1),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();

        for (i, a) in timetable.exams.iter().enumerate() {
            for b in timetable.exams.iter().skip(i + 1) {
                assert!(!checks::exams_overlap(a, b), "{} and {}", a.course_id, b.course_id);
            }
        }
    }

    #[test]
    fn test_zero_enrollment_course_schedules_without_rooms() {
        let req = request(
            vec![Course::new("ghost")],
            vec![],
            vec![room("r-1", 30)],
            window_days(1),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();
        let exam = timetable.exam_for_course("ghost").unwrap();
        assert!(exam.rooms.is_empty());
        assert_eq!(exam.total_seats(), 0);
    }

    #[test]
    fn test_empty_course_set() {
        let req = request(vec![], vec![], vec![room("r-1", 30)], window_days(1));
        let timetable = ExamScheduler::new().schedule(&req).unwrap();
        assert!(timetable.is_empty());
    }

    #[test]
    fn test_invalid_input_rejected_before_placement() {
        let window = ExamWindow::new(date(2025, 1, 10), date(2025, 1, 6));
        let req = request(
            vec![Course::new("a")],
            vec![Student::new("s-1").with_course("a")],
            vec![room("r-1", 30)],
            window,
        );
        let err = ExamScheduler::new().schedule(&req).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_deterministic_replay() {
        let mk = || {
            request(
                vec![
                    Course::new("a"),
                    Course::new("b"),
                    Course::new("c").with_class_level(2),
                    Course::new("d").with_class_level(2),
                ],
                vec![
                    Student::new("s-1").with_course("a").with_course("b"),
                    Student::new("s-2").with_course("b").with_course("c"),
                    Student::new("s-3").with_course("c").with_course("d"),
                ],
                vec![room("r-1", 30), room("r-2", 20)],
                window_days(3),
            )
        };

        let first = ExamScheduler::new().schedule(&mk()).unwrap();
        let second = ExamScheduler::new().schedule(&mk()).unwrap();

        let key = |t: &Timetable| {
            t.exams
                .iter()
                .map(|e| (e.course_id.clone(), e.date, e.span.start_min))
                .collect::<Vec<_>>()
        };
        assert_eq!(key(&first), key(&second));
    }

    #[test]
    fn test_committed_timetable_passes_audit() {
        let students = vec![
            Student::new("s-1").with_course("a").with_course("b"),
            Student::new("s-2").with_course("b").with_course("c"),
            Student::new("s-3").with_course("a").with_course("c"),
        ];
        let courses = vec![Course::new("a"), Course::new("b"), Course::new("c")];
        let req = request(
            courses.clone(),
            students.clone(),
            vec![room("r-1", 30), room("r-2", 30)],
            window_days(3),
        );
        let timetable = ExamScheduler::new().schedule(&req).unwrap();

        let graph = ConflictGraph::build(&students);
        let violations = timetable.audit(&graph, &req.window, &courses, req.daily_cap);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_dense_mutual_conflicts_pack_one_day() {
        // Five mutually conflicting courses across one 8-hour day with
        // cap 5: every pair must be separated by the break padding.
        let students: Vec<Student> = (0..5)
            .flat_map(|i| {
                (i + 1..5).map(move |j| {
                    Student::new(format!("s-{i}{j}"))
                        .with_course(format!("c-{i}"))
                        .with_course(format!("c-{j}"))
                })
            })
            .collect();
        let courses: Vec<Course> = (0..5).map(|i| Course::new(format!("c-{i}"))).collect();
        let req = request(
            courses,
            students,
            vec![room("r-1", 30), room("r-2", 30)],
            window_days(1),
        )
        .with_daily_cap(5)
        .with_default_duration(60);

        let timetable = ExamScheduler::new().schedule(&req).unwrap();
        assert_eq!(timetable.exam_count(), 5);
        for (i, a) in timetable.exams.iter().enumerate() {
            for b in timetable.exams.iter().skip(i + 1) {
                assert!(!a.span.padded(15).overlaps(&b.span.padded(15)));
            }
        }
    }
}
