//! Timetable quality metrics (KPIs).
//!
//! Computes the best-effort objectives of a scheduling run from a
//! committed timetable: how compact it is and how evenly the load
//! spreads over the window.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days Used | Distinct dates carrying at least one exam |
//! | Window Days | Usable dates in the scheduling window |
//! | Day Utilization | days_used / window_days |
//! | Peak Daily Load | Largest exam count on any one date |
//! | Avg Daily Load | exam_count / days_used |
//! | Total Exam Minutes | Sum of exam durations |

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{ExamWindow, Timetable};

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Number of committed exams.
    pub exam_count: usize,
    /// Distinct dates carrying at least one exam.
    pub days_used: usize,
    /// Usable dates in the scheduling window.
    pub window_days: usize,
    /// Fraction of the window's usable dates carrying exams (0.0..1.0).
    pub day_utilization: f64,
    /// Largest exam count on any single date.
    pub peak_daily_load: usize,
    /// Date carrying the most exams (earliest on ties).
    pub busiest_date: Option<NaiveDate>,
    /// Mean exams per used day.
    pub avg_daily_load: f64,
    /// Sum of exam durations (minutes).
    pub total_exam_minutes: u32,
    /// Exam count per date.
    pub load_by_date: HashMap<NaiveDate, usize>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and the window it was built for.
    pub fn calculate(timetable: &Timetable, window: &ExamWindow) -> Self {
        let exam_count = timetable.exam_count();
        let days_used = timetable.days_used();
        let window_days = window.usable_dates().len();
        let load_by_date = timetable.load_by_date();

        let busiest_date = load_by_date
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(date, _)| *date);
        let peak_daily_load = load_by_date.values().copied().max().unwrap_or(0);

        let day_utilization = if window_days == 0 {
            0.0
        } else {
            days_used as f64 / window_days as f64
        };
        let avg_daily_load = if days_used == 0 {
            0.0
        } else {
            exam_count as f64 / days_used as f64
        };
        let total_exam_minutes = timetable.exams.iter().map(|e| e.duration_min()).sum();

        Self {
            exam_count,
            days_used,
            window_days,
            day_utilization,
            peak_daily_load,
            busiest_date,
            avg_daily_load,
            total_exam_minutes,
            load_by_date,
        }
    }

    /// Whether the timetable meets the given compactness thresholds.
    pub fn meets_thresholds(&self, max_peak_load: usize, max_days: usize) -> bool {
        self.peak_daily_load <= max_peak_load && self.days_used <= max_days
    }
}
