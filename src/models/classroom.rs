//! Classroom model and seat layout derivation.
//!
//! A classroom is a grid of benches: `rows` rows, each with `columns`
//! benches of `seat_group` physical seats. Under exam spacing only some
//! in-bench positions are usable, so the exam-usable seat list is derived
//! from the grid rather than stored.
//!
//! # Seat Coordinates
//! Coordinates are 1-based. For bench `b` (0-based) of width `w`, the
//! usable offset `o` maps to column `b * w + o`. Rows come first in the
//! derived order, then benches left-to-right, then offsets.

use serde::{Deserialize, Serialize};

/// Bench width: physical seats per bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatGroup {
    /// Two-seat benches; one student per bench.
    Two,
    /// Three-seat benches; both aisle seats usable.
    Three,
    /// Four-seat benches; both aisle seats usable, middle pair empty.
    Four,
}

impl SeatGroup {
    /// Physical seats per bench.
    #[inline]
    pub fn width(&self) -> u32 {
        match self {
            SeatGroup::Two => 2,
            SeatGroup::Three => 3,
            SeatGroup::Four => 4,
        }
    }

    /// In-bench offsets (1-based) usable under exam spacing.
    pub fn exam_offsets(&self) -> &'static [u32] {
        match self {
            SeatGroup::Two => &[2],
            SeatGroup::Three => &[1, 3],
            SeatGroup::Four => &[1, 4],
        }
    }
}

/// A seat coordinate within a classroom grid (1-based row and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatPos {
    /// Row, front of the room first.
    pub row: u32,
    /// Column across the full bench row.
    pub col: u32,
}

impl SeatPos {
    /// Creates a seat coordinate.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for SeatPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// A classroom available for exam seating.
///
/// `capacity` is the administrative seat budget and may be lower than the
/// derived layout allows; placement never exceeds either bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Room code (e.g., "D-204").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Administrative capacity for one exam.
    pub capacity: u32,
    /// Number of bench rows.
    pub rows: u32,
    /// Benches per row.
    pub columns: u32,
    /// Bench width.
    pub seat_group: SeatGroup,
}

impl Classroom {
    /// Creates a new classroom with the given ID and grid shape.
    pub fn new(id: impl Into<String>, rows: u32, columns: u32, seat_group: SeatGroup) -> Self {
        let id = id.into();
        let usable = rows * columns * seat_group.exam_offsets().len() as u32;
        Self {
            code: id.clone(),
            id,
            name: String::new(),
            capacity: usable,
            rows,
            columns,
            seat_group,
        }
    }

    /// Sets the room code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the administrative capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// The ordered exam-usable seat coordinates.
    ///
    /// Rows first, then benches left-to-right, then usable in-bench
    /// offsets. Deterministic for a fixed grid.
    pub fn seat_coordinates(&self) -> Vec<SeatPos> {
        let width = self.seat_group.width();
        let mut seats =
            Vec::with_capacity((self.rows * self.columns) as usize * self.seat_group.exam_offsets().len());
        for r in 0..self.rows {
            for b in 0..self.columns {
                for &o in self.seat_group.exam_offsets() {
                    seats.push(SeatPos::new(r + 1, b * width + o));
                }
            }
        }
        seats
    }

    /// Number of students this room can take in one exam: the lesser of
    /// the administrative capacity and the derived usable seat count.
    pub fn exam_capacity(&self) -> u32 {
        let usable = self.rows * self.columns * self.seat_group.exam_offsets().len() as u32;
        self.capacity.min(usable)
    }

    /// Total physical seats in the grid (ignoring exam spacing).
    pub fn physical_seats(&self) -> u32 {
        self.rows * self.columns * self.seat_group.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_group_offsets() {
        assert_eq!(SeatGroup::Two.exam_offsets(), &[2]);
        assert_eq!(SeatGroup::Three.exam_offsets(), &[1, 3]);
        assert_eq!(SeatGroup::Four.exam_offsets(), &[1, 4]);
    }

    #[test]
    fn test_seat_coordinates_order() {
        // 2 rows, 2 benches of 3: usable offsets 1 and 3 per bench.
        let room = Classroom::new("r1", 2, 2, SeatGroup::Three);
        let seats = room.seat_coordinates();
        assert_eq!(
            seats,
            vec![
                SeatPos::new(1, 1),
                SeatPos::new(1, 3),
                SeatPos::new(1, 4),
                SeatPos::new(1, 6),
                SeatPos::new(2, 1),
                SeatPos::new(2, 3),
                SeatPos::new(2, 4),
                SeatPos::new(2, 6),
            ]
        );
    }

    #[test]
    fn test_seat_coordinates_unique() {
        let room = Classroom::new("r1", 10, 4, SeatGroup::Four);
        let seats = room.seat_coordinates();
        let mut dedup = seats.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), seats.len());
    }

    #[test]
    fn test_exam_capacity_layout_bound() {
        // 3 rows * 2 benches * 1 usable seat = 6 usable seats.
        let room = Classroom::new("r1", 3, 2, SeatGroup::Two).with_capacity(40);
        assert_eq!(room.exam_capacity(), 6);
        assert_eq!(room.physical_seats(), 12);
    }

    #[test]
    fn test_exam_capacity_admin_bound() {
        // 5 rows * 3 benches * 2 usable = 30 usable, capped at 20.
        let room = Classroom::new("r1", 5, 3, SeatGroup::Four).with_capacity(20);
        assert_eq!(room.exam_capacity(), 20);
    }

    #[test]
    fn test_default_capacity_matches_layout() {
        let room = Classroom::new("r1", 4, 5, SeatGroup::Three);
        assert_eq!(room.capacity, 40);
        assert_eq!(room.exam_capacity(), 40);
    }

    #[test]
    fn test_seat_pos_display() {
        assert_eq!(SeatPos::new(3, 7).to_string(), "3-7");
    }

    #[test]
    fn test_classroom_builder() {
        let room = Classroom::new("r1", 5, 3, SeatGroup::Three)
            .with_code("D-204")
            .with_name("Lecture Hall D")
            .with_capacity(25);
        assert_eq!(room.code, "D-204");
        assert_eq!(room.name, "Lecture Hall D");
        assert_eq!(room.capacity, 25);
    }
}
