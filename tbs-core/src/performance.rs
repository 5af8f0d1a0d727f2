//! Scheduled performances and their seat grids.
//!
//! # Seat layout
//!
//! A theatre of dimension `N` gives every performance an `N x N` grid. Rows
//! with 0-based index below `N / 2` (floor) are premium; the rest are regular.
//! All coordinates exposed outside this module are 1-based.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::BookingError;
use crate::ids::IdGenerator;
use crate::types::{ActId, Identifiable, PerformanceId, SeatPosition, TicketId};

// ---------------------------------------------------------------------------
// Seat
// ---------------------------------------------------------------------------

/// One bookable position. Booking is one-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    position: SeatPosition,
    premium: bool,
    booked: bool,
}

impl Seat {
    fn new(position: SeatPosition, premium: bool) -> Self {
        Self {
            position,
            premium,
            booked: false,
        }
    }

    pub fn position(&self) -> SeatPosition {
        self.position
    }

    pub fn row(&self) -> u32 {
        self.position.row
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn is_premium(&self) -> bool {
        self.premium
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    fn book(&mut self) -> Result<(), BookingError> {
        if self.booked {
            return Err(BookingError::SeatAlreadyBooked {
                row: self.position.row,
                column: self.position.column,
            });
        }
        self.booked = true;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Seat grid
// ---------------------------------------------------------------------------

/// Square grid of seats stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    dimension: u32,
    seats: Vec<Seat>,
}

impl SeatGrid {
    pub fn new(dimension: u32) -> Self {
        let premium_rows = dimension / 2;
        let seats = (0..dimension)
            .flat_map(|i| {
                (0..dimension).map(move |j| {
                    Seat::new(SeatPosition::new(i + 1, j + 1), i < premium_rows)
                })
            })
            .collect();
        Self { dimension, seats }
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Number of leading premium rows.
    pub fn premium_rows(&self) -> u32 {
        self.dimension / 2
    }

    /// Seat at 1-based `(row, column)`, or `None` when out of range.
    pub fn seat(&self, row: u32, column: u32) -> Option<&Seat> {
        let i = self.index(row, column)?;
        Some(&self.seats[i])
    }

    fn seat_mut(&mut self, row: u32, column: u32) -> Option<&mut Seat> {
        let i = self.index(row, column)?;
        Some(&mut self.seats[i])
    }

    fn index(&self, row: u32, column: u32) -> Option<usize> {
        let in_range = |v: u32| (1..=self.dimension).contains(&v);
        if !in_range(row) || !in_range(column) {
            return None;
        }
        let (row, column, dimension) = (row as usize, column as usize, self.dimension as usize);
        Some((row - 1) * dimension + (column - 1))
    }

    /// Unbooked positions in row-major order.
    pub fn unbooked(&self) -> Vec<SeatPosition> {
        self.seats
            .iter()
            .filter(|s| !s.booked)
            .map(|s| s.position)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

/// The two flat price tiers. `None` means the price was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Prices {
    pub premium: Option<u32>,
    pub regular: Option<u32>,
}

impl Prices {
    pub const fn new(premium: u32, regular: u32) -> Self {
        Self {
            premium: Some(premium),
            regular: Some(regular),
        }
    }

    pub const fn unset() -> Self {
        Self {
            premium: None,
            regular: None,
        }
    }

    pub fn is_set(&self) -> bool {
        self.premium.is_some() && self.regular.is_some()
    }
}

// ---------------------------------------------------------------------------
// Performance
// ---------------------------------------------------------------------------

/// One staging of an act at a theatre.
#[derive(Debug, Clone)]
pub struct Performance {
    id: PerformanceId,
    act: ActId,
    start_time: NaiveDateTime,
    prices: Prices,
    seats: SeatGrid,
    issued: HashMap<TicketId, SeatPosition>,
}

impl Performance {
    pub fn new(
        id: PerformanceId,
        act: ActId,
        start_time: NaiveDateTime,
        prices: Prices,
        dimension: u32,
    ) -> Self {
        Self {
            id,
            act,
            start_time,
            prices,
            seats: SeatGrid::new(dimension),
            issued: HashMap::new(),
        }
    }

    pub fn act_id(&self) -> &ActId {
        &self.act
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn prices(&self) -> Prices {
        self.prices
    }

    pub fn seats(&self) -> &SeatGrid {
        &self.seats
    }

    /// Books the seat at 1-based `(row, column)` and returns the new ticket id.
    ///
    /// A ticket id is only drawn from `ids` once the seat is known to be free,
    /// and the seat stays free if no id can be drawn.
    pub fn issue_ticket(
        &mut self,
        row: u32,
        column: u32,
        ids: &mut IdGenerator,
    ) -> Result<TicketId, BookingError> {
        let dimension = self.seats.dimension();
        let seat = self
            .seats
            .seat_mut(row, column)
            .ok_or(BookingError::InvalidSeatPosition {
                row,
                column,
                dimension,
            })?;
        if seat.is_booked() {
            return Err(BookingError::SeatAlreadyBooked { row, column });
        }
        let ticket = ids.next_ticket()?;
        seat.book()?;
        let position = seat.position();

        self.issued.insert(ticket.clone(), position);
        Ok(ticket)
    }

    pub fn unbooked_seats(&self) -> Vec<SeatPosition> {
        self.seats.unbooked()
    }

    /// Issued ticket ids in no particular order.
    pub fn issued_tickets(&self) -> Vec<TicketId> {
        self.issued.keys().cloned().collect()
    }

    pub fn ticket_count(&self) -> usize {
        self.issued.len()
    }

    /// Seat booked by `ticket`, if it was issued by this performance.
    pub fn ticket_seat(&self, ticket: &str) -> Option<SeatPosition> {
        self.issued.get(ticket).copied()
    }

    /// Premium price per premium ticket plus regular price per regular ticket.
    /// Unset prices contribute nothing.
    pub fn total_sales(&self) -> u64 {
        let (premium, regular) = self
            .issued
            .values()
            .filter_map(|p| self.seats.seat(p.row, p.column))
            .fold((0u64, 0u64), |(prem, reg), seat| {
                if seat.is_premium() {
                    (prem + 1, reg)
                } else {
                    (prem, reg + 1)
                }
            });
        premium * u64::from(self.prices.premium.unwrap_or(0))
            + regular * u64::from(self.prices.regular.unwrap_or(0))
    }
}

impl Identifiable for Performance {
    type Id = PerformanceId;

    fn id(&self) -> &PerformanceId {
        &self.id
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdSeeds;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(19, 30, 0))
            .expect("valid date")
    }

    fn perf(dimension: u32, prices: Prices) -> Performance {
        Performance::new(
            PerformanceId::from("PFM9000000"),
            ActId::from("ACT1000000"),
            start(),
            prices,
            dimension,
        )
    }

    #[test]
    fn dimension_four_has_two_premium_rows() {
        let grid = SeatGrid::new(4);
        assert_eq!(grid.premium_rows(), 2);
        for seat in grid.iter() {
            assert_eq!(seat.is_premium(), seat.row() <= 2, "row {}", seat.row());
        }
    }

    #[test]
    fn odd_dimension_rounds_premium_rows_down() {
        let grid = SeatGrid::new(5);
        assert!(grid.seat(2, 1).expect("seat").is_premium());
        assert!(!grid.seat(3, 1).expect("seat").is_premium());
    }

    #[test]
    fn dimension_one_has_no_premium_seats() {
        let grid = SeatGrid::new(1);
        assert!(!grid.seat(1, 1).expect("seat").is_premium());
    }

    #[test]
    fn fresh_grid_lists_every_seat_row_major() {
        let p = perf(2, Prices::new(10, 5));
        assert_eq!(
            p.unbooked_seats(),
            vec![
                SeatPosition::new(1, 1),
                SeatPosition::new(1, 2),
                SeatPosition::new(2, 1),
                SeatPosition::new(2, 2),
            ]
        );
    }

    #[test]
    fn booking_removes_seat_from_unbooked() {
        let mut ids = IdGenerator::default();
        let mut p = perf(2, Prices::new(10, 5));
        p.issue_ticket(1, 1, &mut ids).expect("ticket");
        assert_eq!(
            p.unbooked_seats(),
            vec![
                SeatPosition::new(1, 2),
                SeatPosition::new(2, 1),
                SeatPosition::new(2, 2),
            ]
        );
    }

    #[test]
    fn second_booking_of_same_seat_fails() {
        let mut ids = IdGenerator::default();
        let mut p = perf(3, Prices::new(10, 5));
        let first = p.issue_ticket(1, 1, &mut ids).expect("ticket");
        assert!(first.as_str().starts_with("TIK"));

        let err = p.issue_ticket(1, 1, &mut ids).unwrap_err();
        assert_eq!(err, BookingError::SeatAlreadyBooked { row: 1, column: 1 });
        assert_eq!(p.ticket_count(), 1);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    #[case(4, 1)]
    #[case(1, 4)]
    fn out_of_range_positions_rejected(#[case] row: u32, #[case] column: u32) {
        let mut ids = IdGenerator::default();
        let mut p = perf(3, Prices::new(10, 5));
        let err = p.issue_ticket(row, column, &mut ids).unwrap_err();
        assert!(matches!(err, BookingError::InvalidSeatPosition { .. }));
        // A rejected request must not consume a ticket id.
        assert_eq!(ids.next_ticket().unwrap(), "TIK1000000");
    }

    #[test]
    fn exhausted_ticket_counter_leaves_seat_free() {
        let mut ids = IdGenerator::new(IdSeeds {
            ticket: u64::MAX,
            ..IdSeeds::default()
        });
        let mut p = perf(2, Prices::new(10, 5));
        p.issue_ticket(1, 1, &mut ids).expect("last id");

        let err = p.issue_ticket(2, 2, &mut ids).unwrap_err();
        assert_eq!(err, BookingError::IdsExhausted { prefix: "TIK" });
        assert!(!p.seats().seat(2, 2).expect("seat").is_booked());
        assert_eq!(p.ticket_count(), 1);
        assert_eq!(p.unbooked_seats().len(), 3);
    }

    #[test]
    fn largest_grid_indexes_last_seat() {
        let dimension = crate::theatre::MAX_SEATING_DIMENSION;
        let grid = SeatGrid::new(dimension);
        let seat = grid.seat(dimension, dimension).expect("seat");
        assert_eq!(seat.position(), SeatPosition::new(dimension, dimension));
        assert!(grid.seat(dimension + 1, 1).is_none());
    }

    #[test]
    fn total_sales_splits_by_tier() {
        let mut ids = IdGenerator::default();
        let mut p = perf(2, Prices::new(10, 5));
        p.issue_ticket(1, 2, &mut ids).expect("premium");
        p.issue_ticket(2, 1, &mut ids).expect("regular");
        assert_eq!(p.ticket_count(), 2);
        assert_eq!(p.total_sales(), 15);
    }

    #[test]
    fn unset_prices_contribute_nothing() {
        let mut ids = IdGenerator::default();
        let mut p = perf(2, Prices::unset());
        p.issue_ticket(1, 1, &mut ids).expect("ticket");
        p.issue_ticket(2, 2, &mut ids).expect("ticket");
        assert_eq!(p.total_sales(), 0);
    }

    #[test]
    fn ticket_seat_resolves_issued_ticket() {
        let mut ids = IdGenerator::default();
        let mut p = perf(2, Prices::new(1, 1));
        let ticket = p.issue_ticket(2, 1, &mut ids).expect("ticket");
        assert_eq!(p.ticket_seat(ticket.as_str()), Some(SeatPosition::new(2, 1)));
        assert_eq!(p.ticket_seat("TIK0"), None);
        assert_eq!(p.issued_tickets(), vec![ticket]);
    }
}
