//! Venues and the performances they host.

use chrono::NaiveDateTime;

use crate::error::BookingError;
use crate::ids::IdGenerator;
use crate::performance::{Performance, Prices};
use crate::types::{ActId, Identifiable, TheatreId};

/// Largest accepted seating dimension. Each performance allocates
/// `dimension * dimension` seats.
pub const MAX_SEATING_DIMENSION: u32 = 1_000;

/// A venue with a square seating grid of fixed dimension.
#[derive(Debug, Clone)]
pub struct Theatre {
    id: TheatreId,
    seating_dimension: u32,
    floor_area: i32,
    performances: Vec<Performance>,
}

impl Theatre {
    pub fn new(id: TheatreId, seating_dimension: u32, floor_area: i32) -> Result<Self, BookingError> {
        if seating_dimension == 0 {
            return Err(BookingError::ZeroDimension);
        }
        if seating_dimension > MAX_SEATING_DIMENSION {
            return Err(BookingError::DimensionTooLarge {
                dimension: seating_dimension,
                max: MAX_SEATING_DIMENSION,
            });
        }
        Ok(Self {
            id,
            seating_dimension,
            floor_area,
            performances: Vec::new(),
        })
    }

    pub fn seating_dimension(&self) -> u32 {
        self.seating_dimension
    }

    /// Floor area in square metres. Stored as given; not range-checked.
    pub fn floor_area(&self) -> i32 {
        self.floor_area
    }

    /// Builds a performance sized to this theatre and appends it.
    ///
    /// The caller must also record the returned performance's id on the act.
    /// Nothing is appended when the performance counter is exhausted.
    pub fn add_performance(
        &mut self,
        act: ActId,
        start_time: NaiveDateTime,
        prices: Prices,
        ids: &mut IdGenerator,
    ) -> Result<&Performance, BookingError> {
        let performance = Performance::new(
            ids.next_performance()?,
            act,
            start_time,
            prices,
            self.seating_dimension,
        );
        let index = self.performances.len();
        self.performances.push(performance);
        Ok(&self.performances[index])
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }

    pub fn performances_mut(&mut self) -> &mut [Performance] {
        &mut self.performances
    }
}

impl Identifiable for Theatre {
    type Id = TheatreId;

    fn id(&self) -> &TheatreId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdSeeds;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(20, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = Theatre::new(TheatreId::from("T1"), 0, 100).unwrap_err();
        assert_eq!(err, BookingError::ZeroDimension);
    }

    #[test]
    fn dimension_above_maximum_rejected() {
        let err = Theatre::new(TheatreId::from("T1"), MAX_SEATING_DIMENSION + 1, 100).unwrap_err();
        assert_eq!(
            err,
            BookingError::DimensionTooLarge {
                dimension: MAX_SEATING_DIMENSION + 1,
                max: MAX_SEATING_DIMENSION,
            }
        );
        assert!(Theatre::new(TheatreId::from("T1"), MAX_SEATING_DIMENSION, 100).is_ok());
    }

    #[test]
    fn negative_floor_area_is_kept_as_given() {
        let theatre = Theatre::new(TheatreId::from("T1"), 3, -200).expect("theatre");
        assert_eq!(theatre.floor_area(), -200);
    }

    #[test]
    fn exhausted_performance_counter_appends_nothing() {
        let mut ids = IdGenerator::new(IdSeeds {
            performance: u64::MAX,
            ..IdSeeds::default()
        });
        let mut theatre = Theatre::new(TheatreId::from("T1"), 2, 50).expect("theatre");
        theatre
            .add_performance(ActId::from("ACT1"), start(), Prices::unset(), &mut ids)
            .expect("last id");
        let err = theatre
            .add_performance(ActId::from("ACT1"), start(), Prices::unset(), &mut ids)
            .unwrap_err();
        assert_eq!(err, BookingError::IdsExhausted { prefix: "PFM" });
        assert_eq!(theatre.performances().len(), 1);
    }

    #[test]
    fn performance_grid_follows_theatre_dimension() {
        let mut ids = IdGenerator::default();
        let mut theatre = Theatre::new(TheatreId::from("T1"), 6, 300).expect("theatre");
        let perf = theatre
            .add_performance(ActId::from("ACT1"), start(), Prices::new(50, 20), &mut ids)
            .expect("performance");
        assert_eq!(perf.seats().dimension(), 6);
        assert_eq!(perf.unbooked_seats().len(), 36);
        assert_eq!(perf.act_id(), &ActId::from("ACT1"));
    }

    #[test]
    fn performances_append_in_order_with_fresh_ids() {
        let mut ids = IdGenerator::default();
        let mut theatre = Theatre::new(TheatreId::from("T1"), 2, 50).expect("theatre");
        let first = theatre
            .add_performance(ActId::from("ACT1"), start(), Prices::unset(), &mut ids)
            .expect("performance")
            .id()
            .clone();
        let second = theatre
            .add_performance(ActId::from("ACT1"), start(), Prices::unset(), &mut ids)
            .expect("performance")
            .id()
            .clone();
        assert_eq!(first, "PFM9000000");
        assert_eq!(second, "PFM9000001");
        let hosted: Vec<_> = theatre.performances().iter().map(|p| p.id().clone()).collect();
        assert_eq!(hosted, vec![first, second]);
    }
}
