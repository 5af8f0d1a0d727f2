//! TBS core library — booking entities, identifier generation, lookup, errors.
//!
//! Public API surface:
//! - [`types`] — identifier newtypes, [`Identifiable`], [`SeatPosition`]
//! - [`ids`] — per-kind [`IdGenerator`]
//! - [`lookup`] — identifier search and sorted listing
//! - [`artist`] — [`Artist`] and [`Act`]
//! - [`theatre`] — [`Theatre`]
//! - [`performance`] — [`Performance`], [`SeatGrid`], [`Prices`]
//! - [`error`] — [`BookingError`]

pub mod artist;
pub mod error;
pub mod ids;
pub mod lookup;
pub mod performance;
pub mod theatre;
pub mod types;

pub use artist::{Act, Artist};
pub use error::BookingError;
pub use ids::{IdGenerator, IdKind, IdSeeds};
pub use performance::{Performance, Prices, Seat, SeatGrid};
pub use theatre::Theatre;
pub use types::{
    ActId, ArtistId, Identifiable, PerformanceId, SeatPosition, TheatreId, TicketId,
};
