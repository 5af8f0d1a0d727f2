//! Error types for tbs-core.
//!
//! Every message starts with `ERROR` so callers that only see the rendered
//! string can still tell failure from success.

use thiserror::Error;

/// Errors raised by the domain entities themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Row or column outside `[1, dimension]`.
    #[error("ERROR invalid seat position ({row}, {column}) for a {dimension}x{dimension} grid")]
    InvalidSeatPosition { row: u32, column: u32, dimension: u32 },

    /// The seat already carries a ticket.
    #[error("ERROR seat ({row}, {column}) has already been booked")]
    SeatAlreadyBooked { row: u32, column: u32 },

    /// Artist name was empty or blank.
    #[error("ERROR invalid artist name")]
    EmptyArtistName,

    /// Act title was empty or blank.
    #[error("ERROR act title is empty")]
    EmptyTitle,

    /// Act duration must be a positive number of minutes.
    #[error("ERROR act duration must be positive, got {minutes} minutes")]
    NonPositiveDuration { minutes: i64 },

    /// Theatre seating dimension must be positive.
    #[error("ERROR seating dimension must be positive")]
    ZeroDimension,

    /// Theatre seating dimension exceeds [`crate::theatre::MAX_SEATING_DIMENSION`].
    #[error("ERROR seating dimension {dimension} exceeds the maximum of {max}")]
    DimensionTooLarge { dimension: u32, max: u32 },

    /// The counter for this id prefix has issued its last value.
    #[error("ERROR no identifiers left for prefix {prefix}")]
    IdsExhausted { prefix: &'static str },
}
