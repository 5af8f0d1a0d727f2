//! Identifier newtypes and shared value types for the booking registry.
//!
//! Every identifier is an opaque string. Ordering is plain string ordering,
//! so `ART1000010` sorts before `ART999` once counters grow past a digit.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        // Lets `HashMap<$name, _>` be queried with a plain `&str`.
        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(
    /// Identifier of an artist (`ART…`).
    ArtistId
);
id_newtype!(
    /// Identifier of an act (`ACT…`).
    ActId
);
id_newtype!(
    /// Identifier of a theatre, supplied by the initialization source.
    TheatreId
);
id_newtype!(
    /// Identifier of a scheduled performance (`PFM…`).
    PerformanceId
);
id_newtype!(
    /// Identifier of an issued ticket (`TIK…`).
    TicketId
);

// ---------------------------------------------------------------------------
// Identifiable
// ---------------------------------------------------------------------------

/// Anything the lookup helpers can search by identifier.
pub trait Identifiable {
    type Id: Clone + Ord + AsRef<str>;

    fn id(&self) -> &Self::Id;
}

// ---------------------------------------------------------------------------
// Seat position
// ---------------------------------------------------------------------------

/// A 1-based `(row, column)` coordinate in a seat grid.
///
/// Renders as `"<row>\t<column>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SeatPosition {
    pub row: u32,
    pub column: u32,
}

impl SeatPosition {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.row, self.column)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
