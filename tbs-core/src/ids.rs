//! Per-kind identifier counters.
//!
//! A registry owns one [`IdGenerator`]; two registries never share counters.

use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::types::{ActId, ArtistId, PerformanceId, TicketId};

/// The entity kinds that receive generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Artist,
    Act,
    Performance,
    Ticket,
}

impl IdKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            IdKind::Artist => "ART",
            IdKind::Act => "ACT",
            IdKind::Performance => "PFM",
            IdKind::Ticket => "TIK",
        }
    }
}

/// First counter value issued for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdSeeds {
    pub artist: u64,
    pub act: u64,
    pub performance: u64,
    pub ticket: u64,
}

impl Default for IdSeeds {
    fn default() -> Self {
        Self {
            artist: 1_000_000,
            act: 1_000_000,
            performance: 9_000_000,
            ticket: 1_000_000,
        }
    }
}

/// Monotonic `prefix + counter` generator. Never reuses a value.
///
/// A counter that has issued `u64::MAX` is spent; further requests for that
/// kind fail with [`BookingError::IdsExhausted`] instead of wrapping.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    artist: Option<u64>,
    act: Option<u64>,
    performance: Option<u64>,
    ticket: Option<u64>,
}

impl IdGenerator {
    pub fn new(seeds: IdSeeds) -> Self {
        Self {
            artist: Some(seeds.artist),
            act: Some(seeds.act),
            performance: Some(seeds.performance),
            ticket: Some(seeds.ticket),
        }
    }

    /// Returns `prefix + counter` for `kind` and advances that counter.
    pub fn next(&mut self, kind: IdKind) -> Result<String, BookingError> {
        let slot = match kind {
            IdKind::Artist => &mut self.artist,
            IdKind::Act => &mut self.act,
            IdKind::Performance => &mut self.performance,
            IdKind::Ticket => &mut self.ticket,
        };
        let counter = slot.ok_or(BookingError::IdsExhausted {
            prefix: kind.prefix(),
        })?;
        *slot = counter.checked_add(1);
        Ok(format!("{}{}", kind.prefix(), counter))
    }

    pub fn next_artist(&mut self) -> Result<ArtistId, BookingError> {
        self.next(IdKind::Artist).map(ArtistId)
    }

    pub fn next_act(&mut self) -> Result<ActId, BookingError> {
        self.next(IdKind::Act).map(ActId)
    }

    pub fn next_performance(&mut self) -> Result<PerformanceId, BookingError> {
        self.next(IdKind::Performance).map(PerformanceId)
    }

    pub fn next_ticket(&mut self) -> Result<TicketId, BookingError> {
        self.next(IdKind::Ticket).map(TicketId)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdSeeds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds_match_id_scheme() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_artist().unwrap(), "ART1000000");
        assert_eq!(ids.next_act().unwrap(), "ACT1000000");
        assert_eq!(ids.next_performance().unwrap(), "PFM9000000");
        assert_eq!(ids.next_ticket().unwrap(), "TIK1000000");
    }

    #[test]
    fn counters_advance_independently() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(IdKind::Artist).unwrap(), "ART1000000");
        assert_eq!(ids.next(IdKind::Artist).unwrap(), "ART1000001");
        assert_eq!(ids.next(IdKind::Act).unwrap(), "ACT1000000");
        assert_eq!(ids.next(IdKind::Artist).unwrap(), "ART1000002");
    }

    #[test]
    fn generators_do_not_share_state() {
        let mut a = IdGenerator::default();
        let mut b = IdGenerator::default();
        a.next_ticket().unwrap();
        a.next_ticket().unwrap();
        assert_eq!(b.next_ticket().unwrap(), "TIK1000000");
    }

    #[test]
    fn custom_seeds() {
        let mut ids = IdGenerator::new(IdSeeds {
            ticket: 5,
            ..IdSeeds::default()
        });
        assert_eq!(ids.next_ticket().unwrap(), "TIK5");
        assert_eq!(ids.next_ticket().unwrap(), "TIK6");
    }

    #[test]
    fn last_counter_value_is_issued_once_then_exhausted() {
        let mut ids = IdGenerator::new(IdSeeds {
            artist: u64::MAX,
            ..IdSeeds::default()
        });
        assert_eq!(ids.next_artist().unwrap(), "ART18446744073709551615");

        let err = ids.next_artist().unwrap_err();
        assert_eq!(err, BookingError::IdsExhausted { prefix: "ART" });
        assert!(err.to_string().starts_with("ERROR"));
        // Stays exhausted; never wraps to ART0.
        assert!(ids.next_artist().is_err());
        // Other kinds are unaffected.
        assert_eq!(ids.next_act().unwrap(), "ACT1000000");
    }
}
