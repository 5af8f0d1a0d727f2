//! The in-memory booking registry.
//!
//! # API pattern
//!
//! - Mutations take `&mut self`; queries take `&self`.
//! - Identifier arguments are plain `&str` as received from callers; returned
//!   identifiers are typed.
//! - Listings are owned, sorted snapshots. Nothing hands out mutable access
//!   to internal collections.
//!
//! Acts are looked up across every artist (first match wins) and
//! performances across every theatre.

use std::path::Path;

use tbs_core::{
    lookup, Act, ActId, Artist, ArtistId, IdGenerator, Identifiable, Performance,
    PerformanceId, SeatPosition, Theatre, TheatreId, TicketId,
};

use crate::config::{PricingConfig, RegistryConfig};
use crate::error::{format_err, ServerError};
use crate::initialise::{self, TheatreRecord};
use crate::parse;
use crate::report::{RegistrySnapshot, SalesReportLine};

/// Holds every theatre and artist and owns the identifier counters.
#[derive(Debug, Default)]
pub struct Registry {
    theatres: Vec<Theatre>,
    artists: Vec<Artist>,
    ids: IdGenerator,
    pricing: PricingConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            theatres: Vec::new(),
            artists: Vec::new(),
            ids: IdGenerator::new(config.id_seeds),
            pricing: config.pricing,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Initialization
    // -----------------------------------------------------------------------

    /// Load theatres from the tab-separated file at `path`.
    ///
    /// All-or-nothing: on any error no theatre from this call is inserted.
    /// Calling it again appends; ids already present are a format error.
    /// Returns the number of theatres added.
    pub fn initialise(&mut self, path: &Path) -> Result<usize, ServerError> {
        let records = initialise::read_theatres(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "theatre initialization failed");
        })?;
        self.insert_theatres(records)
    }

    /// [`initialise`](Self::initialise) over in-memory text.
    pub fn initialise_from_str(&mut self, contents: &str) -> Result<usize, ServerError> {
        let records = initialise::parse_theatres(contents).inspect_err(|err| {
            tracing::warn!(error = %err, "theatre initialization failed");
        })?;
        self.insert_theatres(records)
    }

    fn insert_theatres(&mut self, records: Vec<TheatreRecord>) -> Result<usize, ServerError> {
        let mut loaded = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if lookup::find_by_id(&self.theatres, record.id.as_str()).is_some() {
                return Err(format_err(
                    index + 1,
                    format!("theatre '{}' is already registered", record.id),
                ));
            }
            loaded.push(Theatre::new(
                record.id,
                record.seating_dimension,
                record.floor_area,
            )?);
        }
        let count = loaded.len();
        self.theatres.extend(loaded);
        tracing::info!(count, total = self.theatres.len(), "theatres loaded");
        Ok(count)
    }

    // -----------------------------------------------------------------------
    // 2. Listings
    // -----------------------------------------------------------------------

    pub fn theatre_ids(&self) -> Vec<TheatreId> {
        lookup::list_ids(&self.theatres)
    }

    pub fn artist_ids(&self) -> Vec<ArtistId> {
        lookup::list_ids(&self.artists)
    }

    /// Artist names in their stored casing, sorted.
    pub fn artist_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.artists.iter().map(|a| a.name().to_owned()).collect();
        names.sort();
        names
    }

    pub fn act_ids_for_artist(&self, artist_id: &str) -> Result<Vec<ActId>, ServerError> {
        require_id("artistID", artist_id)?;
        let artist = self.find_artist(artist_id)?;
        Ok(lookup::list_ids(artist.acts()))
    }

    pub fn performance_ids_for_act(&self, act_id: &str) -> Result<Vec<PerformanceId>, ServerError> {
        require_id("actID", act_id)?;
        let act = self.find_act(act_id)?;
        let mut ids = act.performances().to_vec();
        ids.sort();
        Ok(ids)
    }

    pub fn ticket_ids_for_performance(
        &self,
        performance_id: &str,
    ) -> Result<Vec<TicketId>, ServerError> {
        require_id("performanceID", performance_id)?;
        let mut ids = self.find_performance(performance_id)?.issued_tickets();
        ids.sort();
        Ok(ids)
    }

    // -----------------------------------------------------------------------
    // 3. Artists and acts
    // -----------------------------------------------------------------------

    /// Register a new artist. Names are unique ignoring case.
    pub fn add_artist(&mut self, name: &str) -> Result<ArtistId, ServerError> {
        Artist::validate_name(name)?;
        if self.artists.iter().any(|a| a.has_name(name)) {
            tracing::debug!(name, "rejected duplicate artist");
            return Err(ServerError::DuplicateArtist {
                name: name.to_owned(),
            });
        }

        let artist = Artist::new(self.ids.next_artist()?, name)?;
        let id = artist.id().clone();
        self.artists.push(artist);
        tracing::info!(%id, name, "artist added");
        Ok(id)
    }

    /// Add an act of `duration_minutes` to the artist `artist_id`.
    pub fn add_act(
        &mut self,
        title: &str,
        artist_id: &str,
        duration_minutes: i64,
    ) -> Result<ActId, ServerError> {
        Act::validate(title, duration_minutes)?;
        require_id("artistID", artist_id)?;
        let artist = lookup::find_by_id_mut(&mut self.artists, artist_id).ok_or_else(|| {
            ServerError::ArtistNotFound {
                id: artist_id.to_owned(),
            }
        })?;

        let act = Act::new(self.ids.next_act()?, title, duration_minutes)?;
        let id = act.id().clone();
        artist.add_act(act);
        tracing::info!(%id, artist = artist_id, title, "act added");
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // 4. Scheduling
    // -----------------------------------------------------------------------

    /// Schedule `act_id` at `theatre_id`.
    ///
    /// Validation order: start time, prices, act, theatre. The new performance
    /// is recorded on both the theatre and the act before returning.
    pub fn schedule_performance(
        &mut self,
        act_id: &str,
        theatre_id: &str,
        start_time: &str,
        premium_price: &str,
        cheap_seats_price: &str,
    ) -> Result<PerformanceId, ServerError> {
        let start = parse::parse_start_time(start_time)?;
        let prices = parse::parse_prices(premium_price, cheap_seats_price, &self.pricing)?;

        let act = find_act_mut(&mut self.artists, act_id).ok_or_else(|| {
            ServerError::ActNotFound {
                id: act_id.to_owned(),
            }
        })?;
        let theatre = lookup::find_by_id_mut(&mut self.theatres, theatre_id).ok_or_else(|| {
            ServerError::TheatreNotFound {
                id: theatre_id.to_owned(),
            }
        })?;

        let id = theatre
            .add_performance(act.id().clone(), start, prices, &mut self.ids)?
            .id()
            .clone();
        act.add_performance(id.clone());
        tracing::info!(%id, act = act_id, theatre = theatre_id, start_time, "performance scheduled");
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // 5. Tickets and seats
    // -----------------------------------------------------------------------

    /// Book the 1-based seat `(row, column)` for `performance_id`.
    pub fn issue_ticket(
        &mut self,
        performance_id: &str,
        row: u32,
        column: u32,
    ) -> Result<TicketId, ServerError> {
        require_id("performanceID", performance_id)?;
        let performance = find_performance_mut(&mut self.theatres, performance_id).ok_or_else(
            || ServerError::PerformanceNotFound {
                id: performance_id.to_owned(),
            },
        )?;

        let ticket = performance
            .issue_ticket(row, column, &mut self.ids)
            .inspect_err(|err| {
                tracing::debug!(performance = performance_id, row, column, error = %err, "ticket rejected");
            })?;
        tracing::info!(%ticket, performance = performance_id, row, column, "ticket issued");
        Ok(ticket)
    }

    /// Unbooked seats of `performance_id` in row-major order.
    pub fn seats_available(&self, performance_id: &str) -> Result<Vec<SeatPosition>, ServerError> {
        require_id("performanceID", performance_id)?;
        Ok(self.find_performance(performance_id)?.unbooked_seats())
    }

    // -----------------------------------------------------------------------
    // 6. Reporting
    // -----------------------------------------------------------------------

    /// One line per performance of `act_id`, in scheduling order.
    pub fn sales_report(&self, act_id: &str) -> Result<Vec<SalesReportLine>, ServerError> {
        require_id("actID", act_id)?;
        let act = self.find_act(act_id)?;
        Ok(act
            .performances()
            .iter()
            .filter_map(|id| find_performance(&self.theatres, id.as_str()))
            .map(SalesReportLine::for_performance)
            .collect())
    }

    /// Owned, serializable copy of the whole registry.
    pub fn dump(&self) -> RegistrySnapshot {
        RegistrySnapshot::capture(&self.theatres, &self.artists)
    }

    // -----------------------------------------------------------------------
    // 7. Entity access
    // -----------------------------------------------------------------------

    pub fn theatre(&self, theatre_id: &str) -> Option<&Theatre> {
        lookup::find_by_id(&self.theatres, theatre_id)
    }

    pub fn artist(&self, artist_id: &str) -> Option<&Artist> {
        lookup::find_by_id(&self.artists, artist_id)
    }

    pub fn act(&self, act_id: &str) -> Option<&Act> {
        find_act(&self.artists, act_id)
    }

    pub fn performance(&self, performance_id: &str) -> Option<&Performance> {
        find_performance(&self.theatres, performance_id)
    }

    fn find_artist(&self, artist_id: &str) -> Result<&Artist, ServerError> {
        self.artist(artist_id).ok_or_else(|| ServerError::ArtistNotFound {
            id: artist_id.to_owned(),
        })
    }

    fn find_act(&self, act_id: &str) -> Result<&Act, ServerError> {
        self.act(act_id).ok_or_else(|| ServerError::ActNotFound {
            id: act_id.to_owned(),
        })
    }

    fn find_performance(&self, performance_id: &str) -> Result<&Performance, ServerError> {
        self.performance(performance_id)
            .ok_or_else(|| ServerError::PerformanceNotFound {
                id: performance_id.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn require_id(field: &'static str, value: &str) -> Result<(), ServerError> {
    if value.is_empty() {
        return Err(ServerError::EmptyField { field });
    }
    Ok(())
}

fn find_act<'a>(artists: &'a [Artist], act_id: &str) -> Option<&'a Act> {
    artists
        .iter()
        .find_map(|artist| lookup::find_by_id(artist.acts(), act_id))
}

fn find_act_mut<'a>(artists: &'a mut [Artist], act_id: &str) -> Option<&'a mut Act> {
    artists
        .iter_mut()
        .find_map(|artist| lookup::find_by_id_mut(artist.acts_mut(), act_id))
}

fn find_performance<'a>(theatres: &'a [Theatre], performance_id: &str) -> Option<&'a Performance> {
    theatres
        .iter()
        .find_map(|theatre| lookup::find_by_id(theatre.performances(), performance_id))
}

fn find_performance_mut<'a>(
    theatres: &'a mut [Theatre],
    performance_id: &str,
) -> Option<&'a mut Performance> {
    theatres
        .iter_mut()
        .find_map(|theatre| lookup::find_by_id_mut(theatre.performances_mut(), performance_id))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tbs_core::BookingError;

    fn registry_with_theatre(dimension: u32) -> Registry {
        let mut registry = Registry::new();
        registry
            .initialise_from_str(&format!("Globe\tT1\t{dimension}\t100\n"))
            .expect("init");
        registry
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let registry = Registry::new();
        assert!(registry.theatre_ids().is_empty());
        assert!(registry.artist_ids().is_empty());
        assert!(registry.artist_names().is_empty());
    }

    #[test]
    fn schedule_records_performance_on_theatre_and_act() {
        let mut registry = registry_with_theatre(3);
        let artist = registry.add_artist("Amy").expect("artist");
        let act = registry.add_act("Solo", artist.as_str(), 45).expect("act");
        let perf = registry
            .schedule_performance(act.as_str(), "T1", "2024-09-01T19:00", "$20", "$10")
            .expect("schedule");

        let theatre = registry.theatre("T1").expect("theatre");
        assert_eq!(theatre.performances().len(), 1);
        assert_eq!(theatre.performances()[0].id(), &perf);
        assert_eq!(
            registry.performance_ids_for_act(act.as_str()).expect("ids"),
            vec![perf.clone()]
        );
        assert_eq!(registry.performance(perf.as_str()).map(|p| p.act_id()), Some(&act));
    }

    #[test]
    fn failed_schedule_consumes_no_performance_id() {
        let mut registry = registry_with_theatre(2);
        let artist = registry.add_artist("Amy").expect("artist");
        let act = registry.add_act("Solo", artist.as_str(), 45).expect("act");
        registry
            .schedule_performance(act.as_str(), "NOPE", "2024-09-01T19:00", "$1", "$1")
            .unwrap_err();
        let perf = registry
            .schedule_performance(act.as_str(), "T1", "2024-09-01T19:00", "$1", "$1")
            .expect("schedule");
        assert_eq!(perf, "PFM9000000");
    }

    #[test]
    fn exhausted_act_counter_adds_no_act() {
        let mut config = RegistryConfig::default();
        config.id_seeds.act = u64::MAX;
        let mut registry = Registry::with_config(&config);
        let artist = registry.add_artist("Amy").expect("artist");
        registry.add_act("One", artist.as_str(), 30).expect("last act id");

        let err = registry.add_act("Two", artist.as_str(), 30).unwrap_err();
        assert!(
            matches!(err, ServerError::Booking(BookingError::IdsExhausted { prefix: "ACT" })),
            "got: {err}"
        );
        assert_eq!(registry.act_ids_for_artist(artist.as_str()).expect("acts").len(), 1);
    }

    #[test]
    fn with_config_uses_seeds_and_pricing() {
        let mut config = RegistryConfig::default();
        config.id_seeds.artist = 7;
        config.pricing.require_marker = true;
        let mut registry = Registry::with_config(&config);
        registry.initialise_from_str("G\tT1\t2\t10").expect("init");

        let artist = registry.add_artist("Amy").expect("artist");
        assert_eq!(artist, "ART7");
        let act = registry.add_act("Solo", artist.as_str(), 45).expect("act");
        let err = registry
            .schedule_performance(act.as_str(), "T1", "2024-09-01T19:00", "20", "$10")
            .unwrap_err();
        assert!(matches!(err, ServerError::InvalidPrice { .. }), "got: {err}");
    }
}
