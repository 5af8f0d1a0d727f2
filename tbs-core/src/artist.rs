//! Artists and the acts they own.

use serde::Serialize;

use crate::error::BookingError;
use crate::types::{ActId, ArtistId, Identifiable, PerformanceId};

// ---------------------------------------------------------------------------
// Act
// ---------------------------------------------------------------------------

/// A performable work with a fixed duration.
///
/// Holds the ids of its performances in scheduling order; the performances
/// themselves live in the hosting theatre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Act {
    id: ActId,
    title: String,
    duration_minutes: u32,
    performances: Vec<PerformanceId>,
}

impl Act {
    pub fn new(id: ActId, title: &str, duration_minutes: i64) -> Result<Self, BookingError> {
        let duration_minutes = Self::validate(title, duration_minutes)?;
        Ok(Self {
            id,
            title: title.to_owned(),
            duration_minutes,
            performances: Vec::new(),
        })
    }

    /// Checks `title` and `duration_minutes` without allocating an id.
    /// Returns the duration narrowed to `u32`.
    pub fn validate(title: &str, duration_minutes: i64) -> Result<u32, BookingError> {
        if title.trim().is_empty() {
            return Err(BookingError::EmptyTitle);
        }
        u32::try_from(duration_minutes)
            .ok()
            .filter(|m| *m > 0)
            .ok_or(BookingError::NonPositiveDuration {
                minutes: duration_minutes,
            })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Appends without de-duplication.
    pub fn add_performance(&mut self, performance: PerformanceId) {
        self.performances.push(performance);
    }

    pub fn performances(&self) -> &[PerformanceId] {
        &self.performances
    }
}

impl Identifiable for Act {
    type Id = ActId;

    fn id(&self) -> &ActId {
        &self.id
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

/// A named performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    id: ArtistId,
    name: String,
    acts: Vec<Act>,
}

impl Artist {
    pub fn new(id: ArtistId, name: &str) -> Result<Self, BookingError> {
        Self::validate_name(name)?;
        Ok(Self {
            id,
            name: name.to_owned(),
            acts: Vec::new(),
        })
    }

    pub fn validate_name(name: &str) -> Result<(), BookingError> {
        if name.trim().is_empty() {
            return Err(BookingError::EmptyArtistName);
        }
        Ok(())
    }

    /// Name as originally supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison used for duplicate detection.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Appends without checking titles for uniqueness.
    pub fn add_act(&mut self, act: Act) {
        self.acts.push(act);
    }

    pub fn acts(&self) -> &[Act] {
        &self.acts
    }

    pub fn acts_mut(&mut self) -> &mut [Act] {
        &mut self.acts
    }
}

impl Identifiable for Artist {
    type Id = ArtistId;

    fn id(&self) -> &ArtistId {
        &self.id
    }
}
