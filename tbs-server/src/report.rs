//! Sales reporting and registry snapshots.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use tbs_core::{
    ActId, Artist, Identifiable, Performance, PerformanceId, Theatre, TheatreId,
};

use crate::parse::format_start_time;

// ---------------------------------------------------------------------------
// Sales report
// ---------------------------------------------------------------------------

/// One row of an act's sales report.
///
/// Renders as `"<performanceId>\t<startTime>\t<ticketsSold>\t$<totalSales>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReportLine {
    pub performance_id: PerformanceId,
    pub start_time: NaiveDateTime,
    pub tickets_sold: usize,
    pub total_sales: u64,
}

impl SalesReportLine {
    pub(crate) fn for_performance(performance: &Performance) -> Self {
        Self {
            performance_id: performance.id().clone(),
            start_time: performance.start_time(),
            tickets_sold: performance.ticket_count(),
            total_sales: performance.total_sales(),
        }
    }
}

impl fmt::Display for SalesReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t${}",
            self.performance_id,
            format_start_time(&self.start_time),
            self.tickets_sold,
            self.total_sales
        )
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Owned, serializable copy of everything a registry holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub theatres: Vec<TheatreSnapshot>,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TheatreSnapshot {
    pub id: TheatreId,
    pub seating_dimension: u32,
    pub floor_area: i32,
    pub performances: Vec<PerformanceSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceSnapshot {
    pub id: PerformanceId,
    pub act_id: ActId,
    pub start_time: NaiveDateTime,
    pub premium_price: Option<u32>,
    pub regular_price: Option<u32>,
    pub tickets_sold: usize,
    pub seats_available: usize,
    pub total_sales: u64,
}

impl RegistrySnapshot {
    pub(crate) fn capture(theatres: &[Theatre], artists: &[Artist]) -> Self {
        Self {
            theatres: theatres.iter().map(TheatreSnapshot::capture).collect(),
            artists: artists.to_vec(),
        }
    }
}

impl TheatreSnapshot {
    fn capture(theatre: &Theatre) -> Self {
        Self {
            id: theatre.id().clone(),
            seating_dimension: theatre.seating_dimension(),
            floor_area: theatre.floor_area(),
            performances: theatre
                .performances()
                .iter()
                .map(PerformanceSnapshot::capture)
                .collect(),
        }
    }
}

impl PerformanceSnapshot {
    fn capture(performance: &Performance) -> Self {
        let prices = performance.prices();
        Self {
            id: performance.id().clone(),
            act_id: performance.act_id().clone(),
            start_time: performance.start_time(),
            premium_price: prices.premium,
            regular_price: prices.regular,
            tickets_sold: performance.ticket_count(),
            seats_available: performance.unbooked_seats().len(),
            total_sales: performance.total_sales(),
        }
    }
}
