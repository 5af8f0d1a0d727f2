//! Theatre initialization source.
//!
//! One theatre per line, tab separated:
//!
//! ```text
//! <name>\t<theatreID>\t<seatingDimension>\t<floorArea>
//! ```
//!
//! The name field is ignored. Blank lines are skipped. The seating dimension
//! must lie in `1..=MAX_SEATING_DIMENSION`; the floor area may be any `i32`.
//! Any malformed line fails the whole read; nothing is returned for partial
//! input.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use tbs_core::theatre::MAX_SEATING_DIMENSION;
use tbs_core::TheatreId;

use crate::error::{format_err, ServerError};

const FIELD_COUNT: usize = 4;

/// One parsed line of the initialization source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheatreRecord {
    pub id: TheatreId,
    pub seating_dimension: u32,
    pub floor_area: i32,
}

/// Read and parse every record at `path`.
pub fn read_theatres(path: &Path) -> Result<Vec<TheatreRecord>, ServerError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ServerError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    parse_theatres(&contents)
}

/// Parse every record in `contents`. Theatre ids must be unique within it.
pub fn parse_theatres(contents: &str) -> Result<Vec<TheatreRecord>, ServerError> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_line(index + 1, line)?;
        if !seen.insert(record.id.clone()) {
            return Err(format_err(
                index + 1,
                format!("duplicate theatre id '{}'", record.id),
            ));
        }
        records.push(record);
    }
    Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> Result<TheatreRecord, ServerError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELD_COUNT {
        return Err(format_err(
            line_no,
            format!("expected {FIELD_COUNT} tab-separated fields, found {}", fields.len()),
        ));
    }

    let id = fields[1];
    if id.is_empty() {
        return Err(format_err(line_no, "theatre id is empty"));
    }
    let seating_dimension: u32 = parse_number(line_no, "seating dimension", fields[2])?;
    if seating_dimension == 0 {
        return Err(format_err(line_no, "seating dimension must be positive"));
    }
    if seating_dimension > MAX_SEATING_DIMENSION {
        return Err(format_err(
            line_no,
            format!("seating dimension {seating_dimension} exceeds {MAX_SEATING_DIMENSION}"),
        ));
    }
    let floor_area: i32 = parse_number(line_no, "floor area", fields[3])?;

    Ok(TheatreRecord {
        id: TheatreId::from(id),
        seating_dimension,
        floor_area,
    })
}

fn parse_number<T: FromStr>(line_no: usize, what: &str, text: &str) -> Result<T, ServerError> {
    text.parse()
        .map_err(|_| format_err(line_no, format!("{what} '{text}' is not a valid integer")))
}
