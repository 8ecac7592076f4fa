//! Most popular stations and routes.

use std::io::{self, Write};
use std::time::Instant;

use crate::constants;
use crate::core::stats::mode;
use crate::state::TripTable;

/// Most common start station, end station and (start, end) route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub route: (String, String),
}

impl StationStats {
    #[must_use]
    pub fn compute(table: &TripTable) -> Option<Self> {
        let start = mode(table.rows.iter().map(|r| r.start_station.as_str()))?;
        let end = mode(table.rows.iter().map(|r| r.end_station.as_str()))?;
        let (from, to) = mode(table.rows.iter().map(|r| r.route()))?;

        Some(Self {
            start_station: start.to_string(),
            end_station: end.to_string(),
            route: (from.to_string(), to.to_string()),
        })
    }
}

/// Displays statistics on the most popular stations and trip.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn station_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    super::print_header(out, constants::HEADER_STATION_STATS)?;
    let started = Instant::now();

    if let Some(stats) = StationStats::compute(table) {
        writeln!(
            out,
            "The most commonly used start station is {}",
            stats.start_station
        )?;
        writeln!(
            out,
            "The most commonly used end station is {}",
            stats.end_station
        )?;
        writeln!(
            out,
            "The most frequent combination of start station and end station is ('{}', '{}')",
            stats.route.0, stats.route.1
        )?;
    }

    super::print_footer(out, started)
}
