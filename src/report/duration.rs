//! Total and average trip duration.

use std::io::{self, Write};
use std::time::Instant;

use crate::constants;
use crate::core::stats::{format_duration, mean, round_to};
use crate::state::TripTable;

/// Summed and averaged trip durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
}

impl DurationStats {
    #[must_use]
    pub fn compute(table: &TripTable) -> Option<Self> {
        let durations: Vec<f64> = table.rows.iter().map(|r| r.duration).collect();
        Some(Self {
            total: durations.iter().sum(),
            mean: mean(&durations)?,
        })
    }
}

/// Displays statistics on the total and average trip duration.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn trip_duration_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    super::print_header(out, constants::HEADER_DURATION_STATS)?;
    let started = Instant::now();

    if let Some(stats) = DurationStats::compute(table) {
        writeln!(
            out,
            "Total travel time is {} seconds = {}",
            stats.total,
            format_duration(stats.total)
        )?;
        let mean = round_to(stats.mean, 2);
        writeln!(
            out,
            "Mean travel time is {:.2} seconds = {}",
            stats.mean,
            format_duration(mean)
        )?;
    }

    super::print_footer(out, started)
}
