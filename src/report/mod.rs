//! Statistics reporters.
//!
//! Each reporter is a stateless function over a loaded [`TripTable`]. It
//! prints a header, its figures, and how long the computation took.
//!
//! [`TripTable`]: crate::state::TripTable

mod duration;
mod station;
mod time;
mod user;

pub use duration::{trip_duration_stats, DurationStats};
pub use station::{station_stats, StationStats};
pub use time::{time_stats, TimeStats};
pub use user::{user_stats, BirthYearStats, UserStats};

use std::io::{self, Write};
use std::time::Instant;

use crate::constants;
use crate::state::TripTable;

/// Prints the section separator.
pub fn print_hline<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(constants::HLINE_LENGTH))
}

/// Prints the time elapsed since `started`, one decimal place.
pub fn print_elapsed<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(
        out,
        "This took {:.1} seconds.",
        started.elapsed().as_secs_f64()
    )
}

fn print_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}\n")
}

fn print_footer<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(out)?;
    print_elapsed(out, started)?;
    print_hline(out)
}

/// Runs every reporter in order: time, station, duration, user.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn print_all<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    time_stats(table, out)?;
    station_stats(table, out)?;
    trip_duration_stats(table, out)?;
    user_stats(table, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{basic_schema, trip};

    #[test]
    fn test_hline_length() {
        let mut out = Vec::new();
        print_hline(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim_end().len(), 80);
    }

    #[test]
    fn test_print_all_section_order() {
        let table = TripTable::new(
            basic_schema(),
            vec![trip((2017, 6, 23), 15, ("A", "B"), 60.0)],
        );
        let mut out = Vec::new();
        print_all(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let positions: Vec<usize> = [
            constants::HEADER_TIME_STATS,
            constants::HEADER_STATION_STATS,
            constants::HEADER_DURATION_STATS,
            constants::HEADER_USER_STATS,
        ]
        .iter()
        .map(|h| text.find(h).expect("section present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
