//! Most frequent times of travel.

use std::io::{self, Write};
use std::time::Instant;

use crate::constants;
use crate::core::stats::mode;
use crate::state::{Month, TripTable, Weekday};

/// Most common month, weekday and start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Month,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TimeStats {
    /// `None` for an empty table.
    #[must_use]
    pub fn compute(table: &TripTable) -> Option<Self> {
        Some(Self {
            month: mode(table.rows.iter().map(|r| r.month))?,
            weekday: mode(table.rows.iter().map(|r| r.weekday))?,
            hour: mode(table.rows.iter().map(|r| r.hour))?,
        })
    }
}

/// Displays statistics on the most frequent times of travel.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn time_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    super::print_header(out, constants::HEADER_TIME_STATS)?;
    let started = Instant::now();

    if let Some(stats) = TimeStats::compute(table) {
        writeln!(out, "The most common month is {}", stats.month)?;
        writeln!(out, "The most common day of week is {}", stats.weekday)?;
        writeln!(out, "The most common hour is {}", stats.hour)?;
    }

    super::print_footer(out, started)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{basic_schema, trip};

    #[test]
    fn test_time_stats_modes() {
        let rows = vec![
            trip((2017, 6, 23), 15, ("A", "B"), 1.0), // Friday
            trip((2017, 6, 24), 15, ("A", "B"), 1.0), // Saturday
            trip((2017, 5, 26), 8, ("A", "B"), 1.0),  // Friday
        ];
        let table = TripTable::new(basic_schema(), rows);
        let stats = TimeStats::compute(&table).unwrap();
        assert_eq!(stats.month, Month::June);
        assert_eq!(stats.weekday, Weekday::Friday);
        assert_eq!(stats.hour, 15);
    }

    #[test]
    fn test_time_stats_tie_uses_calendar_order() {
        let rows = vec![
            trip((2017, 3, 5), 20, ("A", "B"), 1.0), // Sunday
            trip((2017, 1, 2), 7, ("A", "B"), 1.0),  // Monday
        ];
        let table = TripTable::new(basic_schema(), rows);
        let stats = TimeStats::compute(&table).unwrap();
        assert_eq!(stats.month, Month::January);
        assert_eq!(stats.weekday, Weekday::Monday);
        assert_eq!(stats.hour, 7);
    }

    #[test]
    fn test_time_stats_output() {
        let table = TripTable::new(
            basic_schema(),
            vec![trip((2017, 6, 23), 15, ("A", "B"), 1.0)],
        );
        let mut out = Vec::new();
        time_stats(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The most common month is June"));
        assert!(text.contains("The most common day of week is Friday"));
        assert!(text.contains("The most common hour is 15"));
    }

    #[test]
    fn test_empty_table_has_no_stats() {
        assert!(TimeStats::compute(&TripTable::default()).is_none());
    }
}
