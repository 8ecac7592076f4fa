//! Trip record and trip table types.

use chrono::{NaiveDateTime, Timelike};

use super::{DayFilter, Month, MonthFilter, Weekday};
use crate::constants;

/// One bike share trip.
///
/// The derived fields (`month`, `weekday`, `hour`) are computed from
/// `start_time` once, when the record is built.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Raw identifier from the leading (unnamed) column.
    pub trip_number: String,
    pub start_time: NaiveDateTime,
    /// End time as found in the source; only ever displayed.
    pub end_time: String,
    /// Trip duration in seconds.
    pub duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    pub month: Month,
    pub weekday: Weekday,
    pub hour: u32,
    /// Raw cells of source columns the reports do not use, in
    /// [`Schema::extra_columns`] order.
    pub extra: Vec<String>,
}

impl TripRecord {
    /// Builds a record and derives its calendar fields from `start_time`.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        trip_number: String,
        start_time: NaiveDateTime,
        end_time: String,
        duration: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<f64>,
    ) -> Self {
        use chrono::Datelike;

        let month = Month::from_number(start_time.month()).unwrap_or(Month::January);
        Self {
            trip_number,
            start_time,
            end_time,
            duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month,
            weekday: Weekday::from(start_time.weekday()),
            hour: start_time.hour(),
            extra: Vec::new(),
        }
    }

    /// Ordered (start, end) station pair identifying a route.
    #[must_use]
    pub fn route(&self) -> (&str, &str) {
        (&self.start_station, &self.end_station)
    }
}

/// Columns computed at load time, appended after the source columns.
pub const DERIVED_COLUMNS: [&str; 5] = [
    constants::COL_MONTH,
    constants::COL_DAY_OF_WEEK,
    constants::COL_MONTH_NAME,
    constants::COL_DAY_NAME,
    constants::COL_HOUR,
];

/// Which optional columns the source file carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Column names as they will be displayed, leading column renamed.
    pub columns: Vec<String>,
    /// Source columns not used by any report.
    pub extra_columns: Vec<String>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    /// Position of an unused source column within [`TripRecord::extra`].
    #[must_use]
    pub fn extra_index(&self, column: &str) -> Option<usize> {
        self.extra_columns.iter().position(|c| c == column)
    }
}

/// Trips for one city after filtering, in file order.
///
/// Row indices are positions in `rows`, so they are always contiguous
/// from zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub schema: Schema,
    pub rows: Vec<TripRecord>,
}

impl TripTable {
    #[must_use]
    pub fn new(schema: Schema, rows: Vec<TripRecord>) -> Self {
        Self { schema, rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps only the trips matching both filters, preserving order.
    pub fn retain_matching(&mut self, month: MonthFilter, day: DayFilter) {
        self.rows
            .retain(|r| month.matches(r.month) && day.matches(r.weekday));
    }

    /// Rows in `[start, start + len)`, clamped to the table.
    #[must_use]
    pub fn slice(&self, start: usize, len: usize) -> &[TripRecord] {
        let start = start.min(self.rows.len());
        let end = start.saturating_add(len).min(self.rows.len());
        &self.rows[start..end]
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{basic_schema, trip};
    use super::*;

    #[test]
    fn test_derived_fields() {
        // 2017-06-23 was a Friday
        let t = trip((2017, 6, 23), 15, ("A", "B"), 60.0);
        assert_eq!(t.month, Month::June);
        assert_eq!(t.weekday, Weekday::Friday);
        assert_eq!(t.hour, 15);
        assert_eq!(t.route(), ("A", "B"));
    }

    #[test]
    fn test_retain_is_idempotent_and_ordered() {
        let rows = vec![
            trip((2017, 1, 2), 8, ("A", "B"), 10.0),  // Monday
            trip((2017, 1, 3), 9, ("B", "C"), 20.0),  // Tuesday
            trip((2017, 2, 6), 10, ("C", "D"), 30.0), // Monday
            trip((2017, 1, 9), 11, ("D", "E"), 40.0), // Monday
        ];
        let mut table = TripTable::new(basic_schema(), rows);

        table.retain_matching(MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Monday));
        let once = table.clone();
        table.retain_matching(MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Monday));

        assert_eq!(table, once);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].start_station, "A");
        assert_eq!(table.rows[1].start_station, "D");
    }

    #[test]
    fn test_retain_all_keeps_everything() {
        let rows = vec![
            trip((2017, 1, 2), 8, ("A", "B"), 10.0),
            trip((2017, 3, 3), 9, ("B", "C"), 20.0),
        ];
        let mut table = TripTable::new(basic_schema(), rows);
        table.retain_matching(MonthFilter::All, DayFilter::All);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_slice_clamps() {
        let rows = (1..=7)
            .map(|d| trip((2017, 1, d), 8, ("A", "B"), 1.0))
            .collect();
        let table = TripTable::new(basic_schema(), rows);
        assert_eq!(table.slice(0, 5).len(), 5);
        assert_eq!(table.slice(5, 5).len(), 2);
        assert!(table.slice(10, 5).is_empty());
    }

    #[test]
    fn test_basic_schema_has_no_optional_columns() {
        let schema = basic_schema();
        assert!(!schema.has_gender);
        assert!(!schema.has_birth_year);
        assert_eq!(schema.columns.len(), 12);
    }
}
