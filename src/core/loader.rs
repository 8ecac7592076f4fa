//! Reads a city's trip file, derives calendar fields and applies filters.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::constants;
use crate::report;
use crate::state::{FilterSelection, Schema, TripRecord, TripTable, DERIVED_COLUMNS};

/// Timestamp layouts accepted for `Start Time`, tried in order.
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Failure while reading a trip file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The CSV layer failed (I/O or malformed record).
    #[error("failed to read trip data: {0}")]
    Csv(#[from] csv::Error),
    /// The header row is missing a column the reports need.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    /// A cell could not be parsed into the column's type.
    #[error("row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Whether a cell holds one of the usual missing-value markers.
#[must_use]
pub fn is_missing(cell: &str) -> bool {
    constants::MISSING_VALUE_MARKERS.contains(&cell.trim())
}

/// Positions of the columns in a source header.
struct ColumnMap {
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
    /// Source columns the reports do not use, kept for display.
    extra: Vec<usize>,
    schema: Schema,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(LoadError::MissingColumn(name));

        let gender = find(constants::COL_GENDER);
        let birth_year = find(constants::COL_BIRTH_YEAR);

        let known = [
            constants::COL_START_TIME,
            constants::COL_END_TIME,
            constants::COL_TRIP_DURATION,
            constants::COL_START_STATION,
            constants::COL_END_STATION,
            constants::COL_USER_TYPE,
            constants::COL_GENDER,
            constants::COL_BIRTH_YEAR,
        ];
        let extra: Vec<usize> = headers
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, h)| !known.contains(&h.trim()))
            .map(|(i, _)| i)
            .collect();

        // Leading column is the trip identifier whatever its header says
        let mut columns = vec![constants::COL_TRIP_NUMBER.to_string()];
        columns.extend(headers.iter().skip(1).map(|h| h.trim().to_string()));
        columns.extend(DERIVED_COLUMNS.iter().map(ToString::to_string));

        Ok(Self {
            start_time: require(constants::COL_START_TIME)?,
            end_time: require(constants::COL_END_TIME)?,
            duration: require(constants::COL_TRIP_DURATION)?,
            start_station: require(constants::COL_START_STATION)?,
            end_station: require(constants::COL_END_STATION)?,
            user_type: require(constants::COL_USER_TYPE)?,
            gender,
            birth_year,
            schema: Schema {
                columns,
                extra_columns: extra
                    .iter()
                    .map(|&i| headers.get(i).unwrap_or("").trim().to_string())
                    .collect(),
                has_gender: gender.is_some(),
                has_birth_year: birth_year.is_some(),
            },
            extra,
        })
    }

    fn record(&self, row: usize, rec: &csv::StringRecord) -> Result<TripRecord, LoadError> {
        let cell = |i: usize| rec.get(i).unwrap_or("").trim();
        let optional = |i: Option<usize>| {
            i.map(cell)
                .filter(|v| !is_missing(v))
                .map(ToString::to_string)
        };

        let raw_start = cell(self.start_time);
        let start_time = parse_timestamp(raw_start).ok_or_else(|| LoadError::InvalidValue {
            row,
            column: constants::COL_START_TIME,
            value: raw_start.to_string(),
        })?;

        let raw_duration = cell(self.duration);
        let duration = raw_duration
            .parse::<f64>()
            .map_err(|_| LoadError::InvalidValue {
                row,
                column: constants::COL_TRIP_DURATION,
                value: raw_duration.to_string(),
            })?;

        let birth_year = match optional(self.birth_year) {
            Some(raw) => {
                let year = raw.parse::<f64>().map_err(|_| LoadError::InvalidValue {
                    row,
                    column: constants::COL_BIRTH_YEAR,
                    value: raw.clone(),
                })?;
                year.is_finite().then_some(year)
            }
            None => None,
        };

        let mut trip = TripRecord::new(
            cell(0).to_string(),
            start_time,
            cell(self.end_time).to_string(),
            duration,
            cell(self.start_station).to_string(),
            cell(self.end_station).to_string(),
            optional(Some(self.user_type)),
            optional(self.gender),
            birth_year,
        );
        trip.extra = self.extra.iter().map(|&i| cell(i).to_string()).collect();
        Ok(trip)
    }
}

/// Parses a `Start Time` cell.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Reads every trip from CSV `reader`, in file order, without filtering.
///
/// # Errors
///
/// Returns an error on malformed CSV, a missing required column, or a
/// cell that does not parse.
pub fn read_trips<R: Read>(reader: R) -> Result<TripTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let rec = result?;
        rows.push(columns.record(i, &rec)?);
    }

    Ok(TripTable::new(columns.schema, rows))
}

/// Path of the source file for the selected city.
#[must_use]
pub fn source_path(data_dir: &Path, selection: &FilterSelection) -> PathBuf {
    data_dir.join(selection.city.file_name())
}

/// Loads the selected city's trips and keeps those matching the filters.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn load_table(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable, LoadError> {
    let path = source_path(data_dir, selection);
    debug!(path = %path.display(), "Opening trip file");

    let file = File::open(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;
    let mut table = read_trips(file)?;
    let total = table.len();

    table.retain_matching(selection.month, selection.day);
    info!(
        city = %selection.city,
        total,
        retained = table.len(),
        "Trip data loaded"
    );
    Ok(table)
}

/// Loads the table and prints the filter summary, row count and timing.
///
/// # Errors
///
/// Returns an error if loading fails or the output cannot be written.
pub fn load_data<W: Write>(
    data_dir: &Path,
    selection: &FilterSelection,
    out: &mut W,
) -> color_eyre::Result<TripTable> {
    writeln!(
        out,
        "Loading data for city={} and filtering by month={}, day={}",
        selection.city, selection.month, selection.day
    )?;
    let started = Instant::now();

    let table = load_table(data_dir, selection)?;

    writeln!(out, "Data row count: {} ", table.len())?;
    writeln!(out)?;
    report::print_elapsed(out, started)?;
    report::print_hline(out)?;

    Ok(table)
}
