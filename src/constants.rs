//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout bikeshare,
//! including default display limits, source column names, file names,
//! and console messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that can point at the data directory.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

// === Display Defaults ===

/// Default console width used when rendering raw rows.
pub const DEFAULT_DISPLAY_WIDTH: usize = 220;
/// Default maximum number of columns shown before eliding the middle ones.
pub const DEFAULT_MAX_COLUMNS: usize = 20;
/// Default number of raw rows revealed per page.
pub const DEFAULT_CHUNK_SIZE: usize = 5;
/// Length of the horizontal rule printed between sections.
pub const HLINE_LENGTH: usize = 80;

// === Source Columns ===

/// Label given to the unnamed leading identifier column.
pub const COL_TRIP_NUMBER: &str = "Trip Number";
pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

// === Derived Columns ===

pub const COL_MONTH: &str = "month";
pub const COL_DAY_OF_WEEK: &str = "day_of_week";
pub const COL_MONTH_NAME: &str = "month_name";
pub const COL_DAY_NAME: &str = "day_name";
pub const COL_HOUR: &str = "hour";

/// Cell contents read as a missing value.
pub const MISSING_VALUE_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Keyword that disables a month or day filter.
pub const FILTER_ALL: &str = "all";

// === Prompts ===

pub const MSG_GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const ERR_UNKNOWN_CITY: &str = "Unknown city.";
pub const ERR_UNKNOWN_MONTH: &str = "Unknown month.";
pub const ERR_UNKNOWN_DAY: &str = "Unknown week day.";
pub const PROMPT_YES_NO_SUFFIX: &str = " Enter yes or no:";
pub const PROMPT_RESTART: &str = "Would you like to restart?";

// === Report Headers ===

pub const HEADER_TIME_STATS: &str = "Calculating The Most Frequent Times of Travel...";
pub const HEADER_STATION_STATS: &str = "Calculating The Most Popular Stations and Trip...";
pub const HEADER_DURATION_STATS: &str = "Calculating Trip Duration...";
pub const HEADER_USER_STATS: &str = "Calculating User Stats...";

// === Report Messages ===

pub const MSG_NO_DATA: &str = "No data found for the input.";
pub const MSG_NO_GENDER: &str = "No gender data available.";
pub const MSG_NO_BIRTH_YEAR: &str = "No birth dates available.";
