//! Console display limits and raw row rendering.
//!
//! A [`DisplayConfig`] is built once at start-up and handed to whatever
//! prints tables; there is no process-wide display state.

use crate::constants;
use crate::state::{Schema, TripRecord, TripTable};

/// Console layout limits for tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Maximum printed line width in characters.
    pub width: usize,
    /// Maximum number of columns before the middle ones are elided.
    pub max_columns: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_DISPLAY_WIDTH,
            max_columns: constants::DEFAULT_MAX_COLUMNS,
        }
    }
}

impl DisplayConfig {
    /// Caps the width to the terminal when stdout is a terminal.
    #[must_use]
    pub fn fit_to_terminal(mut self) -> Self {
        if crossterm::tty::IsTty::is_tty(&std::io::stdout()) {
            if let Ok((cols, _)) = crossterm::terminal::size() {
                if cols > 0 {
                    self.width = self.width.min(usize::from(cols));
                }
            }
        }
        self
    }
}

const ELLIPSIS: &str = "...";

/// Text of one cell of `record` under the display column `column`.
///
/// Columns the loader does not interpret are shown as their raw source text.
fn cell(schema: &Schema, record: &TripRecord, column: &str) -> String {
    match column {
        constants::COL_TRIP_NUMBER => record.trip_number.clone(),
        constants::COL_START_TIME => record.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        constants::COL_END_TIME => record.end_time.clone(),
        constants::COL_TRIP_DURATION => record.duration.to_string(),
        constants::COL_START_STATION => record.start_station.clone(),
        constants::COL_END_STATION => record.end_station.clone(),
        constants::COL_USER_TYPE => missing_or(record.user_type.as_deref()),
        constants::COL_GENDER => missing_or(record.gender.as_deref()),
        constants::COL_BIRTH_YEAR => record
            .birth_year
            .map_or_else(|| "NaN".to_string(), |y| format!("{y:.1}")),
        constants::COL_MONTH => record.month.number().to_string(),
        constants::COL_DAY_OF_WEEK => record.weekday.number().to_string(),
        constants::COL_MONTH_NAME => record.month.name().to_string(),
        constants::COL_DAY_NAME => record.weekday.name().to_string(),
        constants::COL_HOUR => record.hour.to_string(),
        _ => schema
            .extra_index(column)
            .and_then(|i| record.extra.get(i))
            .cloned()
            .unwrap_or_default(),
    }
}

fn missing_or(value: Option<&str>) -> String {
    value.unwrap_or("NaN").to_string()
}

/// Indices of the columns to show; `None` marks the elision column.
fn visible_columns(count: usize, max: usize) -> Vec<Option<usize>> {
    if count <= max || max < 2 {
        return (0..count.min(max.max(1))).map(Some).collect();
    }
    let head = max.div_ceil(2);
    let tail = max / 2;
    (0..head)
        .map(Some)
        .chain(std::iter::once(None))
        .chain((count - tail..count).map(Some))
        .collect()
}

/// Renders `rows` as a right-aligned grid.
///
/// `first_index` is the table position of `rows[0]`; it is printed as the
/// leading index column.
#[must_use]
pub fn render_rows(
    table: &TripTable,
    rows: &[TripRecord],
    first_index: usize,
    config: &DisplayConfig,
) -> String {
    let columns = &table.schema.columns;
    let visible = visible_columns(columns.len(), config.max_columns);

    let header: Vec<String> = std::iter::once(String::new())
        .chain(visible.iter().map(|c| match c {
            Some(i) => columns[*i].clone(),
            None => ELLIPSIS.to_string(),
        }))
        .collect();

    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(offset, record)| {
            std::iter::once((first_index + offset).to_string())
                .chain(visible.iter().map(|c| match c {
                    Some(i) => cell(&table.schema, record, &columns[*i]),
                    None => ELLIPSIS.to_string(),
                }))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            body.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(body.iter()) {
        let text = line
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{value:>width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&truncate(&text, config.width));
        out.push('\n');
    }
    out
}

fn truncate(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.trim_end().to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut cut: String = line.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}
