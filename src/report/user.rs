//! User type, gender and birth year breakdowns.
//!
//! Gender and birth year are optional columns; each section checks the
//! table schema on its own so one missing column never hides the other.

use std::io::{self, Write};
use std::time::Instant;

use crate::constants;
use crate::core::stats::{mode, value_counts};
use crate::state::TripTable;

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Everything the user section reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the source has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the source has no birth year column or it is empty.
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        let counts = |values: Vec<&str>| {
            value_counts(values)
                .into_iter()
                .map(|(v, n)| (v.to_string(), n))
                .collect::<Vec<_>>()
        };

        let user_types = counts(
            table
                .rows
                .iter()
                .filter_map(|r| r.user_type.as_deref())
                .collect(),
        );

        let genders = table.schema.has_gender.then(|| {
            counts(
                table
                    .rows
                    .iter()
                    .filter_map(|r| r.gender.as_deref())
                    .collect(),
            )
        });

        let birth_years = if table.schema.has_birth_year {
            birth_year_stats(table)
        } else {
            None
        };

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn birth_year_stats(table: &TripTable) -> Option<BirthYearStats> {
    let years: Vec<i64> = table
        .rows
        .iter()
        .filter_map(|r| r.birth_year)
        .filter(|y| y.is_finite())
        .map(|y| y as i64)
        .collect();

    Some(BirthYearStats {
        earliest: years.iter().copied().min()?,
        most_recent: years.iter().copied().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

fn print_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    let width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(out, "{value:<width$}    {count}")?;
    }
    Ok(())
}

/// Displays statistics on bikeshare users.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn user_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    super::print_header(out, constants::HEADER_USER_STATS)?;
    let started = Instant::now();
    let stats = UserStats::compute(table);

    writeln!(out, "User type counts:")?;
    print_counts(out, &stats.user_types)?;

    match &stats.genders {
        Some(genders) => {
            writeln!(out, "\nGender counts:")?;
            print_counts(out, genders)?;
        }
        None => writeln!(out, "\n{}", constants::MSG_NO_GENDER)?,
    }

    writeln!(out)?;
    match stats.birth_years {
        Some(years) => {
            writeln!(out, "The earliest year of birth is {}", years.earliest)?;
            writeln!(out, "The most recent year of birth is {}", years.most_recent)?;
            writeln!(out, "The most common year of birth is {}", years.most_common)?;
        }
        None => writeln!(out, "{}", constants::MSG_NO_BIRTH_YEAR)?,
    }

    super::print_footer(out, started)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{basic_schema, full_schema, trip};
    use crate::state::TripRecord;

    fn rider(user: &str, gender: Option<&str>, year: Option<f64>) -> TripRecord {
        let mut t = trip((2017, 1, 2), 8, ("A", "B"), 1.0);
        t.user_type = Some(user.to_string());
        t.gender = gender.map(ToString::to_string);
        t.birth_year = year;
        t
    }

    fn full_table() -> TripTable {
        TripTable::new(
            full_schema(),
            vec![
                rider("Subscriber", Some("Male"), Some(1992.0)),
                rider("Customer", None, None),
                rider("Subscriber", Some("Female"), Some(1981.0)),
                rider("Subscriber", Some("Male"), Some(1992.0)),
            ],
        )
    }

    #[test]
    fn test_user_stats_full_schema() {
        let stats = UserStats::compute(&full_table());
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1981,
                most_recent: 1992,
                most_common: 1992,
            })
        );
    }

    #[test]
    fn test_missing_optional_columns_print_substitutes() {
        let table = TripTable::new(
            basic_schema(),
            vec![rider("Subscriber", None, None), rider("Customer", None, None)],
        );
        let mut out = Vec::new();
        user_stats(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("User type counts:"));
        assert!(text.contains(constants::MSG_NO_GENDER));
        assert!(text.contains(constants::MSG_NO_BIRTH_YEAR));
        assert!(text.contains("This took"));
    }

    #[test]
    fn test_sections_degrade_independently() {
        let mut schema = full_schema();
        schema.has_birth_year = false;
        let table = TripTable::new(schema, vec![rider("Subscriber", Some("Female"), None)]);

        let mut out = Vec::new();
        user_stats(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Gender counts:"));
        assert!(!text.contains(constants::MSG_NO_GENDER));
        assert!(text.contains(constants::MSG_NO_BIRTH_YEAR));
    }

    #[test]
    fn test_birth_years_without_gender_column() {
        let mut schema = full_schema();
        schema.has_gender = false;
        let table = TripTable::new(
            schema,
            vec![
                rider("Subscriber", None, Some(1975.0)),
                rider("Customer", None, Some(2001.0)),
                rider("Subscriber", None, Some(1975.0)),
            ],
        );

        let mut out = Vec::new();
        user_stats(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(constants::MSG_NO_GENDER));
        assert!(!text.contains("Gender counts:"));
        assert!(!text.contains(constants::MSG_NO_BIRTH_YEAR));
        assert!(text.contains("The earliest year of birth is 1975"));
        assert!(text.contains("The most recent year of birth is 2001"));
        assert!(text.contains("The most common year of birth is 1975"));
    }

    #[test]
    fn test_non_finite_birth_years_are_ignored() {
        let table = TripTable::new(
            full_schema(),
            vec![
                rider("Subscriber", Some("Male"), Some(f64::NAN)),
                rider("Subscriber", Some("Male"), Some(1990.0)),
                rider("Subscriber", Some("Male"), Some(f64::INFINITY)),
            ],
        );
        assert_eq!(
            UserStats::compute(&table).birth_years,
            Some(BirthYearStats {
                earliest: 1990,
                most_recent: 1990,
                most_common: 1990,
            })
        );
    }

    #[test]
    fn test_birth_year_column_with_no_values() {
        let table = TripTable::new(full_schema(), vec![rider("Customer", None, None)]);
        let stats = UserStats::compute(&table);
        assert_eq!(stats.genders, Some(vec![]));
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn test_full_output() {
        let mut out = Vec::new();
        user_stats(&full_table(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Subscriber    3"));
        assert!(text.contains("The earliest year of birth is 1981"));
        assert!(text.contains("The most recent year of birth is 1992"));
        assert!(text.contains("The most common year of birth is 1992"));
    }
}
