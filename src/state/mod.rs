//! Domain types shared by the loader, the reporters and the prompt.

mod filter;
mod trip;

pub use filter::{City, DayFilter, FilterSelection, Month, MonthFilter, Weekday};
pub use trip::{Schema, TripRecord, TripTable, DERIVED_COLUMNS};

#[cfg(test)]
pub(crate) use trip::fixtures;
