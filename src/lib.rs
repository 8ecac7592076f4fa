//! Interactive statistics explorer for US bike share trip data.
//!
//! The session asks for a city and optional month/day filters, loads the
//! city's trip file, prints travel-time, station, duration and user
//! statistics, and optionally pages through the raw rows.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod display;
pub mod logging;
pub mod report;
pub mod session;
pub mod state;
