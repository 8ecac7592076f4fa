//! Data loading, aggregation and paging.

pub mod loader;
pub mod pager;
pub mod stats;
