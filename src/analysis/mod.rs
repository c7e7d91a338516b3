pub mod aggregator;
pub mod comfort;
pub mod error;
pub mod series;
