//! Shared sample data for vocatio examples and integration tests.

pub mod aptitude;
pub mod careers;
