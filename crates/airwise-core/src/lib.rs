//! airwise-core
//!
//! Pure domain types for the asthma environmental risk index.
//! No I/O. This is the shared vocabulary of the scoring engine, the
//! Open-Meteo fetcher and the CLI.

pub mod error;
pub mod models;
