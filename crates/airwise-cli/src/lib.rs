//! airwise-cli library root.
//!
//! Re-exports the config, report and rendering modules so integration
//! tests can exercise them without going through the binary.

pub mod config;
pub mod render;
pub mod report;
