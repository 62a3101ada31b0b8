//! Builds batch fund-transfer CSV files for a banking back-office upload.
//!
//! A [`transfer::row::TransferForm`] holds what the user typed or picked.
//! `build_rows` validates it and splits the total into rows no larger than
//! the configured ceiling, `output::export` writes them out, and
//! `export_filename` suggests a name for the file.

pub mod audit;
pub mod config;
pub mod error;
pub mod output;
pub mod transfer;
