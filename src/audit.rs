//! Audit trail of previews and exports.
//!
//! Every event ends up as one line in an append-only text file, e.g.
//! `2024-03-05 10:15:02,481 - INFO - PREVIEW | Ref=GL100 | Rows=3`,
//! so an export can be traced back after the fact.

use crate::error::{Result, TransferError};
use crate::output::ExportOutcome;
use crate::transfer::row::{TransferForm, TransferRow};

use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Route the `log` facade to `log_file`, appending.
///
/// `RUST_LOG` can still raise or lower the level. Call once per process.
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|err| TransferError::Logging(format!("{}: {}", log_file.display(), err)))?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|err| TransferError::Logging(err.to_string()))
}

pub fn preview(form: &TransferForm, rows: &[TransferRow]) {
    log::info!("{}", preview_message(form, rows));
}

/// Record a rejected form. Validation failures are expected, hence `warn`.
pub fn rejected(form: &TransferForm, err: &TransferError) {
    log::warn!("REJECTED | Ref={} | Reason={}", form.reference.trim(), err);
}

pub fn exported(form: &TransferForm, rows: &[TransferRow], outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Saved(path) => log::info!("{}", success_message(form, rows, path)),
        ExportOutcome::Cancelled => log::info!("User cancelled save dialog."),
    }
}

pub fn export_failed(form: &TransferForm, err: &TransferError) {
    log::error!("{}", failure_message(form, err));
}

fn preview_message(form: &TransferForm, rows: &[TransferRow]) -> String {
    format!("PREVIEW | Ref={} | Rows={}", form.reference.trim(), rows.len())
}

fn success_message(form: &TransferForm, rows: &[TransferRow], path: &Path) -> String {
    format!(
        "SUCCESS | Ref={} | Debit={} | Payee={} | Rows={} | File={}",
        form.reference.trim(),
        form.debit_label,
        form.payee_label,
        rows.len(),
        path.display()
    )
}

fn failure_message(form: &TransferForm, err: &TransferError) -> String {
    format!(
        "ERROR | Ref={} | Debit={} | Payee={} | Reason={}",
        form.reference.trim(),
        form.debit_label,
        form.payee_label,
        err
    )
}
