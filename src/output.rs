use crate::error::{Result, TransferError};
use crate::transfer::row::TransferRow;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Column headers, in the order the back-office import expects them.
pub const COLUMNS: [&str; 8] = [
    "Customer Reference (GL)",
    "Payee Name",
    "Payee Bank Acc No.",
    "Amount",
    "Reason",
    "Payment Date (dd-mm-yy)",
    "Debit Acc No.",
    "Payee Email Address",
];

// Spreadsheet tools only detect UTF-8 reliably with a byte-order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// What happened to an export request.
#[derive(Debug, PartialEq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    /// No destination was chosen, nothing was written.
    Cancelled,
}

// Writes the header and the rows to the given stream.
pub fn write_rows(mut output_stream: impl Write, rows: &[TransferRow]) -> Result<()> {
    output_stream.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(output_stream);

    writer.write_record(COLUMNS).map_err(io::Error::from)?;
    for row in rows {
        writer.serialize(row).map_err(io::Error::from)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write `rows` to `destination`, replacing any existing file.
///
/// A `None` destination is a cancelled save dialog and is not an error. An
/// empty batch is refused before anything is created on disk.
pub fn export(rows: &[TransferRow], destination: Option<&Path>) -> Result<ExportOutcome> {
    if rows.is_empty() {
        return Err(TransferError::EmptyBatch);
    }

    let Some(path) = destination else {
        return Ok(ExportOutcome::Cancelled);
    };

    let file = File::create(path)?;
    write_rows(BufWriter::new(file), rows)?;

    Ok(ExportOutcome::Saved(path.to_path_buf()))
}
