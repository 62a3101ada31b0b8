use thiserror::Error;

/// Everything that can go wrong between reading the form and writing the file.
///
/// Validation errors are all raised before a single row is built, so a caller
/// never has to clean up a half-finished batch.
#[derive(Debug, Error)]
pub enum TransferError {
    /// A required form field (reference or amount) is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The amount text does not parse to a strictly positive decimal.
    #[error("amount must be a positive number (commas allowed), got {0:?}")]
    InvalidAmount(String),

    /// The bank label is not in the account directory.
    #[error("unmapped bank selection: {0}")]
    UnknownBankLabel(String),

    #[error("debit and payee accounts cannot be the same")]
    SameAccount,

    #[error("please select a payment date")]
    MissingDate,

    /// Export was requested without any rows to write.
    #[error("nothing to export, preview the transfer first")]
    EmptyBatch,

    /// Writing the CSV file failed. CSV errors are folded into io errors.
    #[error("failed to save CSV: {0}")]
    ExportIo(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not set up the audit log: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, TransferError>;
