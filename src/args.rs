use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build batch fund-transfer CSV files for back-office upload.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {
    /// YAML settings file (accounts, ceiling, dropdown choices). Built-in defaults if omitted.
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the configured bank labels, reason codes and payee emails
    Options,

    /// Print the effective settings as YAML
    Config,

    /// Show the rows a transfer would produce
    Preview(FormArgs),

    /// Write the transfer rows to a CSV file
    Export {
        #[clap(flatten)]
        form: FormArgs,

        /// Output file. Defaults to the generated filename inside --dir
        #[clap(short, long, conflicts_with = "dir")]
        output: Option<PathBuf>,

        /// Directory for the generated filename
        #[clap(short, long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite the output file if it already exists
        #[clap(short, long)]
        force: bool,
    },
}

/// The transfer form. Omitted choices default to the first configured entry.
#[derive(Debug, clap::Args)]
pub struct FormArgs {
    /// Customer reference (GL)
    #[clap(short, long)]
    pub reference: String,

    /// Total amount, commas allowed
    #[clap(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Debit bank label, e.g. "SCB (02-01)"
    #[clap(long)]
    pub debit: Option<String>,

    /// Payee bank label, e.g. "SCB (01-01)"
    #[clap(long)]
    pub payee: Option<String>,

    /// Reason code
    #[clap(long)]
    pub reason: Option<String>,

    /// Payee email address
    #[clap(long)]
    pub email: Option<String>,

    /// Payment date as DD/MM/YYYY. Defaults to today
    #[clap(long)]
    pub date: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
