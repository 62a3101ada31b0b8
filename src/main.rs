mod args;

use args::{Command, FormArgs};
use fund_transfer::{
    audit,
    config::Settings,
    error::Result,
    output::{self, ExportOutcome},
    transfer::{
        amount::format_amount,
        row::{batch_total, TransferForm, TransferRow},
    },
};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: args::Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match args.command {
        Command::Options => print_options(&settings),
        Command::Config => print!("{}", settings.to_yaml()?),
        Command::Preview(form) => {
            audit::init(&settings.log_file)?;
            let form = form_from_args(form, &settings);
            let rows = build_rows(&form, &settings)?;
            audit::preview(&form, &rows);
            print_preview(&rows);
        }
        Command::Export {
            form,
            output: output_path,
            dir,
            force,
        } => {
            audit::init(&settings.log_file)?;
            let form = form_from_args(form, &settings);
            let rows = build_rows(&form, &settings)?;

            let path = output_path.unwrap_or_else(|| dir.join(form.export_filename()));
            let destination = export_destination(path, force);

            match output::export(&rows, destination.as_deref()) {
                Ok(outcome) => {
                    audit::exported(&form, &rows, &outcome);
                    if let ExportOutcome::Saved(path) = outcome {
                        println!("CSV saved: {}", path.display());
                    }
                }
                Err(err) => {
                    audit::export_failed(&form, &err);
                    return Err(err);
                }
            }
        }
    }

    Ok(())
}

// Declining to overwrite is the same as closing the save dialog.
fn export_destination(path: PathBuf, force: bool) -> Option<PathBuf> {
    if path.exists() && !force {
        eprintln!(
            "{} already exists, use --force to overwrite. Nothing was written.",
            path.display()
        );
        return None;
    }
    Some(path)
}

fn build_rows(form: &TransferForm, settings: &Settings) -> Result<Vec<TransferRow>> {
    form.build_rows(settings).map_err(|err| {
        audit::rejected(form, &err);
        err
    })
}

// Fill in omitted choices the way the form preselects them.
fn form_from_args(args: FormArgs, settings: &Settings) -> TransferForm {
    TransferForm {
        reference: args.reference,
        amount: args.amount,
        debit_label: args.debit.unwrap_or_else(|| first(&settings.debit_labels)),
        payee_label: args.payee.unwrap_or_else(|| first(&settings.payee_labels)),
        reason_code: args.reason.unwrap_or_else(|| first(&settings.reason_codes)),
        payment_date: args
            .date
            .unwrap_or_else(|| chrono::Local::now().format("%d/%m/%Y").to_string()),
        payee_email: args.email.unwrap_or_else(|| first(&settings.payee_emails)),
    }
}

fn first(values: &[String]) -> String {
    values.first().cloned().unwrap_or_default()
}

fn print_options(settings: &Settings) {
    for (title, values) in [
        ("Debit bank accounts", &settings.debit_labels),
        ("Payee bank accounts", &settings.payee_labels),
        ("Reasons", &settings.reason_codes),
        ("Payee emails", &settings.payee_emails),
    ] {
        println!("{}:", title);
        for value in values {
            println!("  {}", value);
        }
    }
    println!("Known bank labels:");
    for label in settings.bank_accounts.labels() {
        println!("  {}", label);
    }
    println!(
        "Amounts above {} are split into multiple rows.",
        format_amount(settings.max_per_row)
    );
}

fn print_preview(rows: &[TransferRow]) {
    let table: Vec<[String; 8]> = rows
        .iter()
        .map(|row| {
            [
                row.reference.clone(),
                row.payee_name.clone(),
                row.payee_account.clone(),
                format_amount(row.amount),
                row.reason.clone(),
                row.payment_date.clone(),
                row.debit_account.clone(),
                row.payee_email.clone(),
            ]
        })
        .collect();

    let mut widths = output::COLUMNS.map(|column| column.chars().count());
    for cells in &table {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let print_line = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        println!("{}", line.join(" | ").trim_end());
    };

    print_line(&output::COLUMNS[..]);
    for cells in &table {
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        print_line(&cells[..]);
    }

    println!();
    println!("Total line items: {}", rows.len());
    println!("Total amount: {}", format_amount(batch_total(rows)));
}
