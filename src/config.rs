use crate::error::{Result, TransferError};
use crate::transfer::{directory::BankAccountDirectory, Amount};

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Deployment settings: the account directory, the per-row ceiling and the
/// choices offered for each dropdown field.
///
/// `Settings::default()` is the reference deployment. A YAML file only needs
/// the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Largest amount a single row may carry.
    pub max_per_row: Amount,

    /// Payee display name written on every row.
    pub payee_name: String,

    pub bank_accounts: BankAccountDirectory,
    pub debit_labels: Vec<String>,
    pub payee_labels: Vec<String>,
    pub reason_codes: Vec<String>,
    pub payee_emails: Vec<String>,

    /// Where preview/export events are appended.
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_per_row: dec!(10000000),
            payee_name: "Robi Axiata Limited".to_string(),
            bank_accounts: BankAccountDirectory::new([
                ("SCB (02-01)".to_string(), "X0002110915401".to_string()),
                ("SCB (01-02)".to_string(), "X0001110915402".to_string()),
                ("SCB (01-01)".to_string(), "X01110915401".to_string()),
            ]),
            debit_labels: strings(&["SCB (02-01)", "SCB (01-02)", "SCB (01-01)"]),
            payee_labels: strings(&["SCB (01-01)", "SCB (01-02)", "SCB (02-01)"]),
            reason_codes: strings(&["OTH/FT", "OTH/PULLING", "OTH/RETURN"]),
            payee_emails: strings(&["tabriji.islam@robi.com.bd"]),
            log_file: PathBuf::from("transfers.log"),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Settings {
    /// Read settings from a YAML file and validate them.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| TransferError::Config(format!("{}: {}", path.display(), err)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings =
            serde_yaml::from_str(content).map_err(|err| TransferError::Config(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|err| TransferError::Config(err.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_per_row <= Amount::ZERO {
            return Err(TransferError::Config(format!(
                "max_per_row must be positive, got {}",
                self.max_per_row
            )));
        }
        if self.payee_name.trim().is_empty() {
            return Err(TransferError::Config("payee_name is empty".to_string()));
        }

        if self.bank_accounts.is_empty() {
            return Err(TransferError::Config("bank_accounts is empty".to_string()));
        }

        for (name, values) in [
            ("debit_labels", &self.debit_labels),
            ("payee_labels", &self.payee_labels),
            ("reason_codes", &self.reason_codes),
            ("payee_emails", &self.payee_emails),
        ] {
            if values.is_empty() {
                return Err(TransferError::Config(format!("{} is empty", name)));
            }
        }

        for label in self.debit_labels.iter().chain(&self.payee_labels) {
            if !self.bank_accounts.contains(label) {
                return Err(TransferError::Config(format!(
                    "bank label {:?} has no account number in bank_accounts",
                    label
                )));
            }
        }

        Ok(())
    }
}
