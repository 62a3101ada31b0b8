use super::AccountNumber;
use crate::error::{Result, TransferError};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps the bank/branch labels users pick from to the account numbers that
/// end up in the file.
///
/// The directory is loaded once with the rest of the settings and never
/// edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankAccountDirectory {
    accounts: BTreeMap<String, AccountNumber>,
}

impl BankAccountDirectory {
    pub fn new(accounts: impl IntoIterator<Item = (String, AccountNumber)>) -> Self {
        Self {
            accounts: accounts.into_iter().collect(),
        }
    }

    /// Look up the account number for a label. Labels must match exactly.
    pub fn resolve(&self, label: &str) -> Result<&str> {
        self.accounts
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| TransferError::UnknownBankLabel(label.to_string()))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.accounts.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
