use super::{
    amount::{format_amount, parse_amount, split_amount},
    filename::build_filename,
    AccountNumber, Amount,
};
use crate::config::Settings;
use crate::error::{Result, TransferError};

use serde::{Serialize, Serializer};

/// The raw values of one transfer form, exactly as the user entered or
/// picked them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransferForm {
    /// Customer reference (GL).
    pub reference: String,
    /// Total amount, possibly with separators, e.g. `"25,000,000"`.
    pub amount: String,
    pub debit_label: String,
    pub payee_label: String,
    pub reason_code: String,
    /// Payment date, `DD/MM/YYYY`.
    pub payment_date: String,
    pub payee_email: String,
}

/// One line of the upload file. A form produces one row per amount chunk,
/// and only `amount` differs between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRow {
    #[serde(rename = "Customer Reference (GL)")]
    pub reference: String,

    #[serde(rename = "Payee Name")]
    pub payee_name: String,

    #[serde(rename = "Payee Bank Acc No.")]
    pub payee_account: AccountNumber,

    #[serde(rename = "Amount", serialize_with = "serialize_amount")]
    pub amount: Amount,

    #[serde(rename = "Reason")]
    pub reason: String,

    #[serde(rename = "Payment Date (dd-mm-yy)")]
    pub payment_date: String,

    #[serde(rename = "Debit Acc No.")]
    pub debit_account: AccountNumber,

    #[serde(rename = "Payee Email Address")]
    pub payee_email: String,
}

fn serialize_amount<S>(amount: &Amount, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_amount(*amount))
}

impl TransferForm {
    /// Validate the form and build its rows.
    ///
    /// Checks run in a fixed order and the first failure wins: reference and
    /// amount present, amount parses, both labels resolve, labels differ,
    /// date present.
    pub fn build_rows(&self, settings: &Settings) -> Result<Vec<TransferRow>> {
        let reference = self.reference.trim();
        let amount_text = self.amount.trim();

        if reference.is_empty() {
            return Err(TransferError::MissingField("reference"));
        }
        if amount_text.is_empty() {
            return Err(TransferError::MissingField("amount"));
        }

        let total = parse_amount(amount_text)?;

        let debit_account = settings.bank_accounts.resolve(&self.debit_label)?;
        let payee_account = settings.bank_accounts.resolve(&self.payee_label)?;

        if self.debit_label == self.payee_label {
            return Err(TransferError::SameAccount);
        }

        let payment_date = self.payment_date.trim();
        if payment_date.is_empty() {
            return Err(TransferError::MissingDate);
        }

        // The reason code is glued to the reference without a separator; the
        // back-office import expects e.g. "OTH/FTGL100".
        let reason = format!("{}{}", self.reason_code, reference);

        Ok(split_amount(total, settings.max_per_row)
            .into_iter()
            .map(|amount| TransferRow {
                reference: reference.to_string(),
                payee_name: settings.payee_name.clone(),
                payee_account: payee_account.to_string(),
                amount,
                reason: reason.clone(),
                payment_date: payment_date.to_string(),
                debit_account: debit_account.to_string(),
                payee_email: self.payee_email.clone(),
            })
            .collect())
    }

    /// Suggested name for the exported file.
    pub fn export_filename(&self) -> String {
        build_filename(
            self.reference.trim(),
            &self.debit_label,
            &self.payee_label,
            self.payment_date.trim(),
        )
    }
}

/// Sum of all row amounts, i.e. the total that was entered.
pub fn batch_total(rows: &[TransferRow]) -> Amount {
    rows.iter().map(|row| row.amount).sum()
}

#[cfg(test)]
mod build_rows_tests {
    use super::{batch_total, TransferForm, TransferRow};
    use crate::config::Settings;
    use crate::error::TransferError;
    use rust_decimal_macros::dec;

    fn form() -> TransferForm {
        TransferForm {
            reference: "GL100".to_string(),
            amount: "25,000,000".to_string(),
            debit_label: "SCB (02-01)".to_string(),
            payee_label: "SCB (01-01)".to_string(),
            reason_code: "OTH/FT".to_string(),
            payment_date: "05/03/2024".to_string(),
            payee_email: "tabriji.islam@robi.com.bd".to_string(),
        }
    }

    fn row(amount: rust_decimal::Decimal) -> TransferRow {
        TransferRow {
            reference: "GL100".to_string(),
            payee_name: "Robi Axiata Limited".to_string(),
            payee_account: "X01110915401".to_string(),
            amount,
            reason: "OTH/FTGL100".to_string(),
            payment_date: "05/03/2024".to_string(),
            debit_account: "X0002110915401".to_string(),
            payee_email: "tabriji.islam@robi.com.bd".to_string(),
        }
    }

    #[test]
    // 25M with a 10M ceiling gives two full rows and a remainder row.
    fn test_build_rows_split() {
        let rows = form().build_rows(&Settings::default()).unwrap();

        assert_eq!(
            vec![row(dec!(10000000)), row(dec!(10000000)), row(dec!(5000000))],
            rows
        );
        assert_eq!(dec!(25000000), batch_total(&rows));
    }

    #[test]
    fn test_build_rows_single_row() {
        let mut form = form();
        form.amount = "1,234.50".to_string();

        let rows = form.build_rows(&Settings::default()).unwrap();
        assert_eq!(vec![row(dec!(1234.50))], rows);
    }

    #[test]
    // Surrounding whitespace in typed fields is not carried into the file.
    fn test_build_rows_trims_typed_fields() {
        let mut form = form();
        form.reference = "  GL100 ".to_string();
        form.amount = " 5 ".to_string();
        form.payment_date = " 05/03/2024\n".to_string();

        let rows = form.build_rows(&Settings::default()).unwrap();
        assert_eq!(vec![row(dec!(5))], rows);
    }

    #[test]
    fn test_build_rows_uses_settings() {
        let mut settings = Settings::default();
        settings.max_per_row = dec!(1000);
        settings.payee_name = "Someone Else".to_string();

        let mut form = form();
        form.amount = "2500.25".to_string();

        let rows = form.build_rows(&settings).unwrap();
        let amounts: Vec<_> = rows.iter().map(|r| r.amount).collect();
        assert_eq!(vec![dec!(1000), dec!(1000), dec!(500.25)], amounts);
        assert!(rows.iter().all(|r| r.payee_name == "Someone Else"));
    }

    #[test]
    // Same inputs, same rows: building has no side effects.
    fn test_build_rows_idempotent() {
        let form = form();
        let settings = Settings::default();

        let first = form.build_rows(&settings).unwrap();
        let second = form.build_rows(&settings).unwrap();
        assert_eq!(first, second);
    }

    fn with(edit: impl Fn(&mut TransferForm)) -> TransferForm {
        let mut form = form();
        edit(&mut form);
        form
    }

    #[test]
    fn test_build_rows_validation() {
        let settings = Settings::default();

        for (form, want) in vec![
            (with(|f| f.reference = "".to_string()), "MissingField(\"reference\")"),
            (with(|f| f.reference = "   ".to_string()), "MissingField(\"reference\")"),
            (with(|f| f.amount = "".to_string()), "MissingField(\"amount\")"),
            (with(|f| f.amount = "0".to_string()), "InvalidAmount(\"0\")"),
            (with(|f| f.amount = "abc".to_string()), "InvalidAmount(\"abc\")"),
            (
                with(|f| f.debit_label = "HSBC (01-01)".to_string()),
                "UnknownBankLabel(\"HSBC (01-01)\")",
            ),
            (
                with(|f| f.payee_label = "Generic".to_string()),
                "UnknownBankLabel(\"Generic\")",
            ),
            (
                with(|f| f.payee_label = "SCB (02-01)".to_string()),
                "SameAccount",
            ),
            (with(|f| f.payment_date = "".to_string()), "MissingDate"),
            (with(|f| f.payment_date = "  ".to_string()), "MissingDate"),
        ] {
            let got = form.build_rows(&settings).unwrap_err();
            assert_eq!(want, format!("{:?}", got));
        }
    }

    #[test]
    // When several fields are wrong, the earliest check in the order wins.
    fn test_build_rows_validation_order() {
        let settings = Settings::default();

        let bad = with(|f| {
            f.reference = "".to_string();
            f.amount = "-1".to_string();
        });
        assert!(matches!(
            bad.build_rows(&settings),
            Err(TransferError::MissingField("reference"))
        ));

        let bad = with(|f| {
            f.amount = "nope".to_string();
            f.debit_label = "Unknown".to_string();
        });
        assert!(matches!(
            bad.build_rows(&settings),
            Err(TransferError::InvalidAmount(_))
        ));

        let bad = with(|f| {
            f.debit_label = "Unknown".to_string();
            f.payee_label = "Unknown".to_string();
        });
        assert!(matches!(
            bad.build_rows(&settings),
            Err(TransferError::UnknownBankLabel(_))
        ));

        let bad = with(|f| {
            f.payee_label = f.debit_label.clone();
            f.payment_date = "".to_string();
        });
        assert!(matches!(
            bad.build_rows(&settings),
            Err(TransferError::SameAccount)
        ));
    }

    #[test]
    fn test_export_filename() {
        let mut form = form();
        form.reference = " GL100 ".to_string();
        assert_eq!(
            "GL100_BT SCB 02-01 to 01-01 - Fund Transfer -05.03.2024.csv",
            form.export_filename()
        );
    }
}
