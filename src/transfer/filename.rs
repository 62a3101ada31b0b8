//! Export filenames, e.g. `GL100_BT SCB 02-01 to 01-01 - Fund Transfer -05.03.2024.csv`.

use chrono::NaiveDate;

const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Split a `"NAME (code)"` label into its bank name and branch code.
///
/// The name must be ASCII alphanumeric and the code must be non-empty without
/// a closing parenthesis; surrounding whitespace is ignored. Labels of any
/// other shape come back whole, with an empty code.
pub fn bank_label_parts(label: &str) -> (String, String) {
    match match_label(label) {
        Some((name, code)) => (name.to_string(), code.trim().to_string()),
        None => (label.trim().to_string(), String::new()),
    }
}

fn match_label(label: &str) -> Option<(&str, &str)> {
    let label = label.trim();
    let (name, rest) = label.split_once('(')?;

    let name = name.trim_end();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let code = rest.strip_suffix(')')?;
    if code.is_empty() || code.contains(')') {
        return None;
    }

    Some((name, code))
}

/// Describe a transfer between two labels as briefly as possible.
pub fn transfer_phrase(from_label: &str, to_label: &str) -> String {
    let (from_bank, from_code) = bank_label_parts(from_label);
    let (to_bank, to_code) = bank_label_parts(to_label);
    let both_coded = !from_code.is_empty() && !to_code.is_empty();

    if both_coded && from_bank == to_bank {
        format!("{} {} to {}", from_bank, from_code, to_code)
    } else if both_coded {
        format!("{} {} to {} {}", from_bank, from_code, to_bank, to_code)
    } else {
        format!("{} to {}", from_label, to_label)
    }
}

/// Replace characters that are not allowed in filenames and normalize spacing.
pub fn safe_filename(name: &str) -> String {
    name.replace(FORBIDDEN_CHARS, "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn build_filename(
    custom_ref: &str,
    debit_label: &str,
    payee_label: &str,
    payment_date: &str,
) -> String {
    let date_part = match parse_payment_date(payment_date) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => payment_date.replace('/', "."),
    };

    safe_filename(&format!(
        "{}_BT {} - Fund Transfer -{}.csv",
        custom_ref,
        transfer_phrase(debit_label, payee_label),
        date_part
    ))
}

// chrono's %Y takes any number of digits and a sign, so the shape is checked
// first: one or two digit day and month, four digit year.
fn parse_payment_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return None;
    }

    NaiveDate::parse_from_str(text, "%d/%m/%Y").ok()
}

#[test]
fn test_bank_label_parts() {
    for (label, want_bank, want_code) in vec![
        ("SCB (02-01)", "SCB", "02-01"),
        ("  SCB(02-01)  ", "SCB", "02-01"),
        ("HSBC ( 01-01 )", "HSBC", "01-01"),
        ("Generic", "Generic", ""),
        ("  Generic  ", "Generic", ""),
        ("Standard Chartered (02-01)", "Standard Chartered (02-01)", ""),
        ("SCB ()", "SCB ()", ""),
        ("SCB (02-01) extra", "SCB (02-01) extra", ""),
        ("SCB (02)01)", "SCB (02)01)", ""),
        ("(02-01)", "(02-01)", ""),
        ("", "", ""),
    ] {
        assert_eq!(
            (want_bank.to_string(), want_code.to_string()),
            bank_label_parts(label),
            "{:?}",
            label
        );
    }
}

#[test]
// A whitespace-only code matches the label shape but trims down to nothing.
fn test_bank_label_parts_blank_code() {
    assert_eq!(
        ("SCB".to_string(), String::new()),
        bank_label_parts("SCB (  )")
    );
    assert_eq!("SCB (  ) to SCB (01-01)", transfer_phrase("SCB (  )", "SCB (01-01)"));
}

#[test]
fn test_transfer_phrase() {
    for (from, to, want) in vec![
        ("SCB (02-01)", "SCB (01-02)", "SCB 02-01 to 01-02"),
        ("SCB (02-01)", "HSBC (01-01)", "SCB 02-01 to HSBC 01-01"),
        ("Generic", "SCB (01-01)", "Generic to SCB (01-01)"),
        ("Cash", "Vault", "Cash to Vault"),
    ] {
        assert_eq!(want, transfer_phrase(from, to));
    }
}

#[test]
fn test_safe_filename() {
    for (name, want) in vec![
        ("a<b>c:d\"e/f\\g|h?i*j", "a-b-c-d-e-f-g-h-i-j"),
        ("  lots   of \t spaces\n", "lots of spaces"),
        ("plain.csv", "plain.csv"),
    ] {
        assert_eq!(want, safe_filename(name));
    }
}
