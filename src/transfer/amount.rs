use super::Amount;
use crate::error::{Result, TransferError};

/// Parse a user-typed amount into an exact, strictly positive decimal.
///
/// Anything that is not an ASCII digit or a decimal point is stripped first,
/// so thousands separators, currency symbols and stray spaces are all
/// accepted: `"BDT 1,234.50"` parses to `1234.50`.
pub fn parse_amount(text: &str) -> Result<Amount> {
    let invalid = || TransferError::InvalidAmount(text.to_string());

    // Stripping would otherwise turn "-5" into "5".
    if text.trim_start().starts_with('-') {
        return Err(invalid());
    }

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let amount = Amount::from_str_exact(&cleaned).map_err(|_| invalid())?;
    if amount <= Amount::ZERO {
        return Err(invalid());
    }

    Ok(amount)
}

/// Split `total` into chunks of at most `ceiling`, in order.
///
/// Every chunk but the last equals `ceiling`, and the chunks add up to
/// `total` exactly. A zero total gives no chunks. A non-positive ceiling
/// also gives no chunks instead of looping forever.
pub fn split_amount(total: Amount, ceiling: Amount) -> Vec<Amount> {
    let mut chunks = Vec::new();
    if ceiling <= Amount::ZERO {
        return chunks;
    }

    let mut remaining = total;
    while remaining > Amount::ZERO {
        let chunk = remaining.min(ceiling);
        chunks.push(chunk);
        remaining -= chunk;
    }

    chunks
}

/// Render an amount as plain fixed-point text for the CSV: no grouping
/// separators, no exponent, scale kept as entered.
pub fn format_amount(amount: Amount) -> String {
    amount.to_string()
}

#[test]
// Separators and symbols are stripped before parsing.
fn test_parse_amount_ok() {
    use rust_decimal_macros::dec;

    for (text, want) in vec![
        ("1,234.50", dec!(1234.50)),
        ("25,000,000", dec!(25000000)),
        ("42", dec!(42)),
        ("  7.5  ", dec!(7.5)),
        ("BDT 10,000,000.01", dec!(10000000.01)),
        ("0.01", dec!(0.01)),
    ] {
        assert_eq!(want, parse_amount(text).unwrap(), "{:?}", text);
    }
}

#[test]
// The scale typed by the user survives parsing, so "1,234.50" is written
// back out as "1234.50" and not "1234.5".
fn test_parse_amount_keeps_scale() {
    let amount = parse_amount("1,234.50").unwrap();
    assert_eq!("1234.50", format_amount(amount));
}

#[test]
// Decimals carry at most 28 significant digits; longer totals are refused
// rather than rounded.
fn test_parse_amount_too_many_digits() {
    for text in vec![
        "0.10000000000000000000000000000",
        "123456789012345678901234567890",
    ] {
        assert!(
            matches!(parse_amount(text), Err(TransferError::InvalidAmount(_))),
            "{:?}",
            text
        );
    }
}

#[test]
fn test_parse_amount_invalid() {
    for text in vec!["0", "-5", "", "abc", "0.00", "1.2.3", "...", " -1,000", "--"] {
        match parse_amount(text) {
            Err(TransferError::InvalidAmount(got)) => assert_eq!(text, got),
            other => panic!("{:?} should be rejected, got {:?}", text, other),
        }
    }
}

#[cfg(test)]
mod split_tests {
    use super::{split_amount, Amount};
    use rust_decimal_macros::dec;

    const CEILING: Amount = dec!(10000000);

    #[test]
    fn test_split_amount() {
        for (total, want) in vec![
            (dec!(1), vec![dec!(1)]),
            (dec!(10000000), vec![dec!(10000000)]),
            (dec!(10000000.01), vec![dec!(10000000), dec!(0.01)]),
            (
                dec!(25000000),
                vec![dec!(10000000), dec!(10000000), dec!(5000000)],
            ),
            (
                dec!(30000000),
                vec![dec!(10000000), dec!(10000000), dec!(10000000)],
            ),
        ] {
            assert_eq!(want, split_amount(total, CEILING));
        }
    }

    #[test]
    // Chunks always add back up to the total and stay within the ceiling,
    // whatever the relation between the two.
    fn test_split_amount_sum_and_bounds() {
        for (total, ceiling) in vec![
            (dec!(123456789.123), dec!(10000000)),
            (dec!(0.0001), dec!(10000000)),
            (dec!(99.99), dec!(0.5)),
            (dec!(7), dec!(3)),
            (dec!(1000), dec!(1000)),
            (dec!(12.345), dec!(0.001)),
        ] {
            let chunks = split_amount(total, ceiling);

            assert_eq!(total, chunks.iter().sum::<Amount>());
            assert!(chunks.iter().all(|c| *c > dec!(0) && *c <= ceiling));

            let want_len = (total / ceiling).ceil();
            assert_eq!(want_len, Amount::from(chunks.len()));

            let (last, full) = chunks.split_last().unwrap();
            assert!(full.iter().all(|c| *c == ceiling));
            assert!(*last <= ceiling);
        }
    }

    #[test]
    fn test_split_amount_zero_total() {
        assert!(split_amount(dec!(0), CEILING).is_empty());
        assert!(split_amount(dec!(-3), CEILING).is_empty());
    }

    #[test]
    fn test_split_amount_non_positive_ceiling() {
        assert!(split_amount(dec!(10), dec!(0)).is_empty());
        assert!(split_amount(dec!(10), dec!(-1)).is_empty());
    }
}

#[test]
fn test_format_amount() {
    use rust_decimal_macros::dec;

    for (amount, want) in vec![
        (dec!(10000000), "10000000"),
        (dec!(5000000.50), "5000000.50"),
        (dec!(0.0001), "0.0001"),
        (dec!(123456789012345678), "123456789012345678"),
    ] {
        assert_eq!(want, format_amount(amount));
    }
}
