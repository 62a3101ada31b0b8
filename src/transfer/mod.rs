//! The transfer core: amounts, the account directory, row building and
//! export filenames. Nothing in here touches the filesystem.

pub mod amount;
pub mod directory;
pub mod filename;
pub mod row;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `Vec<Amount>` says more than `Vec<Decimal>` when reading the
// splitting code. Swapping the representation later is also a one-line change.
pub type AccountNumber = String;

// Money is never stored as a binary float: chunk sums have to match the
// entered total to the last digit.
pub type Amount = rust_decimal::Decimal;
