use rust_decimal::Decimal;
use thiserror::Error;

const DECIMAL_SEPARATOR: char = '.';
const ALTERNATE_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("more than one decimal separator")]
    MultipleSeparators,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("no digits")]
    NoDigits,
    #[error("{0}")]
    NotRepresentable(#[from] rust_decimal::Error),
}

/// Converts a bank-formatted amount into an exact decimal.
///
/// A comma is accepted as the decimal separator and treated as a period. Grouping
/// separators are not stripped, so "1.234,56" fails with
/// [`AmountError::MultipleSeparators`] rather than being guessed at.
pub fn normalize(raw: &str) -> Result<Decimal, AmountError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AmountError::Empty);
    }

    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);

    let mut separators = 0;
    let mut digits = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            DECIMAL_SEPARATOR | ALTERNATE_SEPARATOR => separators += 1,
            other => return Err(AmountError::UnexpectedCharacter(other)),
        }
    }

    if separators > 1 {
        return Err(AmountError::MultipleSeparators);
    }
    if digits == 0 {
        return Err(AmountError::NoDigits);
    }

    let canonical = raw.replace(ALTERNATE_SEPARATOR, &DECIMAL_SEPARATOR.to_string());
    Ok(Decimal::from_str_exact(&canonical)?)
}
