use winnow::combinator::alt;
use winnow::token::{any, literal, one_of};
use winnow::{ModalResult, Parser};

use crate::types::RawToken;

// Digit parser: the only characters a numeric input actually contributes.
pub fn scan_digit(input: &mut &str) -> ModalResult<RawToken> {
    one_of('0'..='9').map(RawToken::Digit).parse_next(input)
}

// Decimal separator candidate; whether it counts is decided downstream,
// since only the first dot of the input acts as a separator.
pub fn scan_separator(input: &mut &str) -> ModalResult<RawToken> {
    literal(".").value(RawToken::Separator).parse_next(input)
}

// Everything else is discarded (spaces, grouping marks, stray text).
pub fn scan_junk(input: &mut &str) -> ModalResult<RawToken> {
    any.value(RawToken::Junk).parse_next(input)
}

/// Scan a single character of the raw input.
pub fn scan_token(input: &mut &str) -> ModalResult<RawToken> {
    alt((scan_digit, scan_separator, scan_junk)).parse_next(input)
}
