use winnow::Parser;
use winnow::combinator::repeat;

use crate::parser::tokens::scan_token;
use crate::types::{NumberGroups, RawToken};

/// Decompose a raw numeric string into 3-digit groups.
///
/// Scanning is tolerant: digits are kept, the first `.` splits the integer
/// and decimal sides, and every other character (including further dots) is
/// dropped. Malformed input degrades to zero-valued groups; this never
/// fails.
///
/// The integer side is chunked from the right into positions 0, 1, 2, ...
/// and always yields at least position 0. The decimal side is right-padded
/// to whole chunks and assigned positions -1, -2, ... from its most
/// significant chunk.
///
/// # Examples
/// ```
/// use number_spell::parser::decompose;
///
/// let groups = decompose("1500.01");
/// assert_eq!(groups.get(&1), Some(&1));
/// assert_eq!(groups.get(&0), Some(&500));
/// assert_eq!(groups.get(&-1), Some(&10));
/// ```
pub fn decompose(raw: &str) -> NumberGroups {
    let (integer_digits, decimal_digits) = normalize(raw);

    let mut groups = NumberGroups::new();
    integer_groups(&integer_digits, &mut groups);
    if let Some(digits) = decimal_digits {
        decimal_groups(&digits, &mut groups);
    }

    groups
}

/// Split the raw input into its integer and decimal digit strings.
fn normalize(raw: &str) -> (String, Option<String>) {
    let mut input = raw;
    let tokens: Vec<RawToken> = repeat(0.., scan_token)
        .parse_next(&mut input)
        .unwrap_or_default();

    let mut integer_digits = String::new();
    let mut decimal_digits: Option<String> = None;
    for token in tokens {
        match token {
            RawToken::Digit(digit) => match &mut decimal_digits {
                Some(digits) => digits.push(digit),
                None => integer_digits.push(digit),
            },
            RawToken::Separator => {
                if decimal_digits.is_none() {
                    decimal_digits = Some(String::new());
                }
            }
            RawToken::Junk => {}
        }
    }

    (integer_digits, decimal_digits)
}

fn integer_groups(digits: &str, groups: &mut NumberGroups) {
    if digits.is_empty() {
        groups.insert(0, 0);
        return;
    }

    let bytes = digits.as_bytes();
    let mut position = 0;
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.insert(position, chunk_value(&bytes[start..end]));
        position += 1;
        end = start;
    }
}

fn decimal_groups(digits: &str, groups: &mut NumberGroups) {
    if digits.is_empty() {
        // A trailing dot still marks a decimal side.
        groups.insert(-1, 0);
        return;
    }

    let mut padded = digits.to_string();
    while padded.len() % 3 != 0 {
        padded.push('0');
    }

    for (index, chunk) in padded.as_bytes().chunks(3).enumerate() {
        groups.insert(-(index as i32) - 1, chunk_value(chunk));
    }
}

fn chunk_value(chunk: &[u8]) -> u16 {
    chunk
        .iter()
        .fold(0, |value, byte| value * 10 + u16::from(byte - b'0'))
}
