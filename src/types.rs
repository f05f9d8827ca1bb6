//! Type definitions for number spelling
//!
//! This module defines the shared types used across the decomposition and
//! formatting pipeline: spelling modes, number sides, group maps and the
//! word tables every locale is built from.

use std::collections::BTreeMap;

/// How a number should be spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingMode {
    /// Plain number words ("two thousand and two").
    Number,
    /// Currency words appended ("two thousand and two dollars").
    Currency,
}

/// Which side of a decimal amount a phrase belongs to (eg. 1.05 has an
/// integer side of 1 and a decimal side of 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSide {
    /// Whole-unit part of the amount.
    Integer,
    /// Fractional (cents) part of the amount.
    Decimal,
}

/// Grammatical gender for locales that inflect number words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// Raw scanner token produced while normalizing a numeric input string.
#[derive(Debug, Clone, PartialEq)]
pub enum RawToken {
    /// An ASCII digit to keep.
    Digit(char),
    /// A decimal separator candidate (only the first one counts).
    Separator,
    /// Anything else; discarded.
    Junk,
}

/// Decomposed number: position of a 3-digit group mapped to its value.
///
/// Position 0 is the units/hundreds group, position 1 the thousands group,
/// position N weighs 1000^N. Negative positions hold the decimal part,
/// most significant chunk first at -1. Every value is in 0..=999.
pub type NumberGroups = BTreeMap<i32, u16>;

/// Spelled groups: the subset of [`NumberGroups`] positions whose simple
/// spelling is non-empty, mapped to that spelling. Zero-valued groups are
/// absent, which downstream formatting uses to skip magnitude suffixes.
pub type SpelledGroups = BTreeMap<i32, String>;

/// A numeric input accepted by the spelling entry points.
///
/// Holds the textual form of the number; native numbers go through their
/// canonical display form, so `1500.00f64` spells the same as `1500`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberInput(String);

impl NumberInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput(value)
    }
}

macro_rules! number_input_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for NumberInput {
            fn from(value: $ty) -> Self {
                NumberInput(value.to_string())
            }
        })*
    };
}

number_input_from!(i32, i64, i128, u32, u64, u128, f64);

/// The complete word configuration of one locale.
///
/// Loaded from the embedded locale data and then adjusted by
/// [`SpellOptions`](crate::locale::SpellOptions) at construction time.
/// Immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordTables {
    /// Directly spellable values (1..=19, the tens, and for locales with
    /// irregular hundreds the 100..=900 multiples).
    pub simple: BTreeMap<u16, String>,
    /// Female variant of `simple` for locales with gender agreement.
    pub simple_female: BTreeMap<u16, String>,
    /// Magnitude names ordered by group position minus one
    /// (thousand, million, ...).
    pub scale: Vec<String>,
    /// Magnitude roots for locales that inflect magnitude words
    /// (Portuguese "milh", "bilh", ...), ordered from position 2.
    pub scale_roots: Vec<String>,
    /// Singular and plural suffix completing a magnitude root.
    pub scale_suffixes: [String; 2],
    /// Spelling of exactly zero.
    pub zero: String,
    /// Hundred word; a suffix in English (" hundred"), the standalone
    /// word for exactly 100 in Portuguese ("cem").
    pub hundred: String,
    /// Dedicated thousand word for locales that do not treat the
    /// thousands group through `scale` (Portuguese "mil").
    pub thousand: String,
    /// Word substituted for "one" on a lone most-significant magnitude
    /// group ("a thousand"); `None` drops the word entirely.
    pub first_one: Option<String>,
    /// Separator between a hundreds word and the rest of the group.
    pub hundred_separator: String,
    /// Separator inside compound tens ("twenty-one").
    pub compound_separator: String,
    /// Separator between spelled groups ("one million, one thousand").
    pub group_separator: String,
    /// Separator before the last spelled group ("one thousand and one").
    pub final_separator: String,
    /// Separator between a bare high-magnitude amount and the currency
    /// name ("um milhão de reais"); `None` uses a plain space.
    pub currency_long_separator: Option<String>,
    /// Separator between the integer and decimal phrases.
    pub currency_decimal_separator: String,
    /// Name of the default currency binding.
    pub currency: String,
    /// Locale tag used to pick currency names; `None` falls back to the
    /// currency's own default tag.
    pub currency_locale: Option<String>,
    /// Spell a thousands group of exactly one as "um mil" instead of the
    /// bare thousand word.
    pub include_one_thousand: bool,
}
