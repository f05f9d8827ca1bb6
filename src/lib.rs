//! Spell numbers as natural-language words
//!
//! Converts arbitrarily long integers and decimals into their spelled-out
//! form, plain or as a currency amount, with per-locale grammar rules.
//! English and Brazilian Portuguese are built in.
//!
//! ```
//! use number_spell::Speller;
//!
//! let speller = Speller::new("english").unwrap();
//! assert_eq!(speller.spell(1101), "one thousand, one hundred and one");
//! assert_eq!(speller.spell_currency(2.01), "two dollars and one cent");
//! ```

pub mod currency;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

use std::fmt;

pub use currency::{
    Currency, CurrencyError, CurrencyNames, CurrencyRef, CurrencyRegistry, default_registry,
};
pub use formatter::{EnglishLocale, Locale, PortugueseLocale};
pub use locale::{LocaleError, SpellOptions};
pub use parser::decompose;
pub use types::{Gender, NumberGroups, NumberInput, NumberSide, SpelledGroups, SpellingMode};


/// Configuration error raised while building a [`Speller`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpellError {
    /// The locale name or data is bad
    Locale(LocaleError),
    /// The currency binding or its locale tag is bad
    Currency(CurrencyError),
}

impl fmt::Display for SpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellError::Locale(e) => write!(f, "{}", e),
            SpellError::Currency(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SpellError {}

impl From<LocaleError> for SpellError {
    fn from(e: LocaleError) -> Self {
        SpellError::Locale(e)
    }
}

impl From<CurrencyError> for SpellError {
    fn from(e: CurrencyError) -> Self {
        SpellError::Currency(e)
    }
}

/// A spelling session bound to one locale configuration.
///
/// Construction resolves the locale and its currency binding eagerly, so
/// every configuration error surfaces here and spelling itself cannot fail.
pub struct Speller {
    locale: Box<dyn Locale>,
}

impl Speller {
    /// Create a speller for a built-in locale name with default options.
    pub fn new(locale: &str) -> Result<Self, SpellError> {
        Self::with_options(locale, SpellOptions::default())
    }

    /// Create a speller with options merged over the locale defaults.
    ///
    /// # Examples
    /// ```
    /// use number_spell::{Speller, SpellOptions};
    ///
    /// let options = SpellOptions {
    ///     first_one: Some(Some("a".to_string())),
    ///     ..SpellOptions::default()
    /// };
    /// let speller = Speller::with_options("english", options).unwrap();
    /// assert_eq!(speller.spell(1000), "a thousand");
    /// ```
    pub fn with_options(locale: &str, options: SpellOptions) -> Result<Self, SpellError> {
        Self::with_registry(locale, options, currency::default_registry())
    }

    /// Create a speller against a caller-supplied currency registry.
    pub fn with_registry(
        locale: &str,
        options: SpellOptions,
        registry: &CurrencyRegistry,
    ) -> Result<Self, SpellError> {
        Ok(Speller {
            locale: locale::resolve(locale, options, registry)?,
        })
    }

    /// Create a speller from a prebuilt locale handler.
    pub fn from_locale(locale: Box<dyn Locale>) -> Self {
        Speller { locale }
    }

    /// Spell a number as plain words.
    pub fn spell(&self, number: impl Into<NumberInput>) -> String {
        self.spell_as(number, SpellingMode::Number)
    }

    /// Spell a number as a currency amount.
    pub fn spell_currency(&self, number: impl Into<NumberInput>) -> String {
        self.spell_as(number, SpellingMode::Currency)
    }

    /// Spell a number in an explicit mode.
    pub fn spell_as(&self, number: impl Into<NumberInput>, mode: SpellingMode) -> String {
        let input = number.into();
        let groups = parser::decompose(input.as_str());

        // Groups that cannot be spelled naturally are left out; zero is
        // decided by the formatter alone.
        let mut spelled = SpelledGroups::new();
        for (&position, &value) in &groups {
            if let Some(word) = self.locale.simple(value) {
                spelled.insert(position, word);
            }
        }

        self.locale.format(&spelled, &groups, mode)
    }
}
