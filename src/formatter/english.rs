//! English number spelling
//!
//! Spells groups with the regular hundred suffix ("one hundred and one"),
//! a flat magnitude name list (thousand, million, ...) and the first-one
//! identifier substitution on a lone leading magnitude group
//! ("a thousand" when configured).

use crate::SpellError;
use crate::currency::{CurrencyNames, CurrencyRegistry};
use crate::formatter::{Composer, Locale, resolve_currency_names};
use crate::locale::{self, SpellOptions, apply_options};
use crate::types::{NumberGroups, NumberSide, SpelledGroups, SpellingMode, WordTables};

/// English locale handler.
#[derive(Debug, Clone)]
pub struct EnglishLocale {
    tables: WordTables,
    currency: CurrencyNames,
}

impl EnglishLocale {
    /// Build the handler from the built-in tables, merged options and a
    /// currency registry. Configuration errors surface here, not on spell.
    pub fn new(options: SpellOptions, registry: &CurrencyRegistry) -> Result<Self, SpellError> {
        let tables = apply_options(
            locale::builtin_tables("en").unwrap_or_default(),
            &options,
        );
        let currency = resolve_currency_names(&tables, &options, registry)?;

        Ok(EnglishLocale { tables, currency })
    }

    fn composer(&self) -> Composer<'_> {
        Composer {
            tables: &self.tables,
            currency: &self.currency,
        }
    }

    /// Swap the leading "one" for the configured identifier on values in
    /// 100..=199 ("one hundred" to "a hundred"). The default identifier is
    /// "one" itself, which leaves the text alone.
    fn apply_first_one(&self, text: &str) -> String {
        if self.tables.first_one.as_deref() == Some("one") {
            return text.to_string();
        }

        match text.strip_prefix("one ") {
            Some(rest) => match &self.tables.first_one {
                Some(identifier) => format!("{identifier} {rest}"),
                None => rest.to_string(),
            },
            None => text.to_string(),
        }
    }

    fn word(&self, value: u16) -> &str {
        self.tables
            .simple
            .get(&value)
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Locale for EnglishLocale {
    fn simple(&self, value: u16) -> Option<String> {
        if let Some(word) = self.tables.simple.get(&value) {
            return Some(word.clone());
        }

        // Over one hundred: combine (eg. "one hundred and twenty-one").
        if value >= 100 {
            let mut text = format!("{}{}", self.word(value / 100), self.tables.hundred);
            if value % 100 != 0 {
                text.push_str(&self.tables.hundred_separator);
                text.push_str(&self.simple(value % 100).unwrap_or_default());
            }
            return Some(text);
        }

        // Over twenty: combine tens and units (eg. "twenty-one").
        if value > 20 {
            return Some(format!(
                "{}{}{}",
                self.word(value / 10 * 10),
                self.tables.compound_separator,
                self.word(value % 10)
            ));
        }

        None
    }

    fn format(&self, spelled: &SpelledGroups, groups: &NumberGroups, mode: SpellingMode) -> String {
        let composer = self.composer();

        if spelled.is_empty() {
            // No spellable group at all: the number is zero.
            return composer.zero(mode);
        }

        if spelled.len() == 1 && spelled.contains_key(&0) {
            let value = groups.get(&0).copied().unwrap_or(0);
            let text = if (100..200).contains(&value) {
                self.apply_first_one(&spelled[&0])
            } else {
                spelled[&0].clone()
            };
            return composer.wrap(&text, u32::from(value), spelled, NumberSide::Integer, mode);
        }

        // Apply magnitude names to every group above the units.
        let mut work = spelled.clone();
        let last_position = work.keys().next_back().copied().unwrap_or(0);
        for (&position, text) in work.iter_mut() {
            if position < 1 {
                continue;
            }

            let value = groups.get(&position).copied().unwrap_or(0);
            let scale = self
                .tables
                .scale
                .get((position - 1) as usize)
                .map(String::as_str)
                .unwrap_or("");

            if position == last_position && value == 1 {
                // The leading lone "one" takes the first-one identifier.
                *text = match &self.tables.first_one {
                    Some(identifier) => format!("{identifier} {scale}"),
                    None => scale.to_string(),
                };
            } else {
                text.push(' ');
                text.push_str(scale);
            }
        }

        composer.finish(work, groups, mode, &|value| self.simple(value))
    }
}
