//! Portuguese number spelling
//!
//! Spells groups with irregular hundreds ("cem"/"cento", "duzentos"), a
//! dedicated thousand word ("mil" with no "um" in front), inflected
//! magnitude words built from roots ("milhão"/"milhões") and optional
//! female gender agreement ("vinte e uma").

use crate::SpellError;
use crate::currency::{CurrencyNames, CurrencyRegistry};
use crate::formatter::{Composer, Locale, resolve_currency_names};
use crate::locale::{self, SpellOptions, apply_options};
use crate::types::{Gender, NumberGroups, NumberSide, SpelledGroups, SpellingMode, WordTables};

/// Portuguese locale handler.
#[derive(Debug, Clone)]
pub struct PortugueseLocale {
    tables: WordTables,
    currency: CurrencyNames,
}

impl PortugueseLocale {
    /// Build the handler from the built-in tables, merged options and a
    /// currency registry. The gender variant is baked into the word table
    /// here; spelling itself is gender-free.
    pub fn new(options: SpellOptions, registry: &CurrencyRegistry) -> Result<Self, SpellError> {
        let mut tables = apply_options(
            locale::builtin_tables("pt").unwrap_or_default(),
            &options,
        );
        if options.gender == Some(Gender::Female) {
            tables.simple = tables.simple_female.clone();
        }
        let currency = resolve_currency_names(&tables, &options, registry)?;

        Ok(PortugueseLocale { tables, currency })
    }

    fn composer(&self) -> Composer<'_> {
        Composer {
            tables: &self.tables,
            currency: &self.currency,
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

impl Locale for PortugueseLocale {
    fn simple(&self, value: u16) -> Option<String> {
        // Exactly one hundred has its own word.
        if value == 100 {
            return Some(self.tables.hundred.clone());
        }

        if let Some(word) = self.tables.simple.get(&value) {
            return Some(word.clone());
        }

        // Over one hundred: combine (eg. "cento e vinte e um").
        if value > 100 {
            return Some(format!(
                "{}{}{}",
                self.word(value / 100 * 100),
                self.tables.final_separator,
                self.simple(value % 100).unwrap_or_default()
            ));
        }

        // Over twenty: combine tens and units (eg. "vinte e um").
        if value > 20 {
            return Some(format!(
                "{}{}{}",
                self.word(value / 10 * 10),
                self.tables.final_separator,
                self.word(value % 10)
            ));
        }

        None
    }

    fn format(&self, spelled: &SpelledGroups, groups: &NumberGroups, mode: SpellingMode) -> String {
        let composer = self.composer();

        if spelled.is_empty() {
            return composer.zero(mode);
        }

        if spelled.len() == 1 && spelled.contains_key(&0) {
            let value = groups.get(&0).copied().unwrap_or(0);
            return composer.wrap(
                &spelled[&0],
                u32::from(value),
                spelled,
                NumberSide::Integer,
                mode,
            );
        }

        // Apply magnitude words to every group above the units.
        let mut work = spelled.clone();
        for (&position, text) in work.iter_mut() {
            let value = groups.get(&position).copied().unwrap_or(0);

            if position == 1 {
                if value == 1 && !self.tables.include_one_thousand {
                    // Exclusively for one thousand, the bare word stands
                    // ("um mil" becomes "mil").
                    *text = self.tables.thousand.clone();
                } else {
                    text.push(' ');
                    text.push_str(&self.tables.thousand);
                }
                continue;
            }

            if position >= 2 {
                // Root plus suffix, plural from two up ("dois milhões").
                let root = self
                    .tables
                    .scale_roots
                    .get((position - 2) as usize)
                    .map(String::as_str)
                    .unwrap_or("");
                let suffix = &self.tables.scale_suffixes[usize::from(value >= 2)];
                text.push(' ');
                text.push_str(root);
                text.push_str(suffix);
            }
        }

        composer.finish(work, groups, mode, &|value| self.simple(value))
    }
}
