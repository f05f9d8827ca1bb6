//! Group formatting module
//!
//! This module turns decomposed and simply-spelled number groups into the
//! final phrase. Each locale contributes a handler implementing [`Locale`];
//! the shared plumbing (decimal extraction, group assembly, currency
//! wrapping) lives here.

mod english;
mod portuguese;

pub use english::EnglishLocale;
pub use portuguese::PortugueseLocale;

use crate::SpellError;
use crate::currency::{CurrencyNames, CurrencyRef, CurrencyRegistry};
use crate::locale::SpellOptions;
use crate::types::{NumberGroups, NumberSide, SpelledGroups, SpellingMode, WordTables};

/// A locale's spelling capability: simple group spelling plus the group
/// formatting state machine.
pub trait Locale: Send + Sync {
    /// Spell one 3-digit group value. `None` means the value has no direct
    /// spelling (zero); the formatter decides what that means.
    fn simple(&self, value: u16) -> Option<String>;

    /// Reassemble the spelled groups into the final phrase.
    fn format(&self, spelled: &SpelledGroups, groups: &NumberGroups, mode: SpellingMode) -> String;
}

/// Resolve the currency names a locale is bound to.
///
/// Runs at construction so that a bad currency binding or an unavailable
/// currency locale surfaces before the first spell call.
pub(crate) fn resolve_currency_names(
    tables: &WordTables,
    options: &SpellOptions,
    registry: &CurrencyRegistry,
) -> Result<CurrencyNames, SpellError> {
    let currency = match &options.currency {
        Some(CurrencyRef::Instance(instance)) => instance.clone(),
        Some(CurrencyRef::Name(name)) => registry.get(name)?,
        None => registry.get(&tables.currency)?,
    };

    Ok(currency
        .names_for(tables.currency_locale.as_deref(), &[])?
        .clone())
}

/// Shared assembly plumbing used by every locale's `format`.
pub(crate) struct Composer<'a> {
    pub(crate) tables: &'a WordTables,
    pub(crate) currency: &'a CurrencyNames,
}

impl Composer<'_> {
    /// Wrap a spelled phrase for one side of the amount.
    ///
    /// In number mode the phrase passes through unchanged. In currency mode
    /// the currency name is appended after a space, or after the long
    /// separator when the remaining groups are a bare high-magnitude amount
    /// (a clean multiple of one million or above).
    pub(crate) fn wrap(
        &self,
        text: &str,
        value: u32,
        spelled: &SpelledGroups,
        side: NumberSide,
        mode: SpellingMode,
    ) -> String {
        if mode != SpellingMode::Currency {
            return text.to_string();
        }

        let suffix = self.currency.pick(side, value);
        let bare_high_magnitude = side == NumberSide::Integer
            && !spelled.is_empty()
            && !spelled.contains_key(&0)
            && !spelled.contains_key(&1)
            && spelled.keys().next_back().is_some_and(|&position| position >= 2);

        let separator = match &self.tables.currency_long_separator {
            Some(separator) if bare_high_magnitude => separator.as_str(),
            _ => " ",
        };

        format!("{text}{separator}{suffix}")
    }

    /// Spell exactly zero.
    pub(crate) fn zero(&self, mode: SpellingMode) -> String {
        self.wrap(
            &self.tables.zero,
            0,
            &SpelledGroups::new(),
            NumberSide::Integer,
            mode,
        )
    }

    /// Extract the decimal phrase, assemble the remaining integer groups and
    /// join both sides.
    ///
    /// `respell` re-spells the decimal group at its true tenths value; the
    /// suffixed `work` map must already carry magnitude words on positions
    /// above zero.
    pub(crate) fn finish(
        &self,
        mut work: SpelledGroups,
        groups: &NumberGroups,
        mode: SpellingMode,
        respell: &dyn Fn(u16) -> Option<String>,
    ) -> String {
        // Decimal group: re-spelled ten times lower, held aside.
        let mut decimal_phrase = None;
        if work.remove(&-1).is_some() {
            let tenths = groups.get(&-1).copied().unwrap_or(0) / 10;
            if let Some(text) = respell(tenths) {
                decimal_phrase = Some(self.wrap(
                    &text,
                    u32::from(tenths),
                    &work,
                    NumberSide::Decimal,
                    mode,
                ));
            }
        }

        // Deeper decimal groups have no spoken form.
        work.retain(|&position, _| position >= 0);

        let integer_phrase = if work.is_empty() {
            None
        } else if work.len() == 1 {
            // A lone group at or above the grouping threshold is always
            // treated as plural.
            work.values()
                .next()
                .map(|text| self.wrap(text, 2, &work, NumberSide::Integer, mode))
        } else {
            let units_value = groups.get(&0).copied().unwrap_or(0);
            let joined = self.assemble(&work, units_value);
            Some(self.wrap(&joined, 2, &work, NumberSide::Integer, mode))
        };

        match (integer_phrase, decimal_phrase) {
            (Some(integer), Some(decimal)) => format!(
                "{integer}{}{decimal}",
                self.tables.currency_decimal_separator
            ),
            (Some(integer), None) => integer,
            (None, Some(decimal)) => decimal,
            (None, None) => self.zero(mode),
        }
    }

    /// Join suffixed groups in descending magnitude order.
    ///
    /// The units group value decides the phrasing: at most 100 or a clean
    /// multiple of 100 pulls the last group in with the final separator
    /// ("one thousand and one"); anything else joins every group with the
    /// group separator ("one thousand, one hundred and one").
    fn assemble(&self, spelled: &SpelledGroups, units_value: u16) -> String {
        let descending: Vec<&str> = spelled.values().rev().map(String::as_str).collect();

        if units_value <= 100 || units_value % 100 == 0 {
            match descending.split_last() {
                Some((last, head)) => format!(
                    "{}{}{last}",
                    head.join(self.tables.group_separator.as_str()),
                    self.tables.final_separator
                ),
                None => String::new(),
            }
        } else {
            descending.join(self.tables.group_separator.as_str())
        }
    }
}
