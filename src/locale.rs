//! Locale support for number spelling
//!
//! This module handles loading the built-in word tables, merging caller
//! options over them, and resolving locale names to spelling handlers.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

use crate::SpellError;
use crate::currency::{CurrencyRef, CurrencyRegistry};
use crate::formatter::{EnglishLocale, Locale, PortugueseLocale};
use crate::types::{Gender, WordTables};

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The specified locale is not a built-in
    Unsupported(String),
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Unsupported(locale) => write!(f, "Locale not supported: {}", locale),
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Holds the word tables of every built-in locale.
struct LocaleManager {
    tables: HashMap<String, WordTables>,
}

// Global singleton for the built-in word tables
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self {
            tables: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with empty maps
            eprintln!("Failed to load embedded locale data: {}", e);
        }

        manager
    }

    /// Load the embedded locale data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let locales_toml = include_str!("locale/locales.toml");
        self.parse_locales(locales_toml)
    }

    fn parse_locales(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        // First load base settings if available
        let base_tables = if let Some(base) = table.get("base") {
            Self::parse_tables(base, WordTables::default())?
        } else {
            WordTables::default()
        };

        // Now load each locale's tables over the base
        for (locale_id, value) in table {
            if locale_id == "base" {
                continue; // Already handled
            }

            let tables = Self::parse_tables(value, base_tables.clone())?;
            self.tables.insert(locale_id.to_string(), tables);
        }

        Ok(())
    }

    /// Parse one locale section onto a copy of the base tables
    fn parse_tables(value: &toml::Value, mut tables: WordTables) -> Result<WordTables> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Locale entry is not a table".to_string()))?;

        let text_fields: [(&str, &mut String); 9] = [
            ("zero", &mut tables.zero),
            ("hundred", &mut tables.hundred),
            ("thousand", &mut tables.thousand),
            ("hundred_separator", &mut tables.hundred_separator),
            ("compound_separator", &mut tables.compound_separator),
            ("group_separator", &mut tables.group_separator),
            ("final_separator", &mut tables.final_separator),
            (
                "currency_decimal_separator",
                &mut tables.currency_decimal_separator,
            ),
            ("currency", &mut tables.currency),
        ];
        for (key, field) in text_fields {
            if let Some(text) = table.get(key).and_then(|v| v.as_str()) {
                *field = text.to_string();
            }
        }

        if let Some(word) = table.get("first_one").and_then(|v| v.as_str()) {
            tables.first_one = Some(word.to_string());
        }
        if let Some(sep) = table.get("currency_long_separator").and_then(|v| v.as_str()) {
            tables.currency_long_separator = Some(sep.to_string());
        }
        if let Some(tag) = table.get("currency_locale").and_then(|v| v.as_str()) {
            tables.currency_locale = Some(tag.to_string());
        }

        if let Some(scale) = table.get("scale").and_then(|v| v.as_array()) {
            tables.scale = Self::parse_word_list(scale);
        }
        if let Some(roots) = table.get("scale_roots").and_then(|v| v.as_array()) {
            tables.scale_roots = Self::parse_word_list(roots);
        }
        if let Some(suffixes) = table.get("scale_suffixes").and_then(|v| v.as_array()) {
            if let [singular, plural] = Self::parse_word_list(suffixes).as_slice() {
                tables.scale_suffixes = [singular.clone(), plural.clone()];
            }
        }

        if let Some(simple) = table.get("simple") {
            tables.simple = Self::parse_word_map(simple)?;
        }
        if let Some(simple_female) = table.get("simple_female") {
            // The female table only lists the entries that differ.
            let mut female = tables.simple.clone();
            female.extend(Self::parse_word_map(simple_female)?);
            tables.simple_female = female;
        }

        Ok(tables)
    }

    fn parse_word_list(values: &[toml::Value]) -> Vec<String> {
        values
            .iter()
            .map(|v| v.as_str().unwrap_or("").to_string())
            .collect()
    }

    fn parse_word_map(value: &toml::Value) -> Result<BTreeMap<u16, String>> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Word map is not a table".to_string()))?;

        let mut words = BTreeMap::new();
        for (key, word) in table {
            let value: u16 = key
                .parse()
                .map_err(|_| LocaleError::ParseError(format!("Invalid word key: {}", key)))?;
            let word = word
                .as_str()
                .ok_or_else(|| LocaleError::ParseError(format!("Word {} is not a string", key)))?;
            words.insert(value, word.to_string());
        }

        Ok(words)
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }
}

/// Get the built-in word tables for a locale identifier (eg. "en", "pt").
pub fn builtin_tables(locale_id: &str) -> Option<WordTables> {
    LocaleManager::get().tables.get(locale_id).cloned()
}

/// List all locale identifiers with built-in word tables.
pub fn available_locales() -> Vec<String> {
    LocaleManager::get().tables.keys().cloned().collect()
}

/// Overrides merged over a locale's built-in configuration.
///
/// Every recognized option is an explicit field; `None` keeps the built-in
/// value. Double-`Option` fields distinguish "keep the default" from
/// "explicitly clear".
#[derive(Debug, Clone, Default)]
pub struct SpellOptions {
    /// Grammatical gender of the spelled words (Portuguese).
    pub gender: Option<Gender>,
    /// Replace the directly-spellable word table.
    pub simple_words: Option<BTreeMap<u16, String>>,
    /// Replace the female word table (Portuguese).
    pub simple_words_female: Option<BTreeMap<u16, String>>,
    /// Replace the magnitude name list (English).
    pub scale_words: Option<Vec<String>>,
    /// Replace the magnitude roots (Portuguese).
    pub scale_roots: Option<Vec<String>>,
    /// Replace the singular/plural magnitude suffixes (Portuguese).
    pub scale_suffixes: Option<[String; 2]>,
    /// Replace the zero word.
    pub zero_word: Option<String>,
    /// Replace the hundred word.
    pub hundred_word: Option<String>,
    /// Replace the thousand word (Portuguese).
    pub thousand_word: Option<String>,
    /// Replace or clear the first-one identifier.
    pub first_one: Option<Option<String>>,
    /// Spell "um mil" instead of the bare thousand word (Portuguese).
    pub include_one_thousand: Option<bool>,
    /// Replace the compound-tens separator.
    pub compound_separator: Option<String>,
    /// Replace the hundred separator.
    pub hundred_separator: Option<String>,
    /// Replace the group separator.
    pub group_separator: Option<String>,
    /// Replace the last-group separator.
    pub final_separator: Option<String>,
    /// Bind another currency, by name or instance.
    pub currency: Option<CurrencyRef>,
    /// Replace or clear the locale tag used for currency names; cleared
    /// means the currency's own default tag applies.
    pub currency_locale: Option<Option<String>>,
    /// Replace or clear the long currency separator.
    pub currency_long_separator: Option<Option<String>>,
    /// Replace the separator between integer and decimal phrases.
    pub currency_decimal_separator: Option<String>,
}

/// Merge options over built-in tables, field by field. The inputs are left
/// untouched; reusing a locale with different options cannot corrupt it.
pub(crate) fn apply_options(mut tables: WordTables, options: &SpellOptions) -> WordTables {
    if let Some(words) = &options.simple_words {
        tables.simple = words.clone();
    }
    if let Some(words) = &options.simple_words_female {
        tables.simple_female = words.clone();
    }
    if let Some(scale) = &options.scale_words {
        tables.scale = scale.clone();
    }
    if let Some(roots) = &options.scale_roots {
        tables.scale_roots = roots.clone();
    }
    if let Some(suffixes) = &options.scale_suffixes {
        tables.scale_suffixes = suffixes.clone();
    }
    if let Some(zero) = &options.zero_word {
        tables.zero = zero.clone();
    }
    if let Some(hundred) = &options.hundred_word {
        tables.hundred = hundred.clone();
    }
    if let Some(thousand) = &options.thousand_word {
        tables.thousand = thousand.clone();
    }
    if let Some(first_one) = &options.first_one {
        tables.first_one = first_one.clone();
    }
    if let Some(include) = options.include_one_thousand {
        tables.include_one_thousand = include;
    }
    if let Some(separator) = &options.compound_separator {
        tables.compound_separator = separator.clone();
    }
    if let Some(separator) = &options.hundred_separator {
        tables.hundred_separator = separator.clone();
    }
    if let Some(separator) = &options.group_separator {
        tables.group_separator = separator.clone();
    }
    if let Some(separator) = &options.final_separator {
        tables.final_separator = separator.clone();
    }
    if let Some(separator) = &options.currency_long_separator {
        tables.currency_long_separator = separator.clone();
    }
    if let Some(separator) = &options.currency_decimal_separator {
        tables.currency_decimal_separator = separator.clone();
    }
    if let Some(tag) = &options.currency_locale {
        tables.currency_locale = tag.clone();
    }
    tables
}

/// Resolve a built-in locale name to a spelling handler.
///
/// Recognized names are "english"/"en" and "portuguese"/"pt",
/// case-insensitive. Unknown names raise
/// [`LocaleError::Unsupported`].
pub fn resolve(
    name: &str,
    options: SpellOptions,
    registry: &CurrencyRegistry,
) -> std::result::Result<Box<dyn Locale>, SpellError> {
    match name.trim().to_lowercase().as_str() {
        "en" | "english" => Ok(Box::new(EnglishLocale::new(options, registry)?)),
        "pt" | "portuguese" => Ok(Box::new(PortugueseLocale::new(options, registry)?)),
        other => Err(LocaleError::Unsupported(other.to_string()).into()),
    }
}
