//! Currency naming support
//!
//! This module handles the currency name tables consulted when spelling an
//! amount in currency mode. Each currency maps normalized locale tags
//! (eg. "pt-BR") to singular/plural names for the integer and decimal sides,
//! with alias entries and a designated default tag used as fallback.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::types::NumberSide;

/// Error type for currency operations
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// The named currency is not registered
    Unsupported(String),
    /// A locale tag was empty after normalization
    EmptyTag,
    /// An alias was registered against an unknown base tag
    UnknownBase(String),
    /// No name entry matched after exhausting the fallback order
    LocaleUnavailable(String),
    /// An error occurred while parsing currency data
    ParseError(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::Unsupported(name) => write!(f, "Currency not supported: {}", name),
            CurrencyError::EmptyTag => write!(f, "Currency locale tag is empty"),
            CurrencyError::UnknownBase(tag) => {
                write!(f, "Currency locale alias points to unknown base: {}", tag)
            }
            CurrencyError::LocaleUnavailable(tag) => {
                write!(f, "No currency names available for locale: {}", tag)
            }
            CurrencyError::ParseError(msg) => write!(f, "Error parsing currency data: {}", msg),
        }
    }
}

impl std::error::Error for CurrencyError {}

type Result<T> = std::result::Result<T, CurrencyError>;

/// Singular/plural currency names for both sides of an amount.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyNames {
    /// Whole-unit names: [singular, plural].
    pub integer: [String; 2],
    /// Fractional names: [singular, plural].
    pub decimal: [String; 2],
}

impl CurrencyNames {
    pub fn new(
        integer_singular: &str,
        integer_plural: &str,
        decimal_singular: &str,
        decimal_plural: &str,
    ) -> Self {
        CurrencyNames {
            integer: [integer_singular.to_string(), integer_plural.to_string()],
            decimal: [decimal_singular.to_string(), decimal_plural.to_string()],
        }
    }

    /// Pick the name for a side; values up to one are singular.
    pub fn pick(&self, side: NumberSide, value: u32) -> &str {
        let pair = match side {
            NumberSide::Integer => &self.integer,
            NumberSide::Decimal => &self.decimal,
        };
        if value <= 1 { &pair[0] } else { &pair[1] }
    }
}

/// One currency: name entries keyed by normalized locale tag.
///
/// Read-only once populated; spelling sessions share currencies through
/// `Arc` and never mutate them.
#[derive(Debug, Clone, Default)]
pub struct Currency {
    locales: HashMap<String, CurrencyNames>,
    default_tags: Vec<String>,
}

impl Currency {
    pub fn new() -> Self {
        Currency::default()
    }

    /// Register names under a locale tag. The first registered tag becomes
    /// the default unless [`set_default_locale`](Self::set_default_locale)
    /// chose one already.
    pub fn add_locale(&mut self, tag: &str, names: CurrencyNames) -> Result<()> {
        let normalized = normalize_tag(tag).ok_or(CurrencyError::EmptyTag)?;

        if self.locales.is_empty() && self.default_tags.is_empty() {
            self.set_default_locale(tag);
        }

        self.locales.insert(normalized, names);
        Ok(())
    }

    /// Register an alias tag reusing the names of an existing base tag.
    pub fn add_alias(&mut self, alias: &str, base: &str) -> Result<()> {
        let alias = normalize_tag(alias).ok_or(CurrencyError::EmptyTag)?;
        let base = normalize_tag(base).ok_or(CurrencyError::EmptyTag)?;

        let names = self
            .locales
            .get(&base)
            .cloned()
            .ok_or(CurrencyError::UnknownBase(base))?;
        self.locales.insert(alias, names);
        Ok(())
    }

    /// Set the fallback tag used when resolution exhausts the requested and
    /// alternate tags.
    pub fn set_default_locale(&mut self, tag: &str) {
        self.default_tags = split_tag(tag);
    }

    /// Resolve the name entry for a locale tag.
    ///
    /// Candidates are tried most specific first: the requested tag and its
    /// prefixes, then each alternate the same way, then the default tag.
    /// The first registered candidate wins.
    pub fn names_for(&self, tag: Option<&str>, alternates: &[&str]) -> Result<&CurrencyNames> {
        for candidate in self.ordered_tags(tag, alternates) {
            if let Some(names) = self.locales.get(&candidate) {
                return Ok(names);
            }
        }

        Err(CurrencyError::LocaleUnavailable(
            tag.unwrap_or("<default>").to_string(),
        ))
    }

    fn ordered_tags(&self, tag: Option<&str>, alternates: &[&str]) -> Vec<String> {
        let mut ordered = Vec::new();
        if let Some(tag) = tag {
            push_descending(&mut ordered, &split_tag(tag));
        }
        for alternate in alternates {
            push_descending(&mut ordered, &split_tag(alternate));
        }
        push_descending(&mut ordered, &self.default_tags);
        ordered
    }
}

fn push_descending(ordered: &mut Vec<String>, expansions: &[String]) {
    for tag in expansions.iter().rev() {
        if !ordered.iter().any(|seen| seen == tag) {
            ordered.push(tag.clone());
        }
    }
}

/// Split a locale tag into its normalized expansions, least specific first
/// (eg. "pt.BR" returns ["pt", "pt-BR"]). Limited to three parts; the third
/// keeps its inner separators.
pub fn split_tag(tag: &str) -> Vec<String> {
    let trimmed = tag.trim();

    let end = run_end(trimmed);
    let first_part = &trimmed[..end];
    if first_part.is_empty() {
        return Vec::new();
    }
    let first = first_part.to_lowercase();

    let rest = skip_separators(&trimmed[end..]);
    if rest.is_empty() {
        return vec![first];
    }

    let end = run_end(rest);
    let second = format!("{}-{}", first, rest[..end].to_uppercase());

    let rest = skip_separators(&rest[end..]);
    if rest.is_empty() {
        return vec![first, second];
    }

    let third = format!("{}-{}", second, rest.trim());
    vec![first, second, third]
}

/// Normalize a locale tag (eg. "pt.BR" returns "pt-BR").
pub fn normalize_tag(tag: &str) -> Option<String> {
    split_tag(tag).pop()
}

fn run_end(input: &str) -> usize {
    input
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(input.len())
}

fn skip_separators(input: &str) -> &str {
    let start = input
        .find(|c: char| c.is_ascii_alphanumeric())
        .unwrap_or(input.len());
    &input[start..]
}

/// A currency binding: either the name of a registered currency or a
/// caller-built instance.
#[derive(Debug, Clone)]
pub enum CurrencyRef {
    Name(String),
    Instance(Arc<Currency>),
}

impl From<&str> for CurrencyRef {
    fn from(name: &str) -> Self {
        CurrencyRef::Name(name.to_string())
    }
}

impl From<String> for CurrencyRef {
    fn from(name: String) -> Self {
        CurrencyRef::Name(name)
    }
}

impl From<Currency> for CurrencyRef {
    fn from(currency: Currency) -> Self {
        CurrencyRef::Instance(Arc::new(currency))
    }
}

impl From<Arc<Currency>> for CurrencyRef {
    fn from(currency: Arc<Currency>) -> Self {
        CurrencyRef::Instance(currency)
    }
}

/// Registry of currencies by name.
///
/// The process-wide default carries the built-in table; tests build their
/// own registries and pass them to
/// [`Speller::with_registry`](crate::Speller::with_registry).
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, Arc<Currency>>,
}

// Global singleton for the built-in currency tables
static DEFAULT_REGISTRY: OnceLock<CurrencyRegistry> = OnceLock::new();

impl CurrencyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        CurrencyRegistry::default()
    }

    /// Create a registry holding the built-in currency data.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        if let Err(e) = registry.load_embedded_data() {
            // Just log the error and continue with an empty registry.
            eprintln!("Failed to load embedded currency data: {}", e);
        }

        registry
    }

    /// Load the embedded currency data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let currencies_toml = include_str!("locale/currencies.toml");
        self.parse_currencies(currencies_toml)
    }

    fn parse_currencies(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| CurrencyError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| CurrencyError::ParseError("Root is not a table".to_string()))?;

        for (name, value) in table {
            let currency = Self::parse_currency(value)?;
            self.currencies.insert(name.clone(), Arc::new(currency));
        }

        Ok(())
    }

    fn parse_currency(value: &toml::Value) -> Result<Currency> {
        let table = value
            .as_table()
            .ok_or_else(|| CurrencyError::ParseError("Currency is not a table".to_string()))?;

        let mut currency = Currency::new();

        if let Some(locales) = table.get("locales").and_then(|v| v.as_table()) {
            for (tag, entry) in locales {
                currency.add_locale(tag, Self::parse_names(entry)?)?;
            }
        }

        if let Some(aliases) = table.get("aliases").and_then(|v| v.as_table()) {
            for (alias, base) in aliases {
                let base = base.as_str().ok_or_else(|| {
                    CurrencyError::ParseError(format!("Alias {} is not a string", alias))
                })?;
                currency.add_alias(alias, base)?;
            }
        }

        if let Some(default) = table.get("default").and_then(|v| v.as_str()) {
            currency.set_default_locale(default);
        }

        Ok(currency)
    }

    fn parse_names(value: &toml::Value) -> Result<CurrencyNames> {
        let table = value
            .as_table()
            .ok_or_else(|| CurrencyError::ParseError("Name entry is not a table".to_string()))?;

        let pair = |key: &str| -> Result<[String; 2]> {
            let values = table.get(key).and_then(|v| v.as_array()).ok_or_else(|| {
                CurrencyError::ParseError(format!("Missing or invalid {} names", key))
            })?;
            match values.as_slice() {
                [singular, plural] => Ok([
                    singular.as_str().unwrap_or("").to_string(),
                    plural.as_str().unwrap_or("").to_string(),
                ]),
                _ => Err(CurrencyError::ParseError(format!(
                    "{} names must be a [singular, plural] pair",
                    key
                ))),
            }
        };

        Ok(CurrencyNames {
            integer: pair("integer")?,
            decimal: pair("decimal")?,
        })
    }

    /// Register a currency under a name, replacing any previous entry.
    pub fn register(&mut self, name: &str, currency: Currency) {
        self.currencies
            .insert(name.trim().to_lowercase(), Arc::new(currency));
    }

    /// Look up a currency by name.
    pub fn get(&self, name: &str) -> Result<Arc<Currency>> {
        self.currencies
            .get(&name.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| CurrencyError::Unsupported(name.to_string()))
    }
}

/// Get the process-wide registry holding the built-in currencies.
pub fn default_registry() -> &'static CurrencyRegistry {
    DEFAULT_REGISTRY.get_or_init(CurrencyRegistry::builtin)
}
