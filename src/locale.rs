//! Vocabulary support for the humanize helpers
//!
//! This module loads the English word tables (number words, ordinal suffixes,
//! calendar names and duration units) from embedded TOML data and hands out a
//! shared, read-only instance.

use std::sync::OnceLock;

use log::{debug, error};

use crate::error::{HumanizeError, Result};
use crate::types::DurationUnit;

/// Word tables consumed by the formatters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vocabulary {
    ones: Vec<String>,
    teens: Vec<String>,
    tens: Vec<String>,
    hundred: String,
    conjunction: String,
    scales: Vec<String>,
    ordinal_suffixes: Vec<String>,
    day_names: Vec<String>,
    month_names: Vec<String>,
    duration_units: Vec<DurationUnit>,
}

// Global singleton for the embedded English tables
static ENGLISH: OnceLock<Vocabulary> = OnceLock::new();

impl Vocabulary {
    /// The embedded English vocabulary
    pub fn english() -> &'static Self {
        ENGLISH.get_or_init(|| {
            let data = include_str!("locale/en.toml");
            match Self::from_toml_str(data) {
                Ok(vocabulary) => {
                    debug!(
                        "loaded embedded vocabulary with {} duration units",
                        vocabulary.duration_units.len()
                    );
                    vocabulary
                }
                Err(e) => {
                    // Continue with empty tables
                    error!("Failed to load embedded vocabulary: {}", e);
                    Self::default()
                }
            }
        })
    }

    /// Parse a vocabulary document using the same schema as the embedded one
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| HumanizeError::Vocabulary(e.to_string()))?;

        let root = parsed_toml
            .as_table()
            .ok_or_else(|| HumanizeError::Vocabulary("Root is not a table".to_string()))?;

        let numbers = table(root, "numbers")?;
        let ordinals = table(root, "ordinals")?;
        let calendar = table(root, "calendar")?;

        let vocabulary = Self {
            ones: string_array(numbers, "ones", Some(10))?,
            teens: string_array(numbers, "teens", Some(10))?,
            tens: string_array(numbers, "tens", Some(10))?,
            hundred: string(numbers, "hundred")?,
            conjunction: string(numbers, "conjunction")?,
            scales: string_array(numbers, "scales", None)?,
            ordinal_suffixes: string_array(ordinals, "suffixes", None)?,
            day_names: string_array(calendar, "day_names", Some(7))?,
            month_names: string_array(calendar, "month_names", Some(12))?,
            duration_units: duration_units(root)?,
        };

        if vocabulary.scales.is_empty() {
            return Err(HumanizeError::Vocabulary("scales must not be empty".to_string()));
        }
        if vocabulary.ordinal_suffixes.is_empty() {
            return Err(HumanizeError::Vocabulary(
                "ordinal suffixes must not be empty".to_string(),
            ));
        }

        Ok(vocabulary)
    }

    /// Word for a single digit, empty for zero
    pub fn one(&self, digit: usize) -> &str {
        lookup(&self.ones, digit)
    }

    /// Word for 10 to 19, indexed from ten
    pub fn teen(&self, offset: usize) -> &str {
        lookup(&self.teens, offset)
    }

    /// Tens prefix for the tens digit, empty for 0 and 1
    pub fn ten(&self, digit: usize) -> &str {
        lookup(&self.tens, digit)
    }

    /// The word placed after the hundreds digit
    pub fn hundred(&self) -> &str {
        &self.hundred
    }

    /// The word joining hundreds to the rest of a group
    pub fn conjunction(&self) -> &str {
        &self.conjunction
    }

    /// Scale word for a base-1000 group, empty for the units group
    pub fn scale(&self, group: usize) -> &str {
        lookup(&self.scales, group)
    }

    /// Ordinal suffix at `index`, falling back to the first entry
    pub fn ordinal_suffix(&self, index: usize) -> &str {
        self.ordinal_suffixes
            .get(index)
            .or_else(|| self.ordinal_suffixes.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Weekday name, Sunday first
    pub fn day_name(&self, index: usize) -> &str {
        lookup(&self.day_names, index)
    }

    /// Month name, January first
    pub fn month_name(&self, index: usize) -> &str {
        lookup(&self.month_names, index)
    }

    /// Duration units ordered from largest to smallest
    pub fn duration_units(&self) -> &[DurationUnit] {
        &self.duration_units
    }
}

fn lookup(values: &[String], index: usize) -> &str {
    values.get(index).map(String::as_str).unwrap_or("")
}

fn table<'a>(parent: &'a toml::Table, key: &str) -> Result<&'a toml::Table> {
    parent
        .get(key)
        .and_then(|v| v.as_table())
        .ok_or_else(|| HumanizeError::Vocabulary(format!("Missing or invalid table [{}]", key)))
}

fn string(parent: &toml::Table, key: &str) -> Result<String> {
    parent
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| HumanizeError::Vocabulary(format!("Missing or invalid string {}", key)))
}

fn string_array(parent: &toml::Table, key: &str, expected_len: Option<usize>) -> Result<Vec<String>> {
    let values = parent
        .get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(|| HumanizeError::Vocabulary(format!("Missing or invalid array {}", key)))?;

    if let Some(len) = expected_len {
        if values.len() != len {
            return Err(HumanizeError::Vocabulary(format!(
                "{} must have {} entries, found {}",
                key,
                len,
                values.len()
            )));
        }
    }

    values
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| {
                HumanizeError::Vocabulary(format!("{} contains a non-string entry", key))
            })
        })
        .collect()
}

fn duration_units(root: &toml::Table) -> Result<Vec<DurationUnit>> {
    let entries = root
        .get("duration_units")
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            HumanizeError::Vocabulary("Missing or invalid [[duration_units]]".to_string())
        })?;

    let mut units = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let unit = entry.as_table().ok_or_else(|| {
            HumanizeError::Vocabulary(format!("duration unit {} is not a table", i))
        })?;

        let name = string(unit, "name")?;
        let millis = unit
            .get("millis")
            .and_then(|v| v.as_integer())
            .filter(|ms| *ms > 0)
            .ok_or_else(|| {
                HumanizeError::Vocabulary(format!("Missing or invalid millis for unit {}", name))
            })?;

        units.push(DurationUnit {
            name,
            millis: millis as u64,
        });
    }

    // Largest first, so the first applicable unit is the coarsest one
    if units.windows(2).any(|pair| pair[0].millis < pair[1].millis) {
        return Err(HumanizeError::Vocabulary(
            "duration units must be ordered from largest to smallest".to_string(),
        ));
    }

    Ok(units)
}
