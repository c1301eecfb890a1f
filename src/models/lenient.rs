//! Best-effort typed fields for stored rows
//!
//! Historical CSV rows may hold text that no longer parses (hand edits,
//! other tools). Such a value is kept verbatim as [`Lenient::Raw`] so that
//! loading never fails and saving writes it back unchanged. Aggregations
//! read fields through [`Lenient::value`] and skip raw values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A field that is either a parsed value or the raw text it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lenient<T> {
    Parsed(T),
    Raw(String),
}

impl<T: FromStr> Lenient<T> {
    /// Parse `text`, keeping it raw if it does not parse
    pub fn from_text(text: &str) -> Self {
        match text.trim().parse::<T>() {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Raw(text.to_string()),
        }
    }
}

impl<T> Lenient<T> {
    /// The parsed value, or `None` for raw text
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl<T> Default for Lenient<T> {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Self::Parsed(value)
    }
}

impl<T: fmt::Display> fmt::Display for Lenient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(value) => fmt::Display::fmt(value, f),
            Self::Raw(text) => f.pad(text),
        }
    }
}

impl<T: Serialize> Serialize for Lenient<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Parsed(value) => value.serialize(serializer),
            Self::Raw(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Lenient<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_parsed_value() {
        let amount: Lenient<Money> = Lenient::from_text("12.50");
        assert_eq!(amount.value(), Some(&Money::from_cents(1250)));
        assert!(amount.is_parsed());
    }

    #[test]
    fn test_raw_value() {
        let amount: Lenient<Money> = Lenient::from_text("twelve");
        assert_eq!(amount.value(), None);
        assert_eq!(amount, Lenient::Raw("twelve".to_string()));
        assert_eq!(amount.to_string(), "twelve");
    }

    #[test]
    fn test_empty_is_raw() {
        let date: Lenient<NaiveDate> = Lenient::from_text("");
        assert!(!date.is_parsed());
        assert_eq!(date.to_string(), "");
    }

    #[test]
    fn test_date_display() {
        let date: Lenient<NaiveDate> = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().into();
        assert_eq!(date.to_string(), "2024-01-02");
    }

    #[test]
    fn test_raw_survives_json() {
        let amount: Lenient<Money> = Lenient::Raw("n/a".to_string());
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"n/a\"");

        let back: Lenient<Money> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
