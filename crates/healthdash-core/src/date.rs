//! Canonical calendar-day key used to index dose ledgers.
//!
//! A [`DateKey`] has exactly one textual form, `YYYY-MM-DD`. Every ledger
//! lookup and mutation goes through this type so call sites never format
//! dates by hand.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

const FORMAT: &str = "%Y-%m-%d";

/// A local calendar date, displayed and persisted as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's key from the local calendar at call time.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The key `days` calendar days before this one, or `None` when that
    /// falls before the earliest representable date.
    pub fn days_back(&self, days: u32) -> Option<Self> {
        self.0.checked_sub_days(Days::new(u64::from(days))).map(Self)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; the key form is fixed-width.
        if trimmed.len() != 10 {
            return Err(ValidationError::InvalidDateKey(s.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateKey(s.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_zero_padded() {
        let key = DateKey::from_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(key.to_string(), "2024-01-05");
    }

    #[test]
    fn parses_canonical_form() {
        let key: DateKey = "2024-01-15".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn rejects_non_canonical_forms() {
        assert!("2024-1-15".parse::<DateKey>().is_err());
        assert!("15/01/2024".parse::<DateKey>().is_err());
        assert!("2024-02-30".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn days_back_crosses_month_boundary() {
        let key: DateKey = "2024-03-01".parse().unwrap();
        assert_eq!(key.days_back(1).unwrap().to_string(), "2024-02-29");
        assert_eq!(key.days_back(0), Some(key));
    }

    #[test]
    fn days_back_past_earliest_date_is_none() {
        let key: DateKey = "2024-01-15".parse().unwrap();
        assert!(key.days_back(u32::MAX).is_none());
        let earliest = DateKey::from_date(NaiveDate::MIN);
        assert_eq!(earliest.days_back(0), Some(earliest));
        assert!(earliest.days_back(1).is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let key: DateKey = "2024-01-15".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-01-15\"");
        let back: DateKey = serde_json::from_str("\"2024-01-15\"").unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn today_matches_local_calendar() {
        assert_eq!(DateKey::today().date(), Local::now().date_naive());
    }
}
