//! Treatment model and dose ledger.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::date::DateKey;

pub const DEFAULT_NAME: &str = "Novo Tratamento";
pub const DEFAULT_DOSAGE: &str = "—";
pub const DEFAULT_FREQUENCY: &str = "Diário";

/// A tracked medication with a daily dose target and a per-day ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub dosage: String,
    /// Human label only; never used in computation.
    pub frequency: String,
    #[serde(default = "one", deserialize_with = "lenient_doses_per_day")]
    pub doses_per_day: u32,
    /// Doses marked taken per day. Absent days mean zero.
    #[serde(default)]
    pub taken_by_date: BTreeMap<DateKey, u32>,
}

impl Treatment {
    /// Daily dose target, never below 1.
    pub fn expected_doses(&self) -> u32 {
        self.doses_per_day.max(1)
    }

    /// Raw ledger count for `date`.
    pub fn taken_on(&self, date: &DateKey) -> u32 {
        self.taken_by_date.get(date).copied().unwrap_or(0)
    }

    /// Increment the count for `date`, capped at the daily target.
    ///
    /// Returns `false` when the day was already at (or above) the cap, in
    /// which case the ledger is unchanged. Counts are never decreased.
    pub fn record_dose(&mut self, date: DateKey) -> bool {
        let cap = self.expected_doses();
        let entry = self.taken_by_date.entry(date).or_insert(0);
        if *entry >= cap {
            return false;
        }
        *entry += 1;
        true
    }
}

/// Raw form input for a new treatment. Empty fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub doses_per_day: String,
}

impl TreatmentDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = dosage.into();
        self
    }

    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    pub fn doses_per_day(mut self, doses: impl ToString) -> Self {
        self.doses_per_day = doses.to_string();
        self
    }

    /// Build a treatment with an empty ledger.
    pub fn into_treatment(self, id: String) -> Treatment {
        Treatment {
            id,
            name: or_default(self.name, DEFAULT_NAME),
            dosage: or_default(self.dosage, DEFAULT_DOSAGE),
            frequency: or_default(self.frequency, DEFAULT_FREQUENCY),
            doses_per_day: parse_doses_per_day(&self.doses_per_day),
            taken_by_date: BTreeMap::new(),
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn one() -> u32 {
    1
}

/// Integer part of a numeric value, or 1 when non-numeric or below 1.
pub fn coerce_doses_per_day(value: f64) -> u32 {
    if !value.is_finite() {
        return 1;
    }
    let whole = value.trunc();
    if whole < 1.0 {
        1
    } else if whole >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        whole as u32
    }
}

/// Parse a doses-per-day form field. Never fails; see [`coerce_doses_per_day`].
pub fn parse_doses_per_day(input: &str) -> u32 {
    input
        .trim()
        .parse::<f64>()
        .map(coerce_doses_per_day)
        .unwrap_or(1)
}

fn lenient_doses_per_day<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().map(coerce_doses_per_day).unwrap_or(1),
        serde_json::Value::String(s) => parse_doses_per_day(&s),
        _ => 1,
    })
}
