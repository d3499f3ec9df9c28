//! Daily dose adherence.
//!
//! Pure functions over a [`Treatment`]'s ledger. A day with no ledger entry
//! counts as zero doses taken.

use serde::{Deserialize, Serialize};

use crate::date::DateKey;
use crate::treatment::Treatment;

/// Completion of one treatment on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adherence {
    /// Daily dose target, at least 1
    pub expected: u32,
    /// Doses taken, capped at `expected`
    pub taken: u32,
    /// `round(100 * taken / expected)`, always within 0..=100
    pub pct: u8,
}

impl Adherence {
    pub fn is_complete(&self) -> bool {
        self.taken >= self.expected
    }
}

/// Adherence of `treatment` on `date`.
pub fn adherence(treatment: &Treatment, date: &DateKey) -> Adherence {
    let expected = treatment.expected_doses();
    let taken = treatment.taken_on(date).min(expected);
    Adherence {
        expected,
        taken,
        pct: percent(taken, expected),
    }
}

/// Longest window [`adherence_history`] will produce, about ten years.
pub const MAX_HISTORY_DAYS: u32 = 3660;

/// Adherence for the `days` days ending at `end` (inclusive), oldest first.
///
/// `days` is capped at [`MAX_HISTORY_DAYS`], and the window starts no
/// earlier than the earliest representable date.
pub fn adherence_history(treatment: &Treatment, end: DateKey, days: u32) -> Vec<(DateKey, Adherence)> {
    (0..days.min(MAX_HISTORY_DAYS))
        .rev()
        .filter_map(|back| end.days_back(back))
        .map(|date| (date, adherence(treatment, &date)))
        .collect()
}

/// Integer percentage rounded half-up. `expected` must be non-zero and
/// `taken <= expected`.
fn percent(taken: u32, expected: u32) -> u8 {
    let scaled = 200 * u64::from(taken) + u64::from(expected);
    let pct = scaled / (2 * u64::from(expected));
    pct.min(100) as u8
}
