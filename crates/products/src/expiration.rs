//! Expiration calculator.
//!
//! Pure date arithmetic: given a product's stored dates and open status plus
//! an explicit "today", derive the effective expiration date, whole days
//! remaining, and an urgency tier. No IO, no ambient clock.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::product::{OpenStatus, PaoMonths};

/// Expiration-urgency tier.
///
/// Variants are declared most-urgent-first so the derived ordering matches
/// the "most urgent first" sort.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationTier {
    /// Effective expiration date is in the past.
    Expired,
    /// Expires within 7 days.
    Urgent,
    /// Expires within 8 to 30 days.
    Soon,
    /// More than 30 days left.
    Good,
    /// No expiration date on record.
    Unknown,
}

impl ExpirationTier {
    /// Sort key for most-urgent-first ordering.
    pub fn priority(self) -> u8 {
        match self {
            ExpirationTier::Expired => 1,
            ExpirationTier::Urgent => 2,
            ExpirationTier::Soon => 3,
            ExpirationTier::Good => 4,
            ExpirationTier::Unknown => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExpirationTier::Expired => "expired",
            ExpirationTier::Urgent => "urgent",
            ExpirationTier::Soon => "soon",
            ExpirationTier::Good => "good",
            ExpirationTier::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for ExpirationTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The product fields the calculator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationInput {
    pub expiration_date: Option<NaiveDate>,
    pub status: OpenStatus,
    pub opened_date: Option<NaiveDate>,
    pub pao_after_opening: Option<PaoMonths>,
}

/// Derived expiration state for one product on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationReport {
    /// The earlier of the printed expiration date and the PAO-derived expiry
    /// (the latter only applies once the product is opened). `None` when no
    /// expiration date is on record.
    pub effective_expiration_date: Option<NaiveDate>,
    /// Whole days from `today` to the effective date; negative once expired.
    pub days_until_expiration: Option<i64>,
    pub tier: ExpirationTier,
}

impl ExpirationReport {
    pub fn priority(&self) -> u8 {
        self.tier.priority()
    }
}

/// Derive the effective expiration date, days remaining, and tier.
///
/// Deterministic given its inputs; calling it twice with the same input and
/// `today` yields the same report.
pub fn assess(input: &ExpirationInput, today: NaiveDate) -> ExpirationReport {
    let effective = effective_expiration_date(input);
    let days = effective.map(|date| (date - today).num_days());
    let tier = match days {
        None => ExpirationTier::Unknown,
        Some(d) if d < 0 => ExpirationTier::Expired,
        Some(d) if d <= 7 => ExpirationTier::Urgent,
        Some(d) if d <= 30 => ExpirationTier::Soon,
        Some(_) => ExpirationTier::Good,
    };
    ExpirationReport {
        effective_expiration_date: effective,
        days_until_expiration: days,
        tier,
    }
}

/// The PAO bound only kicks in once the product is opened with a known
/// opened date; a missing PAO means "no PAO constraint".
fn effective_expiration_date(input: &ExpirationInput) -> Option<NaiveDate> {
    let expiration = input.expiration_date?;
    if input.status.is_opened() {
        if let (Some(opened), Some(pao)) = (input.opened_date, input.pao_after_opening) {
            let pao_expiry = opened + Duration::days(pao.shelf_days());
            return Some(expiration.min(pao_expiry));
        }
    }
    Some(expiration)
}
