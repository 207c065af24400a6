//! Bill input and amount validation.
//!
//! Amount text is read two ways. While the user is typing, [`lenient_amount`]
//! turns anything unusable into zero so the live totals never show an error.
//! When the user saves, [`validate_amount`] is strict and reports why the
//! amount was rejected.

use crate::category::Category;
use crate::error::ValidationError;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Allowed tip percentages.
pub const TIP_PERCENT_RANGE: RangeInclusive<u8> = 5..=30;

/// Allowed party sizes.
pub const PARTY_SIZE_RANGE: RangeInclusive<u8> = 1..=20;

pub const DEFAULT_TIP_PERCENT: u8 = 15;
pub const DEFAULT_PARTY_SIZE: u8 = 1;

/// Strips a leading currency symbol and thousands separators.
fn normalize(text: &str) -> String {
    text.trim()
        .trim_start_matches(['$', '€', '£', '¥'])
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

/// Validates raw amount text at save time.
///
/// # Returns
///
/// - `Ok(f64)`: a finite, strictly positive bill amount
/// - `Err(ValidationError::MissingAmount)`: empty or whitespace-only text
/// - `Err(ValidationError::NotPositive)`: non-numeric, non-finite, or <= 0
pub fn validate_amount(text: &str) -> Result<f64, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::MissingAmount);
    }

    match normalize(text).parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::NotPositive),
    }
}

/// Parses amount text for live display, returning zero for anything invalid.
pub fn lenient_amount(text: &str) -> f64 {
    validate_amount(text).unwrap_or(0.0)
}

/// The current contents of the calculator form.
///
/// Values are immutable; each `with_*` method returns an updated copy with
/// the tip percent and party size clamped into their allowed ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillInput {
    amount_text: String,
    tip_percent: u8,
    party_size: u8,
    category: Option<Category>,
}

impl Default for BillInput {
    fn default() -> Self {
        Self {
            amount_text: String::new(),
            tip_percent: DEFAULT_TIP_PERCENT,
            party_size: DEFAULT_PARTY_SIZE,
            category: None,
        }
    }
}

impl BillInput {
    pub fn new(amount_text: impl Into<String>, tip_percent: u8, party_size: u8) -> Self {
        Self::default()
            .with_amount_text(amount_text)
            .with_tip_percent(tip_percent)
            .with_party_size(party_size)
    }

    pub fn with_amount_text(self, amount_text: impl Into<String>) -> Self {
        Self {
            amount_text: amount_text.into(),
            ..self
        }
    }

    pub fn with_tip_percent(self, tip_percent: u8) -> Self {
        Self {
            tip_percent: tip_percent.clamp(*TIP_PERCENT_RANGE.start(), *TIP_PERCENT_RANGE.end()),
            ..self
        }
    }

    pub fn with_party_size(self, party_size: u8) -> Self {
        Self {
            party_size: party_size.clamp(*PARTY_SIZE_RANGE.start(), *PARTY_SIZE_RANGE.end()),
            ..self
        }
    }

    pub fn with_category(self, category: Option<Category>) -> Self {
        Self { category, ..self }
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn tip_percent(&self) -> u8 {
        self.tip_percent
    }

    pub fn party_size(&self) -> u8 {
        self.party_size
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// The bill amount as shown in the live display (zero when invalid).
    pub fn live_amount(&self) -> f64 {
        lenient_amount(&self.amount_text)
    }

    /// The bill amount as required by save.
    pub fn validated_amount(&self) -> Result<f64, ValidationError> {
        validate_amount(&self.amount_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_amount() {
        assert_eq!(validate_amount(""), Err(ValidationError::MissingAmount));
        assert_eq!(validate_amount("   \t"), Err(ValidationError::MissingAmount));
    }

    #[test]
    fn test_validate_not_positive() {
        assert_eq!(validate_amount("-5"), Err(ValidationError::NotPositive));
        assert_eq!(validate_amount("0"), Err(ValidationError::NotPositive));
        assert_eq!(validate_amount("abc"), Err(ValidationError::NotPositive));
        assert_eq!(validate_amount("NaN"), Err(ValidationError::NotPositive));
        assert_eq!(validate_amount("inf"), Err(ValidationError::NotPositive));
    }

    #[test]
    fn test_validate_accepts_positive() {
        assert_eq!(validate_amount("50"), Ok(50.0));
        assert_eq!(validate_amount(" 12.5 "), Ok(12.5));
        assert_eq!(validate_amount("$1,250.50"), Ok(1250.5));
    }

    #[test]
    fn test_lenient_amount_degrades_to_zero() {
        assert_eq!(lenient_amount(""), 0.0);
        assert_eq!(lenient_amount("-5"), 0.0);
        assert_eq!(lenient_amount("12,3x"), 0.0);
        assert_eq!(lenient_amount("42"), 42.0);
    }

    #[test]
    fn test_bill_input_clamps_ranges() {
        let input = BillInput::new("10", 99, 0);
        assert_eq!(input.tip_percent(), 30);
        assert_eq!(input.party_size(), 1);

        let input = input.with_tip_percent(1).with_party_size(50);
        assert_eq!(input.tip_percent(), 5);
        assert_eq!(input.party_size(), 20);
    }

    #[test]
    fn test_bill_input_defaults() {
        let input = BillInput::default();
        assert_eq!(input.amount_text(), "");
        assert_eq!(input.tip_percent(), DEFAULT_TIP_PERCENT);
        assert_eq!(input.party_size(), DEFAULT_PARTY_SIZE);
        assert!(input.category().is_none());
        assert_eq!(input.live_amount(), 0.0);
        assert_eq!(input.validated_amount(), Err(ValidationError::MissingAmount));
    }
}
