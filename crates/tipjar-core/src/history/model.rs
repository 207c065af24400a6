//! Tip history domain model.

use crate::calculator::{format_currency, format_percent, per_person, tip_amount, total_amount};
use crate::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use version_migrate::DeriveQueryable as Queryable;

/// Entity name under which tip records are stored.
pub const TIP_RECORD_ENTITY: &str = "tip_record";

/// One saved calculation.
///
/// Records are never edited after creation; the only way to remove one is to
/// clear the whole history.
///
/// Serializes with the same camelCase keys as the latest stored record
/// version, since saves write this type directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "tip_record")]
#[serde(rename_all = "camelCase")]
pub struct TipRecord {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Bill amount before tip.
    pub bill_amount: f64,
    /// Tip amount for the whole party.
    pub tip_amount: f64,
    /// Tip percentage the record was saved with.
    pub tip_percent: u8,
    /// Number of people splitting the bill.
    pub party_size: u8,
    /// Category, when one was picked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// When the record was saved.
    pub timestamp: DateTime<Utc>,
}

impl TipRecord {
    /// Creates a record for an already validated bill amount.
    pub fn new(
        bill_amount: f64,
        tip_percent: u8,
        party_size: u8,
        category: Option<Category>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bill_amount,
            tip_amount: tip_amount(bill_amount, tip_percent),
            tip_percent,
            party_size,
            category,
            timestamp,
        }
    }

    pub fn total_amount(&self) -> f64 {
        total_amount(self.bill_amount, self.tip_percent)
    }

    pub fn total_per_person(&self) -> f64 {
        per_person(self.total_amount(), self.party_size)
    }

    /// Renders the record as a single preformatted history line.
    pub fn summary_line(&self, symbol: &str) -> String {
        let mut line = format!(
            "{} | {} | bill {} | tip {} ({}) | total {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.category.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
            format_currency(self.bill_amount, symbol),
            format_currency(self.tip_amount, symbol),
            format_percent(f64::from(self.tip_percent)),
            format_currency(self.total_amount(), symbol),
        );
        if self.party_size > 1 {
            line.push_str(&format!(
                " | {} each x{}",
                format_currency(self.total_per_person(), symbol),
                self.party_size
            ));
        }
        line
    }
}
