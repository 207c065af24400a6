//! Read-time aggregations over the tip history.
//!
//! Nothing here is cached; every call scans the records it is given.

use crate::category::Category;
use crate::history::model::TipRecord;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Length of the trailing window used by [`last_week_tip_sum`].
pub const LAST_WEEK_WINDOW_DAYS: i64 = 7;

/// Sum of tips saved at or after `now - 7 days`.
pub fn last_week_tip_sum(records: &[TipRecord], now: DateTime<Utc>) -> f64 {
    let cutoff = now - Duration::days(LAST_WEEK_WINDOW_DAYS);
    records
        .iter()
        .filter(|record| record.timestamp >= cutoff)
        .map(|record| record.tip_amount)
        .sum()
}

/// Category with the highest summed tip.
///
/// Records without a category are ignored. On a tie the category that
/// reached the winning sum first, in append order, is kept.
pub fn top_category(records: &[TipRecord]) -> Option<Category> {
    let mut sums: HashMap<Category, f64> = HashMap::new();
    let mut best: Option<(Category, f64)> = None;

    for record in records {
        let Some(category) = record.category else {
            continue;
        };
        let sum = sums.entry(category).or_insert(0.0);
        *sum += record.tip_amount;

        match best {
            Some((_, best_sum)) if *sum <= best_sum => {}
            _ => best = Some((category, *sum)),
        }
    }

    best.map(|(category, _)| category)
}

/// Sum of every tip in the history.
pub fn total_tipped(records: &[TipRecord]) -> f64 {
    records.iter().map(|record| record.tip_amount).sum()
}

/// Up to `limit` records, most recent first.
pub fn recent(records: &[TipRecord], limit: usize) -> Vec<&TipRecord> {
    records.iter().rev().take(limit).collect()
}

/// Aggregated view of the history, computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub record_count: usize,
    pub total_tipped: f64,
    pub top_category: Option<Category>,
    pub last_week_tip_sum: f64,
}

impl HistorySummary {
    pub fn from_records(records: &[TipRecord], now: DateTime<Utc>) -> Self {
        Self {
            record_count: records.len(),
            total_tipped: total_tipped(records),
            top_category: top_category(records),
            last_week_tip_sum: last_week_tip_sum(records, now),
        }
    }
}
