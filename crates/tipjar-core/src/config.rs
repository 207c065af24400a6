//! Application configuration domain model.

use crate::input::{DEFAULT_PARTY_SIZE, DEFAULT_TIP_PERCENT};
use crate::reminder::WeeklyReminder;
use serde::{Deserialize, Serialize};
use version_migrate::DeriveQueryable as Queryable;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// User-editable settings read from `config.toml`.
///
/// The serialized shape matches the latest stored config version, since
/// saves write this type directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "config_root")]
pub struct AppConfig {
    /// Symbol prefixed to every formatted amount.
    pub currency_symbol: String,
    /// Tip percent the form starts with.
    pub default_tip_percent: u8,
    /// Party size the form starts with.
    pub default_party_size: u8,
    /// Number of entries in the recent history list.
    pub recent_limit: usize,
    /// Schedule of the weekly summary reminder.
    #[serde(flatten)]
    pub reminder: WeeklyReminder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            default_tip_percent: DEFAULT_TIP_PERCENT,
            default_party_size: DEFAULT_PARTY_SIZE,
            recent_limit: DEFAULT_RECENT_LIMIT,
            reminder: WeeklyReminder::default(),
        }
    }
}
