//! ConfigRoot DTOs
//!
//! The on-disk shape of `config.toml`. Every field has a serde default so a
//! partially edited file still loads.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use tipjar_core::config::{AppConfig, DEFAULT_CURRENCY_SYMBOL, DEFAULT_RECENT_LIMIT};
use tipjar_core::error::Result;
use tipjar_core::input::{DEFAULT_PARTY_SIZE, DEFAULT_TIP_PERCENT};
use tipjar_core::reminder::{DEFAULT_REMINDER_HOUR, DEFAULT_REMINDER_WEEKDAY, WeeklyReminder};

pub const CONFIG_ROOT_ENTITY: &str = "config_root";

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_tip_percent() -> u8 {
    DEFAULT_TIP_PERCENT
}

fn default_party_size() -> u8 {
    DEFAULT_PARTY_SIZE
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_reminder_weekday() -> String {
    DEFAULT_REMINDER_WEEKDAY.to_string()
}

fn default_reminder_hour() -> u32 {
    DEFAULT_REMINDER_HOUR
}

/// Root configuration V1.0.0 (initial version).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct ConfigRootV1_0 {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_tip_percent")]
    pub default_tip_percent: u8,

    #[serde(default = "default_party_size")]
    pub default_party_size: u8,

    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Weekday name, e.g. "Sun" or "sunday".
    #[serde(default = "default_reminder_weekday")]
    pub reminder_weekday: String,

    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,
}

/// Type alias for the latest ConfigRoot version.
pub type ConfigRootDTO = ConfigRootV1_0;

impl Default for ConfigRootV1_0 {
    fn default() -> Self {
        Self::from_domain(AppConfig::default())
    }
}

/// Convert ConfigRootV1_0 DTO to domain model.
impl IntoDomain<AppConfig> for ConfigRootV1_0 {
    fn into_domain(self) -> AppConfig {
        let weekday = self
            .reminder_weekday
            .parse::<Weekday>()
            .unwrap_or(DEFAULT_REMINDER_WEEKDAY);

        AppConfig {
            currency_symbol: self.currency_symbol,
            default_tip_percent: self.default_tip_percent,
            default_party_size: self.default_party_size,
            recent_limit: self.recent_limit,
            reminder: WeeklyReminder::new(weekday, self.reminder_hour),
        }
    }
}

/// Convert domain model to ConfigRootV1_0 DTO for persistence.
impl FromDomain<AppConfig> for ConfigRootV1_0 {
    fn from_domain(config: AppConfig) -> Self {
        ConfigRootV1_0 {
            currency_symbol: config.currency_symbol,
            default_tip_percent: config.default_tip_percent,
            default_party_size: config.default_party_size,
            recent_limit: config.recent_limit,
            reminder_weekday: config.reminder.weekday().to_string(),
            reminder_hour: config.reminder.hour(),
        }
    }
}

/// Creates and configures a Migrator instance for the root configuration.
pub fn create_config_root_migrator() -> Result<version_migrate::Migrator> {
    let mut migrator = version_migrate::Migrator::builder().build();

    let config_root_path = version_migrate::Migrator::define(CONFIG_ROOT_ENTITY)
        .from::<ConfigRootV1_0>()
        .into_with_save::<AppConfig>();

    migrator.register(config_root_path)?;

    Ok(migrator)
}
