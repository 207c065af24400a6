//! TipRecord DTOs and migrations
//!
//! Each saved record carries its schema version, so histories written by
//! older builds are migrated forward on load instead of being discarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use tipjar_core::category::Category;
use tipjar_core::error::Result;
use tipjar_core::history::{TIP_RECORD_ENTITY, TipRecord};

/// Tip record V1.0.0 (initial version: bill, tip and time only).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct TipRecordV1_0 {
    pub id: String,
    pub bill_amount: f64,
    pub tip_amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// Tip record V1.1.0.
///
/// Added the optional category picked in the form.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct TipRecordV1_1 {
    pub id: String,
    pub bill_amount: f64,
    pub tip_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Tip record V1.2.0.
///
/// Stores the tip percent and party size the record was saved with, and
/// switches to camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.2.0")]
#[serde(rename_all = "camelCase")]
pub struct TipRecordV1_2 {
    pub id: String,
    pub bill_amount: f64,
    pub tip_amount: f64,
    pub tip_percent: u8,
    pub party_size: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Type alias for the latest TipRecord version.
pub type TipRecordDTO = TipRecordV1_2;

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from TipRecordV1_0 to TipRecordV1_1.
impl MigratesTo<TipRecordV1_1> for TipRecordV1_0 {
    fn migrate(self) -> TipRecordV1_1 {
        TipRecordV1_1 {
            id: self.id,
            bill_amount: self.bill_amount,
            tip_amount: self.tip_amount,
            category: None,
            timestamp: self.timestamp,
        }
    }
}

/// Migration from TipRecordV1_1 to TipRecordV1_2.
///
/// Older records only kept the amounts, so the percent is recovered from
/// them and the party size is assumed to be one.
impl MigratesTo<TipRecordV1_2> for TipRecordV1_1 {
    fn migrate(self) -> TipRecordV1_2 {
        TipRecordV1_2 {
            id: self.id,
            bill_amount: self.bill_amount,
            tip_amount: self.tip_amount,
            tip_percent: derive_tip_percent(self.bill_amount, self.tip_amount),
            party_size: 1,
            category: self.category,
            timestamp: self.timestamp,
        }
    }
}

fn derive_tip_percent(bill_amount: f64, tip_amount: f64) -> u8 {
    if bill_amount > 0.0 && tip_amount.is_finite() {
        (tip_amount / bill_amount * 100.0).round().clamp(0.0, f64::from(u8::MAX)) as u8
    } else {
        0
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert TipRecordV1_2 DTO to domain model.
impl IntoDomain<TipRecord> for TipRecordV1_2 {
    fn into_domain(self) -> TipRecord {
        TipRecord {
            id: self.id,
            bill_amount: self.bill_amount,
            tip_amount: self.tip_amount,
            tip_percent: self.tip_percent,
            party_size: self.party_size,
            category: self.category.as_deref().map(Category::from_stored),
            timestamp: self.timestamp,
        }
    }
}

/// Convert domain model to TipRecordV1_2 DTO for persistence.
impl FromDomain<TipRecord> for TipRecordV1_2 {
    fn from_domain(record: TipRecord) -> Self {
        TipRecordV1_2 {
            id: record.id,
            bill_amount: record.bill_amount,
            tip_amount: record.tip_amount,
            tip_percent: record.tip_percent,
            party_size: record.party_size,
            category: record.category.map(|c| c.to_string()),
            timestamp: record.timestamp,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates and configures a Migrator instance for TipRecord entities.
///
/// # Migration Path
///
/// - V1.0 → V1.1: Adds `category` (None)
/// - V1.1 → V1.2: Adds `tip_percent` (derived from the amounts) and `party_size` (1)
/// - V1.2 → TipRecord: Converts DTO to domain model
pub fn create_tip_record_migrator() -> Result<version_migrate::Migrator> {
    let mut migrator = version_migrate::Migrator::builder().build();

    // Register migration path: V1.0 -> V1.1 -> V1.2 -> TipRecord
    let tip_record_path = version_migrate::Migrator::define(TIP_RECORD_ENTITY)
        .from::<TipRecordV1_0>()
        .step::<TipRecordV1_1>()
        .step::<TipRecordV1_2>()
        .into_with_save::<TipRecord>();

    migrator.register(tip_record_path)?;

    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 20, 15, 0).unwrap()
    }

    #[test]
    fn test_v1_0_migrates_to_latest() {
        let v1_0 = TipRecordV1_0 {
            id: "rec-1".to_string(),
            bill_amount: 80.0,
            tip_amount: 12.0,
            timestamp: timestamp(),
        };

        let v1_1: TipRecordV1_1 = v1_0.migrate();
        let latest: TipRecordV1_2 = v1_1.migrate();

        assert_eq!(latest.id, "rec-1");
        assert_eq!(latest.tip_percent, 15);
        assert_eq!(latest.party_size, 1);
        assert!(latest.category.is_none());
        assert_eq!(latest.timestamp, timestamp());
    }

    #[test]
    fn test_derive_tip_percent_handles_zero_bill() {
        assert_eq!(derive_tip_percent(0.0, 5.0), 0);
        assert_eq!(derive_tip_percent(40.0, 7.0), 18);
    }

    #[test]
    fn test_unknown_category_maps_to_other() {
        let dto = TipRecordV1_2 {
            id: "rec-2".to_string(),
            bill_amount: 20.0,
            tip_amount: 4.0,
            tip_percent: 20,
            party_size: 2,
            category: Some("Hovercraft".to_string()),
            timestamp: timestamp(),
        };

        let record = dto.into_domain();
        assert_eq!(record.category, Some(Category::Other));
        assert_eq!(record.party_size, 2);
    }

    #[test]
    fn test_domain_round_trip() {
        let record = TipRecord::new(42.0, 18, 3, Some(Category::Delivery), timestamp());
        let dto = TipRecordV1_2::from_domain(record.clone());

        assert_eq!(dto.category.as_deref(), Some("Delivery"));
        assert_eq!(dto.into_domain(), record);
    }

    #[test]
    fn test_saved_domain_shape_decodes_as_latest() {
        // Saves serialize the domain type, loads decode the latest DTO.
        let record = TipRecord::new(64.0, 20, 4, Some(Category::Taxi), timestamp());
        let json = serde_json::to_value(&record).unwrap();

        let dto: TipRecordV1_2 = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(json, serde_json::to_value(TipRecordV1_2::from_domain(record.clone())).unwrap());
        assert_eq!(dto.into_domain(), record);
    }

    #[test]
    fn test_saved_domain_shape_without_category_decodes_as_latest() {
        let record = TipRecord::new(10.0, 10, 1, None, timestamp());
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("category").is_none());
        let dto: TipRecordV1_2 = serde_json::from_value(json).unwrap();
        assert_eq!(dto.into_domain(), record);
    }

    #[test]
    fn test_migrator_builds() {
        assert!(create_tip_record_migrator().is_ok());
    }
}
