//! File-backed history repository.
//!
//! The whole history lives in one versioned JSON file managed by
//! version-migrate's `FileStorage`. Every save rewrites the file with the
//! complete record list.

use crate::dto::create_tip_record_migrator;
use crate::paths::{HISTORY_FILE_NAME, TipjarPaths};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tipjar_core::error::Result;
use tipjar_core::history::{HistoryRepository, TIP_RECORD_ENTITY, TipRecord};
use tokio::sync::Mutex;
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

/// Suffix appended to a history file that could not be decoded.
pub const CORRUPT_SUFFIX: &str = "corrupt";

/// History repository storing tip records in `history.json`.
///
/// The `FileStorage` handle is opened lazily: on the first load of an
/// existing file, or on the first save. `clear` drops the handle together
/// with the file, so a cleared history leaves nothing on disk until the
/// next save.
pub struct FileHistoryRepository {
    path: PathBuf,
    storage: Mutex<Option<FileStorage>>,
}

impl FileHistoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            storage: Mutex::new(None),
        }
    }

    /// Creates a repository at the history file location resolved by `paths`.
    pub fn from_paths(paths: &TipjarPaths) -> Result<Self> {
        Ok(Self::new(paths.history_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_storage(path: &Path) -> Result<FileStorage> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let migrator = create_tip_record_migrator()?;
        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Json)
            .with_load_behavior(LoadBehavior::CreateIfMissing);

        Ok(FileStorage::new(path.to_path_buf(), migrator, strategy)?)
    }

    fn open_and_query(path: &Path) -> Result<(FileStorage, Vec<TipRecord>)> {
        let storage = Self::open_storage(path)?;
        let records: Vec<TipRecord> = storage.query(TIP_RECORD_ENTITY)?;
        Ok((storage, records))
    }

    /// Opens storage for writing, moving an unreadable file out of the way.
    fn open_for_write(&self) -> Result<FileStorage> {
        match Self::open_storage(&self.path) {
            Ok(storage) => Ok(storage),
            Err(e) if self.path.exists() => {
                tracing::warn!("History file {:?} is unreadable: {}", self.path, e);
                self.quarantine()?;
                Self::open_storage(&self.path)
            }
            Err(e) => Err(e),
        }
    }

    /// Renames the current history file to `<name>.corrupt`, or to
    /// `<name>.corrupt.<n>` when earlier quarantined files are in the way.
    fn quarantine(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| HISTORY_FILE_NAME.to_string());
        let base = format!("{}.{}", file_name, CORRUPT_SUFFIX);

        let mut target = self.path.with_file_name(&base);
        let mut counter = 1u32;
        while target.exists() {
            target = self.path.with_file_name(format!("{}.{}", base, counter));
            counter += 1;
        }

        std::fs::rename(&self.path, &target)?;
        tracing::warn!("Moved undecodable history file to {:?}", target);
        Ok(target)
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    async fn load(&self) -> Result<Vec<TipRecord>> {
        let mut guard = self.storage.lock().await;

        if !self.path.exists() {
            *guard = None;
            return Ok(Vec::new());
        }

        match Self::open_and_query(&self.path) {
            Ok((storage, records)) => {
                tracing::debug!("Read {} tip records from {:?}", records.len(), self.path);
                *guard = Some(storage);
                Ok(records)
            }
            Err(e) => {
                *guard = None;
                if let Err(rename_err) = self.quarantine() {
                    tracing::warn!("Failed to move history file aside: {}", rename_err);
                }
                Err(e)
            }
        }
    }

    async fn save(&self, records: &[TipRecord]) -> Result<()> {
        let mut guard = self.storage.lock().await;

        let storage = match guard.take() {
            Some(storage) => storage,
            None => self.open_for_write()?,
        };
        let storage = guard.insert(storage);

        storage.update_and_save(TIP_RECORD_ENTITY, records.to_vec())?;
        tracing::debug!("Wrote {} tip records to {:?}", records.len(), self.path);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut guard = self.storage.lock().await;
        *guard = None;

        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::tip_record::TipRecordV1_0;
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;
    use tipjar_core::category::Category;
    use version_migrate::{DeriveQueryable as Queryable, FromDomain, IntoDomain, Migrator};

    fn timestamp(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, day, 12, 0, 0).unwrap()
    }

    fn sample_records(n: usize) -> Vec<TipRecord> {
        (0..n)
            .map(|i| {
                TipRecord::new(
                    10.0 + i as f64,
                    15,
                    1 + (i % 3) as u8,
                    Some(Category::Restaurant),
                    timestamp(1 + i as u32),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileHistoryRepository::new(temp_dir.path().join("history.json"));

        assert!(repository.load().await.unwrap().is_empty());
        assert!(!repository.path().exists());
    }

    #[tokio::test]
    async fn test_save_then_reload_preserves_order() {
        for n in [0, 1, 5] {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("history.json");
            let records = sample_records(n);

            FileHistoryRepository::new(path.clone())
                .save(&records)
                .await
                .unwrap();

            let reloaded = FileHistoryRepository::new(path).load().await.unwrap();
            assert_eq!(reloaded, records);
        }
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_history() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        let repository = FileHistoryRepository::new(path.clone());
        let records = sample_records(3);

        repository.save(&records).await.unwrap();
        repository.save(&records[..1]).await.unwrap();

        let reloaded = FileHistoryRepository::new(path).load().await.unwrap();
        assert_eq!(reloaded, records[..1].to_vec());
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        let repository = FileHistoryRepository::new(path.clone());

        repository.save(&sample_records(2)).await.unwrap();
        assert!(path.exists());

        repository.clear().await.unwrap();
        assert!(!path.exists());
        assert!(repository.load().await.unwrap().is_empty());

        // Clearing twice is harmless.
        repository.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_save_creates_missing_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("history.json");
        let repository = FileHistoryRepository::new(path.clone());

        repository.save(&sample_records(1)).await.unwrap();
        assert_eq!(FileHistoryRepository::new(path).load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_file_is_moved_aside() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::write(&path, "$50.00 tip $10.00\n$20.00 tip $3.00\n").unwrap();

        let repository = FileHistoryRepository::new(path.clone());
        assert!(repository.load().await.is_err());
        assert!(!path.exists());
        assert!(temp_dir.path().join("history.json.corrupt").exists());

        let records = sample_records(1);
        repository.save(&records).await.unwrap();
        assert_eq!(FileHistoryRepository::new(path).load().await.unwrap(), records);
    }

    #[tokio::test]
    async fn test_repeated_quarantine_keeps_every_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        let repository = FileHistoryRepository::new(path.clone());

        std::fs::write(&path, "first broken file").unwrap();
        assert!(repository.load().await.is_err());
        std::fs::write(&path, "second broken file").unwrap();
        assert!(repository.load().await.is_err());

        let first = std::fs::read_to_string(temp_dir.path().join("history.json.corrupt")).unwrap();
        let second =
            std::fs::read_to_string(temp_dir.path().join("history.json.corrupt.1")).unwrap();
        assert_eq!(first, "first broken file");
        assert_eq!(second, "second broken file");
    }

    #[tokio::test]
    async fn test_written_file_survives_restarts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        let first = sample_records(1);

        FileHistoryRepository::new(path.clone())
            .save(&first)
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("billAmount"));
        assert!(!contents.contains("bill_amount"));

        let second = FileHistoryRepository::new(path.clone());
        let mut records = second.load().await.unwrap();
        assert_eq!(records, first);
        records.extend(sample_records(1));
        second.save(&records).await.unwrap();

        let third = FileHistoryRepository::new(path).load().await.unwrap();
        assert_eq!(third, records);
        assert!(!temp_dir.path().join("history.json.corrupt").exists());
    }

    /// Domain stand-in for a build that only knew the V1.0 record shape.
    #[derive(Debug, Clone, Serialize, Deserialize, Queryable)]
    #[queryable(entity = "tip_record")]
    struct LegacyRecord {
        id: String,
        bill_amount: f64,
        tip_amount: f64,
        timestamp: DateTime<Utc>,
    }

    impl IntoDomain<LegacyRecord> for TipRecordV1_0 {
        fn into_domain(self) -> LegacyRecord {
            LegacyRecord {
                id: self.id,
                bill_amount: self.bill_amount,
                tip_amount: self.tip_amount,
                timestamp: self.timestamp,
            }
        }
    }

    impl FromDomain<LegacyRecord> for TipRecordV1_0 {
        fn from_domain(record: LegacyRecord) -> Self {
            TipRecordV1_0 {
                id: record.id,
                bill_amount: record.bill_amount,
                tip_amount: record.tip_amount,
                timestamp: record.timestamp,
            }
        }
    }

    #[tokio::test]
    async fn test_v1_0_history_is_migrated_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");

        // Write the file the way the first release would have.
        {
            let mut migrator = Migrator::builder().build();
            let legacy_path = Migrator::define(TIP_RECORD_ENTITY)
                .from::<TipRecordV1_0>()
                .into_with_save::<LegacyRecord>();
            migrator.register(legacy_path).unwrap();

            let strategy = FileStorageStrategy::new()
                .with_format(FormatStrategy::Json)
                .with_load_behavior(LoadBehavior::CreateIfMissing);
            let mut storage = FileStorage::new(path.clone(), migrator, strategy).unwrap();
            storage
                .update_and_save(
                    TIP_RECORD_ENTITY,
                    vec![LegacyRecord {
                        id: "legacy-1".to_string(),
                        bill_amount: 60.0,
                        tip_amount: 9.0,
                        timestamp: timestamp(3),
                    }],
                )
                .unwrap();
        }

        let records = FileHistoryRepository::new(path).load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "legacy-1");
        assert_eq!(records[0].tip_percent, 15);
        assert_eq!(records[0].party_size, 1);
        assert_eq!(records[0].category, None);
    }
}
