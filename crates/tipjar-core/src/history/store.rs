//! In-memory tip history backed by a [`HistoryRepository`].

use crate::category::Category;
use crate::history::model::TipRecord;
use crate::history::repository::HistoryRepository;
use crate::history::summary::{self, HistorySummary};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// The session's ordered history of saved calculations.
///
/// The in-memory sequence is authoritative for the running session. Every
/// mutation writes the complete sequence back through the repository, and a
/// failed write is logged and otherwise ignored.
pub struct HistoryStore {
    records: Vec<TipRecord>,
    repository: Arc<dyn HistoryRepository>,
}

impl HistoryStore {
    /// Creates an empty store without touching persistent storage.
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self {
            records: Vec::new(),
            repository,
        }
    }

    /// Creates a store and loads whatever history is persisted.
    pub async fn open(repository: Arc<dyn HistoryRepository>) -> Self {
        let mut store = Self::new(repository);
        store.load_all().await;
        store
    }

    /// Replaces the in-memory history with the persisted one.
    ///
    /// Missing, malformed or undecodable data yields an empty history.
    pub async fn load_all(&mut self) -> &[TipRecord] {
        self.records = match self.repository.load().await {
            Ok(records) => {
                tracing::debug!("Loaded {} tip records", records.len());
                records
            }
            Err(e) => {
                tracing::warn!("Failed to load tip history, starting empty: {}", e);
                Vec::new()
            }
        };
        &self.records
    }

    /// Appends a record and persists the whole history.
    pub async fn append(&mut self, record: TipRecord) {
        tracing::info!("Saving tip record {}", record.id);
        self.records.push(record);

        if let Err(e) = self.repository.save(&self.records).await {
            tracing::warn!(
                "Failed to persist tip history ({} records kept in memory): {}",
                self.records.len(),
                e
            );
        }
    }

    /// Empties the history in memory and in storage.
    pub async fn clear(&mut self) {
        tracing::info!("Clearing {} tip records", self.records.len());
        self.records.clear();

        if let Err(e) = self.repository.clear().await {
            tracing::warn!("Failed to remove persisted tip history: {}", e);
        }
    }

    /// Records in append (oldest first) order.
    pub fn records(&self) -> &[TipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Up to `limit` records, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<&TipRecord> {
        summary::recent(&self.records, limit)
    }

    pub fn top_category(&self) -> Option<Category> {
        summary::top_category(&self.records)
    }

    pub fn last_week_tip_sum(&self, now: DateTime<Utc>) -> f64 {
        summary::last_week_tip_sum(&self.records, now)
    }

    pub fn summary(&self, now: DateTime<Utc>) -> HistorySummary {
        HistorySummary::from_records(&self.records, now)
    }
}
