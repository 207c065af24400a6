//! Tip session use case.
//!
//! `TipSession` is what the form talks to. It owns the current input, the
//! history for the running session and the quote picked at start-up. Live
//! values are recomputed from the input on every read; saving is the only
//! place where the bill amount is validated strictly.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tipjar_core::calculator::{Calculation, calculate};
use tipjar_core::config::AppConfig;
use tipjar_core::error::ValidationError;
use tipjar_core::history::{HistoryRepository, HistoryStore, HistorySummary, TipRecord};
use tipjar_core::input::BillInput;
use tipjar_core::quote::{self, QUOTES, Quote};

pub struct TipSession {
    config: AppConfig,
    input: BillInput,
    history: HistoryStore,
    quote: Option<Quote>,
}

impl TipSession {
    /// Starts a session: loads the history and picks the session quote.
    ///
    /// # Arguments
    ///
    /// * `repository` - Where the history is persisted
    /// * `config` - Currency symbol, form defaults and reminder schedule
    /// * `quote_seed` - Fixes the quote pick; `None` uses the thread RNG
    pub async fn start(
        repository: Arc<dyn HistoryRepository>,
        config: AppConfig,
        quote_seed: Option<u64>,
    ) -> Self {
        let history = HistoryStore::open(repository).await;

        let quote = match quote_seed {
            Some(seed) => quote::pick_seeded(QUOTES, seed),
            None => quote::pick_random(QUOTES, &mut rand::thread_rng()),
        }
        .copied();

        let input = BillInput::default()
            .with_tip_percent(config.default_tip_percent)
            .with_party_size(config.default_party_size);

        tracing::debug!(
            "Tip session started with {} saved records",
            history.len()
        );

        Self {
            config,
            input,
            history,
            quote,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn input(&self) -> &BillInput {
        &self.input
    }

    /// Replaces the form contents.
    pub fn set_input(&mut self, input: BillInput) {
        self.input = input;
    }

    /// Live values for the current input; zero while the amount is invalid.
    pub fn calculation(&self) -> Calculation {
        calculate(&self.input)
    }

    /// Validates the current amount and appends a record for it.
    ///
    /// On success the amount field is emptied and the other fields are kept.
    /// On a validation error nothing is appended.
    pub async fn save(&mut self, now: DateTime<Utc>) -> Result<TipRecord, ValidationError> {
        let bill_amount = self.input.validated_amount()?;

        let record = TipRecord::new(
            bill_amount,
            self.input.tip_percent(),
            self.input.party_size(),
            self.input.category(),
            now,
        );
        self.history.append(record.clone()).await;
        self.input = self.input.clone().with_amount_text("");

        Ok(record)
    }

    /// Deletes every saved record.
    pub async fn clear(&mut self) {
        self.history.clear().await;
    }

    /// All records in append order.
    pub fn history(&self) -> &[TipRecord] {
        self.history.records()
    }

    /// The recent history list, most recent first.
    pub fn recent(&self) -> Vec<&TipRecord> {
        self.history.recent(self.config.recent_limit)
    }

    /// The recent history list as preformatted lines.
    pub fn history_lines(&self) -> Vec<String> {
        self.recent()
            .into_iter()
            .map(|record| record.summary_line(&self.config.currency_symbol))
            .collect()
    }

    pub fn summary(&self, now: DateTime<Utc>) -> HistorySummary {
        self.history.summary(now)
    }

    pub fn last_week_tip_sum(&self, now: DateTime<Utc>) -> f64 {
        self.history.last_week_tip_sum(now)
    }

    /// Body text for the weekly reminder as of `now`.
    pub fn reminder_body(&self, now: DateTime<Utc>) -> String {
        self.config
            .reminder
            .body(self.last_week_tip_sum(now), &self.config.currency_symbol)
    }

    /// When the weekly reminder fires next after `now`.
    pub fn next_reminder(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.config.reminder.next_after(now)
    }

    /// The quote picked when the session started.
    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }
}
