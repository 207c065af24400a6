//! History repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::history::model::TipRecord;

/// Persistence seam for the tip history.
///
/// The history is always read and written as a whole: there is no per-record
/// insert or delete. Implementations report failures honestly; deciding to
/// fail open is the job of [`HistoryStore`](crate::history::HistoryStore).
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Reads every persisted record in append order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<TipRecord>)`: the stored records, empty if nothing is stored
    /// - `Err(_)`: the stored data could not be read or decoded
    async fn load(&self) -> Result<Vec<TipRecord>>;

    /// Replaces the persisted history with `records`.
    async fn save(&self, records: &[TipRecord]) -> Result<()>;

    /// Removes the persisted history entirely.
    async fn clear(&self) -> Result<()>;
}
