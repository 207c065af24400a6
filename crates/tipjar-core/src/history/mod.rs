//! Tip history: saved records, their persistence seam, and read-time views.

pub mod model;
pub mod repository;
pub mod store;
pub mod summary;

pub use model::{TIP_RECORD_ENTITY, TipRecord};
pub use repository::HistoryRepository;
pub use store::HistoryStore;
pub use summary::HistorySummary;
