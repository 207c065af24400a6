//! Domain layer for tipjar: tip arithmetic, input validation, the tip
//! history and its read-time views, session quotes and the weekly reminder.

pub mod calculator;
pub mod category;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod quote;
pub mod reminder;

// Re-export common types
pub use calculator::{Calculation, calculate};
pub use category::Category;
pub use config::AppConfig;
pub use error::{Result, TipjarError, ValidationError};
pub use history::{HistoryRepository, HistoryStore, HistorySummary, TipRecord};
pub use input::BillInput;
pub use quote::Quote;
pub use reminder::WeeklyReminder;
