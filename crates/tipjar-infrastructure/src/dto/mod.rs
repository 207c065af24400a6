//! Versioned DTOs for everything tipjar writes to disk.

pub mod config_root;
pub mod tip_record;

pub use config_root::{ConfigRootDTO, create_config_root_migrator};
pub use tip_record::{TipRecordDTO, create_tip_record_migrator};
