//! Persistence for tipjar: path resolution, versioned DTOs, the file-backed
//! history repository and the configuration service.

pub mod config_service;
pub mod dto;
pub mod file_history_repository;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::file_history_repository::FileHistoryRepository;
pub use crate::paths::TipjarPaths;
