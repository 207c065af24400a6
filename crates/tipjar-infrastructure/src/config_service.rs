//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the application
//! configuration from `config.toml`, writing the defaults on first run.

use crate::dto::config_root::CONFIG_ROOT_ENTITY;
use crate::dto::create_config_root_migrator;
use crate::paths::TipjarPaths;
use std::sync::{Arc, RwLock};
use tipjar_core::config::AppConfig;
use tipjar_core::error::Result;
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: TipjarPaths,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new(paths: TipjarPaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn get_config(&self) -> AppConfig {
        if let Ok(read_lock) = self.config.read() {
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(&self) -> Result<AppConfig> {
        let config_path = self.paths.config_file()?;
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let migrator = create_config_root_migrator()?;
        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Toml)
            .with_load_behavior(LoadBehavior::CreateIfMissing);

        let mut storage = FileStorage::new(config_path.clone(), migrator, strategy)?;

        let configs: Vec<AppConfig> = storage.query(CONFIG_ROOT_ENTITY)?;

        match configs.into_iter().next() {
            Some(config) => Ok(config),
            None => {
                let default_config = AppConfig::default();
                storage.update_and_save(CONFIG_ROOT_ENTITY, vec![default_config.clone()])?;
                tracing::info!("Wrote default configuration to {:?}", config_path);
                Ok(default_config)
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(TipjarPaths::default())
    }
}
