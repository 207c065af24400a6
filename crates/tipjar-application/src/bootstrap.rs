//! Wiring of the persistence layer into a [`TipSession`].

use crate::tip_session::TipSession;
use std::path::PathBuf;
use std::sync::Arc;
use tipjar_core::error::Result;
use tipjar_infrastructure::{ConfigService, FileHistoryRepository, TipjarPaths};

/// Opens a session backed by the files under `base_dir`, or under the
/// platform directories when `base_dir` is `None`.
pub async fn open_session(base_dir: Option<PathBuf>, quote_seed: Option<u64>) -> Result<TipSession> {
    let paths = TipjarPaths::new(base_dir);
    let config = ConfigService::new(paths.clone()).get_config();
    let repository = FileHistoryRepository::from_paths(&paths)?;

    tracing::debug!("Using history file {:?}", repository.path());

    Ok(TipSession::start(Arc::new(repository), config, quote_seed).await)
}
