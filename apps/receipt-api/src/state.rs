//! Application state for the receipt API

use anyhow::Result;
use receipt_core::{ReceiptService, StoreConfig, SystemClock};

pub struct AppState {
    pub service: ReceiptService<SystemClock>,
}

impl AppState {
    /// Build the state from the environment (`DATA_DIR`).
    pub fn from_env() -> Result<Self> {
        Self::with_config(StoreConfig::from_env())
    }

    pub fn with_config(config: StoreConfig) -> Result<Self> {
        tracing::info!(
            base_dir = %config.base_dir.display(),
            intermediate_dir = %config.intermediate_dir.display(),
            final_dir = %config.final_dir.display(),
            "ensuring template store roots"
        );
        config.ensure_dirs()?;

        Ok(Self {
            service: ReceiptService::new(config),
        })
    }
}
