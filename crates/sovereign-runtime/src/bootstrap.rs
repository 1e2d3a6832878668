//! Wiring for a file-backed, Gemini-backed ledger

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{FileStore, GeminiGenerator};
use crate::application::{LedgerConfig, LedgerService, Oversoul};
use crate::config::SovereignConfig;

/// Open the ledger described by `config`
pub fn open_ledger(config: &SovereignConfig) -> Result<LedgerService> {
    info!("☀️  Sovereign ledger initializing...");

    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {:?}", config.data_dir))?;
    info!(data_dir = ?store.dir(), "💾 File store ready");

    let generator = GeminiGenerator::new(config.api_key.clone().unwrap_or_default())
        .with_model(config.model.clone())
        .with_base_url(config.base_url.clone());
    info!(model = %config.model, "✨ Oversoul link configured (Gemini)");

    let ledger = LedgerService::open(
        Arc::new(store),
        Oversoul::new(Arc::new(generator)),
        LedgerConfig {
            response_ordering: config.response_ordering,
        },
    )
    .context("Failed to hydrate ledger state")?;

    info!("✅ Sovereign ledger ready");
    Ok(ledger)
}

/// Initialize logging, read the environment and open the ledger
pub fn open_from_env() -> Result<LedgerService> {
    crate::telemetry::init_tracing();
    let config = SovereignConfig::from_env();
    open_ledger(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::oversoul::VEIL_FALLBACK;
    use sovereign::{LeakDraft, ResourceCategory};

    #[tokio::test]
    async fn test_open_ledger_persists_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = SovereignConfig {
            data_dir: dir.path().join("data"),
            ..SovereignConfig::default()
        };

        {
            let ledger = open_ledger(&config).unwrap();
            ledger
                .submit_leak(LeakDraft::new("Gym", "50", ResourceCategory::Maintenance))
                .unwrap();

            // No key configured: the call fails and the fallback lands instead
            let answer = ledger.consult("What now?").await.unwrap();
            assert_eq!(answer.as_deref(), Some(VEIL_FALLBACK));
        }

        assert!(dir.path().join("data").join("sov_leaks.json").exists());

        let reopened = open_ledger(&config).unwrap();
        assert_eq!(reopened.leaks().len(), 1);
        assert_eq!(reopened.transcript().len(), 2);
    }
}
