//! Runtime configuration
//!
//! Read from the process environment, with a `.env` file loaded first when
//! one is present.

use std::path::PathBuf;

use tracing::warn;

use crate::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::application::ResponseOrdering;

const DEFAULT_DATA_DIR: &str = "./sovereign-data";

/// Settings for a file-backed, Gemini-backed ledger
#[derive(Clone)]
pub struct SovereignConfig {
    /// Gemini API key. Absence is not an error; advisory calls will fail
    /// and fall back instead.
    pub api_key: Option<String>,
    pub data_dir: PathBuf,
    pub model: String,
    pub base_url: String,
    pub response_ordering: ResponseOrdering,
}

impl Default for SovereignConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            response_ordering: ResponseOrdering::default(),
        }
    }
}

impl std::fmt::Debug for SovereignConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SovereignConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("data_dir", &self.data_dir)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("response_ordering", &self.response_ordering)
            .finish()
    }
}

impl SovereignConfig {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_key = non_empty("API_KEY").or_else(|| non_empty("GEMINI_API_KEY"));
        if api_key.is_none() {
            warn!("⚠️  No API_KEY set - the Oversoul will answer with fallback text");
        }

        let response_ordering = match non_empty("SOVEREIGN_RESPONSE_ORDERING") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring SOVEREIGN_RESPONSE_ORDERING");
                defaults.response_ordering
            }),
            None => defaults.response_ordering,
        };

        Self {
            api_key,
            data_dir: non_empty("SOVEREIGN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            model: non_empty("SOVEREIGN_MODEL").unwrap_or(defaults.model),
            base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            response_ordering,
        }
    }
}
