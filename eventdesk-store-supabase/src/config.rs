//! Store configuration.
//!
//! Connection settings for the hosted project, stored at:
//!   ~/.config/eventdesk/store.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use eventdesk_core::{StoreError, StoreResult};

/// Supabase project connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL, e.g. "https://abcd1234.supabase.co".
    pub project_url: String,
    /// Publishable anon key. Safe to ship to clients; row-level
    /// security does the real gating.
    pub anon_key: String,
}

impl StoreConfig {
    pub fn new(project_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        StoreConfig {
            project_url: project_url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Load the settings from the platform config directory.
    pub fn load() -> StoreResult<Self> {
        let path = config_path()?;

        if !path.exists() {
            return Err(StoreError::Config(format!(
                "Store settings not found.\n\n\
                Create {} with:\n\n\
                project_url = \"https://<project>.supabase.co\"\n\
                anon_key = \"<publishable anon key>\"",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            StoreError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: StoreConfig = toml::from_str(&contents).map_err(|e| {
            StoreError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(config)
    }
}

fn config_path() -> StoreResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| StoreError::Config("Could not determine config directory".into()))?;
    Ok(base.join("eventdesk").join("store.toml"))
}
