use std::path::PathBuf;

use anyhow::Context;
use media_status::{RegistryOverrides, StatusRegistry};

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub overrides_path: Option<PathBuf>
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("STATUS_OVERRIDES_PATH").ok()
        )
    }

    fn from_vars(port: Option<String>, overrides_path: Option<String>) -> anyhow::Result<Self> {
        let port = match port.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p
                .parse()
                .with_context(|| format!("invalid PORT value: {p}"))?,
            _ => DEFAULT_PORT
        };

        let overrides_path = overrides_path
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            port,
            overrides_path
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Builds the registry once, applying the overrides file when configured.
    pub async fn load_registry(&self) -> anyhow::Result<StatusRegistry> {
        let Some(path) = &self.overrides_path else {
            return Ok(StatusRegistry::default());
        };

        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read status overrides from {}", path.display()))?;
        let overrides = RegistryOverrides::from_json(&raw)
            .with_context(|| format!("invalid status overrides in {}", path.display()))?;
        if overrides.is_empty() {
            tracing::warn!("Status overrides file {} has no entries", path.display());
            return Ok(StatusRegistry::default());
        }
        let registry = StatusRegistry::with_overrides(&overrides)
            .with_context(|| format!("rejected status overrides in {}", path.display()))?;

        tracing::info!("Loaded status overrides from {}", path.display());

        Ok(registry)
    }
}
