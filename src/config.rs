use std::path::PathBuf;

use crate::registry::{InMemoryAssetRegistry, RegistryError};

/// Service configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to (e.g., "127.0.0.1:3000")
    pub bind_addr: String,

    /// JSON file with asset declarations; built-in defaults are used if unset
    pub asset_registry_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            asset_registry_path: None,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl AppConfig {
    /// Read `BIND_ADDR` and `ASSET_REGISTRY_PATH` from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = var("BIND_ADDR")
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(default_bind_addr);

        let asset_registry_path = var("ASSET_REGISTRY_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            bind_addr,
            asset_registry_path,
        }
    }

    /// Build the asset registry this configuration points at
    pub fn load_registry(&self) -> Result<InMemoryAssetRegistry, RegistryError> {
        match &self.asset_registry_path {
            Some(path) => {
                tracing::info!("Loading asset registry from {}", path.display());
                InMemoryAssetRegistry::load_from_file(path)
            }
            None => {
                tracing::info!("ASSET_REGISTRY_PATH not set, using built-in assets");
                Ok(InMemoryAssetRegistry::with_defaults())
            }
        }
    }
}
