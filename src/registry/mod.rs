//! Asset registry
//!
//! The validator only needs read access to asset declarations, expressed by
//! the `AssetRegistry` trait. `InMemoryAssetRegistry` is the implementation
//! the service uses; it is filled once at startup from a JSON file or from
//! built-in defaults.

pub mod errors;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::models::AssetSpec;

pub use errors::RegistryError;

/// Read-only lookup of asset declarations by symbol
pub trait AssetRegistry: Send + Sync {
    /// Find the asset declared under `symbol`
    fn lookup(&self, symbol: &str) -> Option<AssetSpec>;
}

impl AssetRegistry for HashMap<String, AssetSpec> {
    fn lookup(&self, symbol: &str) -> Option<AssetSpec> {
        self.get(symbol).cloned()
    }
}

impl<R: AssetRegistry + ?Sized> AssetRegistry for Arc<R> {
    fn lookup(&self, symbol: &str) -> Option<AssetSpec> {
        (**self).lookup(symbol)
    }
}

/// On-disk registry format: `{"assets": [{"symbol": ..., "precision": ..., "min_unit": ...}]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub assets: Vec<AssetSpec>,
}

/// Concurrent in-memory asset registry
#[derive(Debug, Default)]
pub struct InMemoryAssetRegistry {
    assets: DashMap<String, AssetSpec>,
}

impl InMemoryAssetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            assets: DashMap::new(),
        }
    }

    /// Create a registry from a list of specs, rejecting the first invalid one
    pub fn from_specs(specs: impl IntoIterator<Item = AssetSpec>) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for spec in specs {
            registry.register(spec)?;
        }
        Ok(registry)
    }

    /// Registry with the assets the market ships with
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for (symbol, precision, min_unit) in [("BTC", 8, 100_000), ("TBTC", 8, 100_000), ("MB", 0, 1)] {
            registry.assets.insert(
                symbol.to_string(),
                AssetSpec {
                    symbol: symbol.to_string(),
                    precision,
                    min_unit,
                },
            );
        }
        registry
    }

    /// Load a registry from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file: RegistryFile = serde_json::from_str(&contents)?;

        tracing::debug!(
            "Loaded {} asset declarations from {}",
            file.assets.len(),
            path.display()
        );

        Self::from_specs(file.assets)
    }

    /// Add or replace an asset declaration
    pub fn register(&self, spec: AssetSpec) -> Result<(), RegistryError> {
        spec.validate()?;
        if let Some(previous) = self.assets.insert(spec.symbol.clone(), spec) {
            tracing::warn!("Asset {} declared more than once, keeping the last entry", previous.symbol);
        }
        Ok(())
    }

    /// All registered assets, sorted by symbol
    pub fn all(&self) -> Vec<AssetSpec> {
        let mut assets: Vec<AssetSpec> = self.assets.iter().map(|entry| entry.value().clone()).collect();
        assets.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        assets
    }

    /// All registered symbols, sorted
    pub fn symbols(&self) -> Vec<String> {
        self.all().into_iter().map(|spec| spec.symbol).collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn lookup(&self, symbol: &str) -> Option<AssetSpec> {
        self.assets.get(symbol).map(|entry| entry.value().clone())
    }
}
