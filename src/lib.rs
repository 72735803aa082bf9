// Library Crate Root
// lib.rs

// main.rs imports through lib.rs like an external crate
pub mod api;
pub mod config;
pub mod engine;
pub mod models;
pub mod registry;

// pub use = re-export at crate root
pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use engine::{validate_order, OrderValidator, ValidationError};
pub use models::{AssetSpec, OrderInput, OrderLabels, OrderSide, ValidatedOrder};
pub use registry::{AssetRegistry, InMemoryAssetRegistry, RegistryError};
