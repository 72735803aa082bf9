use thiserror::Error;

/// Errors raised while building the asset registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An asset declaration breaks one of the registry invariants
    #[error("Invalid asset spec '{symbol}': {reason}")]
    InvalidSpec { symbol: String, reason: String },

    /// The registry file could not be read
    #[error("Failed to read asset registry file: {0}")]
    Io(#[from] std::io::Error),

    /// The registry file is not valid JSON for the expected format
    #[error("Failed to parse asset registry file: {0}")]
    Json(#[from] serde_json::Error),
}
