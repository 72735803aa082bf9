use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::engine::amount::{scale_factor, MAX_PRECISION};
use crate::registry::RegistryError;

/// Tradable asset as declared by its wallet
///
/// One display unit equals `10^precision` atomic units. `min_unit` is the
/// smallest atomic amount the trading engine accepts for a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssetSpec {
    /// Asset symbol (e.g., "BTC", "MB")
    pub symbol: String,

    /// Number of decimal places between display and atomic units
    pub precision: u32,

    /// Minimum tradable amount in atomic units
    pub min_unit: u64,
}

impl AssetSpec {
    /// Create a checked asset spec
    pub fn new(
        symbol: impl Into<String>,
        precision: u32,
        min_unit: u64,
    ) -> Result<Self, RegistryError> {
        let spec = Self {
            symbol: symbol.into(),
            precision,
            min_unit,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the invariants the validator relies on
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.symbol.is_empty() {
            return Err(RegistryError::InvalidSpec {
                symbol: self.symbol.clone(),
                reason: "symbol must not be empty".to_string(),
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(RegistryError::InvalidSpec {
                symbol: self.symbol.clone(),
                reason: format!(
                    "precision {} exceeds maximum of {}",
                    self.precision, MAX_PRECISION
                ),
            });
        }
        if self.min_unit == 0 {
            return Err(RegistryError::InvalidSpec {
                symbol: self.symbol.clone(),
                reason: "min_unit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Minimum tradable amount in display units (e.g., 0.001 BTC)
    ///
    /// Returns `None` if the precision is out of range.
    pub fn min_display(&self) -> Option<Decimal> {
        scale_factor(self.precision).map(|factor| (Decimal::from(self.min_unit) / factor).normalize())
    }
}
