//! Error types for order validation
//!
//! Every variant is an expected, recoverable user-input error. The `Display`
//! output of each variant is the message shown to the user.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an order entry can be rejected
///
/// # Error Categories
///
/// - **Parse Errors**: `InvalidQuantity`, `InvalidPrice`
/// - **Minimum Amount Errors**: `QuantityBelowMinimum`, `TradeValueBelowMinimum`
/// - **Registry Errors**: `UnknownAsset`
///
/// `min_display` is the asset's minimum amount expressed in display units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quantity text is not a number, or scales beyond the supported range
    #[error("The quantity must be a valid number.")]
    InvalidQuantity,

    /// Price text is not a number, or the trade value exceeds the supported range
    #[error("The price must be a valid number.")]
    InvalidPrice,

    /// The quantity is below asset1's minimum tradable unit
    #[error("The quantity is less than the minimum amount ({min_display} {asset}).")]
    QuantityBelowMinimum { min_display: Decimal, asset: String },

    /// The derived asset2 amount is below asset2's minimum tradable unit
    #[error(
        "The price leads to a trade where less than the minimum amount of assets are exchanged ({min_display} {asset})."
    )]
    TradeValueBelowMinimum { min_display: Decimal, asset: String },

    /// The asset symbol is not present in the registry
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),
}

impl ValidationError {
    /// Stable machine-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidQuantity => "invalid_quantity",
            ValidationError::InvalidPrice => "invalid_price",
            ValidationError::QuantityBelowMinimum { .. } => "quantity_below_minimum",
            ValidationError::TradeValueBelowMinimum { .. } => "trade_value_below_minimum",
            ValidationError::UnknownAsset(_) => "unknown_asset",
        }
    }

    /// Returns true if the text could not be parsed as a number
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidQuantity | ValidationError::InvalidPrice
        )
    }

    /// Returns true if an amount fell below an asset's minimum unit
    pub fn is_below_minimum(&self) -> bool {
        matches!(
            self,
            ValidationError::QuantityBelowMinimum { .. }
                | ValidationError::TradeValueBelowMinimum { .. }
        )
    }
}
