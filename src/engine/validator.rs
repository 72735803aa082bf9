//! Order Validator
//!
//! `OrderValidator` binds the validation pipeline to a shared asset registry
//! so request handlers can validate orders without carrying the registry
//! around themselves.

use std::sync::Arc;

use crate::models::{AssetSpec, OrderInput, OrderLabels, OrderSide, ValidatedOrder};
use crate::registry::{AssetRegistry, InMemoryAssetRegistry};

use super::errors::ValidationError;
use super::validation::{resolve_asset, validate_order};

/// Validates order entries against a shared asset registry
pub struct OrderValidator<R: AssetRegistry + ?Sized = InMemoryAssetRegistry> {
    registry: Arc<R>,
}

impl<R: AssetRegistry + ?Sized> OrderValidator<R> {
    /// Create a validator over the given registry
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// The registry this validator reads from
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Validate a single order entry
    pub fn validate(&self, input: &OrderInput) -> Result<ValidatedOrder, ValidationError> {
        let result = validate_order(input, self.registry.as_ref());

        match &result {
            Ok(order) => tracing::debug!(
                "Validated {} order {} {} / {}: {} -> {}",
                order.side,
                order.quantity,
                order.asset1,
                order.asset2,
                order.asset1_amount,
                order.asset2_amount
            ),
            Err(err) => tracing::debug!(
                "Rejected {} order {} / {} ({}): {}",
                input.side,
                input.asset1,
                input.asset2,
                err.kind(),
                err
            ),
        }

        result
    }

    /// Look up a single asset
    pub fn asset(&self, symbol: &str) -> Result<AssetSpec, ValidationError> {
        resolve_asset(self.registry.as_ref(), symbol)
    }

    /// Form labels for an order between two known assets
    pub fn labels(
        &self,
        side: OrderSide,
        asset1: &str,
        asset2: &str,
    ) -> Result<OrderLabels, ValidationError> {
        self.asset(asset1)?;
        self.asset(asset2)?;
        Ok(OrderLabels::for_order(side, asset1, asset2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> OrderValidator {
        OrderValidator::new(Arc::new(InMemoryAssetRegistry::with_defaults()))
    }

    #[test]
    fn test_validate_through_shared_registry() {
        let validator = validator();
        let input = OrderInput::new(OrderSide::Bid, "BTC", "MB", "0.5", "2000");

        let order = validator.validate(&input).unwrap();
        assert_eq!(order.asset1_amount, 50_000_000);
        assert_eq!(order.asset2_amount, 1000);
    }

    #[test]
    fn test_labels_require_known_assets() {
        let validator = validator();

        let labels = validator.labels(OrderSide::Ask, "TBTC", "MB").unwrap();
        assert_eq!(labels.title, "Sell TBTC for MB");

        assert_eq!(
            validator.labels(OrderSide::Ask, "TBTC", "EUR"),
            Err(ValidationError::UnknownAsset("EUR".to_string()))
        );
    }

    #[test]
    fn test_validator_over_plain_map() {
        let mut assets = std::collections::HashMap::new();
        assets.insert("EUR".to_string(), AssetSpec::new("EUR", 2, 1).unwrap());
        let validator = OrderValidator::new(Arc::new(assets));

        assert_eq!(validator.asset("EUR").unwrap().precision, 2);
        assert!(validator.asset("USD").is_err());
    }
}
