//! Order validation functions
//!
//! Validation is an ordered pipeline of small checks. Each returns a
//! `Result` and the composite `validate_order` chains them with `?`, so the
//! first failing check decides the error reported to the user.

use rust_decimal::Decimal;

use crate::models::{AssetSpec, OrderInput, ValidatedOrder};
use crate::registry::AssetRegistry;

use super::amount::{counter_amount, parse_decimal, to_atomic, to_units};
use super::errors::ValidationError;

// ============================================================================
// Individual Validation Functions
// ============================================================================

/// Parse the quantity text
///
/// No range restriction is applied here; zero and negative quantities are
/// rejected later by the minimum unit check.
pub fn parse_quantity(text: &str) -> Result<Decimal, ValidationError> {
    parse_decimal(text).ok_or(ValidationError::InvalidQuantity)
}

/// Parse the price text
pub fn parse_price(text: &str) -> Result<Decimal, ValidationError> {
    parse_decimal(text).ok_or(ValidationError::InvalidPrice)
}

/// Look up an asset in the registry
pub fn resolve_asset<R>(registry: &R, symbol: &str) -> Result<AssetSpec, ValidationError>
where
    R: AssetRegistry + ?Sized,
{
    registry
        .lookup(symbol)
        .ok_or_else(|| ValidationError::UnknownAsset(symbol.to_string()))
}

/// Scale the quantity to atomic units of asset1 and check it against the minimum
///
/// # Returns
/// * `Ok(amount)` with the asset1 amount in atomic units
/// * `Err(ValidationError::QuantityBelowMinimum)` if the amount is below `min_unit`
/// * `Err(ValidationError::InvalidQuantity)` if scaling overflows
pub fn validate_quantity_amount(
    quantity: Decimal,
    asset1: &AssetSpec,
) -> Result<u64, ValidationError> {
    let amount = to_atomic(quantity, asset1.precision).ok_or(ValidationError::InvalidQuantity)?;

    if amount < Decimal::from(asset1.min_unit) {
        return Err(ValidationError::QuantityBelowMinimum {
            min_display: min_display(asset1, ValidationError::InvalidQuantity)?,
            asset: asset1.symbol.clone(),
        });
    }

    to_units(amount).ok_or(ValidationError::InvalidQuantity)
}

/// Derive the asset2 amount exchanged at `price` and check it against the minimum
///
/// # Returns
/// * `Ok(amount)` with the asset2 amount in atomic units
/// * `Err(ValidationError::TradeValueBelowMinimum)` if the amount is below `min_unit`
/// * `Err(ValidationError::InvalidPrice)` if the computation overflows
pub fn validate_trade_value(
    asset1_amount: u64,
    price: Decimal,
    asset1: &AssetSpec,
    asset2: &AssetSpec,
) -> Result<u64, ValidationError> {
    let amount = counter_amount(asset1_amount, price, asset1.precision, asset2.precision)
        .ok_or(ValidationError::InvalidPrice)?;

    if amount < Decimal::from(asset2.min_unit) {
        return Err(ValidationError::TradeValueBelowMinimum {
            min_display: min_display(asset2, ValidationError::InvalidPrice)?,
            asset: asset2.symbol.clone(),
        });
    }

    to_units(amount).ok_or(ValidationError::InvalidPrice)
}

fn min_display(asset: &AssetSpec, on_overflow: ValidationError) -> Result<Decimal, ValidationError> {
    asset.min_display().ok_or(on_overflow)
}

// ============================================================================
// Composite Validation Function
// ============================================================================

/// Validate an order entry against the asset registry
///
/// # Validations Performed
/// 1. Quantity text must parse as a number
/// 2. Price text must parse as a number
/// 3. Both assets must be known to the registry
/// 4. Quantity in atomic units of asset1 must reach asset1's `min_unit`
/// 5. The asset2 amount it trades for must reach asset2's `min_unit`
///
/// The function is pure: calling it again with the same input and registry
/// contents yields the same result.
pub fn validate_order<R>(input: &OrderInput, registry: &R) -> Result<ValidatedOrder, ValidationError>
where
    R: AssetRegistry + ?Sized,
{
    let quantity = parse_quantity(&input.quantity_text)?;
    let price = parse_price(&input.price_text)?;

    let asset1 = resolve_asset(registry, &input.asset1)?;
    let asset2 = resolve_asset(registry, &input.asset2)?;

    let asset1_amount = validate_quantity_amount(quantity, &asset1)?;
    let asset2_amount = validate_trade_value(asset1_amount, price, &asset1, &asset2)?;

    Ok(ValidatedOrder {
        side: input.side,
        asset1: input.asset1.clone(),
        asset2: input.asset2.clone(),
        quantity,
        price,
        asset1_amount,
        asset2_amount,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderSide;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn registry() -> HashMap<String, AssetSpec> {
        [
            AssetSpec::new("BTC", 8, 100_000).unwrap(),
            AssetSpec::new("SAT", 8, 1).unwrap(),
            AssetSpec::new("EUR", 2, 1).unwrap(),
            AssetSpec::new("MB", 0, 1).unwrap(),
            AssetSpec::new("CENT", 2, 29).unwrap(),
        ]
        .into_iter()
        .map(|spec| (spec.symbol.clone(), spec))
        .collect()
    }

    fn order(asset1: &str, asset2: &str, quantity: &str, price: &str) -> OrderInput {
        OrderInput::new(OrderSide::Ask, asset1, asset2, quantity, price)
    }

    #[test]
    fn test_invalid_quantity_wins_over_invalid_price() {
        let registry = registry();
        for quantity in ["", "abc", "1,0", "one"] {
            for price in ["1", "xyz", ""] {
                let result = validate_order(&order("SAT", "EUR", quantity, price), &registry);
                assert_eq!(result, Err(ValidationError::InvalidQuantity));
            }
        }
    }

    #[test]
    fn test_invalid_price() {
        let registry = registry();
        for price in ["", "abc", "1,5", "nan"] {
            let result = validate_order(&order("SAT", "EUR", "1", price), &registry);
            assert_eq!(result, Err(ValidationError::InvalidPrice));
        }
    }

    #[test]
    fn test_quantity_below_minimum() {
        let result = validate_order(&order("BTC", "MB", "0.0005", "1000"), &registry());

        let err = result.unwrap_err();
        assert_eq!(
            err,
            ValidationError::QuantityBelowMinimum {
                min_display: dec!(0.001),
                asset: "BTC".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "The quantity is less than the minimum amount (0.001 BTC)."
        );
    }

    #[test]
    fn test_quantity_at_minimum_passes() {
        let validated = validate_order(&order("BTC", "MB", "0.001", "1000"), &registry()).unwrap();
        assert_eq!(validated.asset1_amount, 100_000);
        assert_eq!(validated.asset2_amount, 1);
    }

    #[test]
    fn test_successful_validation() {
        // 1 SAT-asset unit (8 decimals) at 1.0 EUR: ratio 100 / 10^8 = 1e-6
        let validated = validate_order(&order("SAT", "EUR", "1.0", "1.0"), &registry()).unwrap();

        assert_eq!(validated.side, OrderSide::Ask);
        assert_eq!(validated.asset1, "SAT");
        assert_eq!(validated.asset2, "EUR");
        assert_eq!(validated.quantity, dec!(1.0));
        assert_eq!(validated.price, dec!(1.0));
        assert_eq!(validated.asset1_amount, 100_000_000);
        assert_eq!(validated.asset2_amount, 100);
    }

    #[test]
    fn test_trade_value_below_minimum() {
        let registry = registry();
        for price in ["0.001", "0.0000001", "0", "-5"] {
            let err = validate_order(&order("SAT", "EUR", "1.0", price), &registry).unwrap_err();
            assert_eq!(
                err,
                ValidationError::TradeValueBelowMinimum {
                    min_display: dec!(0.01),
                    asset: "EUR".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_non_positive_quantity_below_minimum() {
        let registry = registry();
        for quantity in ["0", "-1", "-0.5"] {
            let err = validate_order(&order("SAT", "EUR", quantity, "1"), &registry).unwrap_err();
            assert!(matches!(err, ValidationError::QuantityBelowMinimum { .. }));
        }
    }

    #[test]
    fn test_exact_boundary_is_not_rounded_down() {
        // 0.29 * 100 evaluates to 28.999999999999996 in f64
        let validated = validate_order(&order("CENT", "MB", "0.29", "100"), &registry()).unwrap();
        assert_eq!(validated.asset1_amount, 29);
        assert_eq!(validated.asset2_amount, 29);
    }

    #[test]
    fn test_scientific_notation_input() {
        let validated = validate_order(&order("BTC", "MB", "1e-2", "2.5E2"), &registry()).unwrap();
        assert_eq!(validated.asset1_amount, 1_000_000);
        assert_eq!(validated.asset2_amount, 2);
    }

    #[test]
    fn test_unknown_assets() {
        let registry = registry();
        assert_eq!(
            validate_order(&order("DOGE", "EUR", "1", "1"), &registry),
            Err(ValidationError::UnknownAsset("DOGE".to_string()))
        );
        assert_eq!(
            validate_order(&order("SAT", "XYZ", "1", "1"), &registry),
            Err(ValidationError::UnknownAsset("XYZ".to_string()))
        );
        // Parse errors are reported before registry lookups
        assert_eq!(
            validate_order(&order("DOGE", "EUR", "x", "1"), &registry),
            Err(ValidationError::InvalidQuantity)
        );
    }

    #[test]
    fn test_quantity_overflow_is_rejected() {
        // Fits in a decimal but not in u64 atomic units
        let result = validate_order(&order("SAT", "EUR", "1000000000000", "1"), &registry());
        assert_eq!(result, Err(ValidationError::InvalidQuantity));

        // Does not fit in a decimal at all
        let huge = "9".repeat(40);
        let result = validate_order(&order("SAT", "EUR", &huge, "1"), &registry());
        assert_eq!(result, Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn test_tiny_scientific_values_fail_minimum_checks() {
        let registry = registry();
        let written_out = format!("0.{}1", "0".repeat(30));

        for quantity in ["1e-30", written_out.as_str()] {
            let err = validate_order(&order("SAT", "EUR", quantity, "1"), &registry).unwrap_err();
            assert_eq!(
                err,
                ValidationError::QuantityBelowMinimum {
                    min_display: dec!(0.00000001),
                    asset: "SAT".to_string(),
                }
            );
        }

        for price in ["1e-30", written_out.as_str()] {
            let err = validate_order(&order("SAT", "EUR", "1", price), &registry).unwrap_err();
            assert_eq!(
                err,
                ValidationError::TradeValueBelowMinimum {
                    min_display: dec!(0.01),
                    asset: "EUR".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_trade_value_overflow_is_rejected() {
        let result = validate_order(&order("MB", "SAT", "1000", "1000000000000000"), &registry());
        assert_eq!(result, Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let registry = registry();
        let input = order("BTC", "EUR", "0.123456789", "25000.5");

        let first = validate_order(&input, &registry);
        let second = validate_order(&input, &registry);
        assert_eq!(first, second);

        let bad = order("BTC", "EUR", "0.00001", "25000.5");
        assert_eq!(validate_order(&bad, &registry), validate_order(&bad, &registry));
    }

    #[test]
    fn test_monotonic_in_quantity() {
        let registry = registry();
        let quantities = ["0.001", "0.0015", "0.01", "0.5", "1", "1.00000001", "3.3", "1000"];

        let mut previous = 0u64;
        for quantity in quantities {
            let validated = validate_order(&order("BTC", "EUR", quantity, "19.99"), &registry)
                .unwrap_or_else(|err| panic!("{} rejected: {}", quantity, err));
            assert!(validated.asset2_amount >= previous);
            previous = validated.asset2_amount;
        }
    }

    #[test]
    fn test_validate_quantity_amount_directly() {
        let btc = AssetSpec::new("BTC", 8, 100_000).unwrap();
        assert_eq!(validate_quantity_amount(dec!(0.00123456789), &btc), Ok(123_456));
        assert!(validate_quantity_amount(dec!(0.00099999), &btc).is_err());
    }
}
