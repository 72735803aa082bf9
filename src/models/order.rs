use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Raw order as entered by the user, before any parsing
///
/// `asset1` is the asset whose quantity is traded, `asset2` is the asset the
/// price is quoted in. The quantity and price are kept as the exact text the
/// user typed; no trimming or locale handling is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderInput {
    pub side: OrderSide,
    pub asset1: String,
    pub asset2: String,
    #[schema(example = "0.5")]
    pub quantity_text: String,
    #[schema(example = "1500")]
    pub price_text: String,
}

/// Order side: Ask sells asset1 for asset2, Bid buys asset1 with asset2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Ask,
    Bid,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Ask => write!(f, "ask"),
            OrderSide::Bid => write!(f, "bid"),
        }
    }
}

/// An order whose amounts have been checked against the asset registry
///
/// `asset1_amount` and `asset2_amount` are atomic units and are the only
/// amounts downstream order placement should use. `quantity` and `price`
/// echo what the user typed for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedOrder {
    pub side: OrderSide,
    pub asset1: String,
    pub asset2: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub asset1_amount: u64,
    pub asset2_amount: u64,
}

/// Title and field labels of an order entry form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLabels {
    #[schema(example = "Sell BTC for MB")]
    pub title: String,
    #[schema(example = "Volume (BTC):")]
    pub quantity_label: String,
    #[schema(example = "Price per unit (MB / BTC):")]
    pub price_label: String,
}

impl OrderInput {
    /// Create a new order input from the form's static parameters and raw text
    pub fn new(
        side: OrderSide,
        asset1: impl Into<String>,
        asset2: impl Into<String>,
        quantity_text: impl Into<String>,
        price_text: impl Into<String>,
    ) -> Self {
        Self {
            side,
            asset1: asset1.into(),
            asset2: asset2.into(),
            quantity_text: quantity_text.into(),
            price_text: price_text.into(),
        }
    }

    /// Labels for the form this input was entered in
    pub fn labels(&self) -> OrderLabels {
        OrderLabels::for_order(self.side, &self.asset1, &self.asset2)
    }
}

impl OrderLabels {
    /// Title and labels for an order trading `asset1` priced in `asset2`
    pub fn for_order(side: OrderSide, asset1: &str, asset2: &str) -> Self {
        let title = match side {
            OrderSide::Ask => format!("Sell {} for {}", asset1, asset2),
            OrderSide::Bid => format!("Buy {} for {}", asset1, asset2),
        };

        Self {
            title,
            quantity_label: format!("Volume ({}):", asset1),
            price_label: format!("Price per unit ({} / {}):", asset2, asset1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_labels() {
        let labels = OrderLabels::for_order(OrderSide::Ask, "BTC", "MB");

        assert_eq!(labels.title, "Sell BTC for MB");
        assert_eq!(labels.quantity_label, "Volume (BTC):");
        assert_eq!(labels.price_label, "Price per unit (MB / BTC):");
    }

    #[test]
    fn test_bid_labels_from_input() {
        let input = OrderInput::new(OrderSide::Bid, "TBTC", "MB", "1", "2");

        assert_eq!(input.labels().title, "Buy TBTC for MB");
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&OrderSide::Ask).unwrap(), "\"ask\"");
        let side: OrderSide = serde_json::from_str("\"bid\"").unwrap();
        assert_eq!(side, OrderSide::Bid);
        assert_eq!(OrderSide::Bid.to_string(), "bid");
    }
}
