use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AssetSpec, OrderInput, OrderSide, ValidatedOrder};

/// Request to validate an order entry
///
/// Quantity and price are the raw text of the form fields.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateOrderRequest {
    pub side: OrderSide,
    #[schema(example = "BTC")]
    pub asset1: String,
    #[schema(example = "MB")]
    pub asset2: String,
    #[schema(example = "0.5")]
    pub quantity: String,
    #[schema(example = "2000")]
    pub price: String,
}

impl From<ValidateOrderRequest> for OrderInput {
    fn from(request: ValidateOrderRequest) -> Self {
        OrderInput::new(
            request.side,
            request.asset1,
            request.asset2,
            request.quantity,
            request.price,
        )
    }
}

/// Validated order with amounts in atomic units
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidatedOrderResponse {
    pub side: OrderSide,
    pub asset1: String,
    pub asset2: String,
    #[schema(value_type = String, example = "0.5")]
    pub quantity: Decimal,
    #[schema(value_type = String, example = "2000")]
    pub price: Decimal,
    #[schema(example = 50000000)]
    pub asset1_amount: u64,
    #[schema(example = 1000)]
    pub asset2_amount: u64,
    pub validated_at: DateTime<Utc>,
}

impl From<ValidatedOrder> for ValidatedOrderResponse {
    fn from(order: ValidatedOrder) -> Self {
        Self {
            side: order.side,
            asset1: order.asset1,
            asset2: order.asset2,
            quantity: order.quantity,
            price: order.price,
            asset1_amount: order.asset1_amount,
            asset2_amount: order.asset2_amount,
            validated_at: Utc::now(),
        }
    }
}

/// Asset declaration with its minimum amount in display units
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetResponse {
    #[schema(example = "BTC")]
    pub symbol: String,
    #[schema(example = 8)]
    pub precision: u32,
    #[schema(example = 100000)]
    pub min_unit: u64,
    #[schema(value_type = Option<String>, example = "0.001")]
    pub min_display: Option<Decimal>,
}

impl From<AssetSpec> for AssetResponse {
    fn from(spec: AssetSpec) -> Self {
        let min_display = spec.min_display();
        Self {
            symbol: spec.symbol,
            precision: spec.precision,
            min_unit: spec.min_unit,
            min_display,
        }
    }
}

/// Asset list response
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetListResponse {
    pub assets: Vec<AssetResponse>,
    pub count: usize,
}

/// Error response
///
/// `error` is a stable identifier of the failure, `message` is the text to
/// show to the user.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "quantity_below_minimum")]
    pub error: String,
    #[schema(example = "The quantity is less than the minimum amount (0.001 BTC).")]
    pub message: String,
}
