use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::responses::*;
use crate::models::{OrderLabels, OrderSide};

/// OpenAPI v1 specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Entry API",
        version = "1.0.0",
        description = "Validates user-entered orders and converts them to atomic asset amounts",
        license(
            name = "MIT"
        )
    ),
    paths(
        handlers::health_check,
        handlers::validate_order,
        handlers::get_order_form,
        handlers::get_assets,
        handlers::get_asset,
    ),
    components(
        schemas(
            OrderSide,
            OrderLabels,
            ValidateOrderRequest,
            ValidatedOrderResponse,
            AssetResponse,
            AssetListResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Orders", description = "Order entry validation endpoints"),
        (name = "Assets", description = "Asset registry endpoints"),
    )
)]
pub struct ApiDocV1;
