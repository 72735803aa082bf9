use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use utoipa::IntoParams;

use crate::engine::{OrderValidator, ValidationError};
use crate::models::{OrderInput, OrderLabels, OrderSide};

use super::responses::*;

/// Shared application state
pub type AppState = Arc<OrderValidator>;

/// Query parameters for the order form labels
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderFormQuery {
    pub side: OrderSide,
    pub asset1: String,
    pub asset2: String,
}

/// Convert ValidationError to HTTP response
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ValidationError::UnknownAsset(_) => StatusCode::NOT_FOUND,
            ValidationError::InvalidQuantity
            | ValidationError::InvalidPrice
            | ValidationError::QuantityBelowMinimum { .. }
            | ValidationError::TradeValueBelowMinimum { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Errors returned by the order endpoints
///
/// Extractor rejections are wrapped so malformed requests get the same
/// `ErrorResponse` body as validation failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(err) => return err.into_response(),
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::InvalidQuery(rejection) => (rejection.status(), rejection.body_text()),
        };

        let body = Json(ErrorResponse {
            error: "invalid_request".to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Validate an order entry
#[utoipa::path(
    post,
    path = "/api/v1/orders/validate",
    tag = "Orders",
    request_body = ValidateOrderRequest,
    responses(
        (status = 200, description = "Order is valid", body = ValidatedOrderResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Unknown asset", body = ErrorResponse),
        (status = 422, description = "Order rejected", body = ErrorResponse)
    )
)]
pub async fn validate_order(
    State(validator): State<AppState>,
    payload: Result<Json<ValidateOrderRequest>, JsonRejection>,
) -> Result<Json<ValidatedOrderResponse>, ApiError> {
    let Json(request) = payload?;
    let input = OrderInput::from(request);
    let order = validator.validate(&input)?;

    Ok(Json(order.into()))
}

/// Get the title and field labels of an order form
#[utoipa::path(
    get,
    path = "/api/v1/orders/form",
    tag = "Orders",
    params(OrderFormQuery),
    responses(
        (status = 200, description = "Form labels", body = OrderLabels),
        (status = 400, description = "Missing or invalid query parameters", body = ErrorResponse),
        (status = 404, description = "Unknown asset", body = ErrorResponse)
    )
)]
pub async fn get_order_form(
    State(validator): State<AppState>,
    query: Result<Query<OrderFormQuery>, QueryRejection>,
) -> Result<Json<OrderLabels>, ApiError> {
    let Query(query) = query?;
    let labels = validator.labels(query.side, &query.asset1, &query.asset2)?;
    Ok(Json(labels))
}

/// List all registered assets
#[utoipa::path(
    get,
    path = "/api/v1/assets",
    tag = "Assets",
    responses(
        (status = 200, description = "Registered assets", body = AssetListResponse)
    )
)]
pub async fn get_assets(State(validator): State<AppState>) -> Json<AssetListResponse> {
    let assets: Vec<AssetResponse> = validator
        .registry()
        .all()
        .into_iter()
        .map(AssetResponse::from)
        .collect();
    let count = assets.len();

    Json(AssetListResponse { assets, count })
}

/// Get a single asset
#[utoipa::path(
    get,
    path = "/api/v1/assets/{symbol}",
    tag = "Assets",
    params(
        ("symbol" = String, Path, description = "Asset symbol")
    ),
    responses(
        (status = 200, description = "Asset found", body = AssetResponse),
        (status = 404, description = "Unknown asset", body = ErrorResponse)
    )
)]
pub async fn get_asset(
    State(validator): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<AssetResponse>, ValidationError> {
    let spec = validator.asset(&symbol)?;
    Ok(Json(spec.into()))
}
