use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::*;
use super::openapi::ApiDocV1;

/// Create the API router with Swagger UI
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/v1/openapi.json", ApiDocV1::openapi()))
        .route("/health", get(health_check))
        // Order entry endpoints
        .route("/api/v1/orders/validate", post(validate_order))
        .route("/api/v1/orders/form", get(get_order_form))
        // Asset registry endpoints
        .route("/api/v1/assets", get(get_assets))
        .route("/api/v1/assets/:symbol", get(get_asset))
        .with_state(state)
}
