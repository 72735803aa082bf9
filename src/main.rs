use order_entry_api::{create_router, AppConfig, OrderValidator};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_entry_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let registry = match config.load_registry() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("❌ Failed to load asset registry: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("📒 Asset registry ready: {}", registry.symbols().join(", "));

    let validator = Arc::new(OrderValidator::new(Arc::new(registry)));
    let app = create_router(validator);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("❌ Failed to bind {}: {}", config.bind_addr, e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("🚀 Order Entry API server running on http://{}", config.bind_addr);
    tracing::info!("📊 Health check: http://{}/health", config.bind_addr);
    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", config.bind_addr);
    tracing::info!("");
    tracing::info!("📝 Validate an order:");
    tracing::info!(
        r#"   curl -X POST http://{}/api/v1/orders/validate -H 'content-type: application/json' -d '{{"side":"ask","asset1":"BTC","asset2":"MB","quantity":"0.5","price":"2000"}}'"#,
        config.bind_addr
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("❌ Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
