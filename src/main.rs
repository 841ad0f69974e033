use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use storefront_cart::cart::AppState;
use storefront_cart::catalog::Catalog;
use storefront_cart::config::AppConfig;
use storefront_cart::router::create_app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG may come from it
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env();

    // The service cannot run without a catalog
    let catalog = Catalog::load(&config.catalog_path).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;

    tracing::info!(assets_dir = %config.assets_dir.display(), "serving frontend assets");
    let state = Arc::new(AppState::new(catalog, config.assets_dir));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server is listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
