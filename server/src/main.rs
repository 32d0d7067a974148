//! Product API server: loads settings, prepares the store, mounts routes, serves.
//!
//! Run from repo root: `cargo run -p product-server`
//! Without PostgreSQL: `STORAGE_BACKEND=memory cargo run -p product-server`

use product_api::{build_router, connect, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("product_api=info,product_server=info")),
        )
        .init();

    let state = connect(&settings).await?;
    let app = build_router(state, &settings);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        products = %settings.products_path(),
        "listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
