//! Cart service — static liveness responses.

use anyhow::Context;
use tokio::net::TcpListener;

use ms_cart_api::config;
use ms_cart_api::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ms_common::telemetry::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ms-cart-api starting");

    let config = config::from_env().context("loading cart service config")?;
    let app = build_router();

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(ms_common::shutdown_signal())
        .await?;

    tracing::info!("ms-cart-api stopped");
    Ok(())
}
