//! Person service — REST front for the `person` table.

use anyhow::Context;
use tokio::net::TcpListener;

use ms_person_api::config::PersonConfig;
use ms_person_api::db;
use ms_person_api::routes::build_router;
use ms_person_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ms_common::telemetry::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ms-person-api starting");

    let config = PersonConfig::from_env().context("loading person service config")?;

    // Connect to PostgreSQL if DATABASE_URL is set, otherwise use in-memory state.
    let state = if let Some(database_url) = &config.database_url {
        tracing::info!("connecting to PostgreSQL");
        let pool = db::connect(database_url, config.db_max_connections)
            .await
            .context("connecting to PostgreSQL")?;
        AppState::with_pool(pool)
    } else {
        tracing::warn!("DATABASE_URL not set — using in-memory person store");
        AppState::new()
    };

    let storage = state.storage_mode();
    let app = build_router(state);

    let addr = config.service.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, storage, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(ms_common::shutdown_signal())
        .await?;

    tracing::info!("ms-person-api stopped");
    Ok(())
}
