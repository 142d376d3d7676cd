use std::sync::Arc;

use tracing::info;

use utility_bill_history::{create_router, AppState, BillAnalytics, InMemoryStore, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    info!("Starting Utility Bill History service");

    let settings = Settings::new()?;

    // The record store is built once and read-only for the process lifetime.
    let store = Arc::new(InMemoryStore::sample());
    let analytics = BillAnalytics::new(store);

    let state = Arc::new(AppState { analytics });
    let app = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
