//! HTTP server for the question page

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::web::routes::{self, AppState};

/// Bind `addr` and serve until the process is stopped.
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = routes::router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind '{addr}'"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
