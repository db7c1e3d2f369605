//! # Server Entry
//!
//! Binds the listener and runs the router until the process exits.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::observability::Logger;

use super::config::ServerConfig;
use super::routes::router;
use super::state::AppState;

/// Start the HTTP server and serve until failure.
pub async fn serve(config: ServerConfig) -> Result<(), std::io::Error> {
    let state = Arc::new(AppState::new(config.data_dir.clone()));
    let app = router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    Logger::info(
        "server_started",
        &[
            ("addr", addr.as_str()),
            ("data_dir", &config.data_dir.display().to_string()),
        ],
    );

    axum::serve(listener, app).await
}
