// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Artproof — artwork preflight validation server.
//
// Entry point. Initialises logging, builds the router, and serves.

use artproof_core::AppConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = AppConfig::default();
    if let Ok(port) = std::env::var("ARTPROOF_PORT") {
        match port.parse() {
            Ok(port) => config.server_port = port,
            Err(_) => warn!(%port, "ignoring unparsable ARTPROOF_PORT"),
        }
    }

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = artproof_server::router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "artproof server listening");
    axum::serve(listener, app).await
}
