//! Relay HTTP server

use std::net::SocketAddr;

use super::{routes::build_router, state::AppState};
use crate::shared::Result;
use anyhow::Context;

/// RelayServer - binds the relay router to a socket
pub struct RelayServer {
    addr: SocketAddr,
    state: AppState,
}

impl RelayServer {
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self { addr, state }
    }

    /// Serves until Ctrl-C is received
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .with_context(|| {
                format!(
                    "Failed to bind relay to {}\n\n💡 Hint: Check that the port is free or choose another with --port",
                    self.addr
                )
            })?;

        tracing::info!(
            addr = %self.addr,
            mode = %self.state.relay.mode(),
            "InfraBot relay listening"
        );

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Relay server stopped unexpectedly")?;

        tracing::info!("InfraBot relay stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
