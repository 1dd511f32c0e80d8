//! Fake implementations of the external services folio talks to, for
//! integration tests and local development.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
pub use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;

pub mod web3forms;
pub mod webhook;

/// Serve `router` on `host:port` until the server fails.
pub async fn serve(router: Router<()>, host: IpAddr, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

/// Serve `router` in the background on an ephemeral localhost port and
/// return the bound address.
pub async fn spawn(router: Router<()>) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to an ephemeral port")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            tracing::error!("Testing server on {addr} failed: {err}");
        }
    });
    Ok(addr)
}
