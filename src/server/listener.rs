// TCP listener setup
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Bind the configured address. A port already in use surfaces as `ApiError::Io`.
pub async fn bind_listener(config: &AppConfig) -> Result<TcpListener> {
    let addr: SocketAddr = config.bind_address().parse().map_err(|e| {
        ApiError::Config(format!("invalid bind address {}: {}", config.bind_address(), e))
    })?;

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    Ok(listener)
}
