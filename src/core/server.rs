use crate::config::ServerConfig;
use crate::core::routes;
use crate::utils::error::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct GreetServer {
    config: ServerConfig,
}

impl GreetServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Binds the listener and serves until the process is terminated.
    /// A failed bind (port in use, insufficient privilege) is fatal and
    /// surfaces as an IO error.
    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr).await?;

        // Report the port the OS actually gave us, not the configured one,
        // so a port-0 bind logs the real port.
        let local_addr = listener.local_addr()?;
        tracing::info!("Server listening on port {}", local_addr.port());

        axum::serve(listener, routes::app()).await?;
        Ok(())
    }
}
