//! REST server over the task store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::db::Db;
//! use taskdesk::libs::config::ServerConfig;
//! use taskdesk::server::{create_router, AppState, Server};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let router = create_router(AppState::new(Db::new()?));
//! Server::new(ServerConfig::default()).run(router).await
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

use crate::libs::config::ServerConfig;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Serves `router` until Ctrl+C.
    pub async fn run(self, router: Router) -> Result<()> {
        let listener = TcpListener::bind(self.config.addr()).await?;
        let addr = listener.local_addr()?;
        msg_info!(Message::ServerListening(addr.to_string()));

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        msg_print!(Message::ServerStopped);
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
