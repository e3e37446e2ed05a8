//! Web interface for rolodex
//!
//! This module provides the server-rendered HTML surface over the customer
//! store.
//!
//! # Architecture
//!
//! The server is organized into several submodules:
//!
//! - `flash` - Outcome notices carried across redirects
//! - `pages` - HTML rendering for the listing and forms
//! - `handlers` - One handler per route
//!
//! # Request lifecycle
//!
//! Each request is handled independently with its own scoped store
//! connection; no state is shared between requests beyond the `AppState`
//! handle itself. Mutating handlers validate first, persist second, and
//! terminate in a redirect carrying the outcome notice.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rolodex::database::Store;
//! use rolodex::server::{start_server, AppState, ServerConfig};
//!
//! let store = Store::open("~/.rolodex/rolodex.db")?;
//! let state = AppState::new(store);
//! let config = ServerConfig::default().with_port(8080);
//! start_server(state, config).await?;
//! ```

pub mod flash;
pub mod handlers;
pub mod pages;

pub use flash::{Notice, NoticeParams};

use anyhow::{anyhow, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::database::Store;

// =============================================================================
// Server Configuration
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub address: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get the full bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

// =============================================================================
// Server State
// =============================================================================

/// Shared server state
///
/// Constructed once at startup and cloned into every handler. The store
/// handle carries only the database path; connections stay per-request.
#[derive(Clone)]
pub struct AppState {
    /// The customer store
    pub store: Store,
}

impl AppState {
    /// Create a new application state around a store
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

// =============================================================================
// Router Creation
// =============================================================================

/// Create the axum router with all routes registered
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", get(handlers::add_form).post(handlers::add_submit))
        .route(
            "/update/:id",
            get(handlers::update_form).post(handlers::update_submit),
        )
        .route("/delete/:id", post(handlers::delete_submit))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Server Startup
// =============================================================================

/// Start the web interface and serve until shutdown
pub async fn start_server(state: AppState, config: ServerConfig) -> Result<()> {
    let bind_address = config.bind_address();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", bind_address, e))?;

    info!("Rolodex web interface listening on http://{}", bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_config_builders() {
        let config = ServerConfig::new().with_address("0.0.0.0").with_port(3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
