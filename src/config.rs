//! Server configuration loaded from environment variables.
//!
//! Configuration is resolved once at startup and passed into the server
//! explicitly; nothing in the crate reads these variables after boot.

use std::env;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// The single origin allowed by the CORS policy.
pub const ALLOWED_ORIGIN: &str = "https://swachhata-cell-frontend.vercel.app";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: 0.0.0.0)
    pub host: String,
    /// Listen port (default: 8000)
    pub port: u16,
    /// Shared secret gating the CSV export endpoint. When unset, every
    /// export request is denied.
    pub admin_token: Option<String>,
    /// Origin allowed by the CORS layer, fixed at startup.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            admin_token: None,
            allowed_origin: ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Listen port (default: 8000)
    /// - `ADMIN_TOKEN`: Shared secret for the export endpoint (optional)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let admin_token = env::var("ADMIN_TOKEN").ok();

        Self {
            host,
            port,
            admin_token,
            allowed_origin: ALLOWED_ORIGIN.to_string(),
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
