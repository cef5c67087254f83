//! Server configuration for the CRUD API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SCAFFOLD_SERVER_PORT` | 3000 | Server port |
//! | `SCAFFOLD_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `SCAFFOLD_LOG_LEVEL` | info | Log level |
//! | `SCAFFOLD_MAX_BODY_SIZE` | 1048576 | Max JSON request body (bytes) |
//! | `SCAFFOLD_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SCAFFOLD_ENABLE_CORS` | true | Enable CORS |
//! | `SCAFFOLD_CORS_ORIGINS` | * | Allowed origins |
//! | `SCAFFOLD_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `SCAFFOLD_CORS_HEADERS` | Content-Type,Authorization,Accept,X-Request-ID | Allowed headers |
//! | `SCAFFOLD_API_PREFIX` | /api | Prefix for resource routes |
//! | `SCAFFOLD_DOCS_PATH` | /docs | Swagger UI mount point |
//! | `SCAFFOLD_OPENAPI_PATH` | /api-docs/openapi.json | Generated OpenAPI document |
//! | `SCAFFOLD_ENABLE_REQUEST_ID` | true | Assign and propagate `x-request-id` |
//!
//! # Example
//!
//! ```rust
//! use scaffold_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 8000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the CRUD API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "scaffold")]
#[command(about = "JSON CRUD API scaffold server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SCAFFOLD_SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SCAFFOLD_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SCAFFOLD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum JSON request body size in bytes.
    #[arg(long, env = "SCAFFOLD_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "SCAFFOLD_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "SCAFFOLD_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SCAFFOLD_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "SCAFFOLD_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "SCAFFOLD_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept,X-Request-ID"
    )]
    pub cors_headers: String,

    /// Path prefix the resource routes are mounted under.
    #[arg(long, env = "SCAFFOLD_API_PREFIX", default_value = "/api")]
    pub api_prefix: String,

    /// Path the Swagger UI is served from.
    #[arg(long, env = "SCAFFOLD_DOCS_PATH", default_value = "/docs")]
    pub docs_path: String,

    /// Path the generated OpenAPI document is served from.
    #[arg(
        long,
        env = "SCAFFOLD_OPENAPI_PATH",
        default_value = "/api-docs/openapi.json"
    )]
    pub openapi_path: String,

    /// Enable request ID tracking.
    #[arg(long, env = "SCAFFOLD_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept,X-Request-ID".to_string(),
            api_prefix: "/api".to_string(),
            docs_path: "/docs".to_string(),
            openapi_path: "/api-docs/openapi.json".to_string(),
            enable_request_id: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(["scaffold"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if let Err(e) = check_mount_path("API prefix", &self.api_prefix) {
            errors.push(e);
        }

        if let Err(e) = check_mount_path("Docs path", &self.docs_path) {
            errors.push(e);
        }

        if !self.openapi_path.starts_with('/') {
            errors.push("OpenAPI path must start with '/'".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 64 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            api_prefix: "/api".to_string(),
            docs_path: "/docs".to_string(),
            openapi_path: "/api-docs/openapi.json".to_string(),
            enable_request_id: false,
        }
    }
}

/// Axum's `nest` rejects an empty path, `/` and trailing slashes.
fn check_mount_path(label: &str, path: &str) -> Result<(), String> {
    if !path.starts_with('/') {
        return Err(format!("{} must start with '/'", label));
    }
    if path == "/" || path.ends_with('/') {
        return Err(format!("{} cannot be '/' or end with '/'", label));
    }
    Ok(())
}
