//! Application state for the CRUD API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the service implementation and the server configuration.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::TestService;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The service implementation (must implement [`TestService`])
///
/// # Example
///
/// ```rust
/// use scaffold_rest::{AppState, ServerConfig};
/// use scaffold_rest::service::PlaceholderTestService;
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(PlaceholderTestService), ServerConfig::default());
/// assert_eq!(state.api_prefix(), "/api");
/// ```
pub struct AppState<S> {
    /// The service the handlers forward to.
    service: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: TestService> AppState<S> {
    /// Creates a new AppState with the given service and configuration.
    pub fn new(service: Arc<S>, config: ServerConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the prefix the resource routes are mounted under.
    pub fn api_prefix(&self) -> &str {
        &self.config.api_prefix
    }
}
