//! Common test utilities for REST API testing.
//!
//! This module provides test infrastructure including:
//!
//! - [`harness`] - REST API test harness
//! - [`services`] - Service doubles (recording, failing, panicking, slow)
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
pub mod services;
