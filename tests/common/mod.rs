//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application fixture
//! - Account helpers that go through the real HTTP endpoints
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use server::*;
