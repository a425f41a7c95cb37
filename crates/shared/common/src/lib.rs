//! Common utilities shared across services.
//!
//! This crate provides:
//! - Infrastructure error type and HTTP mapping of domain errors
//! - Configuration structures
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
