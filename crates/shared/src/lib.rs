//! Shared errors and configuration for Tally.
//!
//! This crate provides the ambient pieces used by binaries:
//! - Application-wide error types
//! - Configuration management
//!
//! The numeric helpers themselves live in `tally-core` and never fail.

pub mod config;
pub mod error;

pub use config::{AppConfig, DisplayConfig, LogConfig};
pub use error::{AppError, AppResult};
