//! Shared types, errors, and configuration for Changemaker.
//!
//! This crate provides common types used across all other crates:
//! - Money amounts held as integer cents
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use types::{Amount, AmountError};
