//! Shared types, errors, and configuration for Cashbook.
//!
//! This crate provides common types used across all other crates:
//! - Account identifiers and transaction reference numbers
//! - The closed set of supported currencies
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{AccountId, Currency, XactNo};
