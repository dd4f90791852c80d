//! Common utilities and shared types for bookery.
//!
//! This crate provides foundational components used across all bookery crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//!
//! # Example
//!
//! ```no_run
//! use bookery_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("Database: {}", config.database.url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
