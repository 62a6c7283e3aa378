//! Core utilities for the lighters scene.
//!
//! This crate provides foundational types and utilities used across the workspace:
//! - Error types and result aliases
//! - Logging initialization
//! - Timer utilities
//! - Configuration management

pub mod config;
mod error;
mod logging;
mod timer;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use timer::Timer;
