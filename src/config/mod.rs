//! Configuration module for IncomeFlow
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::IncomePaths;
pub use settings::Settings;
