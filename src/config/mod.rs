//! Configuration module for the audiobook narrator.
//!
//! Provides CLI argument parsing and compute provider selection.

#[allow(clippy::module_inception)]
mod config;
mod provider;

pub use config::AppConfig;
pub use provider::Provider;
