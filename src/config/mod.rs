//! Configuration loading for fix-server.
//!
//! This module handles:
//! - TOML config file parsing
//! - Merging command-line overrides, config file and defaults

pub mod parser;
pub mod resolve;
pub mod types;

pub use parser::{load_config, parse_config_file, parse_config_str};
pub use resolve::resolve_config;
pub use types::{Config, DEFAULT_TARGET, LoadedConfig, Overrides, PatcherConfig, RuleSpec};
