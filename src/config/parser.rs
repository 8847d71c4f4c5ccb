use crate::config::types::{Config, LoadedConfig};
use crate::error::{FixError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| FixError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config = toml::from_str(content).map_err(|source| FixError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})?;

	config.validate(path)?;

	Ok(config)
}

/// Parse a config file and keep its path alongside it.
pub fn load_config(path: &Path) -> Result<LoadedConfig> {
	let config = parse_config_file(path)?;
	Ok(LoadedConfig {
		config,
		path: path.to_path_buf(),
	})
}
