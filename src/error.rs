use std::path::PathBuf;

/// Library-level structured errors for fix-server.
///
/// The CLI binary wraps these with `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("No substitution rules configured in {path}")]
	NoRules { path: PathBuf },

	#[error("Failed to read target file: {path}")]
	ReadTarget {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write target file: {path}")]
	WriteTarget {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using FixError.
pub type Result<T> = std::result::Result<T, FixError>;
