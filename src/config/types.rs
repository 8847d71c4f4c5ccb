use crate::error::{FixError, Result};
use crate::rules::SubstitutionRule;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name patched when no target is configured.
pub const DEFAULT_TARGET: &str = "server.js";

/// Top-level configuration from a `--config` TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// File to patch. Relative paths resolve against the config file's directory.
	#[serde(default)]
	pub target: Option<PathBuf>,

	/// Expression standing in for the environment check in the built-in rules.
	#[serde(default)]
	pub subject: Option<String>,

	/// Whether the two built-in conditional rules run first.
	#[serde(default = "default_true")]
	pub builtin_rules: bool,

	/// Extra rules, applied after the built-ins in declaration order.
	#[serde(default)]
	pub rules: Vec<RuleSpec>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			target: None,
			subject: None,
			builtin_rules: true,
			rules: Vec::new(),
		}
	}
}

fn default_true() -> bool {
	true
}

/// An uncompiled substitution rule as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
	/// Regex pattern to match.
	pub pattern: String,

	/// Literal replacement text.
	pub replacement: String,
}

impl RuleSpec {
	/// Compile into a rule ready for application.
	pub fn compile(&self) -> Result<SubstitutionRule> {
		SubstitutionRule::new(&self.pattern, self.replacement.clone())
	}
}

impl Config {
	/// Reject configs that would leave nothing to apply.
	///
	/// Rule patterns are compiled later, when the config is resolved.
	pub fn validate(&self, path: &Path) -> Result<()> {
		if !self.builtin_rules && self.rules.is_empty() {
			return Err(FixError::NoRules {
				path: path.to_path_buf(),
			});
		}

		Ok(())
	}
}

/// A loaded configuration with its source path.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Values supplied on the command line, which win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub target: Option<PathBuf>,
	pub subject: Option<String>,
}

/// Fully resolved input for one patcher run.
#[derive(Debug, Clone)]
pub struct PatcherConfig {
	/// Absolute path of the file to rewrite.
	pub target: PathBuf,

	/// Rules in application order.
	pub rules: Vec<SubstitutionRule>,
}
