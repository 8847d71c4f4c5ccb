//! File patching for fix-server.
//!
//! Reads the whole target, runs the rules over it and overwrites it in place.
//! There is no backup and no temp-file rename: a failed write can leave the
//! target in an unspecified state.

use crate::config::PatcherConfig;
use crate::error::{FixError, Result};
use crate::rules::{SubstitutionRule, apply_rules_counted};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
	/// The file that was rewritten.
	pub target: PathBuf,

	/// Replacements made by each rule, in rule order.
	pub replacements: Vec<usize>,

	/// Whether the written content differs from what was read.
	pub changed: bool,
}

impl PatchReport {
	/// Total replacements across all rules.
	pub fn total_replacements(&self) -> usize {
		self.replacements.iter().sum()
	}

	/// File name of the target, for user-facing messages.
	pub fn file_name(&self) -> String {
		self.target
			.file_name()
			.map(|name| name.to_string_lossy().to_string())
			.unwrap_or_else(|| self.target.display().to_string())
	}
}

/// Applies a fixed rule list to one file.
#[derive(Debug, Clone)]
pub struct Patcher {
	config: PatcherConfig,
}

impl Patcher {
	pub fn new(config: PatcherConfig) -> Self {
		Patcher { config }
	}

	pub fn target(&self) -> &Path {
		&self.config.target
	}

	/// Read, transform and overwrite the target.
	///
	/// Nothing is written if the read fails.
	pub fn run(&self) -> Result<PatchReport> {
		patch_file(&self.config.target, &self.config.rules)
	}
}

/// Read `path`, apply `rules` in order, and write the result back over it.
pub fn patch_file(path: &Path, rules: &[SubstitutionRule]) -> Result<PatchReport> {
	debug!(target_file = %path.display(), rules = rules.len(), "reading target");
	let original = std::fs::read_to_string(path).map_err(|source| FixError::ReadTarget {
		path: path.to_path_buf(),
		source,
	})?;

	let (patched, replacements) = apply_rules_counted(&original, rules);
	let changed = patched != original;

	write_target(path, &patched)?;

	let report = PatchReport {
		target: path.to_path_buf(),
		replacements,
		changed,
	};
	info!(
		target_file = %path.display(),
		replaced = report.total_replacements(),
		changed,
		"patched"
	);

	Ok(report)
}

/// Replace the whole content of `path`.
fn write_target(path: &Path, content: &str) -> Result<()> {
	std::fs::write(path, content).map_err(|source| FixError::WriteTarget {
		path: path.to_path_buf(),
		source,
	})
}
