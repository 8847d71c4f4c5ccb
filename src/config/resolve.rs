use crate::config::types::{DEFAULT_TARGET, LoadedConfig, Overrides, PatcherConfig};
use crate::error::Result;
use crate::rules::{DEFAULT_SUBJECT, builtin_rules};
use std::path::{Path, PathBuf};

/// Combine command-line overrides, an optional config file and the defaults.
///
/// Precedence is overrides, then config file, then defaults. A relative
/// target from the command line resolves against `cwd`; one from a config
/// file resolves against that file's directory.
pub fn resolve_config(
	cwd: &Path,
	loaded: Option<&LoadedConfig>,
	overrides: &Overrides,
) -> Result<PatcherConfig> {
	let target = if let Some(ref target) = overrides.target {
		cwd.join(target)
	} else if let Some(loaded) = loaded
		&& let Some(ref target) = loaded.config.target
	{
		config_dir(&loaded.path, cwd).join(target)
	} else {
		cwd.join(DEFAULT_TARGET)
	};

	let subject = overrides
		.subject
		.as_deref()
		.or_else(|| loaded.and_then(|l| l.config.subject.as_deref()))
		.unwrap_or(DEFAULT_SUBJECT);

	let mut rules = Vec::new();
	let include_builtin = loaded.is_none_or(|l| l.config.builtin_rules);
	if include_builtin {
		rules.extend(builtin_rules(subject)?);
	}
	if let Some(loaded) = loaded {
		for spec in &loaded.config.rules {
			rules.push(spec.compile()?);
		}
	}

	Ok(PatcherConfig { target, rules })
}

/// Directory a config file lives in, made absolute against `cwd`.
fn config_dir(config_path: &Path, cwd: &Path) -> PathBuf {
	let parent = config_path.parent().unwrap_or_else(|| Path::new(""));
	cwd.join(parent)
}
