use crate::error::{FixError, Result};
use regex::{Captures, Regex};
use tracing::debug;

/// A compiled find/replace rule.
///
/// The replacement is inserted literally: `$name` and `$1` are not expanded.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
	/// The pattern to match.
	pub pattern: Regex,

	/// The literal replacement text.
	pub replacement: String,
}

impl SubstitutionRule {
	/// Compile a rule from a pattern string and a literal replacement.
	pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
		let pattern = compile_regex(pattern)?;
		Ok(SubstitutionRule {
			pattern,
			replacement: replacement.into(),
		})
	}

	/// Build a rule that matches `needle` verbatim.
	pub fn literal(needle: &str, replacement: impl Into<String>) -> Result<Self> {
		Self::new(&regex::escape(needle), replacement)
	}

	/// Replace every non-overlapping match, returning the new text and the match count.
	pub fn apply(&self, input: &str) -> (String, usize) {
		let mut count = 0;
		// Closure results are inserted as-is, so `$` is never expanded.
		let output = self
			.pattern
			.replace_all(input, |_: &Captures<'_>| {
				count += 1;
				self.replacement.as_str()
			})
			.into_owned();
		(output, count)
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| FixError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

/// Apply rules in order, each one seeing the output of the previous.
///
/// Performs no I/O.
pub fn apply_rules(content: &str, rules: &[SubstitutionRule]) -> String {
	apply_rules_counted(content, rules).0
}

/// Like [`apply_rules`], also returning how many replacements each rule made.
pub fn apply_rules_counted(content: &str, rules: &[SubstitutionRule]) -> (String, Vec<usize>) {
	let mut current = content.to_string();
	let mut counts = Vec::with_capacity(rules.len());

	for (i, rule) in rules.iter().enumerate() {
		let (next, count) = rule.apply(&current);
		debug!(rule = i + 1, pattern = %rule.pattern, replaced = count, "applied rule");
		counts.push(count);
		current = next;
	}

	(current, counts)
}
