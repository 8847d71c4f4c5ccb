use crate::error::Result;
use crate::rules::substitution::SubstitutionRule;

/// Expression compared against the environment names when none is configured.
pub const DEFAULT_SUBJECT: &str = "process.env.NODE_ENV";

/// The broken conditional: opening quote misplaced, second name unquoted.
///
/// The space after the first quote is part of the match and is not normalised.
pub fn malformed_conditional(subject: &str) -> String {
	format!(r#"if ({subject} === " development || {subject} === production) {{"#)
}

/// The development-only conditional that should also accept production.
pub fn development_only_conditional(subject: &str) -> String {
	format!(r#"if ({subject} === "development") {{"#)
}

/// The two-way conditional both rules rewrite to.
pub fn corrected_conditional(subject: &str) -> String {
	format!(r#"if ({subject} === "development" || {subject} === "production") {{"#)
}

/// The fixed rule pair for `subject`, in application order.
pub fn builtin_rules(subject: &str) -> Result<Vec<SubstitutionRule>> {
	let corrected = corrected_conditional(subject);
	Ok(vec![
		SubstitutionRule::literal(&malformed_conditional(subject), corrected.clone())?,
		SubstitutionRule::literal(&development_only_conditional(subject), corrected)?,
	])
}
