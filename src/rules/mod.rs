//! Substitution rules for fix-server.
//!
//! This module handles:
//! - Compiling (pattern, replacement) pairs
//! - The built-in conditional fix-up rules
//! - Applying an ordered rule list to text without touching the filesystem

pub mod builtin;
pub mod substitution;

pub use builtin::{
	DEFAULT_SUBJECT, builtin_rules, corrected_conditional, development_only_conditional,
	malformed_conditional,
};
pub use substitution::{SubstitutionRule, apply_rules, apply_rules_counted};
