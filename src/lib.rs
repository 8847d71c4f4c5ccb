//! fix-server - one-shot patcher for malformed environment conditionals.
//!
//! This library provides:
//! - Ordered, literal-replacement regex rules and a pure `apply_rules`
//! - The built-in `development`/`production` conditional fix-ups
//! - Optional TOML configuration for the target path, subject and extra rules
//! - A thin read/transform/overwrite shell around the rules
//!
//! # Example
//!
//! ```no_run
//! use fix_server::config::{Overrides, resolve_config};
//! use fix_server::patcher::Patcher;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let config = resolve_config(&cwd, None, &Overrides::default()).unwrap();
//! let report = Patcher::new(config).run().unwrap();
//!
//! println!("{} replacements in {}", report.total_replacements(), report.file_name());
//! ```

pub mod config;
pub mod error;
pub mod patcher;
pub mod rules;

pub use error::{FixError, Result};
