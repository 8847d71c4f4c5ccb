use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use fix_server::config::{Overrides, load_config, resolve_config};
use fix_server::patcher::Patcher;

#[derive(Parser)]
#[command(name = "fix-server")]
#[command(
	author,
	version,
	about = "Repair malformed NODE_ENV conditionals in server.js"
)]
struct Cli {
	/// File to patch (default: server.js in the current directory)
	#[arg(long, value_name = "PATH")]
	target: Option<PathBuf>,

	/// Expression compared against "development"/"production"
	#[arg(long, value_name = "EXPR")]
	subject: Option<String>,

	/// TOML file with target, subject and extra rules
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Increase log verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

/// Log to stderr so stdout only carries the success line.
fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let loaded = cli
		.config
		.as_deref()
		.map(|path| {
			load_config(&cwd.join(path))
				.with_context(|| format!("Failed to load configuration: {}", path.display()))
		})
		.transpose()?;

	let overrides = Overrides {
		target: cli.target,
		subject: cli.subject,
	};
	let config = resolve_config(&cwd, loaded.as_ref(), &overrides)
		.context("Failed to compile substitution rules")?;

	let patcher = Patcher::new(config);
	let report = patcher
		.run()
		.with_context(|| format!("Failed to patch {}", patcher.target().display()))?;

	println!("✅ {} fixed successfully!", report.file_name());
	Ok(ExitCode::SUCCESS)
}
