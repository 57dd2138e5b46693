//! CLI schema for the seekmark binary.

use std::path::PathBuf;

use clap::Parser;
use seekmark_overlay::{InteractionMode, Query, QueryError};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "seekmark")]
#[command(about = "Highlight search matches across files and print the painted overlays")]
#[command(version)]
pub struct Cli {
	/// Text to search for
	pub query: String,

	/// Files to search; each one becomes a surface
	#[arg(required = true, value_name = "FILE")]
	pub files: Vec<PathBuf>,

	/// Treat QUERY as a regular expression
	#[arg(long, short = 'e')]
	pub regex: bool,

	/// Render in target mode (outline the word a jump would select)
	#[arg(long, short = 't')]
	pub target: bool,

	/// Highlight configuration file (TOML)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Do not print the match-count notification
	#[arg(long)]
	pub no_notification: bool,

	/// Soft-wrap lines at N columns
	#[arg(long, value_name = "N")]
	pub wrap: Option<usize>,

	/// Log filter directive, e.g. `seekmark_overlay=debug` (overrides RUST_LOG)
	#[arg(long, value_name = "FILTER")]
	pub log: Option<String>,
}

impl Cli {
	pub fn query(&self) -> Result<Query, QueryError> {
		if self.regex {
			Query::regex(&self.query)
		} else {
			Query::literal(&self.query)
		}
	}

	pub fn mode(&self) -> InteractionMode {
		if self.target {
			InteractionMode::Target
		} else {
			InteractionMode::Jump
		}
	}
}
