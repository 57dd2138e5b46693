//! Seekmark command-line front end.
//!
//! Opens each file as a headless surface, highlights every match of the
//! query through the overlay engine, runs one paint cycle, and prints the
//! painted cells under the text.

mod annotate;
mod cli;
mod matches;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use seekmark_overlay::headless::{RecordingCanvas, TextSurface, Workspace, paint_surface};
use seekmark_overlay::{HighlightConfig, Highlighter, MatchSet, RenderReport};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.log.as_deref());

	let mut config = match &cli.config {
		Some(path) => HighlightConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => HighlightConfig::default(),
	};
	if cli.no_notification {
		config.show_notification = false;
	}
	let query = cli.query().with_context(|| format!("invalid query '{}'", cli.query))?;
	let mode = cli.mode();

	let mut workspace = Workspace::new(config);
	let mut surfaces = Vec::with_capacity(cli.files.len());
	let mut found = MatchSet::new();
	for path in &cli.files {
		let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
		let offsets = matches::find_matches(&text, &query);
		let id = workspace.open_with(|id| {
			let surface = TextSurface::new(id, &text);
			match cli.wrap {
				Some(columns) => surface.with_wrap(columns),
				None => surface,
			}
		});
		tracing::debug!(file = %path.display(), surface = %id, matches = offsets.len(), "Opened surface");
		if !offsets.is_empty() {
			found.insert(id, offsets);
		}
		surfaces.push((path, id));
	}

	let mut highlighter = Highlighter::new();
	let report = highlighter.render(&mut workspace, &found, &query, mode);

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	for (path, id) in &surfaces {
		let Some(surface) = workspace.get(*id) else {
			continue;
		};
		let mut canvas = RecordingCanvas::default();
		paint_surface(surface, &mut canvas, workspace.config());
		writeln!(out, "==> {} <==", path.display())?;
		write!(
			out,
			"{}",
			annotate::annotate(surface, &canvas.commands, workspace.config().target_outline)
		)?;
	}

	for notification in workspace.visible_notifications() {
		writeln!(out, "-- {} ({})", notification.text, notification.accent)?;
	}
	writeln!(out, "{}", describe(&report))?;
	for (id, error) in &report.failures {
		let name = surfaces
			.iter()
			.find(|(_, surface)| surface == id)
			.map_or_else(|| id.to_string(), |(path, _)| path.display().to_string());
		eprintln!("seekmark: {name}: {error}");
	}

	highlighter.reset(&mut workspace);
	Ok(())
}

/// One-line summary of a render.
fn describe(report: &RenderReport) -> String {
	let mut text = format!(
		"rendered {} overlays on {} surfaces",
		report.overlays_added, report.surfaces_reconciled
	);
	if report.surfaces_batched > 0 {
		text.push_str(&format!(", {} batched", report.surfaces_batched));
	}
	if report.offsets_clamped > 0 {
		text.push_str(&format!(", {} offsets clamped", report.offsets_clamped));
	}
	if !report.is_clean() {
		text.push_str(&format!(", {} failed", report.failures.len()));
	}
	text
}

/// Logs go to stderr so stdout stays the annotated text.
fn setup_tracing(directive: Option<&str>) {
	use tracing_subscriber::EnvFilter;

	let filter = match directive {
		Some(directive) => EnvFilter::new(directive),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
