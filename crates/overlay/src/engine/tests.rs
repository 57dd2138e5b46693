use pretty_assertions::assert_eq;
use seekmark_primitives::Span;

use super::*;
use crate::error::SurfaceError;
use crate::headless::{RecordingCanvas, Workspace, paint_surface};

fn spans(ws: &Workspace, id: SurfaceId) -> Vec<(Span, RenderStrategy)> {
	let mut out: Vec<_> = ws
		.get(id)
		.unwrap()
		.overlays()
		.map(|(_, spec)| (spec.span, spec.strategy))
		.collect();
	out.sort_by_key(|(span, _)| *span);
	out
}

fn match_set(entries: &[(SurfaceId, &[CharIdx])]) -> MatchSet {
	entries.iter().map(|(id, offsets)| (*id, offsets.to_vec())).collect()
}

#[test]
fn literal_matches_get_filled_overlays() {
	let mut ws = Workspace::default();
	let a = ws.open("the cat, a cat");
	let b = ws.open("catalog");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	let report = hl.render(
		&mut ws,
		&match_set(&[(a, &[4, 11]), (b, &[0])]),
		&query,
		InteractionMode::Jump,
	);

	assert!(report.is_clean());
	assert_eq!(report.surfaces_reconciled, 2);
	assert_eq!(report.overlays_added, 3);
	assert_eq!(
		spans(&ws, a),
		vec![
			(Span::new(4, 7), RenderStrategy::Filled),
			(Span::new(11, 14), RenderStrategy::Filled),
		]
	);
	assert_eq!(spans(&ws, b), vec![(Span::new(0, 3), RenderStrategy::Filled)]);
}

#[test]
fn target_mode_outlines_only_word_starts() {
	let mut ws = Workspace::default();
	// offset 3 is mid-word ("concat"), offset 10 is whitespace
	let a = ws.open("concat  x   y");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	hl.render(&mut ws, &match_set(&[(a, &[3, 10])]), &query, InteractionMode::Target);
	assert!(spans(&ws, a).iter().all(|(_, s)| *s == RenderStrategy::FilledWithOutline));

	let mut canvas = RecordingCanvas::default();
	let config = ws.config().clone();
	paint_surface(ws.get(a).unwrap(), &mut canvas, &config);

	let word_outlines: Vec<_> = canvas
		.strokes()
		.filter(|(_, color)| *color == config.target_outline)
		.collect();
	assert_eq!(word_outlines.len(), 1);
	// "concat" spans cells 0..6, widened by 1 left and 2 right
	assert_eq!(word_outlines[0].0.x, -1);
	assert_eq!(word_outlines[0].0.width, 6 * 8 + 3);
}

#[test]
fn regex_overrides_target_mode() {
	let mut ws = Workspace::default();
	let a = ws.open("a1 b22 c333");
	let mut hl = Highlighter::new();
	let query = Query::regex(r"\d+").unwrap();

	hl.render(&mut ws, &match_set(&[(a, &[1, 4, 8])]), &query, InteractionMode::Target);
	assert_eq!(
		spans(&ws, a),
		vec![
			(Span::new(1, 2), RenderStrategy::RegexSingle),
			(Span::new(4, 6), RenderStrategy::RegexSingle),
			(Span::new(8, 11), RenderStrategy::RegexSingle),
		]
	);
}

#[test]
fn absent_surfaces_are_pruned() {
	let mut ws = Workspace::default();
	let a = ws.open("cat cat");
	let b = ws.open("cat");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	hl.render(&mut ws, &match_set(&[(a, &[0, 4])]), &query, InteractionMode::Jump);
	let report = hl.render(&mut ws, &match_set(&[(b, &[0])]), &query, InteractionMode::Jump);

	assert_eq!(report.surfaces_pruned, 1);
	assert_eq!(ws.overlay_count(a), 0);
	assert_eq!(ws.overlay_count(b), 1);
	assert!(!hl.state().highlights().is_tracked(a));
}

#[test]
fn repeated_render_is_stable() {
	let mut ws = Workspace::default();
	let a = ws.open("ab ab ab");
	let mut hl = Highlighter::new();
	let query = Query::literal("ab").unwrap();
	let matches = match_set(&[(a, &[0, 3, 6])]);

	hl.render(&mut ws, &matches, &query, InteractionMode::Jump);
	let first = spans(&ws, a);
	let report = hl.render(&mut ws, &matches, &query, InteractionMode::Jump);

	assert_eq!(spans(&ws, a), first);
	assert_eq!(report.overlays_removed, 3);
	assert_eq!(ws.overlay_count(a), 3);
}

#[test]
fn large_reconcile_runs_in_bulk_mode() {
	let text = "x".repeat(2000);
	let mut ws = Workspace::default();
	let a = ws.open(&text);
	let mut hl = Highlighter::new();
	let query = Query::literal("x").unwrap();

	let small: Vec<CharIdx> = (0..600).collect();
	let report = hl.render(&mut ws, &match_set(&[(a, &small[..])]), &query, InteractionMode::Jump);
	assert_eq!(report.surfaces_batched, 0);

	// 600 previous + 401 new crosses the threshold
	let large: Vec<CharIdx> = (0..401).collect();
	let before = ws.get(a).unwrap().layout_invalidations();
	let report = hl.render(&mut ws, &match_set(&[(a, &large[..])]), &query, InteractionMode::Jump);

	assert_eq!(report.surfaces_batched, 1);
	let surface = ws.get(a).unwrap();
	assert!(!surface.is_suspended());
	assert_eq!(surface.layout_invalidations() - before, 1);
	assert_eq!(surface.overlay_count(), 401);
}

#[test]
fn failing_suspend_falls_back_to_unbatched_reconcile() {
	let text = "y".repeat(1200);
	let mut ws = Workspace::default();
	let a = ws.open(&text);
	let b = ws.open("yy");
	ws.get_mut(a).unwrap().fail_suspend(SurfaceError::Host("locked".into()));
	let mut hl = Highlighter::new();
	let query = Query::literal("y").unwrap();
	let all: Vec<CharIdx> = (0..1200).collect();

	let report = hl.render(&mut ws, &match_set(&[(a, &all[..]), (b, &[0, 1])]), &query, InteractionMode::Jump);

	assert_eq!(report.surfaces_reconciled, 2);
	assert_eq!(report.surfaces_batched, 0);
	assert_eq!(report.failures.len(), 1);
	assert!(matches!(
		report.failures[0],
		(id, HighlightError::BulkSuspend { .. }) if id == a
	));
	assert_eq!(ws.overlay_count(a), 1200);
	assert_eq!(ws.overlay_count(b), 2);
	assert_eq!(ws.get(a).unwrap().resume_calls(), 0);
}

#[test]
fn failing_suspend_does_not_leave_previous_query_on_screen() {
	let text = "q".repeat(1200);
	let mut ws = Workspace::default();
	let a = ws.open(&text);
	let mut hl = Highlighter::new();

	let single: Vec<CharIdx> = (0..600).collect();
	hl.render(
		&mut ws,
		&match_set(&[(a, &single[..])]),
		&Query::literal("q").unwrap(),
		InteractionMode::Jump,
	);
	assert_eq!(ws.overlay_count(a), 600);

	ws.get_mut(a).unwrap().fail_suspend(SurfaceError::Host("busy".into()));
	let pairs: Vec<CharIdx> = (0..500).map(|i| i * 2).collect();
	let report = hl.render(
		&mut ws,
		&match_set(&[(a, &pairs[..])]),
		&Query::literal("qq").unwrap(),
		InteractionMode::Jump,
	);

	assert_eq!(report.failures.len(), 1);
	assert_eq!(report.overlays_removed, 600);
	assert_eq!(report.overlays_added, 500);
	assert_eq!(ws.overlay_count(a), 500);
	assert_eq!(hl.state().highlights().lookup(a).len(), 500);
	assert!(spans(&ws, a).iter().all(|(span, _)| span.len() == 2));
}

#[test]
fn resume_failure_is_reported_but_overlays_stay() {
	let text = "z".repeat(1100);
	let mut ws = Workspace::default();
	let a = ws.open(&text);
	ws.get_mut(a).unwrap().fail_resume(SurfaceError::Host("stuck".into()));
	let mut hl = Highlighter::new();
	let query = Query::literal("z").unwrap();
	let all: Vec<CharIdx> = (0..1100).collect();

	let report = hl.render(&mut ws, &match_set(&[(a, &all[..])]), &query, InteractionMode::Jump);

	assert_eq!(report.failures.len(), 1);
	assert!(matches!(report.failures[0].1, HighlightError::BulkResume { .. }));
	assert_eq!(ws.get(a).unwrap().resume_calls(), 1);
	assert_eq!(ws.overlay_count(a), 1100);
	assert_eq!(hl.state().highlights().lookup(a).len(), 1100);
}

#[test]
fn resume_failure_still_counts_the_reconcile() {
	let text = "z".repeat(1100);
	let mut ws = Workspace::default();
	let a = ws.open(&text);
	let mut hl = Highlighter::new();
	let query = Query::literal("z").unwrap();
	let first: Vec<CharIdx> = (0..300).collect();
	hl.render(&mut ws, &match_set(&[(a, &first[..])]), &query, InteractionMode::Jump);

	ws.get_mut(a).unwrap().fail_resume(SurfaceError::Host("stuck".into()));
	let all: Vec<CharIdx> = (0..1100).collect();
	let report = hl.render(&mut ws, &match_set(&[(a, &all[..])]), &query, InteractionMode::Jump);

	assert_eq!(report.surfaces_reconciled, 1);
	assert_eq!(report.surfaces_batched, 1);
	assert_eq!(report.overlays_added, 1100);
	assert_eq!(report.overlays_removed, 300);
	assert_eq!(report.failures.len(), 1);
}

#[test]
fn closed_surface_in_match_set_is_reported_and_forgotten() {
	let mut ws = Workspace::default();
	let a = ws.open("cat");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();
	let matches = match_set(&[(a, &[0])]);

	hl.render(&mut ws, &matches, &query, InteractionMode::Jump);
	ws.close(a);
	let report = hl.render(&mut ws, &matches, &query, InteractionMode::Jump);

	assert_eq!(report.failures, vec![(a, HighlightError::MissingSurface(a))]);
	assert!(hl.state().highlights().is_empty());
}

#[test]
fn out_of_range_offsets_are_clamped() {
	let mut ws = Workspace::default();
	let a = ws.open("cat");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	let report = hl.render(&mut ws, &match_set(&[(a, &[0, 50])]), &query, InteractionMode::Jump);

	assert!(report.is_clean());
	assert_eq!(report.offsets_clamped, 1);
	assert_eq!(
		spans(&ws, a),
		vec![
			(Span::new(0, 3), RenderStrategy::Filled),
			(Span::new(3, 3), RenderStrategy::Filled),
		]
	);
}

#[test]
fn notification_summarizes_and_replaces_previous() {
	let mut ws = Workspace::default();
	let a = ws.open("cat cat");
	let b = ws.open("cat");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	hl.render(&mut ws, &match_set(&[(a, &[0, 4]), (b, &[0])]), &query, InteractionMode::Target);
	hl.render(&mut ws, &match_set(&[(a, &[0])]), &query, InteractionMode::Jump);

	let shown = ws.notifications();
	assert_eq!(shown.len(), 2);
	assert_eq!(shown[0].text, "3 matches in 2 surfaces");
	assert_eq!(shown[0].accent, ws.config().mode_colors.target);
	assert!(shown[0].hidden);
	assert_eq!(shown[1].text, "1 match");
	assert_eq!(shown[1].surfaces, vec![a]);
	assert_eq!(ws.visible_notifications().count(), 1);
}

#[test]
fn no_notification_without_matches_or_when_disabled() {
	let mut ws = Workspace::default();
	let a = ws.open("cat");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	hl.render(&mut ws, &match_set(&[(a, &[0])]), &query, InteractionMode::Jump);
	hl.render(&mut ws, &match_set(&[(a, &[])]), &query, InteractionMode::Jump);
	assert_eq!(ws.visible_notifications().count(), 0);

	ws.config_mut().show_notification = false;
	hl.render(&mut ws, &match_set(&[(a, &[0])]), &query, InteractionMode::Jump);
	assert_eq!(ws.notifications().len(), 1);
	assert_eq!(hl.state().notification(), None);
}

#[test]
fn reset_clears_everything_and_is_idempotent() {
	let mut ws = Workspace::default();
	let a = ws.open("cat");
	let b = ws.open("cat");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	hl.render(&mut ws, &match_set(&[(a, &[0]), (b, &[0])]), &query, InteractionMode::Jump);
	hl.reset(&mut ws);

	assert_eq!(ws.overlay_count(a), 0);
	assert_eq!(ws.overlay_count(b), 0);
	assert!(hl.state().highlights().is_empty());
	assert_eq!(ws.visible_notifications().count(), 0);

	hl.reset(&mut ws);
	assert!(hl.state().highlights().is_empty());
}

#[test]
fn reset_survives_disposed_surfaces() {
	let mut ws = Workspace::default();
	let a = ws.open("cat");
	let b = ws.open("cat");
	let mut hl = Highlighter::new();
	let query = Query::literal("cat").unwrap();

	hl.render(&mut ws, &match_set(&[(a, &[0]), (b, &[0])]), &query, InteractionMode::Jump);
	ws.get_mut(a).unwrap().dispose();
	hl.reset(&mut ws);

	assert!(hl.state().highlights().is_empty());
	assert_eq!(ws.overlay_count(b), 0);
}
