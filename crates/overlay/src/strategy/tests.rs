use pretty_assertions::assert_eq;
use seekmark_primitives::{Color, Rect, Span};

use super::RenderStrategy;
use crate::config::HighlightConfig;
use crate::headless::{DrawCommand, RecordingCanvas, TextSurface};
use crate::host::SurfaceId;

fn surface(text: &str) -> TextSurface {
	TextSurface::new(SurfaceId(1), text).with_cell(10, 20)
}

fn paint(strategy: RenderStrategy, text: &str, span: Span) -> (Vec<DrawCommand>, HighlightConfig) {
	let s = surface(text);
	let config = HighlightConfig::default();
	let mut canvas = RecordingCanvas::default();
	strategy.paint(&s, span, &mut canvas, &config);
	(canvas.commands, config)
}

#[test]
fn filled_draws_fill_then_tag_outline() {
	let (cmds, config) = paint(RenderStrategy::Filled, "the cat sat", Span::new(4, 7));
	let rect = Rect::new(40, 0, 30, 20);
	assert_eq!(
		cmds,
		vec![
			DrawCommand::Fill {
				rect,
				color: config.highlight_fill
			},
			DrawCommand::Stroke {
				rect,
				color: config.tag_outline
			},
		]
	);
}

#[test]
fn target_outline_covers_containing_word() {
	// match "cat" inside "concatenate"
	let (cmds, config) = paint(
		RenderStrategy::FilledWithOutline,
		"x concatenate",
		Span::new(5, 8),
	);
	assert_eq!(cmds.len(), 3);
	assert_eq!(
		cmds[2],
		DrawCommand::Stroke {
			rect: Rect::new(19, 0, 113, 20),
			color: config.target_outline
		}
	);
}

#[test]
fn target_outline_skipped_on_punctuation() {
	let (cmds, _) = paint(RenderStrategy::FilledWithOutline, "a, b", Span::new(1, 2));
	assert_eq!(cmds.len(), 2);
	assert!(matches!(cmds[0], DrawCommand::Fill { .. }));
	assert!(matches!(cmds[1], DrawCommand::Stroke { .. }));
}

#[test]
fn target_outline_skipped_on_whitespace() {
	let (cmds, _) = paint(RenderStrategy::FilledWithOutline, "a  b", Span::new(1, 2));
	assert_eq!(cmds.len(), 2);
}

#[test]
fn target_outline_may_start_left_of_origin() {
	let (cmds, _) = paint(RenderStrategy::FilledWithOutline, "word", Span::new(0, 2));
	let DrawCommand::Stroke { rect, .. } = cmds[2] else {
		panic!("expected word outline");
	};
	assert_eq!(rect, Rect::new(-1, 0, 43, 20));
}

#[test]
fn regex_single_marks_one_glyph() {
	let (cmds, config) = paint(RenderStrategy::RegexSingle, "foo bar", Span::new(4, 7));
	assert_eq!(
		cmds,
		vec![DrawCommand::Fill {
			rect: Rect::new(40, 0, 10, 20),
			color: config.highlight_fill
		}]
	);
}

#[test]
fn regex_single_on_newline_uses_space_width() {
	let (cmds, _) = paint(RenderStrategy::RegexSingle, "ab\ncd", Span::new(2, 4));
	assert_eq!(
		cmds,
		vec![DrawCommand::Fill {
			rect: Rect::new(20, 0, 10, 20),
			color: HighlightConfig::default().highlight_fill
		}]
	);
}

#[test]
fn colors_are_read_at_paint_time() {
	let s = surface("abc");
	let mut config = HighlightConfig::default();
	let mut canvas = RecordingCanvas::default();

	RenderStrategy::Filled.paint(&s, Span::new(0, 1), &mut canvas, &config);
	config.highlight_fill = Color::rgb(1, 2, 3);
	RenderStrategy::Filled.paint(&s, Span::new(0, 1), &mut canvas, &config);

	let fills: Vec<Color> = canvas.fills().map(|(_, c)| c).collect();
	assert_eq!(fills, vec![HighlightConfig::default().highlight_fill, Color::rgb(1, 2, 3)]);
}
