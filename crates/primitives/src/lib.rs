//! Core value types for search highlighting: character spans, pixel geometry,
//! colors, and word classification.

/// RGB colors and hex parsing.
pub mod color;
/// Integer pixel geometry.
pub mod geometry;
/// Character offsets and half-open spans.
pub mod span;
/// Word-constituent classification.
pub mod word;

pub use color::{Color, ParseColorError};
pub use geometry::{Point, Rect};
pub use ropey::{Rope, RopeSlice};
pub use span::{CharIdx, CharLen, Span};
pub use word::{is_word_char, word_bounds};
