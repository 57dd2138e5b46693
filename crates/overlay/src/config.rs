//! Highlight configuration.
//!
//! Loaded from TOML; every key is optional and falls back to the defaults
//! below. Colors are `#rrggbb` strings.
//!
//! ```toml
//! highlight_fill = "#008000"
//! show_notification = false
//!
//! [mode_colors]
//! target = "#ff0000"
//! ```

use std::path::{Path, PathBuf};

use seekmark_primitives::Color;
use serde::Deserialize;

use crate::host::HighlightSettings;
use crate::query::InteractionMode;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or an invalid value.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Colors and flags for search highlights.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
	/// Background of highlighted matches.
	pub highlight_fill: Color,
	/// Outline drawn over each highlighted match.
	pub tag_outline: Color,
	/// Outline around the word a target-mode jump would select.
	pub target_outline: Color,
	/// Whether to announce match counts.
	pub show_notification: bool,
	pub mode_colors: ModeColors,
}

/// Accent color per interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModeColors {
	pub jump: Color,
	pub jump_end: Color,
	pub target: Color,
	pub declaration: Color,
}

impl Default for HighlightConfig {
	fn default() -> Self {
		Self {
			highlight_fill: Color::rgb(0x00, 0x80, 0x00),
			tag_outline: Color::rgb(0xff, 0xff, 0x00),
			target_outline: Color::rgb(0xff, 0x00, 0x00),
			show_notification: true,
			mode_colors: ModeColors::default(),
		}
	}
}

impl Default for ModeColors {
	fn default() -> Self {
		Self {
			jump: Color::WHITE,
			jump_end: Color::rgb(0x33, 0xe7, 0x8a),
			target: Color::rgb(0xff, 0x00, 0x00),
			declaration: Color::rgb(0x6f, 0xc5, 0xff),
		}
	}
}

impl ModeColors {
	pub fn get(&self, mode: InteractionMode) -> Color {
		match mode {
			InteractionMode::Jump => self.jump,
			InteractionMode::JumpEnd => self.jump_end,
			InteractionMode::Target => self.target,
			InteractionMode::Declaration => self.declaration,
		}
	}
}

impl HighlightConfig {
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), "Loaded highlight config");
		Ok(config)
	}
}

impl HighlightSettings for HighlightConfig {
	fn highlight_fill(&self) -> Color {
		self.highlight_fill
	}

	fn tag_outline(&self) -> Color {
		self.tag_outline
	}

	fn target_outline(&self) -> Color {
		self.target_outline
	}

	fn mode_accent(&self, mode: InteractionMode) -> Color {
		self.mode_colors.get(mode)
	}

	fn show_notification(&self) -> bool {
		self.show_notification
	}
}
