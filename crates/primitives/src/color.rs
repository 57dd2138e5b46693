use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Self = Self::rgb(0, 0, 0);
	pub const WHITE: Self = Self::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

/// Error returned when a string is not a `#rrggbb` or `#rgb` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}' (expected #rrggbb or #rgb)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
	type Err = ParseColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let err = || ParseColorError(s.to_string());
		let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
		if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(err());
		}

		let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
		match hex.len() {
			6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
			3 => {
				// #abc expands to #aabbcc
				let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
				Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
			}
			_ => Err(err()),
		}
	}
}

impl TryFrom<String> for Color {
	type Error = ParseColorError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.to_string()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}
