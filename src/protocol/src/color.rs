use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
	#[error("color must start with '#': {0:?}")]
	MissingHash(String),
	#[error("color must have 3, 4, 6 or 8 hex digits: {0:?}")]
	BadLength(String),
	#[error("invalid hex digit in color: {0:?}")]
	BadDigit(String),
}

/// 8-bit straight-alpha color, written as css hex (`#f13401`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Rgba {
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	pub const BLACK: Self = Self::rgb(0, 0, 0);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 255 }
	}

	pub const fn with_alpha(mut self, a: u8) -> Self {
		self.a = a;
		self
	}

	pub fn to_array(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl FromStr for Rgba {
	type Err = ColorParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let hex = s
			.trim()
			.strip_prefix('#')
			.ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
		if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(ColorParseError::BadDigit(s.to_string()));
		}
		let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
		let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
		// short forms repeat each digit: #f0c == #ff00cc
		match hex.len() {
			3 => Ok(Self::rgb(digit(0) * 17, digit(1) * 17, digit(2) * 17)),
			4 => Ok(Self::rgb(digit(0) * 17, digit(1) * 17, digit(2) * 17)
				.with_alpha(digit(3) * 17)),
			6 => Ok(Self::rgb(pair(0), pair(2), pair(4))),
			8 => Ok(Self::rgb(pair(0), pair(2), pair(4)).with_alpha(pair(6))),
			_ => Err(ColorParseError::BadLength(s.to_string())),
		}
	}
}

impl TryFrom<String> for Rgba {
	type Error = ColorParseError;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		s.parse()
	}
}

impl From<Rgba> for String {
	fn from(c: Rgba) -> Self {
		c.to_string()
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
		if self.a != 255 {
			write!(f, "{:02x}", self.a)?;
		}
		Ok(())
	}
}
