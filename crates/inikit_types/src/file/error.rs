//! Error types for INI parsing, validation and persistence.

use std::fmt::{self, Formatter};

use thiserror::Error;

/// Reason a line of INI text was rejected by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
	/// A `[` was never closed by `]` on the same line
	#[error("unterminated section header")]
	UnterminatedSection,

	/// A section header contained a forbidden character
	#[error("invalid character {0:?} in section name")]
	InvalidSectionChar(char),

	/// `[]`
	#[error("empty section name")]
	EmptySectionName,

	/// A key was not followed by `=` before the end of the line
	#[error("unterminated key, expected '='")]
	UnterminatedKey,

	/// Whitespace inside a key was followed by something other than `=`
	#[error("invalid character {0:?} after key, expected '='")]
	InvalidKeyChar(char),

	/// A key/value line appeared before any section header
	#[error("key defined outside of a section")]
	KeyOutsideSection,

	/// A quoted value was not closed before the end of the line
	#[error("unterminated quoted value")]
	UnterminatedQuote,

	/// A backslash inside a quoted value was followed by an unknown character
	#[error("invalid escape sequence '\\{0}'")]
	InvalidEscape(char),

	/// Something other than whitespace or a comment followed a complete construct
	#[error("unexpected character {0:?}")]
	UnexpectedChar(char),
}

/// Which kind of name failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
	/// A section name
	Section,
	/// A key name
	Key,
	/// A value
	Value,
}

impl fmt::Display for NameKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Section => write!(f, "section name"),
			Self::Key => write!(f, "key name"),
			Self::Value => write!(f, "value"),
		}
	}
}

/// Reason a section name, key name or value was refused by a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidName {
	/// Names must contain at least one character
	#[error("must not be empty")]
	Empty,

	/// Whitespace (including line breaks) is not allowed in names
	#[error("must not contain whitespace")]
	Whitespace,

	/// A character that has a meaning in the file grammar
	#[error("must not contain {0:?}")]
	Reserved(char),

	/// Key names starting with `[` would be read back as a section header
	#[error("must not start with '['")]
	LeadingBracket,

	/// Control characters other than tab, CR and LF
	#[error("must not contain control character U+{0:04X}")]
	ControlChar(u32),
}

/// Errors that can occur when reading, modifying or writing INI documents
#[derive(Debug, Error)]
pub enum IniError {
	/// Input text does not follow the INI grammar
	#[error("Format error on line {line}: {reason} (line: {text:?})")]
	Format {
		/// 1-based line number of the offending line
		line: usize,
		/// Raw text of the offending line, without its terminator
		text: String,
		/// What was wrong with it
		reason: SyntaxError,
	},

	/// A write supplied an illegal section name, key name or value
	#[error("Invalid {target} {name:?}: {reason}")]
	Validation {
		/// What was being validated
		target: NameKind,
		/// The rejected input
		name: String,
		/// Why it was rejected
		reason: InvalidName,
	},

	/// Input bytes could not be decoded as text
	#[error("Invalid encoding: input is not valid {encoding}")]
	Encoding {
		/// Name of the encoding that was attempted
		encoding: &'static str,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl IniError {
	/// Creates a format error for the given line
	pub fn format(line: usize, text: impl Into<String>, reason: SyntaxError) -> Self {
		Self::Format {
			line,
			text: text.into(),
			reason,
		}
	}

	/// Creates a validation error
	pub fn validation(target: NameKind, name: impl Into<String>, reason: InvalidName) -> Self {
		Self::Validation {
			target,
			name: name.into(),
			reason,
		}
	}

	/// Returns the 1-based line number for format errors
	pub fn line(&self) -> Option<usize> {
		match self {
			Self::Format {
				line,
				..
			} => Some(*line),
			_ => None,
		}
	}
}
