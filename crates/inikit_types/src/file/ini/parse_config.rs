//! Parse configuration for INI documents.
//!
//! This module provides the options that control how duplicate keys are
//! merged while reading, and which line terminator the resulting document
//! will use when it is written back out.

use serde::Serialize;

use super::LineEnding;

/// How repeated occurrences of a key within one section are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
	/// Later occurrences overwrite earlier ones; only the final value is kept
	#[default]
	LastWins,
	/// Every occurrence is kept in file order (multi-value keys)
	Append,
}

/// Configuration for parsing INI text.
///
/// # Presets
///
/// - `default()`: last-write-wins for duplicate keys, `\r\n` output terminator
/// - `multi_value()`: keeps every value of a repeated key
///
/// # Examples
///
/// ```
/// use inikit_types::file::ini::{Document, DuplicateKeys, LineEnding, ParseConfig};
///
/// let config = ParseConfig::new(DuplicateKeys::Append, LineEnding::Lf);
/// let doc = Document::parse_with(b"[A]\nK=1\nK=2\n", config).unwrap();
///
/// assert_eq!(doc.get_all("a", "k"), vec!["1", "2"]);
/// assert_eq!(doc.line_ending(), LineEnding::Lf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ParseConfig {
	/// What to do when a key appears more than once in a section
	pub duplicate_keys: DuplicateKeys,
	/// Line terminator assigned to the parsed document (never detected from input)
	pub line_ending: LineEnding,
}

impl ParseConfig {
	/// Create a new parse configuration.
	///
	/// # Arguments
	/// * `duplicate_keys` - Policy for repeated keys
	/// * `line_ending` - Terminator the parsed document will be saved with
	pub fn new(duplicate_keys: DuplicateKeys, line_ending: LineEnding) -> Self {
		Self {
			duplicate_keys,
			line_ending,
		}
	}

	/// Create a configuration that keeps every value of a repeated key.
	pub fn multi_value() -> Self {
		Self {
			duplicate_keys: DuplicateKeys::Append,
			..Self::default()
		}
	}
}
