//! Name and value checks applied before a document is mutated.

use super::constants::{COMMENT, KEY_VALUE_SEPARATOR, SECTION_CLOSE, SECTION_OPEN};
use crate::file::error::{IniError, InvalidName, NameKind};

/// Checks that `name` can be written as `[name]` and read back unchanged
pub fn section_name(name: &str) -> Result<(), IniError> {
	check_name(name, NameKind::Section, &[COMMENT, SECTION_CLOSE])
}

/// Checks that `name` can be written as `name = ...` and read back unchanged
pub fn key_name(name: &str) -> Result<(), IniError> {
	check_name(name, NameKind::Key, &[COMMENT, KEY_VALUE_SEPARATOR])?;

	if name.starts_with(SECTION_OPEN) {
		return Err(IniError::validation(NameKind::Key, name, InvalidName::LeadingBracket));
	}

	Ok(())
}

/// Checks that `value` holds no control characters besides tab, CR and LF
pub fn value(value: &str) -> Result<(), IniError> {
	match value.chars().find(|&c| c.is_control() && !matches!(c, '\t' | '\n' | '\r')) {
		Some(c) => Err(IniError::validation(
			NameKind::Value,
			value,
			InvalidName::ControlChar(c as u32),
		)),
		None => Ok(()),
	}
}

fn check_name(name: &str, kind: NameKind, reserved: &[char]) -> Result<(), IniError> {
	if name.is_empty() {
		return Err(IniError::validation(kind, name, InvalidName::Empty));
	}

	for c in name.chars() {
		let reason = if c.is_whitespace() {
			InvalidName::Whitespace
		} else if reserved.contains(&c) {
			InvalidName::Reserved(c)
		} else if c.is_control() {
			InvalidName::ControlChar(c as u32)
		} else {
			continue;
		};

		return Err(IniError::validation(kind, name, reason));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reason(result: Result<(), IniError>) -> InvalidName {
		match result {
			Err(IniError::Validation {
				reason,
				..
			}) => reason,
			other => panic!("expected validation error, got {:?}", other),
		}
	}

	#[test]
	fn test_section_names() {
		assert!(section_name("General").is_ok());
		assert!(section_name("a.b-c_d[1").is_ok());
		assert_eq!(reason(section_name("")), InvalidName::Empty);
		assert_eq!(reason(section_name("My Section")), InvalidName::Whitespace);
		assert_eq!(reason(section_name("A]")), InvalidName::Reserved(']'));
		assert_eq!(reason(section_name("A;B")), InvalidName::Reserved(';'));
		assert_eq!(reason(section_name("A\nB")), InvalidName::Whitespace);
	}

	#[test]
	fn test_key_names() {
		assert!(key_name("Key").is_ok());
		assert!(key_name("a]b").is_ok());
		assert_eq!(reason(key_name("")), InvalidName::Empty);
		assert_eq!(reason(key_name("a b")), InvalidName::Whitespace);
		assert_eq!(reason(key_name("a=b")), InvalidName::Reserved('='));
		assert_eq!(reason(key_name("[key")), InvalidName::LeadingBracket);
		assert_eq!(reason(key_name("k\u{7}")), InvalidName::ControlChar(7));
	}

	#[test]
	fn test_values() {
		assert!(value("").is_ok());
		assert!(value("  spaced ; \"quoted\" \\ ").is_ok());
		assert!(value("tab\tcr\rlf\n").is_ok());
		assert_eq!(reason(value("bell\u{7}")), InvalidName::ControlChar(7));
		assert_eq!(reason(value("nul\0")), InvalidName::ControlChar(0));
	}
}
