//! Serializer turning a [`Document`] back into INI text.
//!
//! Output is canonical: comments and blank lines from parsed input are not
//! kept, sections are separated by one blank line, and every entry is written
//! as `Key = Value`. Values that would not survive an unquoted round trip are
//! quoted and escaped.

use std::{
	fmt::{self, Formatter},
	io::{self, Write},
	path::Path,
};

use log::debug;
use serde::Serialize;

use super::constants::{COMMENT, ESCAPE, QUOTE, SECTION_CLOSE, SECTION_OPEN, escape};
use super::Document;
use crate::file::error::IniError;

/// Line terminator written after every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
	/// `\r\n`
	#[default]
	CrLf,
	/// `\n`
	Lf,
	/// `\r`
	Cr,
}

impl LineEnding {
	/// The terminator characters
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::CrLf => "\r\n",
			Self::Lf => "\n",
			Self::Cr => "\r",
		}
	}
}

impl fmt::Display for LineEnding {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::CrLf => write!(f, "CRLF"),
			Self::Lf => write!(f, "LF"),
			Self::Cr => write!(f, "CR"),
		}
	}
}

/// Returns `true` if `value` has to be quoted to be read back unchanged
fn needs_quotes(value: &str) -> bool {
	value.is_empty()
		|| value.starts_with(char::is_whitespace)
		|| value.ends_with(char::is_whitespace)
		|| value.chars().any(|c| matches!(c, COMMENT | QUOTE | ESCAPE) || c.is_control())
}

fn write_value<W: fmt::Write>(out: &mut W, value: &str) -> fmt::Result {
	if !needs_quotes(value) {
		return out.write_str(value);
	}

	out.write_char(QUOTE)?;
	for c in value.chars() {
		match escape(c) {
			Some(letter) => {
				out.write_char(ESCAPE)?;
				out.write_char(letter)?;
			}
			None => out.write_char(c)?,
		}
	}
	out.write_char(QUOTE)
}

fn write_document<W: fmt::Write>(out: &mut W, document: &Document) -> fmt::Result {
	let newline = document.line_ending().as_str();

	for (index, section) in document.iter().enumerate() {
		if index > 0 {
			out.write_str(newline)?;
		}

		write!(out, "{SECTION_OPEN}{}{SECTION_CLOSE}{newline}", section.name())?;

		for entry in section.entries() {
			for value in entry.values() {
				write!(out, "{} = ", entry.key())?;
				write_value(out, value)?;
				out.write_str(newline)?;
			}
		}
	}

	Ok(())
}

impl Document {
	/// Serializes the document to UTF-8 bytes (no byte order mark)
	pub fn to_bytes(&self) -> Vec<u8> {
		let text = self.to_string();
		debug!(
			"Serialized INI document: {} sections, {} bytes, {} line endings",
			self.section_count(),
			text.len(),
			self.line_ending()
		);
		text.into_bytes()
	}

	/// Writes the serialized document to any writer
	pub fn to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
		writer.write_all(&self.to_bytes())
	}

	/// Writes the serialized document to a file, replacing it
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IniError> {
		let path = path.as_ref();
		debug!("Saving INI file {}", path.display());
		std::fs::write(path, self.to_bytes())?;
		Ok(())
	}
}

impl fmt::Display for Document {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write_document(f, self)
	}
}

impl From<&Document> for Vec<u8> {
	fn from(document: &Document) -> Self {
		document.to_bytes()
	}
}

impl From<Document> for Vec<u8> {
	fn from(document: Document) -> Self {
		document.to_bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn quoted(value: &str) -> String {
		let mut out = String::new();
		write_value(&mut out, value).unwrap();
		out
	}

	#[test]
	fn test_plain_values_unquoted() {
		assert_eq!(quoted("value"), "value");
		assert_eq!(quoted("two words"), "two words");
		assert_eq!(quoted("a=b"), "a=b");
		assert_eq!(quoted("C:/path/[x]"), "C:/path/[x]");
	}

	#[test]
	fn test_values_needing_quotes() {
		assert_eq!(quoted(""), "\"\"");
		assert_eq!(quoted("  x  "), "\"  x  \"");
		assert_eq!(quoted("a;b"), "\"a;b\"");
		assert_eq!(quoted("say \"hi\""), "\"say \\\"hi\\\"\"");
		assert_eq!(quoted("C:\\dir"), "\"C:\\\\dir\"");
		assert_eq!(quoted("a\tb\r\nc"), "\"a\\tb\\r\\nc\"");
	}

	#[test]
	fn test_layout() {
		let mut doc = Document::with_line_ending(LineEnding::Lf);
		doc.set("First", "A", "1").unwrap();
		doc.set("First", "B", "two words").unwrap();
		doc.set("Second", "C", " padded").unwrap();

		assert_eq!(doc.to_string(), "[First]\nA = 1\nB = two words\n\n[Second]\nC = \" padded\"\n");
	}

	#[test]
	fn test_default_line_ending() {
		let mut doc = Document::new();
		doc.set("S", "K", "v").unwrap();
		assert_eq!(doc.to_bytes(), b"[S]\r\nK = v\r\n");
	}

	#[test]
	fn test_cr_line_ending() {
		let mut doc = Document::with_line_ending(LineEnding::Cr);
		doc.set("S", "K", "v").unwrap();
		doc.set("T", "K", "w").unwrap();
		assert_eq!(doc.to_string(), "[S]\rK = v\r\r[T]\rK = w\r");
	}

	#[test]
	fn test_multi_values_written_in_order() {
		let mut doc = Document::with_line_ending(LineEnding::Lf);
		doc.append("Paths", "Include", "a").unwrap();
		doc.append("Paths", "include", "b").unwrap();
		assert_eq!(doc.to_string(), "[Paths]\nInclude = a\nInclude = b\n");
	}

	#[test]
	fn test_empty_document() {
		assert!(Document::new().to_bytes().is_empty());
	}

	#[test]
	fn test_to_writer() {
		let mut doc = Document::with_line_ending(LineEnding::Lf);
		doc.set("S", "K", "v").unwrap();

		let mut buffer = Vec::new();
		doc.to_writer(&mut buffer).unwrap();
		assert_eq!(buffer, b"[S]\nK = v\n");
	}
}
