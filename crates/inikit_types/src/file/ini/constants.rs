//! Characters with a meaning in the INI grammar.

/// Opens a section header
pub const SECTION_OPEN: char = '[';

/// Closes a section header
pub const SECTION_CLOSE: char = ']';

/// Separates a key from its value
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Starts a comment that runs to the end of the line
pub const COMMENT: char = ';';

/// Delimits a quoted value
pub const QUOTE: char = '"';

/// Starts an escape sequence inside a quoted value
pub const ESCAPE: char = '\\';

/// Returns the literal character for an escape sequence `\c`, if `c` is valid
pub const fn unescape(c: char) -> Option<char> {
	match c {
		't' => Some('\t'),
		'n' => Some('\n'),
		'r' => Some('\r'),
		'"' => Some('"'),
		'\\' => Some('\\'),
		_ => None,
	}
}

/// Returns the escape letter for a character that must be escaped in a quoted value
pub const fn escape(c: char) -> Option<char> {
	match c {
		'\t' => Some('t'),
		'\n' => Some('n'),
		'\r' => Some('r'),
		'"' => Some('"'),
		'\\' => Some('\\'),
		_ => None,
	}
}

/// Whitespace as understood by the grammar; line breaks are handled separately
pub fn is_blank(c: char) -> bool {
	c.is_whitespace() && !is_line_break(c)
}

/// `\n` or `\r`
pub const fn is_line_break(c: char) -> bool {
	matches!(c, '\n' | '\r')
}
