//! Character-level state machine that turns INI text into a [`Document`].
//!
//! Every character is classified and fed to [`State::step`], which either moves
//! to the next state, asks the driver to commit a section header or a value,
//! or rejects the line. The driver owns line counting and the document under
//! construction, so the step function itself is pure.

use std::{
	borrow::Cow,
	io::Read,
	path::Path,
	str::FromStr,
};

use encoding_rs::{Encoding, UTF_8};
use log::{debug, trace};

use super::constants::{
	COMMENT, ESCAPE, KEY_VALUE_SEPARATOR, QUOTE, SECTION_CLOSE, SECTION_OPEN, is_blank, unescape,
};
use super::{Document, DuplicateKeys, ParseConfig};
use crate::file::error::{IniError, SyntaxError};

/// A classified input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
	Char(char),
	/// `\n`, `\r\n`, bare `\r`, or the end of input
	LineEnd,
}

/// Parser states, each carrying only its own accumulation buffers
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
	FirstCharInLine,
	SectionChar {
		name: String,
	},
	KeyChar {
		key: String,
	},
	KeyCharWhitespaceSuffix {
		key: String,
	},
	ValueCharPossibleWhitespace {
		key: String,
	},
	ValueChar {
		key: String,
		value: String,
	},
	QuotedValueChar {
		key: String,
		value: String,
	},
	QuotedValueEscape {
		key: String,
		value: String,
	},
	WhitespacePrefix,
	WhitespaceSuffix,
	Comment,
}

/// Something the driver has to apply to the document
#[derive(Debug, Clone, PartialEq, Eq)]
enum Commit {
	Section(String),
	Value {
		key: String,
		value: String,
	},
}

/// Outcome of consuming one input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
	Next(State),
	Commit(State, Commit),
}

fn commit_value(next: State, key: String, value: String) -> Step {
	Step::Commit(next, Commit::Value {
		key,
		value,
	})
}

fn trimmed(mut value: String) -> String {
	value.truncate(value.trim_end().len());
	value
}

impl State {
	fn step(self, input: Input) -> Result<Step, SyntaxError> {
		use Input::{Char, LineEnd};

		let next = match (self, input) {
			(Self::FirstCharInLine, LineEnd) => Self::FirstCharInLine,
			(Self::FirstCharInLine, Char(SECTION_OPEN)) => Self::SectionChar {
				name: String::new(),
			},
			(Self::FirstCharInLine, Char(COMMENT)) => Self::Comment,
			(Self::FirstCharInLine, Char(c)) if is_blank(c) => Self::WhitespacePrefix,
			(Self::FirstCharInLine, Char(c)) => Self::KeyChar {
				key: String::from(c),
			},

			(Self::SectionChar {
				name,
			}, Char(SECTION_CLOSE)) => {
				if name.is_empty() {
					return Err(SyntaxError::EmptySectionName);
				}
				return Ok(Step::Commit(Self::WhitespaceSuffix, Commit::Section(name)));
			}
			(Self::SectionChar {
				..
			}, LineEnd) => return Err(SyntaxError::UnterminatedSection),
			(Self::SectionChar {
				..
			}, Char(c)) if c == COMMENT || is_blank(c) => {
				return Err(SyntaxError::InvalidSectionChar(c));
			}
			(Self::SectionChar {
				mut name,
			}, Char(c)) => {
				name.push(c);
				Self::SectionChar {
					name,
				}
			}

			(
				Self::KeyChar {
					..
				}
				| Self::KeyCharWhitespaceSuffix {
					..
				},
				LineEnd | Char(COMMENT),
			) => return Err(SyntaxError::UnterminatedKey),
			(
				Self::KeyChar {
					key,
				}
				| Self::KeyCharWhitespaceSuffix {
					key,
				},
				Char(KEY_VALUE_SEPARATOR),
			) => Self::ValueCharPossibleWhitespace {
				key,
			},
			(
				Self::KeyChar {
					key,
				}
				| Self::KeyCharWhitespaceSuffix {
					key,
				},
				Char(c),
			) if is_blank(c) => Self::KeyCharWhitespaceSuffix {
				key,
			},
			(Self::KeyChar {
				mut key,
			}, Char(c)) => {
				key.push(c);
				Self::KeyChar {
					key,
				}
			}
			(Self::KeyCharWhitespaceSuffix {
				..
			}, Char(c)) => return Err(SyntaxError::InvalidKeyChar(c)),

			(Self::ValueCharPossibleWhitespace {
				key,
			}, LineEnd) => {
				return Ok(commit_value(Self::FirstCharInLine, key, String::new()));
			}
			(Self::ValueCharPossibleWhitespace {
				key,
			}, Char(COMMENT)) => return Ok(commit_value(Self::Comment, key, String::new())),
			(Self::ValueCharPossibleWhitespace {
				key,
			}, Char(QUOTE)) => Self::QuotedValueChar {
				key,
				value: String::new(),
			},
			(Self::ValueCharPossibleWhitespace {
				key,
			}, Char(c)) if is_blank(c) => Self::ValueCharPossibleWhitespace {
				key,
			},
			(Self::ValueCharPossibleWhitespace {
				key,
			}, Char(c)) => Self::ValueChar {
				key,
				value: String::from(c),
			},

			(Self::ValueChar {
				key,
				value,
			}, LineEnd) => return Ok(commit_value(Self::FirstCharInLine, key, trimmed(value))),
			(Self::ValueChar {
				key,
				value,
			}, Char(COMMENT)) => return Ok(commit_value(Self::Comment, key, trimmed(value))),
			(Self::ValueChar {
				key,
				mut value,
			}, Char(c)) => {
				value.push(c);
				Self::ValueChar {
					key,
					value,
				}
			}

			(
				Self::QuotedValueChar {
					..
				}
				| Self::QuotedValueEscape {
					..
				},
				LineEnd,
			) => return Err(SyntaxError::UnterminatedQuote),
			(Self::QuotedValueChar {
				key,
				value,
			}, Char(ESCAPE)) => Self::QuotedValueEscape {
				key,
				value,
			},
			(Self::QuotedValueChar {
				key,
				value,
			}, Char(QUOTE)) => return Ok(commit_value(Self::WhitespaceSuffix, key, value)),
			(Self::QuotedValueChar {
				key,
				mut value,
			}, Char(c)) => {
				value.push(c);
				Self::QuotedValueChar {
					key,
					value,
				}
			}
			(Self::QuotedValueEscape {
				key,
				mut value,
			}, Char(c)) => {
				let literal = unescape(c).ok_or(SyntaxError::InvalidEscape(c))?;
				value.push(literal);
				Self::QuotedValueChar {
					key,
					value,
				}
			}

			(Self::WhitespacePrefix | Self::WhitespaceSuffix, LineEnd) => Self::FirstCharInLine,
			(Self::WhitespacePrefix | Self::WhitespaceSuffix, Char(COMMENT)) => Self::Comment,
			(state @ (Self::WhitespacePrefix | Self::WhitespaceSuffix), Char(c)) if is_blank(c) => {
				state
			}
			(Self::WhitespacePrefix | Self::WhitespaceSuffix, Char(c)) => {
				return Err(SyntaxError::UnexpectedChar(c));
			}

			(Self::Comment, LineEnd) => Self::FirstCharInLine,
			(Self::Comment, Char(_)) => Self::Comment,
		};

		Ok(Step::Next(next))
	}
}

/// Drives the state machine over a whole text
struct Parser<'a> {
	text: &'a str,
	config: ParseConfig,
	document: Document,
	section: Option<String>,
	/// 1-based number of the line being read
	line: usize,
	/// Byte offset where the current line starts
	line_start: usize,
}

impl<'a> Parser<'a> {
	fn new(text: &'a str, config: ParseConfig) -> Self {
		Self {
			text,
			config,
			document: Document::with_line_ending(config.line_ending),
			section: None,
			line: 1,
			line_start: 0,
		}
	}

	fn run(mut self) -> Result<Document, IniError> {
		let mut state = State::FirstCharInLine;
		let mut chars = self.text.char_indices().peekable();

		while let Some((_, c)) = chars.next() {
			let input = match c {
				'\r' => {
					// \r\n is a single line break
					let _ = chars.next_if(|&(_, next)| next == '\n');
					Input::LineEnd
				}
				'\n' => Input::LineEnd,
				c => Input::Char(c),
			};

			state = self.feed(state, input)?;

			if input == Input::LineEnd {
				self.line += 1;
				self.line_start = chars.peek().map_or(self.text.len(), |&(offset, _)| offset);
			}
		}

		// End of input terminates the last line
		self.feed(state, Input::LineEnd)?;

		debug!(
			"Parsed INI document: {} sections from {} lines",
			self.document.section_count(),
			self.line
		);

		Ok(self.document)
	}

	fn feed(&mut self, state: State, input: Input) -> Result<State, IniError> {
		match state.step(input) {
			Ok(Step::Next(next)) => Ok(next),
			Ok(Step::Commit(next, commit)) => {
				self.commit(commit)?;
				Ok(next)
			}
			Err(reason) => Err(self.error(reason)),
		}
	}

	fn commit(&mut self, commit: Commit) -> Result<(), IniError> {
		match commit {
			Commit::Section(name) => {
				trace!("Line {}: section [{}]", self.line, name);
				self.section = Some(name);
			}
			Commit::Value {
				key,
				value,
			} => {
				let Some(section) = self.section.as_deref() else {
					return Err(self.error(SyntaxError::KeyOutsideSection));
				};

				trace!("Line {}: [{}] {} = {:?}", self.line, section, key, value);
				let append = self.config.duplicate_keys == DuplicateKeys::Append;
				self.document.insert(section, &key, value, append);
			}
		}

		Ok(())
	}

	fn error(&self, reason: SyntaxError) -> IniError {
		let text = self.text[self.line_start..].split(['\r', '\n']).next().unwrap_or_default();
		IniError::format(self.line, text, reason)
	}
}

/// Decodes raw file contents to text.
///
/// A byte order mark selects UTF-8, UTF-16LE or UTF-16BE and is stripped;
/// without one the input must be valid UTF-8.
fn decode(data: &[u8]) -> Result<Cow<'_, str>, IniError> {
	match Encoding::for_bom(data) {
		Some((encoding, bom_length)) => {
			let (text, had_errors) = encoding.decode_without_bom_handling(&data[bom_length..]);
			if had_errors {
				return Err(IniError::Encoding {
					encoding: encoding.name(),
				});
			}
			Ok(text)
		}
		None => UTF_8.decode_without_bom_handling_and_without_replacement(data).ok_or(
			IniError::Encoding {
				encoding: UTF_8.name(),
			},
		),
	}
}

impl Document {
	/// Parses INI data with the default [`ParseConfig`].
	///
	/// # Returns
	/// * `Ok(Document)` if the whole input is well-formed
	/// * `Err(IniError::Format)` with the line number and text of the first bad line
	/// * `Err(IniError::Encoding)` if the bytes are not valid text
	pub fn parse(data: &[u8]) -> Result<Self, IniError> {
		Self::parse_with(data, ParseConfig::default())
	}

	/// Parses INI data with a custom configuration
	pub fn parse_with(data: &[u8], config: ParseConfig) -> Result<Self, IniError> {
		let text = decode(data)?;
		Self::parse_str_with(&text, config)
	}

	/// Parses already-decoded INI text
	pub fn parse_str_with(text: &str, config: ParseConfig) -> Result<Self, IniError> {
		Parser::new(text, config).run()
	}

	/// Loads a document from any reader
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, IniError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::parse(&data)
	}

	/// Opens and parses an INI file
	pub fn open(path: impl AsRef<Path>) -> Result<Self, IniError> {
		let path = path.as_ref();
		debug!("Loading INI file {}", path.display());
		let data = std::fs::read(path)?;
		Self::parse(&data)
	}
}

impl FromStr for Document {
	type Err = IniError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse_str_with(s, ParseConfig::default())
	}
}

impl TryFrom<&[u8]> for Document {
	type Error = IniError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<Vec<u8>> for Document {
	type Error = IniError;

	fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}
