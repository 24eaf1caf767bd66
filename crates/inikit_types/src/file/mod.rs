//! File type support for `inikit` project.

mod error;

pub mod ini;

// Re-export error types
pub use error::{IniError, InvalidName, NameKind, SyntaxError};

// Re-export main file types
pub use ini::{
	Document as IniDocument, DuplicateKeys, Entry as IniEntry, LineEnding, ParseConfig,
	Section as IniSection,
};
