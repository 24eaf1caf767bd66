//! Everything needed to load, edit and save INI files in one import.
//!
//! Pulls in the document model ([`IniDocument`], [`IniSection`], [`IniEntry`]),
//! the parse options ([`ParseConfig`], [`DuplicateKeys`], [`LineEnding`]) and the
//! error types ([`IniError`], [`SyntaxError`], [`InvalidName`], [`NameKind`]).
//!
//! ```rust
//! use inikit_internal::prelude::*;
//!
//! let text = b"[Paths]\nInclude = /usr/include\nInclude = /opt/include\n";
//! let config = ParseConfig::new(DuplicateKeys::Append, LineEnding::Lf);
//! let doc = IniDocument::parse_with(text, config).unwrap();
//!
//! assert_eq!(doc.get_all("paths", "include"), vec!["/usr/include", "/opt/include"]);
//! assert_eq!(doc.to_bytes(), text);
//!
//! match IniDocument::parse(b"Orphan = 1") {
//! 	Err(IniError::Format { line, .. }) => assert_eq!(line, 1),
//! 	other => panic!("unexpected {other:?}"),
//! }
//! ```

#[doc(inline)]
pub use inikit_types::prelude::*;

/// The types crate, for items outside the prelude such as the `file::ini` module.
#[doc(inline)]
pub use inikit_types;
