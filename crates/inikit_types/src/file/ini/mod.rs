//! INI configuration file support.
//!
//! This module reads, edits and writes line-oriented configuration files made
//! of `[Section]` headers and `Key = Value` entries.
//!
//! # File Format
//!
//! ```text
//! ; comments run from ';' to the end of the line
//! [Section]            ; section names are case-insensitive
//! Key = unquoted value ; right-trimmed
//! Other = "  quoted\tvalue  "
//! ```
//!
//! - Section names may not contain whitespace, `;` or `]`.
//! - Key names may not contain whitespace, `;` or `=`.
//! - Quoted values keep all whitespace and understand the escapes
//!   `\t`, `\n`, `\r`, `\"` and `\\`.
//! - `\n`, `\r\n` and bare `\r` are all accepted as line breaks. Output always
//!   uses the document's [`LineEnding`].
//!
//! # Features
//!
//! - **Parsing**: strict, whole-file validation with the line number and text
//!   of the first offending line
//! - **Reading**: case-insensitive lookups with caller-supplied defaults, typed
//!   reads that fall back to the default instead of failing
//! - **Writing**: validated writes, deletes, and multi-value keys
//! - **Serialization**: canonical text output, plus `serde` support
//!
//! # Examples
//!
//! ## Parsing and reading
//!
//! ```
//! use inikit_types::file::ini::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::parse(b"[Window]\nWidth = 640\nTitle = \"  Main  \"\n")?;
//!
//! assert_eq!(doc.read_i32("window", "width", 0), 640);
//! assert_eq!(doc.get("Window", "Title"), Some("  Main  "));
//! assert_eq!(doc.read_i32("Window", "Height", 480), 480);
//! # Ok(())
//! # }
//! ```
//!
//! ## Editing and saving
//!
//! ```no_run
//! use inikit_types::file::ini::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::open("settings.ini")?;
//!
//! doc.set("Window", "Title", "Editor")?;
//! doc.write("Window", "Obsolete", None)?;
//! doc.save("settings.ini")?;
//! # Ok(())
//! # }
//! ```

pub mod constants;

mod document;
mod parse_config;
mod parser;
mod validate;
mod writer;

pub use document::{Document, Entry, Section};
pub use parse_config::{DuplicateKeys, ParseConfig};
pub use writer::LineEnding;
