//! This crate provides the core data types and file format support for the `inikit` project.
//!
//! # File Formats
//!
//! - **INI**: line-oriented configuration files with `[Section]` headers and
//!   `Key = Value` entries, read through a character-level state machine and
//!   written back in a canonical layout
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use inikit_types::prelude::*;
//!
//! let mut doc = IniDocument::new();
//! doc.set("Audio", "Volume", "80").unwrap();
//!
//! let reparsed = IniDocument::parse(&doc.to_bytes()).unwrap();
//! assert_eq!(reparsed.read_i32("audio", "volume", 0), 80);
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use inikit_types::file::ini::{Document, ParseConfig};
//!
//! let doc = Document::parse_with(b"[A]\nK = 1\nK = 2\n", ParseConfig::multi_value()).unwrap();
//! assert_eq!(doc.get_all("A", "K"), vec!["1", "2"]);
//! ```

pub mod file;

/// `use inikit_types::prelude::*;` to import commonly used items.
pub mod prelude;
