//! Prelude module for `inikit_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use inikit_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let doc = IniDocument::with_line_ending(LineEnding::Lf);
//! let config = ParseConfig::multi_value();
//! assert_eq!(config.duplicate_keys, DuplicateKeys::Append);
//! assert!(doc.is_empty());
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	DuplicateKeys,
	// INI types
	IniDocument,
	IniEntry,
	// Error types
	IniError,
	IniSection,
	InvalidName,
	LineEnding,
	NameKind,
	ParseConfig,
	SyntaxError,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
