//! This module is separated into its own crate to enable simple dynamic linking for `inikit`, and should not be used directly.

/// `use inikit::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export inikit_types for convenience
pub use inikit_types;

// Re-export commonly used types at crate root
pub use inikit_types::file::{
	DuplicateKeys, IniDocument, IniEntry, IniError, IniSection, LineEnding, ParseConfig,
	SyntaxError,
};
