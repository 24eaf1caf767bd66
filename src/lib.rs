#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `inikit` reads, edits and writes INI configuration files.
//!
//! Files are parsed by a strict character-level state machine that reports the
//! line number and text of the first malformed line, and written back in a
//! canonical layout that parses to the same content.
//!
//! ```
//! use inikit::prelude::*;
//!
//! let mut doc: IniDocument = "[Server]\nHost = example.org\nPort = 8080\n".parse().unwrap();
//! doc.write_u64("Server", "Port", 9090).unwrap();
//!
//! assert_eq!(doc.read("server", "host", "localhost"), "example.org");
//! assert_eq!(doc.read_u64("server", "port", 80), 9090);
//! ```
pub use inikit_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use inikit_dylib;
