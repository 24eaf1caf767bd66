//! INI File Management Utility
//!
//! A command-line tool for inspecting, validating and editing INI configuration files.
//!
//! # Features
//!
//! - **show**: Display sections and entries
//! - **validate**: Check that a file parses, reporting the first bad line
//! - **get**: Print a single value, with an optional default
//! - **set**: Write a value (creating the section if needed)
//! - **delete**: Remove a key or a whole section
//! - **export**: Export a file to JSON
//! - **import**: Build an INI file from JSON
//! - **normalize**: Rewrite a file in canonical layout
//!
//! # Usage
//!
//! ```bash
//! # Show a file
//! cargo run --example ini_utils -- show settings.ini
//!
//! # Validate a file
//! cargo run --example ini_utils -- validate settings.ini
//!
//! # Read and modify values
//! cargo run --example ini_utils -- get settings.ini Window Width --default 640
//! cargo run --example ini_utils -- set settings.ini Window Width 1280
//! cargo run --example ini_utils -- delete settings.ini Window --key Width
//!
//! # Convert to and from JSON
//! cargo run --example ini_utils -- export settings.ini settings.json --pretty
//! cargo run --example ini_utils -- import settings.json settings.ini
//!
//! # Rewrite with LF line endings
//! cargo run --example ini_utils -- normalize settings.ini --line-ending lf
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use inikit::prelude::*;
use log::{debug, info, warn};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "ini_utils")]
#[command(author = "inikit project")]
#[command(version = "1.0")]
#[command(about = "INI file utility - inspect, validate and edit INI files", long_about = None)]
struct Cli {
	/// Keep every value of repeated keys instead of only the last one
	#[arg(short, long, global = true)]
	multi_value: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display sections and entries
	Show {
		/// Input INI file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Only show this section
		#[arg(short, long)]
		section: Option<String>,
	},

	/// Validate an INI file
	Validate {
		/// Input INI file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,
	},

	/// Print a single value
	Get {
		/// Input INI file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Section name
		section: String,

		/// Key name
		key: String,

		/// Value printed when the key is missing
		#[arg(short, long)]
		default: Option<String>,
	},

	/// Write a value
	Set {
		/// Input INI file path (created if missing)
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Section name
		section: String,

		/// Key name
		key: String,

		/// New value
		value: String,

		/// Output file path (optional, defaults to overwriting input)
		#[arg(short, long, value_name = "OUTPUT")]
		output: Option<PathBuf>,
	},

	/// Remove a key, or a whole section when no key is given
	Delete {
		/// Input INI file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Section name
		section: String,

		/// Key name
		#[arg(short, long)]
		key: Option<String>,

		/// Output file path (optional, defaults to overwriting input)
		#[arg(short, long, value_name = "OUTPUT")]
		output: Option<PathBuf>,
	},

	/// Export to JSON
	Export {
		/// Input INI file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output JSON file path
		#[arg(value_name = "OUTPUT")]
		output: PathBuf,

		/// Pretty print JSON
		#[arg(short, long)]
		pretty: bool,
	},

	/// Import from JSON (`{"Section": {"Key": "value" | ["v1", "v2"]}}`)
	Import {
		/// Input JSON file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output INI file path
		#[arg(value_name = "OUTPUT")]
		output: PathBuf,

		/// Line ending of the written file
		#[arg(short, long, value_enum, default_value_t = LineEndingArg::Crlf)]
		line_ending: LineEndingArg,
	},

	/// Rewrite a file in canonical layout
	Normalize {
		/// Input INI file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output file path (optional, defaults to overwriting input)
		#[arg(short, long, value_name = "OUTPUT")]
		output: Option<PathBuf>,

		/// Line ending of the written file
		#[arg(short, long, value_enum, default_value_t = LineEndingArg::Crlf)]
		line_ending: LineEndingArg,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingArg {
	/// \r\n
	Crlf,
	/// \n
	Lf,
	/// \r
	Cr,
}

impl From<LineEndingArg> for LineEnding {
	fn from(arg: LineEndingArg) -> Self {
		match arg {
			LineEndingArg::Crlf => LineEnding::CrLf,
			LineEndingArg::Lf => LineEnding::Lf,
			LineEndingArg::Cr => LineEnding::Cr,
		}
	}
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = if cli.multi_value {
		ParseConfig::multi_value()
	} else {
		ParseConfig::default()
	};

	match cli.command {
		Commands::Show {
			input,
			section,
		} => show(&load(&input, config)?, section.as_deref()),
		Commands::Validate {
			input,
		} => validate(&input, config),
		Commands::Get {
			input,
			section,
			key,
			default,
		} => {
			let doc = load(&input, config)?;
			match (doc.get(&section, &key), default) {
				(Some(value), _) => println!("{value}"),
				(None, Some(default)) => println!("{default}"),
				(None, None) => bail!("[{section}] {key} not found in {}", input.display()),
			}
			Ok(())
		}
		Commands::Set {
			input,
			section,
			key,
			value,
			output,
		} => {
			let mut doc = if input.exists() {
				load(&input, config)?
			} else {
				warn!("{} does not exist, creating a new file", input.display());
				IniDocument::new()
			};
			doc.set(&section, &key, &value)?;
			store(&doc, output.as_ref().unwrap_or(&input))
		}
		Commands::Delete {
			input,
			section,
			key,
			output,
		} => {
			let mut doc = load(&input, config)?;
			let removed = match &key {
				Some(key) => doc.delete_key(&section, key),
				None => doc.delete_section(&section),
			};
			if !removed {
				warn!("Nothing to delete");
			}
			store(&doc, output.as_ref().unwrap_or(&input))
		}
		Commands::Export {
			input,
			output,
			pretty,
		} => {
			let doc = load(&input, config)?;
			let json = if pretty {
				serde_json::to_string_pretty(&doc)?
			} else {
				serde_json::to_string(&doc)?
			};
			fs::write(&output, json)
				.with_context(|| format!("writing {}", output.display()))?;
			info!("Exported {} sections to {}", doc.section_count(), output.display());
			Ok(())
		}
		Commands::Import {
			input,
			output,
			line_ending,
		} => {
			let text = fs::read_to_string(&input)
				.with_context(|| format!("reading {}", input.display()))?;
			let json: Value = serde_json::from_str(&text)?;
			let mut doc = from_json(&json)?;
			doc.set_line_ending(line_ending.into());
			store(&doc, &output)
		}
		Commands::Normalize {
			input,
			output,
			line_ending,
		} => {
			let mut doc = load(&input, config)?;
			doc.set_line_ending(line_ending.into());
			store(&doc, output.as_ref().unwrap_or(&input))
		}
	}
}

fn load(path: &Path, config: ParseConfig) -> Result<IniDocument> {
	let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
	let doc = IniDocument::parse_with(&data, config)
		.with_context(|| format!("parsing {}", path.display()))?;
	debug!("Loaded {} sections from {}", doc.section_count(), path.display());
	Ok(doc)
}

fn store(doc: &IniDocument, path: &Path) -> Result<()> {
	doc.save(path).with_context(|| format!("writing {}", path.display()))?;
	info!("Wrote {} sections to {}", doc.section_count(), path.display());
	Ok(())
}

fn show(doc: &IniDocument, only: Option<&str>) -> Result<()> {
	let sections: Vec<&IniSection> = match only {
		Some(name) => {
			vec![doc.section(name).with_context(|| format!("section [{name}] not found"))?]
		}
		None => doc.iter().collect(),
	};

	for section in sections {
		println!("[{}] ({} keys)", section.name(), section.len());
		for entry in section.entries() {
			for value in entry.values() {
				println!("  {} = {:?}", entry.key(), value);
			}
		}
	}

	Ok(())
}

fn validate(path: &Path, config: ParseConfig) -> Result<()> {
	let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

	match IniDocument::parse_with(&data, config) {
		Ok(doc) => {
			let keys: usize = doc.iter().map(IniSection::len).sum();
			println!("✓ {} is valid: {} sections, {} keys", path.display(), doc.section_count(), keys);
			Ok(())
		}
		Err(IniError::Format {
			line,
			text,
			reason,
		}) => {
			println!("✗ {}:{line}: {reason}", path.display());
			println!("    {text}");
			bail!("validation failed");
		}
		Err(e) => Err(e.into()),
	}
}

fn from_json(json: &Value) -> Result<IniDocument> {
	let Some(sections) = json.as_object() else {
		bail!("expected a JSON object of sections");
	};

	let mut doc = IniDocument::new();
	for (section, entries) in sections {
		let Some(entries) = entries.as_object() else {
			bail!("section [{section}] must be a JSON object");
		};

		for (key, value) in entries {
			match value {
				Value::String(s) => doc.set(section, key, s)?,
				Value::Array(values) => {
					for value in values {
						doc.append(section, key, &scalar(value)?)?;
					}
				}
				other => doc.set(section, key, &scalar(other)?)?,
			}
		}
	}

	Ok(doc)
}

fn scalar(value: &Value) -> Result<String> {
	match value {
		Value::String(s) => Ok(s.clone()),
		Value::Bool(b) => Ok(b.to_string()),
		Value::Number(n) => Ok(n.to_string()),
		other => bail!("unsupported JSON value {other}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_import_keeps_json_order() {
		let json: Value =
			serde_json::from_str(r#"{"Zeta":{"b":"1","a":["2","3"]},"Alpha":{"k":true}}"#).unwrap();
		let doc = from_json(&json).unwrap();

		assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
		assert_eq!(doc.keys("Zeta").collect::<Vec<_>>(), vec!["b", "a"]);
		assert_eq!(doc.get_all("Zeta", "a"), vec!["2", "3"]);
		assert_eq!(doc.get("Alpha", "k"), Some("true"));
	}

	#[test]
	fn test_export_then_import_keeps_document() {
		let mut doc = IniDocument::new();
		doc.set("Window", "Width", "640").unwrap();
		doc.set("Audio", "Volume", "7").unwrap();
		doc.set("Audio", "Muted", "false").unwrap();

		let json = serde_json::to_value(&doc).unwrap();
		assert_eq!(from_json(&json).unwrap(), doc);
	}
}
