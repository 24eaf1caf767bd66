//! In-memory INI document: sections, keys and values.

use std::{fmt::Display, str::FromStr};

use indexmap::{IndexMap, map::Entry as MapEntry};
use serde::{Serialize, Serializer, ser::SerializeMap};

use super::{LineEnding, validate};
use crate::file::error::IniError;

/// Folds a section or key name to the form used for lookups
///
/// Each character is mapped on its own, through upper case and back, so that
/// variant lowercase forms such as the Greek final sigma `ς` fold together
/// with `σ` and `Σ`.
fn fold(name: &str) -> String {
	name.chars().flat_map(char::to_uppercase).flat_map(char::to_lowercase).collect()
}

/// A key and every value stored under it.
///
/// In the default single-value mode an entry always holds exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	key: String,
	values: Vec<String>,
}

impl Entry {
	/// Key name, in the casing it was first written with
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The most recently written value
	pub fn value(&self) -> &str {
		self.values.last().map_or("", String::as_str)
	}

	/// All values in the order they were written
	pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
		self.values.iter().map(String::as_str)
	}
}

impl Serialize for Entry {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self.values.as_slice() {
			[single] => serializer.serialize_str(single),
			values => values.serialize(serializer),
		}
	}
}

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	name: String,
	entries: IndexMap<String, Entry>,
}

impl Section {
	fn new(name: &str) -> Self {
		Self {
			name: name.to_owned(),
			entries: IndexMap::new(),
		}
	}

	/// Section name, in the casing it was first written with
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of keys in the section
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the section holds no keys
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the entry for `key` (case-insensitive)
	pub fn entry(&self, key: &str) -> Option<&Entry> {
		self.entries.get(&fold(key))
	}

	/// Returns the value for `key` (case-insensitive)
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entry(key).map(Entry::value)
	}

	/// Returns every value stored under `key`
	pub fn get_all(&self, key: &str) -> Vec<&str> {
		self.entry(key).map(|entry| entry.values().collect()).unwrap_or_default()
	}

	/// Returns `true` if `key` is present (case-insensitive)
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(&fold(key))
	}

	/// Key names in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.values().map(Entry::key)
	}

	/// Entries in insertion order
	pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
		self.entries.values()
	}

	fn insert(&mut self, key: &str, value: String, append: bool) {
		match self.entries.entry(fold(key)) {
			MapEntry::Occupied(mut occupied) => {
				let entry = occupied.get_mut();
				if !append {
					entry.values.clear();
				}
				entry.values.push(value);
			}
			MapEntry::Vacant(vacant) => {
				vacant.insert(Entry {
					key: key.to_owned(),
					values: vec![value],
				});
			}
		}
	}

	fn remove(&mut self, key: &str) -> bool {
		self.entries.shift_remove(&fold(key)).is_some()
	}
}

impl Serialize for Section {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for entry in self.entries.values() {
			map.serialize_entry(entry.key(), entry)?;
		}
		map.end()
	}
}

/// An INI document.
///
/// Section and key names are case-insensitive; the casing used when a name is
/// first created is the casing that gets written out. Sections are never empty:
/// a section appears with its first key and disappears with its last.
///
/// # Examples
///
/// ```
/// use inikit_types::file::ini::Document;
///
/// let mut doc = Document::new();
/// doc.set("Display", "Width", "640").unwrap();
/// doc.write_bool("Display", "Fullscreen", true).unwrap();
///
/// assert_eq!(doc.read_i32("display", "width", 0), 640);
/// assert!(doc.read_bool("DISPLAY", "FULLSCREEN", false));
/// assert_eq!(doc.read("Display", "Missing", "fallback"), "fallback");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
	sections: IndexMap<String, Section>,
	line_ending: LineEnding,
}

impl Document {
	/// Creates an empty document using the default line ending
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty document that will be written with `line_ending`
	pub fn with_line_ending(line_ending: LineEnding) -> Self {
		Self {
			sections: IndexMap::new(),
			line_ending,
		}
	}

	/// Line terminator used when serializing
	pub fn line_ending(&self) -> LineEnding {
		self.line_ending
	}

	/// Sets the line terminator used when serializing
	pub fn set_line_ending(&mut self, line_ending: LineEnding) {
		self.line_ending = line_ending;
	}

	/// Number of sections
	pub fn section_count(&self) -> usize {
		self.sections.len()
	}

	/// Returns `true` if the document holds no sections
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	/// Returns the section called `name` (case-insensitive)
	pub fn section(&self, name: &str) -> Option<&Section> {
		self.sections.get(&fold(name))
	}

	/// Returns `true` if a section called `name` exists
	pub fn contains_section(&self, name: &str) -> bool {
		self.sections.contains_key(&fold(name))
	}

	/// Returns `true` if `key` exists in `section`
	pub fn contains_key(&self, section: &str, key: &str) -> bool {
		self.section(section).is_some_and(|s| s.contains_key(key))
	}

	/// Section names in insertion order
	pub fn sections(&self) -> impl Iterator<Item = &str> + '_ {
		self.sections.values().map(Section::name)
	}

	/// Sections in insertion order
	pub fn iter(&self) -> impl Iterator<Item = &Section> + '_ {
		self.sections.values()
	}

	/// Key names of `section` in insertion order; empty if the section is missing
	pub fn keys<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> + use<'a> {
		self.section(section).into_iter().flat_map(|s| s.keys())
	}

	/// Returns the value of `key` in `section`, if present
	pub fn get(&self, section: &str, key: &str) -> Option<&str> {
		self.section(section)?.get(key)
	}

	/// Returns every value of `key` in `section`; empty if absent
	pub fn get_all(&self, section: &str, key: &str) -> Vec<&str> {
		self.section(section).map(|s| s.get_all(key)).unwrap_or_default()
	}

	/// Returns the value of `key` in `section`, or `default` if absent
	pub fn read<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
		self.get(section, key).unwrap_or(default)
	}

	/// Parses the value of `key` with [`FromStr`].
	///
	/// Surrounding whitespace is ignored. A missing key or a value that does not
	/// parse yields `default`; this never fails.
	pub fn read_parsed<T: FromStr>(&self, section: &str, key: &str, default: T) -> T {
		self.get(section, key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
	}

	/// Reads a boolean (`true`/`false`, any casing), or `default`
	pub fn read_bool(&self, section: &str, key: &str, default: bool) -> bool {
		self.get(section, key).and_then(parse_bool).unwrap_or(default)
	}

	/// Reads an `i32`, or `default`
	pub fn read_i32(&self, section: &str, key: &str, default: i32) -> i32 {
		self.read_parsed(section, key, default)
	}

	/// Reads an `i64`, or `default`
	pub fn read_i64(&self, section: &str, key: &str, default: i64) -> i64 {
		self.read_parsed(section, key, default)
	}

	/// Reads a `u64`, or `default`
	pub fn read_u64(&self, section: &str, key: &str, default: u64) -> u64 {
		self.read_parsed(section, key, default)
	}

	/// Reads an `f64` (`.` as decimal separator), or `default`
	pub fn read_f64(&self, section: &str, key: &str, default: f64) -> f64 {
		self.read_parsed(section, key, default)
	}

	/// Writes or deletes a value.
	///
	/// Names and value are validated first; on error the document is left
	/// untouched. `None` removes the key. The section is created if needed and
	/// any previous values of the key are replaced.
	pub fn write(&mut self, section: &str, key: &str, value: Option<&str>) -> Result<(), IniError> {
		validate::section_name(section)?;
		validate::key_name(key)?;

		match value {
			Some(value) => {
				validate::value(value)?;
				self.insert(section, key, value.to_owned(), false);
			}
			None => {
				self.delete_key(section, key);
			}
		}

		Ok(())
	}

	/// Writes a value, replacing any previous ones
	pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
		self.write(section, key, Some(value))
	}

	/// Adds another value to `key`, keeping the existing ones
	pub fn append(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
		validate::section_name(section)?;
		validate::key_name(key)?;
		validate::value(value)?;
		self.insert(section, key, value.to_owned(), true);
		Ok(())
	}

	/// Writes any [`Display`] value
	pub fn write_display<T: Display>(
		&mut self,
		section: &str,
		key: &str,
		value: T,
	) -> Result<(), IniError> {
		self.set(section, key, &value.to_string())
	}

	/// Writes `true` or `false`
	pub fn write_bool(&mut self, section: &str, key: &str, value: bool) -> Result<(), IniError> {
		self.write_display(section, key, value)
	}

	/// Writes a signed integer
	pub fn write_i64(&mut self, section: &str, key: &str, value: i64) -> Result<(), IniError> {
		self.write_display(section, key, value)
	}

	/// Writes an unsigned integer
	pub fn write_u64(&mut self, section: &str, key: &str, value: u64) -> Result<(), IniError> {
		self.write_display(section, key, value)
	}

	/// Writes a float in its shortest round-trip form
	pub fn write_f64(&mut self, section: &str, key: &str, value: f64) -> Result<(), IniError> {
		self.write_display(section, key, value)
	}

	/// Removes `key` from `section`, dropping the section if it becomes empty.
	///
	/// Returns whether a key was removed.
	pub fn delete_key(&mut self, section: &str, key: &str) -> bool {
		let folded = fold(section);
		let Some(target) = self.sections.get_mut(&folded) else {
			return false;
		};

		let removed = target.remove(key);
		if target.is_empty() {
			self.sections.shift_remove(&folded);
		}

		removed
	}

	/// Removes a whole section. Returns whether it existed.
	pub fn delete_section(&mut self, section: &str) -> bool {
		self.sections.shift_remove(&fold(section)).is_some()
	}

	/// Removes every section
	pub fn clear(&mut self) {
		self.sections.clear();
	}

	/// Stores a value without validation; used for parsed input
	pub(crate) fn insert(&mut self, section: &str, key: &str, value: String, append: bool) {
		self.sections
			.entry(fold(section))
			.or_insert_with(|| Section::new(section))
			.insert(key, value, append);
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	let value = value.trim();
	if value.eq_ignore_ascii_case("true") {
		Some(true)
	} else if value.eq_ignore_ascii_case("false") {
		Some(false)
	} else {
		None
	}
}

impl Serialize for Document {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.sections.len()))?;
		for section in self.sections.values() {
			map.serialize_entry(section.name(), section)?;
		}
		map.end()
	}
}

impl<'a> IntoIterator for &'a Document {
	type Item = &'a Section;
	type IntoIter = indexmap::map::Values<'a, String, Section>;

	fn into_iter(self) -> Self::IntoIter {
		self.sections.values()
	}
}
