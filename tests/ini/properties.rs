//! End-to-end behaviour of parsing, editing and saving

use inikit::prelude::*;

#[test]
fn round_trip_of_written_document() {
	let mut doc = IniDocument::new();
	doc.set("Database", "Url", "postgres://localhost/app").unwrap();
	doc.set("Database", "Password", "p;ss\"word\\").unwrap();
	doc.set("Logging", "Format", "\t[%l] %m\n").unwrap();
	doc.write_f64("Logging", "Sample", 0.1).unwrap();

	let parsed = IniDocument::parse(&doc.to_bytes()).unwrap();
	assert_eq!(parsed, doc);
	assert_eq!(parsed.read_f64("logging", "sample", 0.0), 0.1);
}

#[test]
fn save_parse_save_is_stable() {
	let input = b"; settings\r\n[A]\r\nK = 1\r\n\r\n[b]\r\nx=\"  y \"\r\n[a]\r\nJ = two words   ; note\r\n";
	let first = IniDocument::parse(input).unwrap().to_bytes();
	let second = IniDocument::parse(&first).unwrap().to_bytes();

	assert_eq!(first, second);
	assert_eq!(
		String::from_utf8(first).unwrap(),
		"[A]\r\nK = 1\r\nJ = two words\r\n\r\n[b]\r\nx = \"  y \"\r\n"
	);
}

#[test]
fn edit_parsed_document() {
	let mut doc = IniDocument::parse(b"[Old]\nGone = 1\n[Keep]\nA = 1\nB = 2\n").unwrap();
	doc.write("old", "gone", None).unwrap();
	doc.write("Keep", "A", None).unwrap();
	doc.set("keep", "c", "3").unwrap();
	doc.set_line_ending(LineEnding::Lf);

	assert_eq!(doc.to_string(), "[Keep]\nB = 2\nc = 3\n");
}

#[test]
fn malformed_input_is_rejected_whole() {
	let err = IniDocument::parse(b"[A\n").unwrap_err();
	assert_eq!(err.line(), Some(1));
	assert!(err.to_string().contains("line 1"));
}

#[test]
fn multi_value_documents() {
	let input = b"[Mirrors]\nUrl = https://a.example\nUrl = https://b.example\n";

	let single = IniDocument::parse(input).unwrap();
	assert_eq!(single.get_all("Mirrors", "Url"), vec!["https://b.example"]);

	let config = ParseConfig::new(DuplicateKeys::Append, LineEnding::Lf);
	let multi = IniDocument::parse_with(input, config).unwrap();
	assert_eq!(multi.get_all("mirrors", "url"), vec!["https://a.example", "https://b.example"]);
	assert_eq!(multi.to_bytes(), input);
}
