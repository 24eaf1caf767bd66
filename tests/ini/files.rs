//! Loading and saving documents on disk

use std::path::PathBuf;

use inikit::prelude::*;
use log::info;

fn temp_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("inikit-{}-{}", std::process::id(), name))
}

#[test_log::test]
fn save_and_open() {
	let path = temp_path("save_and_open.ini");

	let mut doc = IniDocument::new();
	doc.set("Window", "Title", "  Editor  ").unwrap();
	doc.write_i64("Window", "Width", 1280).unwrap();
	doc.save(&path).unwrap();
	info!("Saved {}", path.display());

	let bytes = std::fs::read(&path).unwrap();
	assert!(!bytes.starts_with(&[0xEF, 0xBB, 0xBF]), "output must not carry a BOM");

	let loaded = IniDocument::open(&path).unwrap();
	std::fs::remove_file(&path).unwrap();

	assert_eq!(loaded, doc);
	assert_eq!(loaded.read_i32("window", "width", 0), 1280);
}

#[test]
fn open_missing_file() {
	let path = temp_path("does_not_exist.ini");

	match IniDocument::open(&path) {
		Err(IniError::IOError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
		other => panic!("expected IO error, got {other:?}"),
	}
}

#[test]
fn open_malformed_file() {
	let path = temp_path("malformed.ini");
	std::fs::write(&path, b"[Good]\r\nKey = 1\r\n[Bad\r\n").unwrap();

	let result = IniDocument::open(&path);
	std::fs::remove_file(&path).unwrap();

	match result {
		Err(IniError::Format {
			line,
			text,
			reason,
		}) => {
			assert_eq!(line, 3);
			assert_eq!(text, "[Bad");
			assert_eq!(reason, SyntaxError::UnterminatedSection);
		}
		other => panic!("expected format error, got {other:?}"),
	}
}
