//! Benchmark suite for INI parsing and serialization
//!
//! Measures the character-level state machine and the canonical writer on
//! synthetic documents of increasing size.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use inikit_benches::generate_ini_text;
use inikit_types::file::ini::{Document, ParseConfig};
use std::hint::black_box;

/// (sections, keys per section)
const SIZES: [(usize, usize); 3] = [(4, 8), (32, 32), (256, 64)];

/// Benchmark parsing with the default and multi-value configurations
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("ini_parse");

	for (sections, keys) in SIZES {
		let text = generate_ini_text(sections, keys);
		let label = format!("{sections}x{keys}");

		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::new("last_wins", &label), &text, |b, text| {
			b.iter(|| black_box(Document::parse(black_box(text.as_bytes()))));
		});
		group.bench_with_input(BenchmarkId::new("multi_value", &label), &text, |b, text| {
			b.iter(|| {
				black_box(Document::parse_with(black_box(text.as_bytes()), ParseConfig::multi_value()))
			});
		});
	}

	group.finish();
}

/// Benchmark serialization of parsed documents
fn bench_serialize(c: &mut Criterion) {
	let mut group = c.benchmark_group("ini_serialize");

	for (sections, keys) in SIZES {
		let text = generate_ini_text(sections, keys);
		let Ok(doc) = Document::parse(text.as_bytes()) else {
			eprintln!("Warning: could not parse generated document {sections}x{keys}");
			continue;
		};

		group.bench_with_input(
			BenchmarkId::new("to_bytes", format!("{sections}x{keys}")),
			&doc,
			|b, doc| {
				b.iter(|| black_box(doc.to_bytes()));
			},
		);
	}

	group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
