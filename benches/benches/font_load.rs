//! Benchmark suite for font definition loading
//!
//! Measures parsing of synthetic definitions of growing size and the cost of
//! merging a second definition into an existing font.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench font_load

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kanji_benches::{generate_test_font, sizes};
use kanji_types::font::Font;
use std::hint::black_box;

/// Benchmark loading fonts of every common size
fn bench_load_sizes(c: &mut Criterion) {
	let mut group = c.benchmark_group("font_load_sizes");

	for size in [sizes::SMALL, sizes::DEFAULT, sizes::LARGE, sizes::MAX] {
		let data = generate_test_font(size, 8);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", size), &data, |b, data| {
			b.iter(|| black_box(Font::from_bytes(black_box(data), size)));
		});
	}

	group.finish();
}

/// Benchmark loading a growing number of JIS rows at 16 pixels
fn bench_load_rows(c: &mut Criterion) {
	let mut group = c.benchmark_group("font_load_rows");

	for rows in [1u8, 16, 47, 94] {
		let data = generate_test_font(sizes::DEFAULT, rows);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
			b.iter(|| black_box(Font::from_bytes(black_box(data), sizes::DEFAULT)));
		});
	}

	group.finish();
}

/// Benchmark merging a definition where every glyph is already present
fn bench_add_duplicates(c: &mut Criterion) {
	let mut group = c.benchmark_group("font_add_glyphs");

	let data = generate_test_font(sizes::DEFAULT, 16);
	let Ok(font) = Font::from_bytes(&data, sizes::DEFAULT) else {
		eprintln!("Warning: Could not load synthetic font");
		return;
	};

	group.bench_function("all_duplicates", |b| {
		b.iter_batched(
			|| font.clone(),
			|mut font| black_box(font.add_glyphs(black_box(&data))),
			criterion::BatchSize::LargeInput,
		);
	});

	group.finish();
}

criterion_group!(benches, bench_load_sizes, bench_load_rows, bench_add_duplicates);
criterion_main!(benches);
