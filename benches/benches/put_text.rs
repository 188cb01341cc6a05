//! Benchmark suite for text layout and glyph blitting
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench put_text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kanji_benches::{generate_jis_text, generate_test_font, sizes};
use kanji_types::prelude::*;
use std::hint::black_box;

fn load_font(size: u32) -> Option<Font> {
	Font::from_bytes(&generate_test_font(size, 8), size).ok()
}

/// Benchmark horizontal layout onto a surface in every pixel format
fn bench_horizontal(c: &mut Criterion) {
	let mut group = c.benchmark_group("put_text_horizontal");
	let Some(font) = load_font(sizes::DEFAULT) else {
		eprintln!("Warning: Could not load synthetic font");
		return;
	};
	let text = generate_jis_text(400, 8, 40);

	for format in [PixelFormat::Rgb332, PixelFormat::Rgb565, PixelFormat::Xrgb8888] {
		let mut surface = Surface::new(640, 480, format);
		group.throughput(Throughput::Elements(400));
		group.bench_with_input(BenchmarkId::new("surface", format!("{format:?}")), &text, |b, text| {
			b.iter(|| black_box(font.put_text(&mut surface, Point::ORIGIN, SubPixel::default(), black_box(text), Color::WHITE)));
		});
	}

	group.finish();
}

/// Benchmark vertical layout, including punctuation nudging
fn bench_vertical(c: &mut Criterion) {
	let mut group = c.benchmark_group("put_text_vertical");
	let Some(font) = load_font(sizes::DEFAULT) else {
		eprintln!("Warning: Could not load synthetic font");
		return;
	};
	let text = generate_jis_text(30, 1, 0);
	let mut surface = Surface::new(16, 480, PixelFormat::Xrgb8888);

	group.throughput(Throughput::Elements(30));
	group.bench_function("column", |b| {
		b.iter(|| {
			black_box(font.put_text_vertical(&mut surface, Point::ORIGIN, SubPixel::default(), black_box(&text), Color::WHITE))
		});
	});

	group.finish();
}

/// Benchmark text that is mostly clipped away
fn bench_clipped(c: &mut Criterion) {
	let mut group = c.benchmark_group("put_text_clipped");
	let Some(font) = load_font(sizes::MAX) else {
		eprintln!("Warning: Could not load synthetic font");
		return;
	};
	let text = generate_jis_text(400, 8, 40);
	let mut surface = Surface::new(64, 64, PixelFormat::Xrgb8888);

	group.bench_function("partly_visible", |b| {
		b.iter(|| black_box(font.put_text(&mut surface, Point::new(-16, -16), SubPixel::default(), black_box(&text), Color::WHITE)));
	});

	group.finish();
}

/// Benchmark creating color-keyed surfaces from text
fn bench_create_surface(c: &mut Criterion) {
	let mut group = c.benchmark_group("create_surface");

	for size in [sizes::SMALL, sizes::DEFAULT, sizes::LARGE] {
		let Some(font) = load_font(size) else {
			continue;
		};
		let text = generate_jis_text(40, 8, 0);
		group.bench_with_input(BenchmarkId::new("line", size), &text, |b, text| {
			b.iter(|| black_box(create_surface(&font, black_box(text), Color::WHITE, PixelFormat::Rgb565)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_horizontal, bench_vertical, bench_clipped, bench_create_surface);
criterion_main!(benches);
