//! Rendering onto surfaces and drawing contexts

use kanji_rs::prelude::*;

use crate::fixtures::{bdf, filled};

fn font() -> Font {
	let glyphs = vec![(u32::from(b'A'), filled(8, 16)), (0x2422, filled(16, 16))];
	Font::from_bytes(&bdf(16, &glyphs), 16).unwrap()
}

#[test_log::test]
fn test_create_surface_rejects_empty_text() {
	let font = font();
	assert!(create_surface(&font, b"", Color::WHITE, PixelFormat::Xrgb8888).is_none());
	assert!(create_surface_vertical(&font, b"\0", Color::WHITE, PixelFormat::Xrgb8888).is_none());
}

#[test_log::test]
fn test_create_surface_for_every_depth() {
	let font = font();
	for bpp in [1, 2, 4] {
		let format = PixelFormat::from_bytes_per_pixel(bpp).unwrap();
		let surface = create_surface(&font, b"AA", Color::WHITE, format).unwrap();
		assert_eq!((surface.width(), surface.height()), (16, 16));
		assert_eq!(surface.color_key(), Some(format.map_rgb(Color::BLACK)));
		assert!((0..16).all(|x| (0..16).all(|y| surface.is_opaque(x, y))), "{format:?}");
	}
}

#[test_log::test]
fn test_create_surface_background_is_keyed() {
	let font = font();
	let fg = Color::rgb(200, 40, 10);
	// `B` has no glyph, so its cell stays background
	let surface = create_surface(&font, b"AB", fg, PixelFormat::Xrgb8888).unwrap();
	assert_eq!(surface.pixel(0, 0), Some(PixelFormat::Xrgb8888.map_rgb(fg)));
	assert_eq!(surface.pixel(8, 0), Some(PixelFormat::Xrgb8888.map_rgb(fg.complement())));
	assert!(!surface.is_opaque(8, 0));

	let rgba = surface.to_rgba8();
	assert_eq!(&rgba[..4], &[200, 40, 10, 255]);
	assert_eq!(rgba[8 * 4 + 3], 0);
}

#[test_log::test]
fn test_create_surface_vertical_size() {
	let font = font();
	let text = b"\x1b$B\x24\x22\x1b(B";
	let surface = create_surface_vertical(&font, text, Color::WHITE, PixelFormat::Rgb565).unwrap();
	assert_eq!((surface.width(), surface.height()), (16, 8 * text.len() as u32));
	assert!(surface.is_opaque(0, 0));
	assert!(surface.is_opaque(15, 15));
	assert!(!surface.is_opaque(0, 16));
}

#[test_log::test]
fn test_create_surface_from_utf8() {
	let mut font = font();
	for coding_system in [CodingSystem::Jis, CodingSystem::ShiftJis, CodingSystem::Euc] {
		font.set_coding_system(coding_system);
		let text = coding_system.encode("Aあ").unwrap();
		let surface = create_surface(&font, &text, Color::WHITE, PixelFormat::Xrgb8888).unwrap();
		assert!(surface.is_opaque(0, 0), "{coding_system}");
		assert!(surface.is_opaque(8, 0), "{coding_system}");
		assert!(surface.is_opaque(23, 15), "{coding_system}");
	}
}

#[derive(Default)]
struct Canvas {
	color: Color,
	points: Vec<(f32, f32, Color)>,
}

impl DrawContext for Canvas {
	fn logical_size(&self) -> (i32, i32) {
		(640, 480)
	}

	fn draw_color(&self) -> Color {
		self.color
	}

	fn set_draw_color(&mut self, color: Color) {
		self.color = color;
	}

	fn draw_point(&mut self, x: f32, y: f32) {
		self.points.push((x, y, self.color));
	}
}

#[test_log::test]
fn test_draw_context_target() {
	let font = font();
	let mut canvas = Canvas {
		color: Color::rgb(9, 9, 9),
		..Default::default()
	};
	let fg = Color::new(255, 0, 0, 128);

	let mut sink = ContextSink::new(&mut canvas);
	font.put_text(&mut sink, Point::new(10, 20), SubPixel::new(0.5, 0.5), b"A", fg);

	assert_eq!(canvas.points.len(), 8 * 16);
	assert_eq!(canvas.points[0], (10.5, 20.5, fg));
	assert_eq!(canvas.color, Color::rgb(9, 9, 9));
}
