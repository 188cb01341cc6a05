//! Loading properties

use std::io::Cursor;

use kanji_rs::prelude::*;

use crate::fixtures::{Recorder, bdf, filled, striped};

#[test_log::test]
fn test_height_matches_requested_size() {
	for size in [1, 7, 8, 12, 14, 16, 24, 32] {
		let data = bdf(size, &[(0x41, filled(size / 2, size)), (0x2422, filled(size, size))]);
		let font = Font::from_source(&mut Cursor::new(data), size).unwrap();
		assert_eq!(font.height(), size);
		assert_eq!(font.half_width(), size / 2);
	}
}

#[test_log::test]
fn test_filled_glyph_fills_cell() {
	let data = bdf(16, &[(0x2422, vec!["FFFF".to_string(); 16])]);
	let font = Font::from_bytes(&data, 16).unwrap();

	let mut sink = Recorder::new(64, 64);
	font.put_text(&mut sink, Point::ORIGIN, SubPixel::default(), b"\x1b$B\x24\x22", Color::WHITE);

	let mut expected = Vec::new();
	for y in 0..16 {
		for x in 0..16 {
			expected.push((x, y));
		}
	}
	assert_eq!(sink.hits, expected);
}

#[test_log::test]
fn test_duplicate_definition_is_ignored() {
	let first = striped(16, 16, 0x8001);
	let once = bdf(16, &[(0x3021, first.clone())]);
	let twice = bdf(16, &[(0x3021, first), (0x3021, filled(16, 16)), (0x3022, filled(16, 16))]);

	let draw = |data: &[u8]| {
		let font = Font::from_bytes(data, 16).unwrap();
		let mut sink = Recorder::new(64, 64);
		font.put_text(&mut sink, Point::ORIGIN, SubPixel::default(), b"\x1b$B\x30\x21", Color::WHITE);
		sink.hits
	};

	assert_eq!(draw(&once), draw(&twice));
	assert_eq!(Font::from_bytes(&twice, 16).unwrap().glyph_count(), 2);
}

#[test_log::test]
fn test_odd_size_alignment() {
	// 12px cell: full-width rows padded to 16 bits, half-width rows padded to 8 bits
	let data = bdf(12, &[(0x41, filled(6, 12)), (0x2422, filled(12, 12))]);
	let font = Font::from_bytes(&data, 12).unwrap();
	assert!(font.single(b'A').unwrap().rows().iter().all(|&row| row == 0x3f));
	assert!(font.double(0x24, 0x22).unwrap().rows().iter().all(|&row| row == 0xfff));

	let mut sink = Recorder::new(100, 100);
	font.put_text(&mut sink, Point::ORIGIN, SubPixel::default(), b"A", Color::WHITE);
	assert_eq!(sink.hits.len(), 6 * 12);
	assert!(sink.hits.iter().all(|&(x, y)| (0..6).contains(&x) && (0..12).contains(&y)));
}

#[test_log::test]
fn test_crlf_source() {
	let data = String::from_utf8(bdf(8, &[(0x41, filled(4, 8))])).unwrap().replace('\n', "\r\n");
	let font = Font::from_bytes(data.as_bytes(), 8).unwrap();
	assert_eq!(font.glyph_count(), 1);
	assert_eq!(font.single(b'A').unwrap().rows(), &[0x0f; 8]);
}

#[test_log::test]
fn test_missing_bitmap_is_an_error() {
	let data = b"STARTFONT 2.1\nSTARTCHAR 41\nENCODING 65\nSWIDTH 500 0\nENDCHAR\n";
	let err = Font::from_bytes(data, 16).unwrap_err();
	assert!(matches!(err, FontError::MissingBitmap { codepoint: 65, .. }), "{err}");
}

#[test_log::test]
fn test_out_of_table_codepoint_is_an_error() {
	// Shift-JIS codes are not valid JIS pairs
	let data = bdf(16, &[(0x82a0, filled(16, 16))]);
	let err = Font::from_bytes(&data, 16).unwrap_err();
	assert!(matches!(err, FontError::IndexOutOfRange { .. }), "{err}");
}

#[test_log::test]
fn test_open_missing_file() {
	let err = Font::open("/nonexistent/kanji-rs/font.bdf", 16).unwrap_err();
	assert!(matches!(err, FontError::IOError(_)), "{err}");
}
