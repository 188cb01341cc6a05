//! Kanji font CLI Utility
//!
//! A command-line tool for inspecting bitmap kanji fonts and rendering text with them.
//!
//! # Features
//!
//! - **info**: Display font information (cell size, glyph counts, coding system)
//! - **glyph**: Print a single glyph as ASCII art
//! - **render**: Render UTF-8 text to a PNG image, horizontally or vertically
//!
//! # Settings
//!
//! Font settings are read from an optional TOML file, then from `KANJI_*`
//! environment variables, then from the command line:
//!
//! ```toml
//! size = 16
//! coding_system = "sjis"
//! punctuation = "range"
//! ```
//!
//! # Usage Examples
//!
//! ```bash
//! # Display font information
//! cargo run --example kanji_utils -- info k16.bdf
//!
//! # Print the glyph for a character, or for a JIS code
//! cargo run --example kanji_utils -- glyph k16.bdf あ
//! cargo run --example kanji_utils -- glyph k16.bdf --code 0x2422
//!
//! # Render text
//! cargo run --example kanji_utils -- render k16.bdf "漢字 Kanji" -o kanji.png
//!
//! # Render vertical text with a 24 pixel font configured in a file
//! cargo run --example kanji_utils -- --config font.toml render k24.bdf "縦書き。" --vertical
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use image::RgbaImage;
use kanji_rs::prelude::*;
use kanji_rs::kanji_types::render::{Unit, Units};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "kanji_utils")]
#[command(author = "kanji-rs project")]
#[command(version = "1.0")]
#[command(about = "Kanji font utility - inspect fonts and render text", long_about = None)]
struct Cli {
	/// TOML file with font settings
	#[arg(short, long, global = true, value_name = "CONFIG_TOML")]
	config: Option<PathBuf>,

	/// Cell height in pixels, overrides the settings file
	#[arg(short, long, global = true)]
	size: Option<u32>,

	/// Coding system used for text (jis, sjis, euc), overrides the settings file
	#[arg(long, global = true, value_name = "CODING")]
	coding: Option<CodingSystem>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display font information
	Info {
		/// Input font file path
		#[arg(value_name = "INPUT_FONT")]
		input: PathBuf,

		/// List every stored glyph
		#[arg(short, long)]
		detailed: bool,
	},

	/// Print a glyph as ASCII art
	Glyph {
		/// Input font file path
		#[arg(value_name = "INPUT_FONT")]
		input: PathBuf,

		/// Character to look up (UTF-8)
		#[arg(value_name = "CHAR", required_unless_present = "code")]
		text: Option<String>,

		/// Single-byte code or JIS pair in hex, e.g. `0x41` or `0x2422`
		#[arg(long, conflicts_with = "text")]
		code: Option<String>,
	},

	/// Render text to a PNG image
	Render {
		/// Input font file path
		#[arg(value_name = "INPUT_FONT")]
		input: PathBuf,

		/// Text to render (UTF-8 string)
		#[arg(value_name = "TEXT", required_unless_present = "file")]
		text: Option<String>,

		/// Read text from file
		#[arg(short, long, value_name = "TEXT_FILE", conflicts_with = "text")]
		file: Option<PathBuf>,

		/// Output PNG file path (defaults to `text_render.png`)
		#[arg(short, long, value_name = "OUTPUT_PNG")]
		output: Option<PathBuf>,

		/// Lay text out top to bottom
		#[arg(long)]
		vertical: bool,

		/// Foreground color as `RRGGBB`
		#[arg(long, default_value = "000000")]
		color: String,

		/// Surface depth in bytes per pixel (1, 2 or 4)
		#[arg(long, default_value = "4")]
		depth: u8,
	},
}

/// Layers the settings file, `KANJI_*` environment variables and command line overrides.
fn load_settings(cli: &Cli) -> anyhow::Result<FontSettings> {
	let mut builder = config::Config::builder();
	if let Some(path) = &cli.config {
		builder = builder.add_source(config::File::from(path.as_path()).format(config::FileFormat::Toml));
	}
	builder = builder.add_source(config::Environment::with_prefix("KANJI"));

	let mut settings: FontSettings = builder
		.build()
		.context("Failed to read settings")?
		.try_deserialize()
		.context("Invalid settings")?;

	if let Some(size) = cli.size {
		settings.size = size;
	}
	if let Some(coding) = cli.coding {
		settings.coding_system = coding;
	}

	debug!("Settings: {settings:?}");
	Ok(settings)
}

fn open_font(input: &Path, settings: &FontSettings) -> anyhow::Result<Font> {
	info!("Loading font: {}", input.display());
	let mut file =
		std::fs::File::open(input).with_context(|| format!("Failed to open font file {}", input.display()))?;
	Font::with_settings(&mut file, settings).with_context(|| format!("Failed to load font file {}", input.display()))
}

/// Handles the 'info' command
fn handle_info(input: &Path, detailed: bool, settings: &FontSettings) -> anyhow::Result<()> {
	let font = open_font(input, settings)?;

	let singles = font.iter().filter(|(_, glyph)| glyph.class() == GlyphClass::Single).count();
	let doubles = font.glyph_count() - singles;

	println!("=== Font Information ===");
	println!("File: {}", input.display());
	println!("Cell size: {}x{} pixels", font.height(), font.height());
	println!("Half-width cell: {}x{} pixels", font.half_width(), font.height());
	println!("Coding system: {}", font.coding_system());
	println!("Punctuation nudge: {:?}", font.punctuation());
	println!(
		"Glyphs: {} of {} slots ({} single-byte, {} double-byte)",
		font.glyph_count(),
		font.capacity(),
		singles,
		doubles
	);

	if detailed {
		println!();
		println!("{:>6}  {:>6}  class", "index", "code");
		for (index, glyph) in &font {
			println!("{:>6}  {:#06x}  {}", index, glyph.code(), glyph.class());
		}
	}

	Ok(())
}

fn parse_hex(code: &str) -> anyhow::Result<u32> {
	let digits = code.strip_prefix("0x").or_else(|| code.strip_prefix("0X")).unwrap_or(code);
	u32::from_str_radix(digits, 16).with_context(|| format!("Invalid hex code: {code}"))
}

/// Handles the 'glyph' command
fn handle_glyph(
	input: &Path,
	text: Option<String>,
	code: Option<String>,
	settings: &FontSettings,
) -> anyhow::Result<()> {
	let font = open_font(input, settings)?;

	let unit = if let Some(code) = code {
		match parse_hex(&code)? {
			single @ 0..=0xff => Unit::Single(single as u8),
			pair @ 0x100..=0xffff => Unit::Double((pair >> 8) as u8, pair as u8),
			other => bail!("Code out of range: {other:#x}"),
		}
	} else {
		let text = text.unwrap_or_default();
		let Some(ch) = text.chars().next() else {
			bail!("No character given");
		};
		let encoded = font.coding_system().encode(ch.encode_utf8(&mut [0; 4]))?.into_owned();
		match Units::new(&encoded, font.coding_system(), false).next() {
			Some(Unit::Double(high, low)) => {
				let (high, low) = font.coding_system().to_jis(high, low);
				Unit::Double(high, low)
			}
			Some(unit) => unit,
			None => bail!("'{ch}' does not map to a glyph code"),
		}
	};

	let (glyph, width) = match unit {
		Unit::Single(code) => (font.single(code), font.half_width()),
		Unit::Double(high, low) => (font.double(high, low), font.height()),
		Unit::Newline => (None, 0),
	};

	let Some(glyph) = glyph else {
		bail!("Glyph not found: {unit:?}");
	};

	println!("Code: {:#06x} ({})", glyph.code(), glyph.class());
	print!("{}", glyph.to_ascii_art(width, '#', '.'));
	Ok(())
}

fn parse_color(color: &str) -> anyhow::Result<Color> {
	let value = u32::from_str_radix(color.trim_start_matches('#'), 16)
		.ok()
		.filter(|_| color.trim_start_matches('#').len() == 6)
		.with_context(|| format!("Invalid color: {color}"))?;
	Ok(Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

/// Handles the 'render' command
#[allow(clippy::too_many_arguments)]
fn handle_render(
	input: &Path,
	text: Option<String>,
	file: Option<PathBuf>,
	output: Option<PathBuf>,
	vertical: bool,
	color: &str,
	depth: u8,
	settings: &FontSettings,
) -> anyhow::Result<()> {
	let font = open_font(input, settings)?;
	let fg = parse_color(color)?;
	let format = PixelFormat::from_bytes_per_pixel(depth)?;

	let text = match (text, file) {
		(Some(text), _) => text,
		(None, Some(file)) => std::fs::read_to_string(&file)
			.with_context(|| format!("Failed to read text file {}", file.display()))?
			.trim_end()
			.to_string(),
		(None, None) => bail!("Either TEXT or --file must be provided"),
	};

	let encoded = font.coding_system().encode(&text)?;
	debug!("Encoded {} bytes as {}", encoded.len(), font.coding_system());

	let surface = if vertical {
		create_surface_vertical(&font, &encoded, fg, format)
	} else {
		create_surface(&font, &encoded, fg, format)
	};
	let Some(surface) = surface else {
		bail!("No text to render");
	};

	info!("Surface: {}x{} pixels, {:?}", surface.width(), surface.height(), surface.format());

	let output_path = output.unwrap_or_else(|| PathBuf::from("text_render.png"));
	let image = RgbaImage::from_raw(surface.width(), surface.height(), surface.to_rgba8())
		.context("Surface size does not match its pixel data")?;
	image.save(&output_path).with_context(|| format!("Failed to save image {}", output_path.display()))?;

	println!("✓ Image saved: {}", output_path.display());
	Ok(())
}

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();
	let settings = load_settings(&cli)?;

	match cli.command {
		Commands::Info {
			input,
			detailed,
		} => handle_info(&input, detailed, &settings),
		Commands::Glyph {
			input,
			text,
			code,
		} => handle_glyph(&input, text, code, &settings),
		Commands::Render {
			input,
			text,
			file,
			output,
			vertical,
			color,
			depth,
		} => handle_render(&input, text, file, output, vertical, &color, depth, &settings),
	}
}
