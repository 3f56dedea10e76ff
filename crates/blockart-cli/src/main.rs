//! blockart - Turn images into block-character art
//!
//! A command-line tool for rendering images as IRC colour codes, raw
//! glyphs or HTML.

use blockart::{build_grid, render, OutputFormat, IRC_LINE_LIMIT};
use clap::Parser;
use image::imageops::FilterType;
use image::DynamicImage;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blockart")]
#[command(version)]
#[command(about = "Convert an image into 2x2 block-character art", long_about = None)]
struct Cli {
    /// Input image file (PNG, JPEG, GIF, WebP)
    input: PathBuf,

    /// Output format: irc, raw or html
    #[arg(short, long, default_value = "irc")]
    format: OutputFormat,

    /// Maximum thumbnail width in pixels, before horizontal doubling
    #[arg(long, default_value = "100")]
    width: u32,

    /// Maximum thumbnail height in pixels
    #[arg(long, default_value = "64")]
    height: u32,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Shrinks `img` to fit `max_width` x `max_height`, keeping the aspect
/// ratio, then doubles its width since a character cell is twice as tall
/// as it is wide.
fn prepare(img: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let img = if img.width() > max_width || img.height() > max_height {
        img.thumbnail(max_width, max_height)
    } else {
        img
    };

    let (width, height) = (img.width(), img.height());
    eprintln!("Thumbnail size: {}x{}", width, height);

    img.resize_exact(width * 2, height, FilterType::Lanczos3)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let img = image::open(&cli.input)
        .map_err(|e| format!("Failed to open '{}': {}", cli.input.display(), e))?;
    let rgb_img = prepare(img, cli.width.max(1), cli.height.max(1)).to_rgb8();
    let (width, height) = rgb_img.dimensions();
    log::debug!("converting {}x{} pixels as {}", width, height, cli.format);

    let grid = build_grid(rgb_img.as_raw(), width as usize, height as usize)?;
    let rendered = render(&grid, cli.format);

    if let Some(max) = rendered.max_line_length {
        eprintln!(
            "Max line length (anything over {} is likely to break): {}",
            IRC_LINE_LIMIT, max
        );
        if rendered.exceeds_irc_limit() {
            eprintln!("Warning: some lines will likely be cut off; try a smaller --width");
        }
    }

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered.text)?;
            eprintln!(
                "Written {} bytes to '{}'",
                rendered.text.len(),
                path.display()
            );
        }
        None => {
            io::stdout().write_all(rendered.text.as_bytes())?;
        }
    }

    Ok(())
}
