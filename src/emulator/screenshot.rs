// Screenshot capture - encode the ARGB frame buffer as a timestamped PNG

use crate::ppu::palette::argb_to_rgba;
use crate::ppu::{FRAME_PIXELS, SCREEN_HEIGHT, SCREEN_WIDTH};
use chrono::Local;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors produced while saving a screenshot
#[derive(Debug)]
pub enum ScreenshotError {
    /// Directory creation or file write failure
    Io(io::Error),
    /// PNG encoding failure
    Encoding(png::EncodingError),
}

impl fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenshotError::Io(err) => write!(f, "screenshot I/O error: {}", err),
            ScreenshotError::Encoding(err) => write!(f, "screenshot encoding error: {}", err),
        }
    }
}

impl std::error::Error for ScreenshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenshotError::Io(err) => Some(err),
            ScreenshotError::Encoding(err) => Some(err),
        }
    }
}

impl From<io::Error> for ScreenshotError {
    fn from(err: io::Error) -> Self {
        ScreenshotError::Io(err)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(err: png::EncodingError) -> Self {
        ScreenshotError::Encoding(err)
    }
}

/// Save the frame buffer as a PNG under `directory`
///
/// The directory is created if needed; the filename carries a local
/// timestamp (`screenshot_YYYYMMDD_HHMMSS.png`).
///
/// # Errors
/// Returns `ScreenshotError` on I/O or encoding failure.
pub fn save_screenshot(
    frame: &[u32; FRAME_PIXELS],
    directory: &Path,
) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(directory)?;

    let filename = format!("screenshot_{}.png", Local::now().format("%Y%m%d_%H%M%S"));
    let path = directory.join(filename);

    let mut rgba = vec![0u8; FRAME_PIXELS * 4];
    for (pixel, chunk) in frame.iter().zip(rgba.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&argb_to_rgba(*pixel));
    }

    let file = fs::File::create(&path)?;
    let writer = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&rgba)?;

    Ok(path)
}
