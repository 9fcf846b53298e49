//! In-place background removal for a single image file

use std::io::Cursor;
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::pixel::clear_near_white;

#[derive(Error, Debug)]
pub enum RemoveError {
    #[error("Failed to read file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Failed to write file: {0}")]
    Write(#[source] std::io::Error),
}

/// Outcome of a successful [`remove_background`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleared {
    pub width: u32,
    pub height: u32,
    /// Pixels that matched the near-white rule
    pub cleared: usize,
}

/// Decode an image file into RGBA8.
///
/// The format is sniffed from the file contents, so a mislabelled file still
/// decodes. Sources without alpha come back fully opaque.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage, RemoveError> {
    let reader = ImageReader::open(path)
        .map_err(RemoveError::Read)?
        .with_guessed_format()
        .map_err(RemoveError::Read)?;
    let img = reader.decode().map_err(RemoveError::Decode)?;
    Ok(img.into_rgba8())
}

/// Encode the full buffer as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RemoveError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).map_err(RemoveError::Encode)?;
    Ok(buf.into_inner())
}

/// Make every near-white pixel of `path` transparent and overwrite the file.
///
/// The PNG is encoded in memory before the original is touched. There is no
/// backup.
pub fn remove_background(path: impl AsRef<Path>) -> Result<Cleared, RemoveError> {
    let path = path.as_ref();

    let mut img = load_rgba(path)?;
    let (width, height) = img.dimensions();
    let cleared = clear_near_white(&mut img);

    let bytes = encode_png(&img)?;
    std::fs::write(path, bytes).map_err(RemoveError::Write)?;

    log::debug!(
        "{}: {}x{}, {} near-white pixels cleared",
        path.display(),
        width,
        height,
        cleared
    );

    Ok(Cleared {
        width,
        height,
        cleared,
    })
}
