//! Decoding of encoded source bytes into RGBA pixels.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode a source image from bytes into RGBA8 pixels.
///
/// The format is sniffed from the leading bytes, so callers do not need to
/// know whether the screenshot is PNG, JPEG or WebP.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if decoding fails part-way.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = open(bytes)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let decoded = DecodedImage::from_rgba_image(img.into_rgba8());
    tracing::debug!(
        width = decoded.width,
        height = decoded.height,
        bytes = bytes.len(),
        "decoded source image"
    );
    Ok(decoded)
}

fn open(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }
    Ok(reader)
}
