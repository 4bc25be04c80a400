//! Encoder error type.

use thiserror::Error;

/// Errors that can occur while resizing or encoding an output variant.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Validate dimensions and buffer length before handing pixels to a codec.
pub(crate) fn check_buffer(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_buffer() {
        assert!(check_buffer(&[0; 24], 3, 2, 4).is_ok());
        assert!(matches!(
            check_buffer(&[0; 23], 3, 2, 4),
            Err(EncodeError::InvalidPixelData {
                expected: 24,
                actual: 23
            })
        ));
        assert!(matches!(
            check_buffer(&[], 0, 2, 4),
            Err(EncodeError::InvalidDimensions { width: 0, height: 2 })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = EncodeError::EncodingFailed {
            format: "PNG",
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "PNG encoding failed: boom");
    }
}
