//! The two output encodings of a composited image.

use serde::{Deserialize, Serialize};

use super::{encode_jpeg, encode_png, flatten, resize_to_width, EncodeError};
use crate::composite::CompositedImage;
use crate::config::VariantConfig;

/// Output encoding of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless, keeps transparency.
    Png,
    /// Lossy, transparency flattened onto the background color.
    Jpeg,
}

impl OutputFormat {
    /// Both formats, in output order.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Png, OutputFormat::Jpeg];

    /// File extension used in output names.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    /// Infer the format from a filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

/// Resize to `config.target_width` and encode as PNG, keeping alpha.
pub fn to_png_variant(
    image: &CompositedImage,
    config: &VariantConfig,
) -> Result<Vec<u8>, EncodeError> {
    let resized = resize_to_width(image, config.target_width, config.filter)?;
    encode_png(&resized.pixels, resized.width, resized.height)
}

/// Resize to `config.target_width`, flatten onto `config.background` and
/// encode as JPEG at `config.jpeg_quality`.
pub fn to_jpg_variant(
    image: &CompositedImage,
    config: &VariantConfig,
) -> Result<Vec<u8>, EncodeError> {
    let resized = resize_to_width(image, config.target_width, config.filter)?;
    let rgb = flatten(&resized, config.background);
    encode_jpeg(&rgb, resized.width, resized.height, config.jpeg_quality)
}

/// Encode `image` in the given format.
pub fn encode_variant(
    image: &CompositedImage,
    format: OutputFormat,
    config: &VariantConfig,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Png => to_png_variant(image, config),
        OutputFormat::Jpeg => to_jpg_variant(image, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_image, DecodedImage};
    use crate::encode::FilterType;
    use crate::test_support::gradient_image;

    fn small_config(target_width: u32) -> VariantConfig {
        VariantConfig {
            target_width,
            ..VariantConfig::default()
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.content_type(), "image/png");
        assert_eq!(OutputFormat::Jpeg.content_type(), "image/jpeg");
    }

    #[test]
    fn test_format_from_filename() {
        assert_eq!(OutputFormat::from_filename("mask.png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_filename("square.jpg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_filename("a.JPEG"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_filename("contain"), None);
        assert_eq!(OutputFormat::from_filename("x.gif"), None);
    }

    #[test]
    fn test_png_variant_width_and_alpha() {
        let mut img = gradient_image(40, 20);
        // Clear the top-left pixel
        img.pixels[..4].copy_from_slice(&[0, 0, 0, 0]);

        let config = VariantConfig {
            filter: FilterType::Nearest,
            ..small_config(80)
        };
        let png = to_png_variant(&img, &config).unwrap();
        let decoded = decode_image(&png).unwrap();

        assert_eq!((decoded.width, decoded.height), (80, 40));
        assert_eq!(decoded.pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_jpg_variant_flattens_onto_white() {
        let img = DecodedImage::filled(10, 10, [0, 0, 0, 0]);

        let jpg = to_jpg_variant(&img, &small_config(20)).unwrap();
        let decoded = decode_image(&jpg).unwrap();

        assert_eq!((decoded.width, decoded.height), (20, 20));
        for px in decoded.pixels.chunks_exact(4) {
            assert_eq!(px[3], 255);
            assert!(px[0] > 250 && px[1] > 250 && px[2] > 250, "expected white, got {:?}", px);
        }
    }

    #[test]
    fn test_variants_are_idempotent() {
        let img = gradient_image(33, 17);
        let config = small_config(50);

        for format in OutputFormat::ALL {
            let a = encode_variant(&img, format, &config).unwrap();
            let b = encode_variant(&img, format, &config).unwrap();
            assert_eq!(a, b, "{:?} output should be byte-identical", format);
        }
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let config = VariantConfig::default();
        for format in OutputFormat::ALL {
            let result = encode_variant(&DecodedImage::empty(), format, &config);
            assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
        }
    }

    #[test]
    fn test_zero_target_width_is_rejected() {
        let result = to_png_variant(&gradient_image(4, 4), &small_config(0));
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}
