//! Shared fixtures for unit tests.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::decode::DecodedImage;
use crate::geometry::{Coordinate, Mask};

/// Opaque image with a horizontal red ramp and a vertical green ramp.
pub fn gradient_image(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            pixels.extend_from_slice(&[r, g, 128, 255]);
        }
    }
    DecodedImage::new(width, height, pixels)
}

/// Encode an image as a lossless RGBA PNG source file.
pub fn encode_source_png(image: &DecodedImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .unwrap();
    bytes
}

/// Encode an image as an RGB JPEG source file, dropping alpha.
pub fn encode_source_jpeg(image: &DecodedImage) -> Vec<u8> {
    let rgb: Vec<u8> = image
        .pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, 95)
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .unwrap();
    bytes
}

/// Build a mask from raw `(x, y)` pairs.
pub fn mask(raw: &[(f64, f64)]) -> Mask {
    Mask::new(raw.iter().copied().map(Coordinate::from).collect()).unwrap()
}
