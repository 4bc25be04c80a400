//! The facade variant pipeline.
//!
//! For each of the three derived shapes (mask, square, contain) the pipeline
//! runs a strictly ordered chain:
//!
//! 1. Rasterize the shape at source dimensions
//! 2. Alpha-in blend with the source
//! 3. Trim transparent borders
//! 4. Resize to the target width and encode PNG and JPEG
//!
//! The shapes share nothing but the read-only decoded source, so a failure
//! in any of them aborts the whole run and no partial output is returned.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::composite::{apply_mask, trim, CompositedImage};
use crate::config::VariantConfig;
use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::{encode_variant, EncodeError, OutputFormat};
use crate::geometry::{derive_shapes, Mask, MaskError, Shape, ShapeKind};
use crate::raster::rasterize;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The mask is unusable, or a derived shape covers no pixels.
    #[error("Invalid mask: {0}")]
    InvalidMask(#[from] MaskError),

    /// The source bytes could not be decoded.
    #[error("Failed to decode source image: {0}")]
    DecodeFailure(#[from] DecodeError),

    /// A variant could not be resized or encoded.
    #[error("Failed to encode output: {0}")]
    EncodeFailure(#[from] EncodeError),

    /// The caller cancelled the run.
    #[error("Pipeline cancelled")]
    Cancelled,
}

/// The six encoded outputs of one run, keyed by filename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSet {
    files: BTreeMap<String, Vec<u8>>,
}

impl OutputSet {
    /// Number of outputs a complete run produces.
    pub const LEN: usize = ShapeKind::ALL.len() * OutputFormat::ALL.len();

    /// Filename for a shape/format pair, e.g. `square.jpg`.
    pub fn filename(kind: ShapeKind, format: OutputFormat) -> String {
        format!("{}.{}", kind.as_str(), format.extension())
    }

    /// All six filenames in output order.
    pub fn filenames() -> Vec<String> {
        ShapeKind::ALL
            .iter()
            .flat_map(|&kind| OutputFormat::ALL.map(|format| Self::filename(kind, format)))
            .collect()
    }

    fn insert(&mut self, kind: ShapeKind, format: OutputFormat, bytes: Vec<u8>) {
        self.files.insert(Self::filename(kind, format), bytes);
    }

    pub fn get(&self, filename: &str) -> Option<&[u8]> {
        self.files.get(filename).map(Vec::as_slice)
    }

    pub fn variant(&self, kind: ShapeKind, format: OutputFormat) -> Option<&[u8]> {
        self.get(&Self::filename(kind, format))
    }

    /// Content type for an output filename (`image/jpeg` for `.jpg`, else `image/png`).
    pub fn content_type(filename: &str) -> &'static str {
        OutputFormat::from_filename(filename)
            .unwrap_or(OutputFormat::Png)
            .content_type()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total encoded size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<u8>> {
        self.files
    }
}

impl IntoIterator for OutputSet {
    type Item = (String, Vec<u8>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

/// A configured pipeline with optional cooperative cancellation.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: VariantConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl Pipeline {
    pub fn new(config: VariantConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Abort between stages once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Run the full pipeline on encoded source bytes.
    pub fn run(&self, source: &[u8], mask: &Mask) -> Result<OutputSet, PipelineError> {
        self.checkpoint()?;
        let image = decode_image(source)?;

        let mut outputs = OutputSet::default();
        for (kind, shape) in derive_shapes(image.width, image.height, mask) {
            let composited = self.render_shape(&image, kind, &shape)?;

            for format in OutputFormat::ALL {
                self.checkpoint()?;
                let bytes = encode_variant(&composited, format, &self.config)?;
                tracing::debug!(
                    shape = %kind,
                    format = format.extension(),
                    bytes = bytes.len(),
                    "encoded variant"
                );
                outputs.insert(kind, format, bytes);
            }
        }

        tracing::info!(
            width = image.width,
            height = image.height,
            outputs = outputs.len(),
            bytes = outputs.total_bytes(),
            "facade variants rendered"
        );
        Ok(outputs)
    }

    /// Rasterize, composite and trim one shape against the decoded source.
    ///
    /// # Errors
    ///
    /// Returns `MaskError::EmptyRegion` when the shape covers no visible
    /// pixel, since an empty image cannot be resized to the display width.
    pub fn render_shape(
        &self,
        source: &DecodedImage,
        kind: ShapeKind,
        shape: &Shape,
    ) -> Result<CompositedImage, PipelineError> {
        self.checkpoint()?;
        let raster = rasterize(source.width, source.height, shape);

        self.checkpoint()?;
        let composited = apply_mask(source, &raster);

        self.checkpoint()?;
        let trimmed = trim(&composited);
        if trimmed.is_empty() {
            return Err(MaskError::EmptyRegion { shape: kind }.into());
        }

        tracing::debug!(
            shape = %kind,
            covered = raster.covered_pixels(),
            edge = raster.partial_pixels(),
            width = trimmed.width,
            height = trimmed.height,
            "composited shape"
        );
        Ok(trimmed)
    }

    fn checkpoint(&self) -> Result<(), PipelineError> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(PipelineError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Render all six variants with the default configuration.
pub fn save(source: &[u8], mask: &Mask) -> Result<OutputSet, PipelineError> {
    save_with_config(source, mask, &VariantConfig::default())
}

/// Render all six variants with an explicit configuration.
pub fn save_with_config(
    source: &[u8],
    mask: &Mask,
    config: &VariantConfig,
) -> Result<OutputSet, PipelineError> {
    Pipeline::new(config.clone()).run(source, mask)
}
