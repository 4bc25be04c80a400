//! Facade Core - facade variant rendering
//!
//! Turns a street-level photograph and a facade outline into six display
//! images: the exact silhouette, a square crop and a bounding-box crop, each
//! as transparent PNG and flattened JPEG. Everything here is synchronous and
//! free of I/O; fetching, storage and record bookkeeping live behind the
//! traits in [`job`].

pub mod composite;
pub mod config;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod job;
pub mod pipeline;
pub mod raster;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{JobConfig, VariantConfig};
pub use encode::{FilterType, OutputFormat};
pub use geometry::{derive_shapes, Coordinate, Mask, MaskError, Shape, ShapeKind};
pub use job::{process_next, JobError, JobOutcome};
pub use pipeline::{save, save_with_config, OutputSet, Pipeline, PipelineError};
