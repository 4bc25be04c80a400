//! Processing one pending record end-to-end.
//!
//! The record database, object storage and HTTP download are external
//! collaborators. They are reached only through the traits below, so the
//! job logic stays synchronous and testable with in-memory fakes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::JobConfig;
use crate::geometry::Mask;
use crate::pipeline::{OutputSet, Pipeline, PipelineError};

/// Annotation kind holding the screenshot location.
pub const SCREENSHOT_ANNOTATION: &str = "screenshot";

/// Annotation kind holding the facade outline.
pub const FACADE_ANNOTATION: &str = "facade";

/// Errors raised while processing a record.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Record store error: {0}")]
    Store(String),

    #[error("Object storage error: {0}")]
    Storage(String),

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Record {record} has no {kind} annotation")]
    MissingAnnotation { record: String, kind: &'static str },

    #[error("Malformed {kind} annotation: {source}")]
    InvalidAnnotation {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

pub type JobResult<T> = Result<T, JobError>;

/// Access to the record database.
pub trait RecordStore {
    /// Id of one record still awaiting masking, if any.
    fn next_pending(&mut self) -> JobResult<Option<String>>;

    /// Payload of the first annotation of `kind` on `record`.
    fn annotation(&self, record: &str, kind: &str) -> JobResult<Option<serde_json::Value>>;

    /// Attach a new annotation; this also marks the record as processed.
    fn add_annotation(
        &mut self,
        record: &str,
        kind: &str,
        payload: serde_json::Value,
    ) -> JobResult<()>;
}

/// Object storage that outputs are uploaded to.
pub trait ObjectStore {
    /// Upload one file and return its public URL.
    fn upload(
        &mut self,
        object: &ObjectKey<'_>,
        content_type: &str,
        bytes: &[u8],
    ) -> JobResult<String>;
}

/// Downloads source images.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> JobResult<Vec<u8>>;
}

/// Location of an uploaded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectKey<'a> {
    pub namespace: &'a str,
    pub record: &'a str,
    pub annotation_type: &'a str,
    pub filename: &'a str,
}

/// Payload of a `screenshot` annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotAnnotation {
    #[serde(rename = "screenshotUrl")]
    pub screenshot_url: String,
}

/// Payload of a `facade` annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeAnnotation {
    pub mask: Mask,
}

/// Payload written back once the variants are uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskAnnotation {
    pub urls: BTreeMap<String, String>,
}

/// Result of one `process_next` call.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    NoPendingRecord,
    Masked {
        record_id: String,
        urls: BTreeMap<String, String>,
    },
}

/// Pick one pending record, render its variants, upload them and annotate
/// the record with their URLs.
///
/// Nothing is uploaded when rendering fails, and the annotation is written
/// only after every upload succeeded.
pub fn process_next<R, S, F>(
    store: &mut R,
    storage: &mut S,
    fetcher: &F,
    config: &JobConfig,
) -> JobResult<JobOutcome>
where
    R: RecordStore + ?Sized,
    S: ObjectStore + ?Sized,
    F: ImageFetcher + ?Sized,
{
    let Some(record) = store.next_pending()? else {
        tracing::info!("No pending record");
        return Ok(JobOutcome::NoPendingRecord);
    };
    tracing::info!(record = %record, "Masking record");

    let screenshot: ScreenshotAnnotation = load_annotation(&*store, &record, SCREENSHOT_ANNOTATION)?;
    let facade: FacadeAnnotation = load_annotation(&*store, &record, FACADE_ANNOTATION)?;

    let source = fetcher.fetch(&screenshot.screenshot_url)?;
    tracing::debug!(record = %record, bytes = source.len(), "Fetched screenshot");

    let outputs = Pipeline::new(config.variants.clone()).run(&source, &facade.mask)?;

    let mut urls = BTreeMap::new();
    for (filename, bytes) in outputs.iter() {
        let key = ObjectKey {
            namespace: &config.storage_namespace,
            record: &record,
            annotation_type: &config.annotation_type,
            filename,
        };
        let url = storage.upload(&key, OutputSet::content_type(filename), bytes)?;
        tracing::debug!(record = %record, filename, url = %url, "Uploaded variant");
        urls.insert(filename.to_string(), url);
    }

    let payload = serde_json::to_value(MaskAnnotation { urls: urls.clone() })
        .map_err(|e| JobError::Store(e.to_string()))?;
    store.add_annotation(&record, &config.annotation_type, payload)?;

    tracing::info!(record = %record, uploads = urls.len(), "Record masked");
    Ok(JobOutcome::Masked {
        record_id: record,
        urls,
    })
}

fn load_annotation<R, T>(store: &R, record: &str, kind: &'static str) -> JobResult<T>
where
    R: RecordStore + ?Sized,
    T: for<'de> Deserialize<'de>,
{
    let value = store
        .annotation(record, kind)?
        .ok_or_else(|| JobError::MissingAnnotation {
            record: record.to_string(),
            kind,
        })?;
    serde_json::from_value(value).map_err(|source| JobError::InvalidAnnotation { kind, source })
}
