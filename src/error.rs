use crate::annotation::Annotation;
use thiserror::Error;

/// Failure to reduce an annotation to a data-model type.
///
/// Raised when a plain annotation is not in the data-model vocabulary, or
/// when no member of a union resolves to a data-model type. There is no
/// partial or degraded result: the caller decides whether to skip the
/// function, abort generation, or surface a configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no data model type found in annotation: {annotation}")]
pub struct ResolutionError {
    /// The original input annotation, kept for diagnostics.
    pub annotation: Annotation,
}

impl ResolutionError {
    pub fn new(annotation: Annotation) -> Self {
        Self { annotation }
    }
}
