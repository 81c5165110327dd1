//! Type-signature resolution for service generation.
//!
//! Given a function's declared annotations, this crate determines the single
//! canonical data-model type a generated service should use to describe the
//! function's result, and classifies parameter annotations as wire-supported
//! or not. What counts as a data-model type is decided by an injected
//! [`DataModelRegistry`]; this crate only performs the type algebra.

pub mod annotation;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod signature;

pub use annotation::{Annotation, PlainType};
pub use error::ResolutionError;
pub use registry::{DataModelRegistry, InMemoryRegistry};
pub use resolver::resolve_output_type;
pub use signature::{is_primitive_annotation, FunctionSignature, PRIMITIVE_TYPE_NAMES};
