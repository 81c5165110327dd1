//! Function signatures and parameter classification
//!
//! The generation pipeline describes each function by its parameter
//! annotations and return annotation. Parameters are kept only when they can
//! be carried on the wire: whitelisted primitive scalars, registered
//! data-model types, and unions/optionals built from those.

use crate::annotation::{Annotation, PlainType};
use crate::error::ResolutionError;
use crate::registry::DataModelRegistry;
use crate::resolver::resolve_output_type;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Scalar type names supported directly in generated request schemas.
pub const PRIMITIVE_TYPE_NAMES: &[&str] = &["bool", "int", "float", "str", "bytes"];

fn is_primitive_name(name: &str) -> bool {
    PRIMITIVE_TYPE_NAMES.contains(&name)
}

/// Whether `annotation` is representable in a generated request schema.
///
/// True for whitelisted primitive scalars, registered data-model types, the
/// absent marker, and unions whose every member qualifies (which covers the
/// `Optional` convention).
pub fn is_primitive_annotation(
    annotation: &Annotation,
    registry: &dyn DataModelRegistry,
) -> bool {
    match annotation {
        Annotation::Plain(ty) => is_primitive_name(ty.name()) || registry.is_data_model_type(ty),
        Annotation::Union(members) => members
            .iter()
            .all(|m| is_primitive_annotation(m, registry)),
        Annotation::None => true,
    }
}

/// A function's declared signature, as the pipeline describes it externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    /// Parameters in declaration order; ordering is preserved so generated
    /// schemas are deterministic.
    pub parameters: IndexMap<String, Annotation>,
    pub return_type: Annotation,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, return_type: Annotation) -> Self {
        Self {
            name: name.into(),
            parameters: IndexMap::new(),
            return_type,
        }
    }

    /// Add a parameter, keeping declaration order.
    pub fn with_parameter(mut self, name: impl Into<String>, annotation: Annotation) -> Self {
        self.parameters.insert(name.into(), annotation);
        self
    }

    /// Parameters that can be carried in a generated request schema.
    ///
    /// Unsupported parameters are dropped with a warning rather than failing
    /// the whole signature; the function stays callable through whatever
    /// parameters remain.
    pub fn primitive_parameters(
        &self,
        registry: &dyn DataModelRegistry,
    ) -> IndexMap<String, Annotation> {
        let mut supported = IndexMap::new();
        for (name, annotation) in &self.parameters {
            if is_primitive_annotation(annotation, registry) {
                supported.insert(name.clone(), annotation.clone());
            } else {
                warn!(
                    function = %self.name,
                    parameter = %name,
                    annotation = %annotation,
                    "Dropping parameter with unsupported type"
                );
            }
        }
        supported
    }

    /// The canonical data-model type of this function's result.
    pub fn output_type(
        &self,
        registry: &dyn DataModelRegistry,
    ) -> Result<PlainType, ResolutionError> {
        resolve_output_type(&self.return_type, registry)
    }
}
