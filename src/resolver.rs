//! Output type resolution
//!
//! Reduces a possibly-compound return annotation to the single data-model
//! type a generated service should expose for that function. Unions are
//! unwrapped recursively: the `Optional` convention (a union carrying the
//! absent marker) reduces to its real member, and among several real
//! alternatives the first one that resolves to a data-model type wins.

use crate::annotation::{Annotation, PlainType};
use crate::error::ResolutionError;
use crate::registry::DataModelRegistry;
use tracing::{debug, trace};

/// Resolve `annotation` to the canonical data-model output type it denotes.
///
/// Union members are tried in declaration order and the first member that
/// itself resolves to a data-model type is returned. This is a first-match
/// policy, not a uniqueness check: callers declare the data-model type first
/// and list scalar alternatives only to satisfy the host type checker, so
/// later qualifying members are never inspected.
///
/// Fails with [`ResolutionError`] carrying the original annotation when no
/// data-model type can be found.
///
/// # Examples
///
/// ```
/// use signature_resolver::{resolve_output_type, Annotation, InMemoryRegistry};
///
/// let registry = InMemoryRegistry::with_types(["SampleOutputType"]);
///
/// let annotation = Annotation::union([
///     Annotation::optional(Annotation::plain("SampleOutputType")),
///     Annotation::plain("str"),
/// ]);
/// let resolved = resolve_output_type(&annotation, &registry).unwrap();
/// assert_eq!(resolved.name(), "SampleOutputType");
/// ```
pub fn resolve_output_type(
    annotation: &Annotation,
    registry: &dyn DataModelRegistry,
) -> Result<PlainType, ResolutionError> {
    debug!(annotation = %annotation, "Resolving output annotation");
    resolve_recursive(annotation, registry)
        .ok_or_else(|| ResolutionError::new(annotation.clone()))
}

fn resolve_recursive(
    annotation: &Annotation,
    registry: &dyn DataModelRegistry,
) -> Option<PlainType> {
    match annotation {
        Annotation::Union(members) => {
            // Dropping the absent marker implements Optional-unwrapping.
            let real_members: Vec<&Annotation> =
                members.iter().filter(|m| !m.is_none_marker()).collect();

            if real_members.len() == 1 {
                return resolve_recursive(real_members[0], registry);
            }

            // First member resolving to a data-model type wins, in
            // declaration order.
            for member in real_members {
                trace!(member = %member, "Trying union member");
                if let Some(ty) = resolve_recursive(member, registry) {
                    debug!(resolved = %ty, "Union member resolved");
                    return Some(ty);
                }
            }
            None
        }
        Annotation::Plain(ty) => {
            if registry.is_data_model_type(ty) {
                Some(ty.clone())
            } else {
                None
            }
        }
        Annotation::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;

    fn sample_registry() -> InMemoryRegistry {
        InMemoryRegistry::with_types(["SampleOutputType", "OtherOutputType"])
    }

    fn dm() -> Annotation {
        Annotation::plain("SampleOutputType")
    }

    #[test]
    fn test_plain_data_model_type_resolves_to_itself() {
        let registry = sample_registry();
        let resolved = resolve_output_type(&dm(), &registry).unwrap();
        assert_eq!(resolved.name(), "SampleOutputType");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let registry = sample_registry();
        let first = resolve_output_type(&dm(), &registry).unwrap();
        let second = resolve_output_type(&Annotation::Plain(first.clone()), &registry).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_union_prefers_first_data_model_member() {
        let registry = sample_registry();
        let annotation = Annotation::union([dm(), Annotation::plain("str")]);
        let resolved = resolve_output_type(&annotation, &registry).unwrap();
        assert_eq!(resolved.name(), "SampleOutputType");
    }

    #[test]
    fn test_union_skips_non_qualifying_members() {
        let registry = sample_registry();
        let annotation = Annotation::union([Annotation::plain("str"), dm()]);
        let resolved = resolve_output_type(&annotation, &registry).unwrap();
        assert_eq!(resolved.name(), "SampleOutputType");
    }

    #[test]
    fn test_union_first_match_among_competing_candidates() {
        let registry = sample_registry();
        let annotation = Annotation::union([
            Annotation::plain("OtherOutputType"),
            Annotation::plain("SampleOutputType"),
        ]);
        let resolved = resolve_output_type(&annotation, &registry).unwrap();
        assert_eq!(resolved.name(), "OtherOutputType");
    }

    #[test]
    fn test_optional_unwraps_to_inner_type() {
        let registry = sample_registry();
        let annotation = Annotation::optional(dm());
        let resolved = resolve_output_type(&annotation, &registry).unwrap();
        assert_eq!(resolved.name(), "SampleOutputType");
    }

    #[test]
    fn test_optional_member_order_is_irrelevant() {
        let registry = sample_registry();
        let annotation = Annotation::union([Annotation::None, dm()]);
        let resolved = resolve_output_type(&annotation, &registry).unwrap();
        assert_eq!(resolved.name(), "SampleOutputType");
    }

    #[test]
    fn test_optional_nested_in_union() {
        let registry = sample_registry();
        let annotation =
            Annotation::union([Annotation::optional(dm()), Annotation::plain("str")]);
        let resolved = resolve_output_type(&annotation, &registry).unwrap();
        assert_eq!(resolved.name(), "SampleOutputType");
    }

    #[test]
    fn test_nested_union_member_resolves() {
        let registry = sample_registry();
        let inner = Annotation::union([Annotation::plain("str"), Annotation::plain("int")]);
        let annotation = Annotation::union([inner, dm()]);
        let resolved = resolve_output_type(&annotation, &registry).unwrap();
        assert_eq!(resolved.name(), "SampleOutputType");
    }

    #[test]
    fn test_primitive_type_fails() {
        let registry = sample_registry();
        let annotation = Annotation::plain("str");
        let err = resolve_output_type(&annotation, &registry).unwrap_err();
        assert_eq!(err.annotation, annotation);
    }

    #[test]
    fn test_all_primitive_union_fails() {
        let registry = sample_registry();
        let annotation = Annotation::union([Annotation::plain("str"), Annotation::plain("int")]);
        let err = resolve_output_type(&annotation, &registry).unwrap_err();
        assert_eq!(err.annotation, annotation);
    }

    #[test]
    fn test_optional_primitive_fails_with_original_annotation() {
        let registry = sample_registry();
        let annotation = Annotation::optional(Annotation::plain("str"));
        let err = resolve_output_type(&annotation, &registry).unwrap_err();
        // The error carries the input as declared, not the unwrapped member.
        assert_eq!(err.annotation, annotation);
    }

    #[test]
    fn test_bare_none_marker_fails() {
        let registry = sample_registry();
        assert!(resolve_output_type(&Annotation::none(), &registry).is_err());
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let registry = InMemoryRegistry::new();
        assert!(resolve_output_type(&dm(), &registry).is_err());
    }
}
