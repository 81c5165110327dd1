//! Data-model type registry
//!
//! The resolver never decides what counts as a data-model type; it consults a
//! [`DataModelRegistry`]. The trait keeps the resolver independently testable
//! with synthetic registries, and [`InMemoryRegistry`] is the default
//! implementation a pipeline shares across its generation passes.

use crate::annotation::PlainType;
use rustc_hash::FxHashSet;
use std::sync::RwLock;
use tracing::debug;

/// Membership predicate for the service's canonical output vocabulary.
pub trait DataModelRegistry {
    /// Whether `ty` is registered as a data-model type.
    fn is_data_model_type(&self, ty: &PlainType) -> bool;
}

/// Thread-safe in-memory registry of data-model type names.
///
/// Registration happens while the pipeline discovers modules; lookups happen
/// concurrently from any number of resolution calls afterwards.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    types: RwLock<FxHashSet<String>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an iterator of type names.
    pub fn with_types<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = Self::new();
        for name in names {
            registry.register(name);
        }
        registry
    }

    /// Register a type name as part of the data-model vocabulary.
    pub fn register(&self, name: impl Into<String>) {
        let name = name.into();
        debug!(type_name = %name, "Registering data model type");
        self.types.write().unwrap().insert(name);
    }

    /// Whether the named type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.read().unwrap().contains(name)
    }

    pub fn len(&self) -> usize {
        self.types.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().unwrap().is_empty()
    }
}

impl DataModelRegistry for InMemoryRegistry {
    fn is_data_model_type(&self, ty: &PlainType) -> bool {
        self.contains(ty.name())
    }
}
