//! Type annotation representation
//!
//! Annotations are a closed tagged variant mirroring what a host type-hinting
//! system produces for a function signature: a plain named type, a union of
//! alternatives, or the "absent" marker. `Optional[T]` arrives in the
//! conventional encoding `Union([T, None])`; nothing here treats optionality
//! as a distinct constructor.
//!
//! Values are immutable and constructed fresh per resolution call. They carry
//! no source spans: the pipeline builds them from signature metadata, not
//! from parsed source text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete named type with no further structure.
///
/// Identity is the type's stable name as the host system reports it
/// (e.g. `"SampleOutputType"`, `"str"`). Whether a plain type is part of the
/// service's data-model vocabulary is decided by a
/// [`DataModelRegistry`](crate::registry::DataModelRegistry), never by the
/// type itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlainType {
    name: String,
}

impl PlainType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PlainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for PlainType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A type annotation as declared on a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// A concrete type with no further structure.
    Plain(PlainType),
    /// An ordered choice of two or more member annotations.
    Union(Vec<Annotation>),
    /// The host language's "absent" marker type. Only meaningful inside a
    /// union (the `Optional` convention); on its own it names no value type.
    None,
}

impl Annotation {
    /// A plain annotation for the named type.
    pub fn plain(name: impl Into<String>) -> Self {
        Annotation::Plain(PlainType::new(name))
    }

    /// A union of the given members, in declaration order.
    pub fn union(members: impl IntoIterator<Item = Annotation>) -> Self {
        Annotation::Union(members.into_iter().collect())
    }

    /// `Optional[inner]` in its conventional union-with-None encoding.
    pub fn optional(inner: Annotation) -> Self {
        Annotation::Union(vec![inner, Annotation::None])
    }

    /// The bare absent marker.
    pub fn none() -> Self {
        Annotation::None
    }

    /// Whether this annotation is the absent marker itself.
    pub fn is_none_marker(&self) -> bool {
        matches!(self, Annotation::None)
    }

    /// The plain type inside, if this is a plain annotation.
    pub fn as_plain(&self) -> Option<&PlainType> {
        match self {
            Annotation::Plain(ty) => Some(ty),
            _ => None,
        }
    }
}

impl From<PlainType> for Annotation {
    fn from(ty: PlainType) -> Self {
        Annotation::Plain(ty)
    }
}

impl fmt::Display for Annotation {
    /// Formats the annotation the way it would read in a signature,
    /// e.g. `SampleOutputType | str` or `Sample | None`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Plain(ty) => write!(f, "{}", ty),
            Annotation::Union(members) => {
                let parts: Vec<String> = members.iter().map(|m| m.to_string()).collect();
                write!(f, "{}", parts.join(" | "))
            }
            Annotation::None => write!(f, "None"),
        }
    }
}
