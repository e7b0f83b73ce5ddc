//! RDF namespace values
//!
//! A namespace binds a prefix to an IRI. Stores accept a set of namespaces
//! for serializers that emit prefixed formats; the in-memory store ignores
//! them (N-Quads has no prefix section).

use serde::{Deserialize, Serialize};

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_namespace_set() {
        let mut namespaces = HashSet::new();
        namespaces.insert(Namespace::new("xsd", "http://www.w3.org/2001/XMLSchema#"));
        namespaces.insert(Namespace::new("xsd", "http://www.w3.org/2001/XMLSchema#"));
        namespaces.insert(Namespace::new("foaf", "http://xmlns.com/foaf/0.1/"));

        assert_eq!(namespaces.len(), 2);
    }
}
