//! RDF data model
//!
//! This module provides the RDF values the rest of the crate works with:
//! - terms (IRIs, blank nodes, literals) wrapping the oxrdf primitives
//! - quads (subject-predicate-object plus optional named graph)
//! - namespaces (prefix → IRI bindings, consumed opaquely by stores)
//! - well-known XSD datatype IRIs
//!
//! # Example
//!
//! ```rust
//! use graphweave::rdf::{NamedNode, RdfPredicate, Literal, Quad};
//!
//! let subject = NamedNode::new("http://example.org/alice").unwrap();
//! let predicate = RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let object = Literal::new_simple_literal("Alice");
//!
//! let quad = Quad::new(subject.into(), predicate, object.into(), None);
//! assert!(quad.is_in_default_graph());
//! ```

mod namespace;
mod types;
pub mod vocab;

pub use namespace::Namespace;
pub use types::{
    BlankNode, Literal, NamedNode, Quad, RdfError, RdfObject, RdfPredicate, RdfResult,
    RdfSubject, RdfTerm,
};
