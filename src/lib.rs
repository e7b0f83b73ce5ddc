//! Graphweave: relational-to-RDF mapping core
//!
//! The in-memory intermediate layer of an RDF-generation pipeline:
//!
//! - **Quad stores** ([`store`]) buffer generated statements during mapping
//!   evaluation and emit them as N-Quads. The bundled
//!   [`store::SimpleQuadStore`] is list-backed, deduplicates on request,
//!   and deliberately refuses the richer serialization formats.
//! - **Source access** ([`access`]) pulls rows out of a configured
//!   relational database and normalizes them into typed CSV: one header
//!   row, one record per source row, and an inferred XSD datatype per
//!   column for the mapping rules to attach to generated literals.
//! - **RDF values** ([`rdf`]) are thin wrappers over oxrdf with canonical
//!   N-Quads lexical forms.
//!
//! Mapping-rule evaluation, argument parsing and output-file writing are
//! collaborators living above this crate.
//!
//! # Example
//!
//! ```rust
//! use graphweave::rdf::{Literal, NamedNode, RdfPredicate};
//! use graphweave::store::{QuadStore, SimpleQuadStore};
//!
//! let mut store = SimpleQuadStore::new();
//! store.add_quad(
//!     Some(NamedNode::new("http://example.org/alice").unwrap().into()),
//!     Some(RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap()),
//!     Some(Literal::new_simple_literal("Alice").into()),
//!     None,
//! );
//!
//! let mut out = Vec::new();
//! store.to_nquads(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("\"Alice\".\n"));
//! ```

pub mod access;
pub mod rdf;
pub mod store;

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
