//! Quad stores
//!
//! A quad store buffers generated RDF statements between mapping evaluation
//! and final serialization. The [`QuadStore`] trait is the abstract
//! contract; [`SimpleQuadStore`] is the list-backed in-memory
//! implementation that serializes N-Quads and nothing else.

mod simple;

pub use simple::SimpleQuadStore;

use crate::rdf::{Namespace, Quad, RdfObject, RdfPredicate, RdfSubject};
use std::collections::HashSet;
use std::io::Write;
use thiserror::Error;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// N-Quads format (.nq)
    NQuads,
    /// Turtle format (.ttl)
    Turtle,
    /// JSON-LD format (.jsonld)
    JsonLd,
    /// TriX format (.trix)
    TriX,
    /// TriG format (.trig)
    TriG,
}

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported format
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(RdfFormat),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// Contract for quad buffering and serialization
///
/// Statements missing any of subject, predicate or object are silently
/// dropped by `add_quad` (a missing graph is fine and means the default
/// graph). Implementations decide which serialization formats they support;
/// unsupported formats fail with [`SerializeError::UnsupportedFormat`].
pub trait QuadStore {
    /// Buffer a statement. No-op unless subject, predicate and object are
    /// all present.
    fn add_quad(
        &mut self,
        subject: Option<RdfSubject>,
        predicate: Option<RdfPredicate>,
        object: Option<RdfObject>,
        graph: Option<RdfSubject>,
    );

    /// Return the quads matching the given terms; a `None` argument matches
    /// anything.
    fn quads_matching(
        &self,
        subject: Option<&RdfSubject>,
        predicate: Option<&RdfPredicate>,
        object: Option<&RdfObject>,
        graph: Option<&RdfSubject>,
    ) -> Vec<Quad>;

    /// Return every buffered quad in insertion order.
    fn all_quads(&self) -> Vec<Quad> {
        self.quads_matching(None, None, None, None)
    }

    /// Number of buffered quads.
    fn len(&self) -> usize;

    /// Whether the buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every buffered quad.
    fn clear(&mut self);

    /// Write the buffer as N-Quads, one statement per line, insertion order.
    fn to_nquads(&self, out: &mut dyn Write) -> SerializeResult<()>;

    /// Write the buffer as Turtle.
    fn to_turtle(&self, out: &mut dyn Write) -> SerializeResult<()>;

    /// Write the buffer as JSON-LD.
    fn to_jsonld(&self, out: &mut dyn Write) -> SerializeResult<()>;

    /// Write the buffer as TriX.
    fn to_trix(&self, out: &mut dyn Write) -> SerializeResult<()>;

    /// Write the buffer as TriG.
    fn to_trig(&self, out: &mut dyn Write) -> SerializeResult<()>;

    /// Provide namespaces for serializers that emit prefixed formats.
    fn set_namespaces(&mut self, namespaces: HashSet<Namespace>);
}
