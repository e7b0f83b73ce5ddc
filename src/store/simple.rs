//! List-backed in-memory quad store

use super::{QuadStore, RdfFormat, SerializeError, SerializeResult};
use crate::rdf::{Namespace, Quad, RdfObject, RdfPredicate, RdfSubject};
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// In-memory quad store backed by a plain list
///
/// Insertion order is significant: iteration and N-Quads line order follow
/// it. There is no secondary index, so membership checks are O(n).
///
/// Only the N-Quads serialization is supported; the prefixed and structured
/// formats (Turtle, JSON-LD, TriX, TriG) fail with
/// [`SerializeError::UnsupportedFormat`] and require a different store
/// implementation. `set_namespaces` is consequently a no-op.
///
/// Not safe for concurrent mutation; callers sharing a store must serialize
/// access themselves.
#[derive(Debug, Clone, Default)]
pub struct SimpleQuadStore {
    quads: Vec<Quad>,
}

impl SimpleQuadStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given quads
    pub fn from_quads(quads: Vec<Quad>) -> Self {
        Self { quads }
    }

    /// The buffered quads, in insertion order
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Rebuild the buffer keeping only the first occurrence of each quad.
    ///
    /// Two quads are the same statement only when subject, predicate,
    /// object and graph all match; a quad in the default graph never merges
    /// with one carrying a named graph. Relative order of the survivors is
    /// preserved. Quadratic scan, acceptable for batch-sized buffers.
    pub fn remove_duplicates(&mut self) {
        let mut deduplicated: Vec<Quad> = Vec::with_capacity(self.quads.len());

        for quad in self.quads.drain(..) {
            if !deduplicated.contains(&quad) {
                deduplicated.push(quad);
            }
        }

        self.quads = deduplicated;
    }
}

impl QuadStore for SimpleQuadStore {
    /// Buffer a statement, silently dropping partial ones.
    ///
    /// A statement missing its subject, predicate or object cannot be
    /// serialized and is not an error; it is discarded without a trace.
    fn add_quad(
        &mut self,
        subject: Option<RdfSubject>,
        predicate: Option<RdfPredicate>,
        object: Option<RdfObject>,
        graph: Option<RdfSubject>,
    ) {
        if let (Some(subject), Some(predicate), Some(object)) = (subject, predicate, object) {
            self.quads.push(Quad::new(subject, predicate, object, graph));
        }
    }

    /// Returns the full buffer regardless of the filter arguments.
    ///
    /// This implementation does not filter; the arguments exist to satisfy
    /// the interface, and callers needing pattern semantics must match
    /// against the result themselves (or use a filtering store variant).
    fn quads_matching(
        &self,
        _subject: Option<&RdfSubject>,
        _predicate: Option<&RdfPredicate>,
        _object: Option<&RdfObject>,
        _graph: Option<&RdfSubject>,
    ) -> Vec<Quad> {
        self.quads.clone()
    }

    fn len(&self) -> usize {
        self.quads.len()
    }

    fn clear(&mut self) {
        self.quads.clear();
    }

    fn to_nquads(&self, out: &mut dyn Write) -> SerializeResult<()> {
        debug!("Serializing {} quads as N-Quads", self.quads.len());

        for quad in &self.quads {
            writeln!(out, "{}", quad)?;
        }

        Ok(())
    }

    fn to_turtle(&self, _out: &mut dyn Write) -> SerializeResult<()> {
        Err(SerializeError::UnsupportedFormat(RdfFormat::Turtle))
    }

    fn to_jsonld(&self, _out: &mut dyn Write) -> SerializeResult<()> {
        Err(SerializeError::UnsupportedFormat(RdfFormat::JsonLd))
    }

    fn to_trix(&self, _out: &mut dyn Write) -> SerializeResult<()> {
        Err(SerializeError::UnsupportedFormat(RdfFormat::TriX))
    }

    fn to_trig(&self, _out: &mut dyn Write) -> SerializeResult<()> {
        Err(SerializeError::UnsupportedFormat(RdfFormat::TriG))
    }

    /// No-op: namespaces only matter for prefixed serializations.
    fn set_namespaces(&mut self, _namespaces: HashSet<Namespace>) {}
}
