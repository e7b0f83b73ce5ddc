//! Data source access
//!
//! Mapping rules pull their input through the [`Access`] trait: execute a
//! configured source once and receive the full payload: delimited text
//! plus the RDF datatype inferred for each column. The payload carries the
//! datatype map with it, so the map can only be observed after the source
//! has actually been produced.
//!
//! [`RdbAccess`] is the relational implementation; the database vendor
//! profiles and the SQL driver seam live in this module too.

mod database_type;
mod driver;
mod rdb;

pub use database_type::{DatabaseType, UnknownDatabaseType};
pub use driver::{
    builtin_driver, DriverError, DriverResult, SqlColumn, SqlConnection, SqlDriver,
    SqlResultSet, SqliteDriver,
};
pub use rdb::{RdbAccess, NULL_HEADER};

use indexmap::IndexMap;
use std::io::{Cursor, Read};
use thiserror::Error;

/// Access errors
#[derive(Error, Debug)]
pub enum AccessError {
    /// No driver is compiled in or injected for the vendor
    #[error("No SQL driver available for {0}")]
    DriverNotFound(&'static str),

    /// Connection or execution failure in the database layer
    #[error("Database error: {0}")]
    Database(#[from] DriverError),

    /// CSV encoding failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AccessResult<T> = Result<T, AccessError>;

/// The payload of one executed source
///
/// Bytes are delimited text (CSV with a header row for relational
/// sources). The per-column datatype map is finalized by the time a value
/// of this type exists; population order is first-encounter order.
#[derive(Debug, Clone)]
pub struct SourceData {
    bytes: Vec<u8>,
    datatypes: IndexMap<String, String>,
}

impl SourceData {
    pub(crate) fn new(bytes: Vec<u8>, datatypes: IndexMap<String, String>) -> Self {
        Self { bytes, datatypes }
    }

    /// A reader over the payload bytes
    pub fn reader(&self) -> impl Read + '_ {
        Cursor::new(&self.bytes)
    }

    /// The payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the payload, keeping only the bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Inferred RDF datatype per column label
    ///
    /// Columns whose vendor type maps to no RDF datatype are absent.
    pub fn datatypes(&self) -> &IndexMap<String, String> {
        &self.datatypes
    }
}

/// Contract for producing tabular data with inferred column datatypes
pub trait Access {
    /// Execute the source and return its full payload.
    ///
    /// Failures (driver lookup, connection, execution, encoding) propagate
    /// to the caller; nothing is retried at this layer.
    fn fetch(&self) -> AccessResult<SourceData>;
}
