//! SQL execution facility
//!
//! The seam between the relational adapter and an actual database engine:
//! connect with a URL, execute one statement, hand back a materialized
//! result set with column metadata. Connections release their resources
//! exactly once, when dropped; teardown failures are swallowed there and
//! never surface.
//!
//! Only the SQLite profile ships a compiled-in driver. Remote vendors take
//! a caller-provided [`SqlDriver`] implementation.

use super::DatabaseType;
use rusqlite::types::ValueRef;
use rusqlite::OpenFlags;
use std::fmt::Write as _;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Driver errors
#[derive(Error, Debug)]
pub enum DriverError {
    /// Failed to open the connection
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Statement execution or result retrieval failed
    #[error("Query execution failed: {0}")]
    Execution(String),
}

pub type DriverResult<T> = Result<T, DriverError>;

/// Metadata of one result-set column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlColumn {
    /// Column label as the engine reports it; may be empty
    pub label: String,
    /// Vendor type name as the engine reports it; may be empty
    pub type_name: String,
}

/// A fully materialized query result
///
/// `None` cells are SQL NULLs. Every row has one cell per column.
#[derive(Debug, Clone, Default)]
pub struct SqlResultSet {
    /// Column metadata, in result order
    pub columns: Vec<SqlColumn>,
    /// Row data as text
    pub rows: Vec<Vec<Option<String>>>,
}

/// An open database connection
pub trait SqlConnection {
    /// Execute a single statement and materialize its result set.
    ///
    /// The statement is passed through verbatim; there is no parameter
    /// binding at this layer.
    fn execute_query(&mut self, sql: &str) -> DriverResult<SqlResultSet>;
}

/// A database driver: turns a connection URL into a connection
pub trait SqlDriver: Send + Sync {
    /// Driver identifier, matching [`DatabaseType::driver_name`]
    fn name(&self) -> &'static str;

    /// Open a connection to the given URL
    fn connect(&self, url: &str) -> DriverResult<Box<dyn SqlConnection>>;
}

/// Look up the compiled-in driver for a vendor, if there is one
pub fn builtin_driver(database_type: DatabaseType) -> Option<Arc<dyn SqlDriver>> {
    match database_type {
        DatabaseType::Sqlite => Some(Arc::new(SqliteDriver)),
        _ => None,
    }
}

/// SQLite driver backed by rusqlite
///
/// Accepts the URLs the adapter builds for the SQLite profile
/// (`jdbc:sqlite://<path>`, optionally with query parameters, which SQLite
/// has no use for and which are dropped). The underlying connection closes
/// when the boxed connection is dropped.
pub struct SqliteDriver;

impl SqlDriver for SqliteDriver {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn connect(&self, url: &str) -> DriverResult<Box<dyn SqlConnection>> {
        let path = sqlite_path(url)?;

        debug!("Opening SQLite database at {}", path);

        // No CREATE flag: a missing database file is a connection error,
        // not an empty database.
        let connection = rusqlite::Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| DriverError::Connection(e.to_string()))?;

        Ok(Box::new(SqliteConnection { connection }))
    }
}

/// Extract the filesystem path from a SQLite connection URL
fn sqlite_path(url: &str) -> DriverResult<&str> {
    let rest = url
        .strip_prefix("jdbc:sqlite://")
        .ok_or_else(|| DriverError::Connection(format!("Not a SQLite URL: {}", url)))?;

    match rest.split_once('?') {
        Some((path, _)) => Ok(path),
        None => Ok(rest),
    }
}

struct SqliteConnection {
    connection: rusqlite::Connection,
}

impl SqlConnection for SqliteConnection {
    fn execute_query(&mut self, sql: &str) -> DriverResult<SqlResultSet> {
        let mut statement = self
            .connection
            .prepare(sql)
            .map_err(|e| DriverError::Execution(e.to_string()))?;

        let columns: Vec<SqlColumn> = statement
            .columns()
            .iter()
            .map(|c| SqlColumn {
                label: c.name().to_string(),
                type_name: c.decl_type().unwrap_or("").to_string(),
            })
            .collect();
        let column_count = columns.len();

        let mut collected = Vec::new();
        let mut rows = statement
            .query([])
            .map_err(|e| DriverError::Execution(e.to_string()))?;

        while let Some(row) = rows
            .next()
            .map_err(|e| DriverError::Execution(e.to_string()))?
        {
            let mut cells = Vec::with_capacity(column_count);

            for index in 0..column_count {
                let value = row
                    .get_ref(index)
                    .map_err(|e| DriverError::Execution(e.to_string()))?;
                cells.push(render_value(value));
            }

            collected.push(cells);
        }

        Ok(SqlResultSet {
            columns,
            rows: collected,
        })
    }
}

/// Render one SQLite value as text, NULL as `None`
fn render_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        // Debug formatting keeps the `.0` on integral reals, matching the
        // text form other engines report for double columns.
        ValueRef::Real(f) => Some(format!("{:?}", f)),
        ValueRef::Text(text) => Some(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => Some(hex_lower(bytes)),
    }
}

fn hex_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_path() {
        assert_eq!(
            sqlite_path("jdbc:sqlite:///tmp/data.db").unwrap(),
            "/tmp/data.db"
        );
        assert_eq!(
            sqlite_path("jdbc:sqlite:///tmp/data.db?user=u&password=p").unwrap(),
            "/tmp/data.db"
        );
        assert!(sqlite_path("jdbc:mysql://host/db").is_err());
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(ValueRef::Null), None);
        assert_eq!(render_value(ValueRef::Integer(42)), Some("42".to_string()));
        assert_eq!(render_value(ValueRef::Real(3.0)), Some("3.0".to_string()));
        assert_eq!(render_value(ValueRef::Real(3.14)), Some("3.14".to_string()));
        assert_eq!(
            render_value(ValueRef::Text(b"hello")),
            Some("hello".to_string())
        );
        assert_eq!(
            render_value(ValueRef::Blob(&[0xde, 0xad, 0xbe, 0xef])),
            Some("deadbeef".to_string())
        );
    }

    #[test]
    fn test_builtin_driver_lookup() {
        assert!(builtin_driver(DatabaseType::Sqlite).is_some());
        assert!(builtin_driver(DatabaseType::MySql).is_none());
        assert!(builtin_driver(DatabaseType::Oracle).is_none());
    }

    #[test]
    fn test_missing_database_is_a_connection_error() {
        let driver = SqliteDriver;
        let result = driver.connect("jdbc:sqlite:///nonexistent/path/missing.db");
        assert!(matches!(result, Err(DriverError::Connection(_))));
    }
}
