//! Relational database access
//!
//! Executes one SQL query against a configured vendor and streams the
//! result as CSV, inferring an RDF (XSD) datatype per column from the
//! vendor type names. The six configuration fields are the adapter's whole
//! identity, so adapters can serve as cache keys in higher layers.

use super::driver::{builtin_driver, SqlDriver, SqlResultSet};
use super::{Access, AccessError, AccessResult, DatabaseType, SourceData};
use crate::rdf::vocab::xsd;
use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Placeholder for a missing or empty column label in the emitted CSV
/// header. CSV parsers downstream choke on empty headers; this token is
/// chosen so no real-world table will ever carry it, and mapping rules
/// cannot reference it.
pub const NULL_HEADER: &str = "graphweave.access.rdb.nullheader";

/// Access to a relational database
///
/// Configuration is immutable once constructed. Equality and hashing cover
/// exactly the six configuration fields; the injected driver is execution
/// machinery, not identity.
#[derive(Clone)]
pub struct RdbAccess {
    dsn: String,
    database_type: DatabaseType,
    username: String,
    password: String,
    query: String,
    content_type: String,
    driver: Option<Arc<dyn SqlDriver>>,
}

impl RdbAccess {
    /// Create an adapter for the given data source name, vendor profile,
    /// credentials, query and content type.
    ///
    /// The vendor's compiled-in driver is resolved here when one exists;
    /// use [`RdbAccess::with_driver`] to supply one for remote vendors.
    pub fn new(
        dsn: impl Into<String>,
        database_type: DatabaseType,
        username: impl Into<String>,
        password: impl Into<String>,
        query: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            dsn: dsn.into(),
            database_type,
            username: username.into(),
            password: password.into(),
            query: query.into(),
            content_type: content_type.into(),
            driver: builtin_driver(database_type),
        }
    }

    /// Replace the SQL driver used to reach the database
    pub fn with_driver(mut self, driver: Arc<dyn SqlDriver>) -> Self {
        self.driver = Some(driver);
        self
    }

    /// The data source name
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// The database vendor profile
    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// The username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The SQL query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The content type of the produced payload
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The connection URL built from the configuration
    pub fn connection_url(&self) -> String {
        build_connection_url(
            self.database_type,
            &self.dsn,
            &self.username,
            &self.password,
        )
    }
}

impl Access for RdbAccess {
    /// Connect, execute the configured query once, and convert the result
    /// set to CSV.
    ///
    /// The connection is scoped to this call and released exactly once by
    /// ownership, on success and on every error path alike. A long-running
    /// query blocks the caller indefinitely: there is no timeout or
    /// cancellation at this layer.
    fn fetch(&self) -> AccessResult<SourceData> {
        let driver = self
            .driver
            .as_ref()
            .ok_or(AccessError::DriverNotFound(self.database_type.driver_name()))?;

        let url = self.connection_url();

        debug!("Connecting to {} source {}", self.database_type, self.dsn);
        let mut connection = driver.connect(&url)?;

        let result_set = connection.execute_query(&self.query)?;
        debug!(
            "Query returned {} rows over {} columns",
            result_set.rows.len(),
            result_set.columns.len()
        );

        result_set_to_csv(result_set)
    }
}

impl PartialEq for RdbAccess {
    fn eq(&self, other: &Self) -> bool {
        self.dsn == other.dsn
            && self.database_type == other.database_type
            && self.username == other.username
            && self.password == other.password
            && self.query == other.query
            && self.content_type == other.content_type
    }
}

impl Eq for RdbAccess {}

impl Hash for RdbAccess {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Concatenation of the six configuration fields.
        format!(
            "{}{}{}{}{}{}",
            self.dsn,
            self.database_type,
            self.username,
            self.password,
            self.query,
            self.content_type
        )
        .hash(state);
    }
}

impl fmt::Debug for RdbAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RdbAccess")
            .field("dsn", &self.dsn)
            .field("database_type", &self.database_type)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("query", &self.query)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Build the vendor-specific connection URL
///
/// The credential splice runs before the vendor parameter fixups; the
/// SQL Server rewrite depends on the credentials already being in place.
/// These are fixed per-vendor quirks, not a general URL builder.
fn build_connection_url(
    database_type: DatabaseType,
    dsn: &str,
    username: &str,
    password: &str,
) -> String {
    let mut url = format!("jdbc:{}//{}", database_type.url_prefix(), dsn);
    let mut credentials_started_query = false;

    if !username.is_empty() && !password.is_empty() {
        if database_type == DatabaseType::Oracle {
            url = url.replace(":@", &format!(":{}/{}@", username, password));
        } else if !url.contains("user=") {
            url.push_str(&format!("?user={}&password={}", username, password));
            credentials_started_query = true;
        }
    }

    if database_type == DatabaseType::MySql {
        url.push(if credentials_started_query { '&' } else { '?' });
        url.push_str("serverTimezone=UTC&useSSL=false");
    }

    if database_type == DatabaseType::SqlServer {
        url = url.replace('?', ";").replace('&', ";");

        if !url.ends_with(';') {
            url.push(';');
        }
    }

    url
}

/// Convert a materialized result set into the CSV payload
fn result_set_to_csv(result_set: SqlResultSet) -> AccessResult<SourceData> {
    let headers: Vec<String> = result_set
        .columns
        .iter()
        .map(|column| {
            if column.label.is_empty() {
                NULL_HEADER.to_string()
            } else {
                column.label.clone()
            }
        })
        .collect();

    let column_datatypes: Vec<Option<&'static str>> = result_set
        .columns
        .iter()
        .map(|column| infer_datatype(&column.type_name))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;

    let mut datatypes = IndexMap::new();
    let mut datatypes_recorded = false;

    for row in &result_set.rows {
        // Register datatypes during the first row; later rows never
        // overwrite.
        if !datatypes_recorded {
            for (header, datatype) in headers.iter().zip(&column_datatypes) {
                if let Some(datatype) = datatype {
                    datatypes
                        .entry(header.clone())
                        .or_insert_with(|| (*datatype).to_string());
                }
            }
            datatypes_recorded = true;
        }

        let record: Vec<String> = row
            .iter()
            .zip(&column_datatypes)
            .map(|(cell, datatype)| normalize_value(cell.as_deref(), *datatype))
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        AccessError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
    })?;

    Ok(SourceData::new(bytes, datatypes))
}

/// Map a vendor type name (case-insensitive) to an XSD datatype IRI
fn infer_datatype(vendor_type: &str) -> Option<&'static str> {
    match vendor_type.to_uppercase().as_str() {
        "BYTEA" | "BINARY" | "BINARY VARYING" | "BINARY LARGE OBJECT" | "VARBINARY" => {
            Some(xsd::HEX_BINARY)
        }
        "NUMERIC" | "DECIMAL" => Some(xsd::DECIMAL),
        "SMALLINT" | "INT" | "INT4" | "INT8" | "INTEGER" | "BIGINT" => Some(xsd::INTEGER),
        "FLOAT" | "FLOAT4" | "FLOAT8" | "REAL" | "DOUBLE" | "DOUBLE PRECISION" => {
            Some(xsd::DOUBLE)
        }
        "BIT" | "BOOL" | "BOOLEAN" => Some(xsd::BOOLEAN),
        "DATE" => Some(xsd::DATE),
        "TIME" => Some(xsd::TIME),
        "TIMESTAMP" | "DATETIME" => Some(xsd::DATE_TIME),
        _ => None,
    }
}

/// Normalize one cell's text given the column's inferred datatype
///
/// Double columns lose their `.0` substring (some engines render integral
/// doubles with a trailing `.0`; the removal is substring-wide, matching
/// the historical behavior). NULLs become empty text.
fn normalize_value(cell: Option<&str>, datatype: Option<&'static str>) -> String {
    match cell {
        None => String::new(),
        Some(text) => {
            if datatype == Some(xsd::DOUBLE) {
                text.replace(".0", "")
            } else {
                text.to_string()
            }
        }
    }
}
