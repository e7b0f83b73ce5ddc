//! Database vendor profiles
//!
//! A closed set of relational engines, each contributing a driver
//! identifier and a connection-URL prefix convention. The data is static
//! and immutable; callers pick a profile, they never extend the set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for vendor names outside the closed set
#[derive(Error, Debug)]
#[error("Unknown database type: {0}")]
pub struct UnknownDatabaseType(String);

/// Supported relational database vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// MySQL
    MySql,
    /// PostgreSQL
    PostgreSql,
    /// Oracle
    Oracle,
    /// Microsoft SQL Server
    SqlServer,
    /// SQLite (embedded; the only profile with a compiled-in driver)
    Sqlite,
    /// Fallback profile for engines reachable through a generic driver
    Generic,
}

impl DatabaseType {
    /// Identifier of the driver that serves this vendor
    pub fn driver_name(self) -> &'static str {
        match self {
            DatabaseType::MySql => "mysql",
            DatabaseType::PostgreSql => "postgresql",
            DatabaseType::Oracle => "oracle",
            DatabaseType::SqlServer => "sqlserver",
            DatabaseType::Sqlite => "sqlite",
            DatabaseType::Generic => "generic",
        }
    }

    /// Connection-URL prefix, spliced into `jdbc:<prefix>//<dsn>`
    ///
    /// Oracle's prefix carries the `:@` marker its credential splice keys
    /// on; the generic profile passes the data source name through
    /// unchanged after the scheme.
    pub fn url_prefix(self) -> &'static str {
        match self {
            DatabaseType::MySql => "mysql:",
            DatabaseType::PostgreSql => "postgresql:",
            DatabaseType::Oracle => "oracle:thin:@",
            DatabaseType::SqlServer => "sqlserver:",
            DatabaseType::Sqlite => "sqlite:",
            DatabaseType::Generic => "",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatabaseType::MySql => "MySQL",
            DatabaseType::PostgreSql => "PostgreSQL",
            DatabaseType::Oracle => "Oracle",
            DatabaseType::SqlServer => "Microsoft SQL Server",
            DatabaseType::Sqlite => "SQLite",
            DatabaseType::Generic => "Generic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DatabaseType {
    type Err = UnknownDatabaseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::MySql),
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSql),
            "oracle" => Ok(DatabaseType::Oracle),
            "sqlserver" | "sql_server" | "mssql" => Ok(DatabaseType::SqlServer),
            "sqlite" => Ok(DatabaseType::Sqlite),
            "generic" => Ok(DatabaseType::Generic),
            other => Err(UnknownDatabaseType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("mysql".parse::<DatabaseType>().unwrap(), DatabaseType::MySql);
        assert_eq!(
            "postgres".parse::<DatabaseType>().unwrap(),
            DatabaseType::PostgreSql
        );
        assert_eq!(
            "PostgreSQL".parse::<DatabaseType>().unwrap(),
            DatabaseType::PostgreSql
        );
        assert_eq!(
            "mssql".parse::<DatabaseType>().unwrap(),
            DatabaseType::SqlServer
        );
        assert!("dbase".parse::<DatabaseType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&DatabaseType::SqlServer).unwrap(),
            "\"sqlserver\""
        );
        assert_eq!(
            serde_json::from_str::<DatabaseType>("\"postgresql\"").unwrap(),
            DatabaseType::PostgreSql
        );
    }

    #[test]
    fn test_profiles() {
        assert_eq!(DatabaseType::MySql.url_prefix(), "mysql:");
        assert_eq!(DatabaseType::Oracle.url_prefix(), "oracle:thin:@");
        assert_eq!(DatabaseType::Sqlite.driver_name(), "sqlite");
    }
}
