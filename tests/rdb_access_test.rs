use anyhow::Result;
use graphweave::access::{Access, AccessError, DatabaseType, DriverError, RdbAccess};
use graphweave::rdf::vocab::xsd;
use std::path::PathBuf;
use tempfile::TempDir;

fn seeded_database(dir: &TempDir) -> Result<PathBuf> {
    let path = dir.path().join("people.db");
    let connection = rusqlite::Connection::open(&path)?;

    connection.execute_batch(
        "CREATE TABLE people (
            id INTEGER,
            name TEXT,
            height DOUBLE,
            avatar VARBINARY,
            born DATE,
            note TEXT
        );
        INSERT INTO people VALUES (1, 'Alice', 181.0, X'DEADBEEF', '1990-04-02', NULL);
        INSERT INTO people VALUES (2, 'Bob', 1.75, NULL, '1985-11-23', 'likes cheese');",
    )?;

    Ok(path)
}

fn people_access(path: &PathBuf, query: &str) -> RdbAccess {
    RdbAccess::new(
        path.to_string_lossy(),
        DatabaseType::Sqlite,
        "",
        "",
        query,
        "text/csv",
    )
}

#[test]
fn test_sqlite_fetch_produces_typed_csv() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = TempDir::new()?;
    let path = seeded_database(&dir)?;

    let access = people_access(
        &path,
        "SELECT id, name, height, avatar, born, note FROM people ORDER BY id",
    );
    let data = access.fetch()?;

    let text = String::from_utf8(data.as_bytes().to_vec())?;
    assert_eq!(
        text,
        "id,name,height,avatar,born,note\n\
         1,Alice,181,deadbeef,1990-04-02,\n\
         2,Bob,1.75,,1985-11-23,likes cheese\n"
    );

    // Datatypes in column order; untyped text columns absent.
    let keys: Vec<&String> = data.datatypes().keys().collect();
    assert_eq!(keys, vec!["id", "height", "avatar", "born"]);
    assert_eq!(data.datatypes()["id"], xsd::INTEGER);
    assert_eq!(data.datatypes()["height"], xsd::DOUBLE);
    assert_eq!(data.datatypes()["avatar"], xsd::HEX_BINARY);
    assert_eq!(data.datatypes()["born"], xsd::DATE);

    Ok(())
}

#[test]
fn test_sqlite_connection_url() -> Result<()> {
    let dir = TempDir::new()?;
    let path = seeded_database(&dir)?;

    let access = people_access(&path, "SELECT 1");
    assert_eq!(
        access.connection_url(),
        format!("jdbc:sqlite://{}", path.to_string_lossy())
    );

    Ok(())
}

#[test]
fn test_malformed_query_surfaces_execution_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = seeded_database(&dir)?;

    let access = people_access(&path, "SELECT nope FROM nothing");
    let error = access.fetch().unwrap_err();

    assert!(matches!(
        error,
        AccessError::Database(DriverError::Execution(_))
    ));

    Ok(())
}

#[test]
fn test_missing_database_surfaces_connection_error() {
    let access = RdbAccess::new(
        "/nonexistent/path/missing.db",
        DatabaseType::Sqlite,
        "",
        "",
        "SELECT 1",
        "text/csv",
    );
    let error = access.fetch().unwrap_err();

    assert!(matches!(
        error,
        AccessError::Database(DriverError::Connection(_))
    ));
}
