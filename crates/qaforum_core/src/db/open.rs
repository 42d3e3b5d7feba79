//! Connection bootstrap for the forum store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply the pragmas described by `DbConfig`.
//! - Refuse file stores whose provisioned schema is incomplete.
//!
//! # Invariants
//! - Returned connections pass `schema::verify_schema`.
//! - Failures here are bootstrap failures; callers are expected to abort.

use super::schema::{install_schema, verify_schema};
use super::{DbConfig, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::time::Instant;

/// Opens the configured SQLite file and checks its schema.
///
/// The schema is provisioned outside this crate; this function never creates
/// the file nor alters its tables. A missing file is a `DbError::Sqlite`.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(config: &DbConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=file path={}",
        config.path().display()
    );

    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = match Connection::open_with_flags(config.path(), flags) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    let ready = configure_connection(&conn, config).and_then(|()| verify_schema(&conn));
    match ready {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_schema_unavailable error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an isolated in-memory store with the reference schema installed.
///
/// Every call returns a fresh, empty database.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = Connection::open_in_memory()?;
    let config = DbConfig::default();
    let ready = configure_connection(&conn, &config)
        .and_then(|()| install_schema(&conn))
        .and_then(|()| verify_schema(&conn));

    match ready {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn configure_connection(conn: &Connection, config: &DbConfig) -> DbResult<()> {
    let foreign_keys = if config.foreign_keys { "ON" } else { "OFF" };
    conn.execute_batch(&format!("PRAGMA foreign_keys = {foreign_keys};"))?;
    conn.busy_timeout(config.busy_timeout)?;
    Ok(())
}
