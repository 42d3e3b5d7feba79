//! Reference schema for the forum store.
//!
//! # Responsibility
//! - Describe the tables and columns repositories read and write.
//! - Verify an externally provisioned store exposes them.
//! - Install the reference DDL into stores nobody else provisions
//!   (in-memory test stores, local demos).
//!
//! # Invariants
//! - `SCHEMA_SQL` only uses `CREATE TABLE IF NOT EXISTS`; installing twice is
//!   harmless and never alters existing tables.
//! - There is no schema versioning here.

use super::{DbError, DbResult};
use crate::model::hydrate::Hydrate;
use crate::model::question::Question;
use crate::model::question_like::QuestionLike;
use crate::model::reply::Reply;
use crate::model::user::User;
use rusqlite::Connection;

pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables and the columns repositories depend on, in declaration order.
///
/// Entity tables require exactly the columns their `Hydrate` impl reads.
pub const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("users", User::COLUMNS),
    ("questions", Question::COLUMNS),
    ("replies", Reply::COLUMNS),
    (
        "question_follows",
        &["id", "following_user_id", "following_question_id"],
    ),
    ("question_likes", QuestionLike::COLUMNS),
];

/// Creates any missing forum tables.
pub fn install_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Checks that every required table and column exists.
///
/// # Errors
/// - `DbError::MissingRequiredTable` for the first absent table.
/// - `DbError::MissingRequiredColumn` for the first absent column.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    for &(table, columns) in REQUIRED_COLUMNS {
        if !table_exists(conn, table)? {
            return Err(DbError::MissingRequiredTable(table));
        }

        let present = table_columns(conn, table)?;
        for &column in columns {
            if !present.iter().any(|name| name == column) {
                return Err(DbError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    // PRAGMA arguments cannot be bound; `table` only ever comes from REQUIRED_COLUMNS.
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(1)?);
    }
    Ok(columns)
}
