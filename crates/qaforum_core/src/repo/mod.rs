//! Repository layer over the forum store.
//!
//! # Responsibility
//! - Provide finder and save contracts per entity.
//! - Keep SQL text inside this boundary; callers only see entities.
//!
//! # Invariants
//! - Zero matching rows is `None` / an empty `Vec`, never an error.
//! - Store faults propagate unchanged as `RepoError::Db`.
//! - Every statement is parameterized.

use crate::db::DbError;
use crate::model::hydrate::Hydrate;
use rusqlite::{Connection, OptionalExtension, Params};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod question_follow_repo;
pub mod question_like_repo;
pub mod question_repo;
pub mod relations;
pub mod reply_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for forum queries and saves.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Store returned a well-typed value the model cannot represent.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid forum data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Runs `sql` and hydrates the first row, if any.
pub(crate) fn query_one<T: Hydrate, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Option<T>> {
    let mut stmt = conn.prepare(sql)?;
    let entity = stmt.query_row(params, T::hydrate).optional()?;
    Ok(entity)
}

/// Runs `sql` and hydrates every row in store order.
pub(crate) fn query_all<T: Hydrate, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut entities = Vec::new();
    while let Some(row) = rows.next()? {
        entities.push(T::hydrate(row)?);
    }
    Ok(entities)
}

/// Converts a SQL `COUNT(*)` into an unsigned count.
pub(crate) fn count_from_db(value: i64, context: &str) -> RepoResult<u64> {
    u64::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("negative count `{value}` for {context}")))
}
