//! Row to entity hydration.
//!
//! # Responsibility
//! - Declare, per entity, the columns it reads and the select list used to
//!   fetch them.
//! - Build entities from `rusqlite::Row` by column name.
//!
//! # Invariants
//! - Extra columns in a row are ignored.
//! - A declared column missing from the row hydrates as `None`.
//! - A column holding a value of the wrong SQL type is a store error.

use super::question::Question;
use super::question_like::QuestionLike;
use super::reply::Reply;
use super::user::User;
use super::Lifecycle;
use rusqlite::types::FromSql;
use rusqlite::Row;

/// Typed mapping from a result row to an entity.
pub trait Hydrate: Sized {
    /// Unqualified column names this entity reads. `verify_schema` requires
    /// each of them on the entity's table.
    const COLUMNS: &'static [&'static str];
    /// `COLUMNS` qualified by table name, for use in joins. Kept in step with
    /// `COLUMNS` by a unit test.
    const SELECT_LIST: &'static str;

    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl Hydrate for User {
    const COLUMNS: &'static [&'static str] = &["id", "fname", "lname"];
    const SELECT_LIST: &'static str = "users.id, users.fname, users.lname";

    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            state: lifecycle(row)?,
            fname: column(row, "fname")?,
            lname: column(row, "lname")?,
        })
    }
}

impl Hydrate for Question {
    const COLUMNS: &'static [&'static str] = &["id", "title", "body", "author_id"];
    const SELECT_LIST: &'static str =
        "questions.id, questions.title, questions.body, questions.author_id";

    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            state: lifecycle(row)?,
            title: column(row, "title")?,
            body: column(row, "body")?,
            author_id: column(row, "author_id")?,
        })
    }
}

impl Hydrate for Reply {
    const COLUMNS: &'static [&'static str] =
        &["id", "body", "question_id", "parent_reply_id", "user_id"];
    const SELECT_LIST: &'static str = "replies.id, replies.body, replies.question_id, \
         replies.parent_reply_id, replies.user_id";

    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            state: lifecycle(row)?,
            question_id: column(row, "question_id")?,
            parent_reply_id: column(row, "parent_reply_id")?,
            user_id: column(row, "user_id")?,
            body: column(row, "body")?,
        })
    }
}

impl Hydrate for QuestionLike {
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "question_id"];
    const SELECT_LIST: &'static str =
        "question_likes.id, question_likes.user_id, question_likes.question_id";

    fn hydrate(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: column(row, "id")?,
            user_id: column(row, "user_id")?,
            question_id: column(row, "question_id")?,
        })
    }
}

/// Reads a nullable column by name, treating an absent column as NULL.
pub fn column<T: FromSql>(row: &Row<'_>, name: &str) -> rusqlite::Result<Option<T>> {
    match row.get::<_, Option<T>>(name) {
        Ok(value) => Ok(value),
        Err(rusqlite::Error::InvalidColumnName(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

fn lifecycle(row: &Row<'_>) -> rusqlite::Result<Lifecycle> {
    Ok(column::<i64>(row, "id")?.into())
}
