//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Look users up by id and by exact name.
//! - Insert new users and update persisted ones.
//! - Compute per-user karma from the like association.
//!
//! # Invariants
//! - `save` inserts only `Lifecycle::New` users and updates only persisted
//!   ones; the update does not check whether a row changed.

use crate::model::hydrate::Hydrate;
use crate::model::user::User;
use crate::model::{Lifecycle, UserId};
use crate::repo::{query_all, query_one, RepoResult};
use log::debug;
use rusqlite::{params, Connection};

/// Repository interface for users.
pub trait UserRepository {
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Exact, case-sensitive match on both name parts.
    fn find_by_name(&self, fname: &str, lname: &str) -> RepoResult<Vec<User>>;
    /// Inserts or updates `user`, returning it for chaining.
    fn save<'u>(&self, user: &'u mut User) -> RepoResult<&'u mut User>;
    /// Average number of likes per question authored by `user_id`.
    ///
    /// Questions without likes count toward the average. Returns `None` when
    /// the user has authored no questions.
    fn average_karma(&self, user_id: UserId) -> RepoResult<Option<f64>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        query_one(
            self.conn,
            &format!(
                "SELECT {} FROM users WHERE users.id = ?1;",
                User::SELECT_LIST
            ),
            [id],
        )
    }

    fn find_by_name(&self, fname: &str, lname: &str) -> RepoResult<Vec<User>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {} FROM users WHERE users.fname = ?1 AND users.lname = ?2;",
                User::SELECT_LIST
            ),
            params![fname, lname],
        )
    }

    fn save<'u>(&self, user: &'u mut User) -> RepoResult<&'u mut User> {
        match user.lifecycle() {
            Lifecycle::Persisted(id) => {
                self.conn.execute(
                    "UPDATE users
                     SET
                        fname = ?1,
                        lname = ?2
                     WHERE id = ?3;",
                    params![user.fname.as_deref(), user.lname.as_deref(), id],
                )?;
                debug!("event=user_save module=repo status=ok op=update id={id}");
            }
            Lifecycle::New => {
                self.conn.execute(
                    "INSERT INTO users (fname, lname) VALUES (?1, ?2);",
                    params![user.fname.as_deref(), user.lname.as_deref()],
                )?;
                let id = self.conn.last_insert_rowid();
                user.state.persist(id);
                debug!("event=user_save module=repo status=ok op=insert id={id}");
            }
        }

        Ok(user)
    }

    fn average_karma(&self, user_id: UserId) -> RepoResult<Option<f64>> {
        let karma = self.conn.query_row(
            "SELECT
                CAST(COUNT(question_likes.id) AS REAL) / COUNT(DISTINCT questions.id) AS karma
             FROM questions
             LEFT OUTER JOIN question_likes ON questions.id = question_likes.question_id
             WHERE questions.author_id = ?1;",
            [user_id],
            |row| row.get::<_, Option<f64>>("karma"),
        )?;
        Ok(karma)
    }
}
