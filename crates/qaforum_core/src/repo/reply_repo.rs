//! Reply repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Look replies up by id, author, question and parent reply.
//! - Insert new replies and update persisted ones.
//!
//! # Invariants
//! - `find_by_parent_reply_id` returning nothing marks a leaf reply.
//! - Parent/question consistency is left to store constraints.

use crate::model::hydrate::Hydrate;
use crate::model::reply::Reply;
use crate::model::{Lifecycle, QuestionId, ReplyId, UserId};
use crate::repo::{query_all, query_one, RepoResult};
use log::debug;
use rusqlite::{params, Connection};

/// Repository interface for replies.
pub trait ReplyRepository {
    fn find_by_id(&self, id: ReplyId) -> RepoResult<Option<Reply>>;
    fn find_by_user_id(&self, user_id: UserId) -> RepoResult<Vec<Reply>>;
    fn find_by_question_id(&self, question_id: QuestionId) -> RepoResult<Vec<Reply>>;
    /// Direct children of `parent_reply_id`; empty for leaf replies.
    fn find_by_parent_reply_id(&self, parent_reply_id: ReplyId) -> RepoResult<Vec<Reply>>;
    /// Inserts or updates `reply`, returning it for chaining.
    fn save<'r>(&self, reply: &'r mut Reply) -> RepoResult<&'r mut Reply>;
}

/// SQLite-backed reply repository.
pub struct SqliteReplyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReplyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn find_where(&self, column: &str, value: i64) -> RepoResult<Vec<Reply>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {} FROM replies WHERE replies.{column} = ?1;",
                Reply::SELECT_LIST
            ),
            [value],
        )
    }
}

impl ReplyRepository for SqliteReplyRepository<'_> {
    fn find_by_id(&self, id: ReplyId) -> RepoResult<Option<Reply>> {
        query_one(
            self.conn,
            &format!(
                "SELECT {} FROM replies WHERE replies.id = ?1;",
                Reply::SELECT_LIST
            ),
            [id],
        )
    }

    fn find_by_user_id(&self, user_id: UserId) -> RepoResult<Vec<Reply>> {
        self.find_where("user_id", user_id)
    }

    fn find_by_question_id(&self, question_id: QuestionId) -> RepoResult<Vec<Reply>> {
        self.find_where("question_id", question_id)
    }

    fn find_by_parent_reply_id(&self, parent_reply_id: ReplyId) -> RepoResult<Vec<Reply>> {
        self.find_where("parent_reply_id", parent_reply_id)
    }

    fn save<'r>(&self, reply: &'r mut Reply) -> RepoResult<&'r mut Reply> {
        match reply.lifecycle() {
            Lifecycle::Persisted(id) => {
                self.conn.execute(
                    "UPDATE replies
                     SET
                        body = ?1,
                        question_id = ?2,
                        parent_reply_id = ?3,
                        user_id = ?4
                     WHERE id = ?5;",
                    params![
                        reply.body.as_deref(),
                        reply.question_id,
                        reply.parent_reply_id,
                        reply.user_id,
                        id,
                    ],
                )?;
                debug!("event=reply_save module=repo status=ok op=update id={id}");
            }
            Lifecycle::New => {
                self.conn.execute(
                    "INSERT INTO replies (body, question_id, parent_reply_id, user_id)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        reply.body.as_deref(),
                        reply.question_id,
                        reply.parent_reply_id,
                        reply.user_id,
                    ],
                )?;
                let id = self.conn.last_insert_rowid();
                reply.state.persist(id);
                debug!("event=reply_save module=repo status=ok op=insert id={id}");
            }
        }

        Ok(reply)
    }
}
