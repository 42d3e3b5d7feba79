//! Question repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Look questions up by id and by author.
//! - Insert new questions and update persisted ones.
//! - Expose the follow/like rankings as question-level shortcuts.

use crate::model::hydrate::Hydrate;
use crate::model::question::Question;
use crate::model::{Lifecycle, QuestionId, UserId};
use crate::repo::question_follow_repo::{QuestionFollowRepository, SqliteQuestionFollowRepository};
use crate::repo::question_like_repo::{QuestionLikeRepository, SqliteQuestionLikeRepository};
use crate::repo::{query_all, query_one, RepoResult};
use log::debug;
use rusqlite::{params, Connection};

/// Repository interface for questions.
pub trait QuestionRepository {
    fn find_by_id(&self, id: QuestionId) -> RepoResult<Option<Question>>;
    fn find_by_author_id(&self, author_id: UserId) -> RepoResult<Vec<Question>>;
    /// Inserts or updates `question`, returning it for chaining.
    fn save<'q>(&self, question: &'q mut Question) -> RepoResult<&'q mut Question>;
    /// Same as `QuestionFollowRepository::most_followed_questions`.
    fn most_followed(&self, limit: u32) -> RepoResult<Vec<Question>>;
    /// Same as `QuestionLikeRepository::most_liked_questions`.
    fn most_liked(&self, limit: u32) -> RepoResult<Vec<Question>>;
}

/// SQLite-backed question repository.
pub struct SqliteQuestionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn find_by_id(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        query_one(
            self.conn,
            &format!(
                "SELECT {} FROM questions WHERE questions.id = ?1;",
                Question::SELECT_LIST
            ),
            [id],
        )
    }

    fn find_by_author_id(&self, author_id: UserId) -> RepoResult<Vec<Question>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {} FROM questions WHERE questions.author_id = ?1;",
                Question::SELECT_LIST
            ),
            [author_id],
        )
    }

    fn save<'q>(&self, question: &'q mut Question) -> RepoResult<&'q mut Question> {
        match question.lifecycle() {
            Lifecycle::Persisted(id) => {
                self.conn.execute(
                    "UPDATE questions
                     SET
                        title = ?1,
                        body = ?2,
                        author_id = ?3
                     WHERE id = ?4;",
                    params![
                        question.title.as_deref(),
                        question.body.as_deref(),
                        question.author_id,
                        id,
                    ],
                )?;
                debug!("event=question_save module=repo status=ok op=update id={id}");
            }
            Lifecycle::New => {
                self.conn.execute(
                    "INSERT INTO questions (title, body, author_id) VALUES (?1, ?2, ?3);",
                    params![
                        question.title.as_deref(),
                        question.body.as_deref(),
                        question.author_id,
                    ],
                )?;
                let id = self.conn.last_insert_rowid();
                question.state.persist(id);
                debug!("event=question_save module=repo status=ok op=insert id={id}");
            }
        }

        Ok(question)
    }

    fn most_followed(&self, limit: u32) -> RepoResult<Vec<Question>> {
        SqliteQuestionFollowRepository::new(self.conn).most_followed_questions(limit)
    }

    fn most_liked(&self, limit: u32) -> RepoResult<Vec<Question>> {
        SqliteQuestionLikeRepository::new(self.conn).most_liked_questions(limit)
    }
}
