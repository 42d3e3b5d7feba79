//! Queries over the `question_likes` association.
//!
//! # Responsibility
//! - Load individual like rows.
//! - Resolve likers of a question and questions liked by a user.
//! - Count likes per question and rank questions by like count.
//!
//! # Invariants
//! - `num_likes_for_question_id` is `None` for a question without likes: the
//!   grouped count yields no row at all, and that absence is preserved.
//! - Rankings exclude questions nobody liked.

use crate::model::hydrate::Hydrate;
use crate::model::question::Question;
use crate::model::question_like::QuestionLike;
use crate::model::user::User;
use crate::model::{QuestionId, QuestionLikeId, UserId};
use crate::repo::{count_from_db, query_all, query_one, RepoResult};
use rusqlite::{Connection, OptionalExtension};

/// Lookups and relationship queries through `question_likes`.
pub trait QuestionLikeRepository {
    fn find_by_id(&self, id: QuestionLikeId) -> RepoResult<Option<QuestionLike>>;
    fn likers_for_question_id(&self, question_id: QuestionId) -> RepoResult<Vec<User>>;
    fn liked_questions_for_user_id(&self, user_id: UserId) -> RepoResult<Vec<Question>>;
    /// Like count, or `None` when the question has no likes.
    fn num_likes_for_question_id(&self, question_id: QuestionId) -> RepoResult<Option<u64>>;
    /// Up to `limit` questions, most liked first.
    fn most_liked_questions(&self, limit: u32) -> RepoResult<Vec<Question>>;
}

pub struct SqliteQuestionLikeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionLikeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuestionLikeRepository for SqliteQuestionLikeRepository<'_> {
    fn find_by_id(&self, id: QuestionLikeId) -> RepoResult<Option<QuestionLike>> {
        query_one(
            self.conn,
            &format!(
                "SELECT {} FROM question_likes WHERE question_likes.id = ?1;",
                QuestionLike::SELECT_LIST
            ),
            [id],
        )
    }

    fn likers_for_question_id(&self, question_id: QuestionId) -> RepoResult<Vec<User>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {}
                 FROM users
                 INNER JOIN question_likes ON users.id = question_likes.user_id
                 INNER JOIN questions ON questions.id = question_likes.question_id
                 WHERE questions.id = ?1;",
                User::SELECT_LIST
            ),
            [question_id],
        )
    }

    fn liked_questions_for_user_id(&self, user_id: UserId) -> RepoResult<Vec<Question>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {}
                 FROM questions
                 INNER JOIN question_likes ON questions.id = question_likes.question_id
                 WHERE question_likes.user_id = ?1;",
                Question::SELECT_LIST
            ),
            [user_id],
        )
    }

    fn num_likes_for_question_id(&self, question_id: QuestionId) -> RepoResult<Option<u64>> {
        let count = self
            .conn
            .query_row(
                "SELECT COUNT(*) AS like_count
                 FROM question_likes
                 WHERE question_id = ?1
                 GROUP BY question_id;",
                [question_id],
                |row| row.get::<_, i64>("like_count"),
            )
            .optional()?;

        count
            .map(|value| count_from_db(value, &format!("likes on question {question_id}")))
            .transpose()
    }

    fn most_liked_questions(&self, limit: u32) -> RepoResult<Vec<Question>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {}
                 FROM questions
                 INNER JOIN (
                    SELECT question_id, COUNT(*) AS like_count
                    FROM question_likes
                    GROUP BY question_id
                 ) AS counts ON questions.id = counts.question_id
                 ORDER BY counts.like_count DESC
                 LIMIT ?1;",
                Question::SELECT_LIST
            ),
            [i64::from(limit)],
        )
    }
}
