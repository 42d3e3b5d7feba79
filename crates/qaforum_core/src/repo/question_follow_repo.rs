//! Queries over the `question_follows` association.
//!
//! # Responsibility
//! - Resolve followers of a question and questions followed by a user.
//! - Rank questions by follower count.
//!
//! # Invariants
//! - Follows are not materialized as entities; results are users/questions.
//! - Rankings exclude questions nobody follows.
//! - Order among equally followed questions is whatever SQLite yields.

use crate::model::hydrate::Hydrate;
use crate::model::question::Question;
use crate::model::user::User;
use crate::model::{QuestionId, UserId};
use crate::repo::{query_all, RepoResult};
use rusqlite::Connection;

/// Relationship queries through `question_follows`.
pub trait QuestionFollowRepository {
    fn followers_for_question_id(&self, question_id: QuestionId) -> RepoResult<Vec<User>>;
    fn followed_questions_for_user_id(&self, user_id: UserId) -> RepoResult<Vec<Question>>;
    /// Up to `limit` questions, most followed first.
    fn most_followed_questions(&self, limit: u32) -> RepoResult<Vec<Question>>;
}

pub struct SqliteQuestionFollowRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionFollowRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuestionFollowRepository for SqliteQuestionFollowRepository<'_> {
    fn followers_for_question_id(&self, question_id: QuestionId) -> RepoResult<Vec<User>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {}
                 FROM users
                 INNER JOIN question_follows ON users.id = question_follows.following_user_id
                 WHERE question_follows.following_question_id = ?1;",
                User::SELECT_LIST
            ),
            [question_id],
        )
    }

    fn followed_questions_for_user_id(&self, user_id: UserId) -> RepoResult<Vec<Question>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {}
                 FROM questions
                 INNER JOIN question_follows ON questions.id = question_follows.following_question_id
                 WHERE question_follows.following_user_id = ?1;",
                Question::SELECT_LIST
            ),
            [user_id],
        )
    }

    fn most_followed_questions(&self, limit: u32) -> RepoResult<Vec<Question>> {
        query_all(
            self.conn,
            &format!(
                "SELECT {}
                 FROM questions
                 INNER JOIN (
                    SELECT following_question_id, COUNT(*) AS follow_count
                    FROM question_follows
                    GROUP BY following_question_id
                 ) AS counts ON questions.id = counts.following_question_id
                 ORDER BY counts.follow_count DESC
                 LIMIT ?1;",
                Question::SELECT_LIST
            ),
            [i64::from(limit)],
        )
    }
}
