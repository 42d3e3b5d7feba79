//! Data-access layer for a Q&A forum.
//!
//! Maps rows of the `users`, `questions`, `replies`, `question_follows` and
//! `question_likes` tables onto typed entities, answers finder and
//! relationship queries, and persists entity changes. The SQLite store and
//! its schema are provisioned outside this crate; callers open one
//! connection and lend it to the repositories.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{open_db, open_db_in_memory, DbConfig, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::hydrate::Hydrate;
pub use model::question::Question;
pub use model::question_like::QuestionLike;
pub use model::reply::Reply;
pub use model::user::User;
pub use model::{Lifecycle, QuestionId, QuestionLikeId, ReplyId, UserId};
pub use repo::question_follow_repo::{QuestionFollowRepository, SqliteQuestionFollowRepository};
pub use repo::question_like_repo::{QuestionLikeRepository, SqliteQuestionLikeRepository};
pub use repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
pub use repo::reply_repo::{ReplyRepository, SqliteReplyRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
