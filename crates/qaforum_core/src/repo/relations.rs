//! Relationship accessors on forum entities.
//!
//! Each accessor runs one repository finder on the borrowed connection. An
//! unsaved entity, or one whose foreign key is absent, has no relations: the
//! accessor returns the empty result without querying the store.

use crate::model::question::Question;
use crate::model::reply::Reply;
use crate::model::user::User;
use crate::repo::question_follow_repo::{QuestionFollowRepository, SqliteQuestionFollowRepository};
use crate::repo::question_like_repo::{QuestionLikeRepository, SqliteQuestionLikeRepository};
use crate::repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
use crate::repo::reply_repo::{ReplyRepository, SqliteReplyRepository};
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use crate::repo::RepoResult;
use rusqlite::Connection;

impl User {
    pub fn authored_questions(&self, conn: &Connection) -> RepoResult<Vec<Question>> {
        match self.id() {
            Some(id) => SqliteQuestionRepository::new(conn).find_by_author_id(id),
            None => Ok(Vec::new()),
        }
    }

    pub fn authored_replies(&self, conn: &Connection) -> RepoResult<Vec<Reply>> {
        match self.id() {
            Some(id) => SqliteReplyRepository::new(conn).find_by_user_id(id),
            None => Ok(Vec::new()),
        }
    }

    pub fn followed_questions(&self, conn: &Connection) -> RepoResult<Vec<Question>> {
        match self.id() {
            Some(id) => {
                SqliteQuestionFollowRepository::new(conn).followed_questions_for_user_id(id)
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn liked_questions(&self, conn: &Connection) -> RepoResult<Vec<Question>> {
        match self.id() {
            Some(id) => SqliteQuestionLikeRepository::new(conn).liked_questions_for_user_id(id),
            None => Ok(Vec::new()),
        }
    }

    /// See `UserRepository::average_karma`.
    pub fn average_karma(&self, conn: &Connection) -> RepoResult<Option<f64>> {
        match self.id() {
            Some(id) => SqliteUserRepository::new(conn).average_karma(id),
            None => Ok(None),
        }
    }
}

impl Question {
    pub fn author(&self, conn: &Connection) -> RepoResult<Option<User>> {
        match self.author_id {
            Some(author_id) => SqliteUserRepository::new(conn).find_by_id(author_id),
            None => Ok(None),
        }
    }

    pub fn replies(&self, conn: &Connection) -> RepoResult<Vec<Reply>> {
        match self.id() {
            Some(id) => SqliteReplyRepository::new(conn).find_by_question_id(id),
            None => Ok(Vec::new()),
        }
    }

    pub fn followers(&self, conn: &Connection) -> RepoResult<Vec<User>> {
        match self.id() {
            Some(id) => SqliteQuestionFollowRepository::new(conn).followers_for_question_id(id),
            None => Ok(Vec::new()),
        }
    }

    pub fn likers(&self, conn: &Connection) -> RepoResult<Vec<User>> {
        match self.id() {
            Some(id) => SqliteQuestionLikeRepository::new(conn).likers_for_question_id(id),
            None => Ok(Vec::new()),
        }
    }

    /// `None` when nobody liked the question.
    pub fn num_likes(&self, conn: &Connection) -> RepoResult<Option<u64>> {
        match self.id() {
            Some(id) => SqliteQuestionLikeRepository::new(conn).num_likes_for_question_id(id),
            None => Ok(None),
        }
    }
}

impl Reply {
    pub fn author(&self, conn: &Connection) -> RepoResult<Option<User>> {
        match self.user_id {
            Some(user_id) => SqliteUserRepository::new(conn).find_by_id(user_id),
            None => Ok(None),
        }
    }

    pub fn question(&self, conn: &Connection) -> RepoResult<Option<Question>> {
        match self.question_id {
            Some(question_id) => SqliteQuestionRepository::new(conn).find_by_id(question_id),
            None => Ok(None),
        }
    }

    /// `None` for top-level replies.
    pub fn parent_reply(&self, conn: &Connection) -> RepoResult<Option<Reply>> {
        match self.parent_reply_id {
            Some(parent_id) => SqliteReplyRepository::new(conn).find_by_id(parent_id),
            None => Ok(None),
        }
    }

    pub fn child_replies(&self, conn: &Connection) -> RepoResult<Vec<Reply>> {
        match self.id() {
            Some(id) => SqliteReplyRepository::new(conn).find_by_parent_reply_id(id),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::question::Question;
    use crate::model::reply::Reply;
    use crate::model::user::User;
    use rusqlite::Connection;

    // A bare connection has no tables, so any query would fail.
    #[test]
    fn unsaved_entities_do_not_touch_the_store() {
        let conn = Connection::open_in_memory().unwrap();

        let user = User::new("Ada", "Lovelace");
        assert!(user.authored_questions(&conn).unwrap().is_empty());
        assert!(user.authored_replies(&conn).unwrap().is_empty());
        assert!(user.followed_questions(&conn).unwrap().is_empty());
        assert!(user.liked_questions(&conn).unwrap().is_empty());
        assert_eq!(user.average_karma(&conn).unwrap(), None);

        let mut question = Question::new("title", "body", 1);
        question.author_id = None;
        assert!(question.author(&conn).unwrap().is_none());
        assert!(question.replies(&conn).unwrap().is_empty());
        assert!(question.followers(&conn).unwrap().is_empty());
        assert!(question.likers(&conn).unwrap().is_empty());
        assert_eq!(question.num_likes(&conn).unwrap(), None);

        let reply = Reply::new(1, 1, "body");
        assert!(reply.parent_reply(&conn).unwrap().is_none());
        assert!(reply.child_replies(&conn).unwrap().is_empty());
    }
}
