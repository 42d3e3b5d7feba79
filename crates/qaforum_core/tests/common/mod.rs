//! Shared fixtures for forum integration tests.

#![allow(dead_code)]

use qaforum_core::{
    open_db_in_memory, Question, QuestionId, QuestionRepository, Reply, ReplyRepository,
    SqliteQuestionRepository, SqliteReplyRepository, SqliteUserRepository, User, UserId,
    UserRepository,
};
use rusqlite::{params, Connection};

pub fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

pub fn create_user(conn: &Connection, fname: &str, lname: &str) -> UserId {
    let mut user = User::new(fname, lname);
    SqliteUserRepository::new(conn).save(&mut user).unwrap();
    user.id().unwrap()
}

pub fn create_question(conn: &Connection, author_id: UserId, title: &str) -> QuestionId {
    let mut question = Question::new(title, format!("body of {title}"), author_id);
    SqliteQuestionRepository::new(conn)
        .save(&mut question)
        .unwrap();
    question.id().unwrap()
}

pub fn create_reply(
    conn: &Connection,
    question_id: QuestionId,
    user_id: UserId,
    parent_reply_id: Option<i64>,
    body: &str,
) -> Reply {
    let mut reply = Reply::new(question_id, user_id, body);
    reply.parent_reply_id = parent_reply_id;
    SqliteReplyRepository::new(conn).save(&mut reply).unwrap();
    reply
}

/// Association rows are provisioned outside the crate, so tests write them directly.
pub fn follow(conn: &Connection, user_id: UserId, question_id: QuestionId) {
    conn.execute(
        "INSERT INTO question_follows (following_user_id, following_question_id) VALUES (?1, ?2);",
        params![user_id, question_id],
    )
    .unwrap();
}

pub fn like(conn: &Connection, user_id: UserId, question_id: QuestionId) -> i64 {
    conn.execute(
        "INSERT INTO question_likes (user_id, question_id) VALUES (?1, ?2);",
        params![user_id, question_id],
    )
    .unwrap();
    conn.last_insert_rowid()
}

/// Creates `count` distinct users who each like `question_id`.
pub fn like_many(conn: &Connection, question_id: QuestionId, count: usize) {
    for index in 0..count {
        let user_id = create_user(conn, "Fan", &format!("No{index}-q{question_id}"));
        like(conn, user_id, question_id);
    }
}

/// Creates `count` distinct users who each follow `question_id`.
pub fn follow_many(conn: &Connection, question_id: QuestionId, count: usize) {
    for index in 0..count {
        let user_id = create_user(conn, "Follower", &format!("No{index}-q{question_id}"));
        follow(conn, user_id, question_id);
    }
}
