mod common;

use common::{create_question, create_reply, create_user, setup};
use qaforum_core::{
    Question, QuestionRepository, Reply, ReplyRepository, SqliteQuestionRepository,
    SqliteReplyRepository, SqliteUserRepository, UserRepository,
};
use std::collections::HashSet;

#[test]
fn save_new_question_roundtrips_all_fields() {
    let conn = setup();
    let author_id = create_user(&conn, "Ada", "Lovelace");
    let repo = SqliteQuestionRepository::new(&conn);

    let mut question = Question::new("Engines?", "Can they compose music?", author_id);
    repo.save(&mut question).unwrap();

    let loaded = repo.find_by_id(question.id().unwrap()).unwrap().unwrap();
    assert_eq!(loaded, question);
    assert_eq!(loaded.title.as_deref(), Some("Engines?"));
    assert_eq!(loaded.body.as_deref(), Some("Can they compose music?"));
    assert_eq!(loaded.author_id, Some(author_id));
}

#[test]
fn save_persisted_question_updates_every_mutable_field() {
    let conn = setup();
    let first_author = create_user(&conn, "Ada", "Lovelace");
    let second_author = create_user(&conn, "Charles", "Babbage");
    let repo = SqliteQuestionRepository::new(&conn);

    let mut question = Question::new("draft", "draft body", first_author);
    repo.save(&mut question).unwrap();
    let id = question.id().unwrap();

    question.title = Some("final".to_string());
    question.body = Some("final body".to_string());
    question.author_id = Some(second_author);
    repo.save(&mut question).unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.title.as_deref(), Some("final"));
    assert_eq!(loaded.body.as_deref(), Some("final body"));
    assert_eq!(loaded.author_id, Some(second_author));
}

#[test]
fn saving_unchanged_question_twice_is_idempotent() {
    let conn = setup();
    let author_id = create_user(&conn, "Ada", "Lovelace");
    let repo = SqliteQuestionRepository::new(&conn);

    let mut question = Question::new("Engines?", "Can they weave?", author_id);
    repo.save(&mut question).unwrap();
    let id = question.id().unwrap();
    let after_first = repo.find_by_id(id).unwrap();

    repo.save(&mut question).unwrap();
    let after_second = repo.find_by_id(id).unwrap();

    assert_eq!(question.id(), Some(id));
    assert_eq!(after_first, after_second);
    assert_eq!(repo.find_by_author_id(author_id).unwrap().len(), 1);
}

#[test]
fn question_with_unknown_author_is_rejected_by_store() {
    let conn = setup();
    let repo = SqliteQuestionRepository::new(&conn);

    let mut question = Question::new("orphan", "no author", 999);
    assert!(repo.save(&mut question).is_err());
    assert!(question.id().is_none());
}

#[test]
fn find_by_author_id_returns_only_that_authors_questions() {
    let conn = setup();
    let ada = create_user(&conn, "Ada", "Lovelace");
    let alan = create_user(&conn, "Alan", "Turing");
    let first = create_question(&conn, ada, "first");
    let second = create_question(&conn, ada, "second");
    create_question(&conn, alan, "other");
    let repo = SqliteQuestionRepository::new(&conn);

    let ids: HashSet<_> = repo
        .find_by_author_id(ada)
        .unwrap()
        .iter()
        .filter_map(Question::id)
        .collect();
    assert_eq!(ids, HashSet::from([first, second]));

    let silent = create_user(&conn, "Silent", "User");
    assert!(repo.find_by_author_id(silent).unwrap().is_empty());
}

#[test]
fn question_find_by_id_returns_none_for_missing_question() {
    let conn = setup();
    assert!(SqliteQuestionRepository::new(&conn)
        .find_by_id(1)
        .unwrap()
        .is_none());
}

#[test]
fn question_author_and_user_authored_questions_link_both_ways() {
    let conn = setup();
    let author_id = create_user(&conn, "Ada", "Lovelace");
    let question_id = create_question(&conn, author_id, "linked");
    let question = SqliteQuestionRepository::new(&conn)
        .find_by_id(question_id)
        .unwrap()
        .unwrap();

    let author = question.author(&conn).unwrap().unwrap();
    assert_eq!(author.id(), Some(author_id));

    let authored = author.authored_questions(&conn).unwrap();
    assert_eq!(authored.len(), 1);
    assert_eq!(authored[0].id(), Some(question_id));
}

#[test]
fn save_new_reply_roundtrips_and_links_to_question_and_author() {
    let conn = setup();
    let author_id = create_user(&conn, "Ada", "Lovelace");
    let replier_id = create_user(&conn, "Alan", "Turing");
    let question_id = create_question(&conn, author_id, "topic");
    let repo = SqliteReplyRepository::new(&conn);

    let mut reply = Reply::new(question_id, replier_id, "Yes.");
    repo.save(&mut reply).unwrap();
    let id = reply.id().unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, reply);
    assert!(loaded.is_top_level());
    assert_eq!(
        loaded.question(&conn).unwrap().unwrap().id(),
        Some(question_id)
    );
    assert_eq!(loaded.author(&conn).unwrap().unwrap().id(), Some(replier_id));
    assert!(loaded.parent_reply(&conn).unwrap().is_none());
}

#[test]
fn save_persisted_reply_updates_body_and_parent() {
    let conn = setup();
    let user_id = create_user(&conn, "Ada", "Lovelace");
    let question_id = create_question(&conn, user_id, "topic");
    let parent = create_reply(&conn, question_id, user_id, None, "parent");
    let mut reply = create_reply(&conn, question_id, user_id, None, "draft");
    let repo = SqliteReplyRepository::new(&conn);

    reply.body = Some("edited".to_string());
    reply.parent_reply_id = parent.id();
    repo.save(&mut reply).unwrap();

    let loaded = repo.find_by_id(reply.id().unwrap()).unwrap().unwrap();
    assert_eq!(loaded.body.as_deref(), Some("edited"));
    assert_eq!(loaded.parent_reply_id, parent.id());
}

#[test]
fn reply_finders_filter_by_user_and_question() {
    let conn = setup();
    let ada = create_user(&conn, "Ada", "Lovelace");
    let alan = create_user(&conn, "Alan", "Turing");
    let first_question = create_question(&conn, ada, "first");
    let second_question = create_question(&conn, ada, "second");
    create_reply(&conn, first_question, ada, None, "a1");
    create_reply(&conn, first_question, alan, None, "b1");
    create_reply(&conn, second_question, alan, None, "b2");
    let repo = SqliteReplyRepository::new(&conn);

    assert_eq!(repo.find_by_question_id(first_question).unwrap().len(), 2);
    assert_eq!(repo.find_by_question_id(second_question).unwrap().len(), 1);
    assert_eq!(repo.find_by_user_id(alan).unwrap().len(), 2);
    assert_eq!(repo.find_by_user_id(ada).unwrap().len(), 1);

    let question = SqliteQuestionRepository::new(&conn)
        .find_by_id(first_question)
        .unwrap()
        .unwrap();
    assert_eq!(question.replies(&conn).unwrap().len(), 2);

    let lonely = create_question(&conn, ada, "unanswered");
    assert!(repo.find_by_question_id(lonely).unwrap().is_empty());
}

#[test]
fn reply_tree_children_and_parents_are_consistent() {
    let conn = setup();
    let user_id = create_user(&conn, "Ada", "Lovelace");
    let question_id = create_question(&conn, user_id, "tree");
    let root = create_reply(&conn, question_id, user_id, None, "root");
    let left = create_reply(&conn, question_id, user_id, root.id(), "left");
    let right = create_reply(&conn, question_id, user_id, root.id(), "right");
    let grandchild = create_reply(&conn, question_id, user_id, left.id(), "grandchild");
    create_reply(&conn, question_id, user_id, None, "unrelated");

    let children: HashSet<_> = root
        .child_replies(&conn)
        .unwrap()
        .iter()
        .filter_map(Reply::id)
        .collect();
    assert_eq!(
        children,
        HashSet::from([left.id().unwrap(), right.id().unwrap()])
    );

    let left_children = left.child_replies(&conn).unwrap();
    assert_eq!(left_children.len(), 1);
    assert_eq!(left_children[0].id(), grandchild.id());

    assert!(right.child_replies(&conn).unwrap().is_empty());
    assert!(grandchild.child_replies(&conn).unwrap().is_empty());

    let parent = grandchild.parent_reply(&conn).unwrap().unwrap();
    assert_eq!(parent.id(), left.id());
}

#[test]
fn reply_with_unknown_parent_is_rejected_by_store() {
    let conn = setup();
    let user_id = create_user(&conn, "Ada", "Lovelace");
    let question_id = create_question(&conn, user_id, "topic");

    let mut reply = Reply::new(question_id, user_id, "dangling").in_reply_to(12345);
    assert!(SqliteReplyRepository::new(&conn).save(&mut reply).is_err());
}

#[test]
fn user_authored_replies_lists_every_reply_by_user() {
    let conn = setup();
    let ada = create_user(&conn, "Ada", "Lovelace");
    let question_id = create_question(&conn, ada, "topic");
    create_reply(&conn, question_id, ada, None, "one");
    create_reply(&conn, question_id, ada, None, "two");

    let user = SqliteUserRepository::new(&conn)
        .find_by_id(ada)
        .unwrap()
        .unwrap();
    assert_eq!(user.authored_replies(&conn).unwrap().len(), 2);
}

#[test]
fn saving_unchanged_reply_twice_is_idempotent() {
    let conn = setup();
    let author_id = create_user(&conn, "Ada", "Lovelace");
    let question_id = create_question(&conn, author_id, "threaded");
    let top = create_reply(&conn, question_id, author_id, None, "top");
    let repo = SqliteReplyRepository::new(&conn);

    let mut reply = Reply::new(question_id, author_id, "nested");
    reply.parent_reply_id = top.id();
    repo.save(&mut reply).unwrap();
    let id = reply.id().unwrap();
    let after_first = repo.find_by_id(id).unwrap();

    repo.save(&mut reply).unwrap();
    let after_second = repo.find_by_id(id).unwrap();

    assert_eq!(reply.id(), Some(id));
    assert_eq!(after_first, after_second);
    assert_eq!(repo.find_by_question_id(question_id).unwrap().len(), 2);
}
