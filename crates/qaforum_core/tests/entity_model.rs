use qaforum_core::{Lifecycle, Question, QuestionLike, Reply, User};

#[test]
fn new_entities_start_unsaved() {
    let user = User::new("Ada", "Lovelace");
    assert_eq!(user.lifecycle(), Lifecycle::New);
    assert_eq!(user.id(), None);

    let question = Question::new("title", "body", 1);
    assert!(question.lifecycle().is_new());
    assert_eq!(question.author_id, Some(1));

    let reply = Reply::new(2, 3, "body").in_reply_to(4);
    assert!(reply.lifecycle().is_new());
    assert_eq!(reply.parent_reply_id, Some(4));
    assert!(!reply.is_top_level());
}

#[test]
fn unsaved_user_serializes_null_id() {
    let json = serde_json::to_value(User::new("Ada", "Lovelace")).unwrap();
    assert_eq!(json["id"], serde_json::Value::Null);
    assert_eq!(json["fname"], "Ada");
    assert_eq!(json["lname"], "Lovelace");
}

#[test]
fn persisted_question_serializes_plain_id() {
    let json = serde_json::json!({
        "id": 12,
        "title": "Why?",
        "body": "Because.",
        "author_id": 3
    });
    let question: Question = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(question.lifecycle(), Lifecycle::Persisted(12));
    assert_eq!(serde_json::to_value(&question).unwrap(), json);
}

#[test]
fn missing_id_deserializes_as_new() {
    let reply: Reply = serde_json::from_value(serde_json::json!({
        "question_id": 1,
        "user_id": 2,
        "body": "hello"
    }))
    .unwrap();
    assert!(reply.lifecycle().is_new());
    assert!(reply.is_top_level());
}

#[test]
fn question_like_uses_schema_field_names() {
    let like = QuestionLike {
        id: Some(1),
        user_id: Some(2),
        question_id: Some(3),
    };
    let json = serde_json::to_value(like).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["user_id"], 2);
    assert_eq!(json["question_id"], 3);
}
