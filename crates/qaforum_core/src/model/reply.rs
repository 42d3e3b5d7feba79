//! Reply entity.
//!
//! Replies form a tree per question: top-level replies have no
//! `parent_reply_id`, nested replies point at the reply they answer. The
//! store is expected to keep parent and child on the same question.

use super::{Lifecycle, QuestionId, ReplyId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "id", default)]
    pub(crate) state: Lifecycle,
    pub question_id: Option<QuestionId>,
    /// `None` for top-level replies.
    pub parent_reply_id: Option<ReplyId>,
    pub user_id: Option<UserId>,
    pub body: Option<String>,
}

impl Reply {
    /// Creates an unsaved top-level reply.
    pub fn new(question_id: QuestionId, user_id: UserId, body: impl Into<String>) -> Self {
        Self {
            state: Lifecycle::New,
            question_id: Some(question_id),
            parent_reply_id: None,
            user_id: Some(user_id),
            body: Some(body.into()),
        }
    }

    /// Nests this reply under `parent_reply_id`.
    pub fn in_reply_to(mut self, parent_reply_id: ReplyId) -> Self {
        self.parent_reply_id = Some(parent_reply_id);
        self
    }

    pub fn id(&self) -> Option<ReplyId> {
        self.state.id()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_reply_id.is_none()
    }
}
