//! Question entity.

use super::{Lifecycle, QuestionId, UserId};
use serde::{Deserialize, Serialize};

/// A question posted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "id", default)]
    pub(crate) state: Lifecycle,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Author reference; written on every save.
    pub author_id: Option<UserId>,
}

impl Question {
    /// Creates an unsaved question authored by `author_id`.
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: UserId) -> Self {
        Self {
            state: Lifecycle::New,
            title: Some(title.into()),
            body: Some(body.into()),
            author_id: Some(author_id),
        }
    }

    pub fn id(&self) -> Option<QuestionId> {
        self.state.id()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state
    }
}
