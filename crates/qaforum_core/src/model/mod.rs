//! Forum entity model.
//!
//! # Responsibility
//! - Define the in-memory shapes of users, questions, replies and likes.
//! - Model the New/Persisted lifecycle shared by saveable entities.
//! - Map store rows onto entities (`hydrate`).
//!
//! # Invariants
//! - An entity id is assigned by the store exactly once and never changes.
//! - Entities are disposable views; the store is the source of truth.

pub mod hydrate;
pub mod question;
pub mod question_like;
pub mod reply;
pub mod user;

use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type QuestionId = i64;
pub type ReplyId = i64;
pub type QuestionLikeId = i64;

/// Persistence state of a saveable entity.
///
/// `New` entities have never been written; `save` inserts them and moves
/// them to `Persisted` with the store-assigned id. There is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Lifecycle {
    #[default]
    New,
    Persisted(i64),
}

impl Lifecycle {
    pub fn id(self) -> Option<i64> {
        match self {
            Self::New => None,
            Self::Persisted(id) => Some(id),
        }
    }

    pub fn is_new(self) -> bool {
        matches!(self, Self::New)
    }

    pub fn is_persisted(self) -> bool {
        !self.is_new()
    }

    /// Records the store-assigned id. Has no effect once persisted.
    pub(crate) fn persist(&mut self, id: i64) {
        if self.is_new() {
            *self = Self::Persisted(id);
        }
    }
}

impl From<Option<i64>> for Lifecycle {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::New, Self::Persisted)
    }
}

impl From<Lifecycle> for Option<i64> {
    fn from(value: Lifecycle) -> Self {
        value.id()
    }
}
