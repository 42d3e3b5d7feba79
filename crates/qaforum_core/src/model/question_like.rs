//! Question like association row.

use super::{QuestionId, QuestionLikeId, UserId};
use serde::{Deserialize, Serialize};

/// One user liking one question. Read-only: likes are written by the
/// provisioning side of the store, not through this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLike {
    pub id: Option<QuestionLikeId>,
    pub user_id: Option<UserId>,
    pub question_id: Option<QuestionId>,
}
