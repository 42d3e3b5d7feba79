//! User entity.

use super::{Lifecycle, UserId};
use serde::{Deserialize, Serialize};

/// A forum member.
///
/// Name fields are optional because rows from partial selects may omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "id", default)]
    pub(crate) state: Lifecycle,
    pub fname: Option<String>,
    pub lname: Option<String>,
}

impl User {
    /// Creates an unsaved user.
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            state: Lifecycle::New,
            fname: Some(fname.into()),
            lname: Some(lname.into()),
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.state.id()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state
    }
}
