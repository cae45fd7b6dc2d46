use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The signed-in traveller. There is no real authentication behind it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: Option<String>,
}

/// Name stamped on checklist edits when nobody is signed in.
pub const ANONYMOUS: &str = "Anonymous";

impl UserProfile {
    #[must_use]
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            email: None,
        }
    }
}
