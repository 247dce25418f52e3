//! A plain JSON confirmation for endpoints that have no record to return.

use serde::{Deserialize, Serialize};

/// The body sent after a record was deleted, e.g. `{"message": "Goal deleted"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// What happened.
    pub message: String,
}

impl Message {
    /// Create a message with the given text.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
