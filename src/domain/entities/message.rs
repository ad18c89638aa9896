use serde::{Deserialize, Serialize};

/// Body of an "edit original interaction response" call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEdit {
    pub content: String,
}

impl InteractionEdit {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
