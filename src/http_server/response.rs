//! # Response Formatting
//!
//! Standard success body for mutations.

use serde::Serialize;

/// Mutation success response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes_removed: Option<usize>,
}

impl MutationResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
            routes_removed: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::new(message)
        }
    }

    pub fn routes_removed(mut self, count: usize) -> Self {
        self.routes_removed = Some(count);
        self
    }
}
