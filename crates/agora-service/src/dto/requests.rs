//! Request DTOs for API endpoints
//!
//! Tag fields arrive as raw strings and are parsed against the closed
//! domain enums at the handler boundary, so unknown tags fail loudly.

use agora_core::value_objects::Id;
use serde::Deserialize;

/// Set or toggle a reaction
#[derive(Debug, Clone, Deserialize)]
pub struct ReactRequest {
    /// Reaction type tag, e.g. "like" or "heart"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Register a content item with its owner (ingestion boundary)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterContentRequest {
    pub owner_id: Id,
}

/// Report a scored content action
#[derive(Debug, Clone, Deserialize)]
pub struct ContentActionRequest {
    /// Action key, e.g. "post" or "deleteComment"
    pub action: String,
}
