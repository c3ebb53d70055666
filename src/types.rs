use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/moderate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationRequest {
    /// The text to screen. An empty message simply matches no rule.
    #[serde(default)]
    pub message: String,
    /// Credential forwarded to the remote classifier. Absent and empty are
    /// treated the same.
    #[serde(default, rename = "apiKey")]
    pub api_key: String,
}

/// The accept/reject decision returned to the caller.
///
/// `flagged` is always the negation of `is_valid`, and both follow from
/// whether `restricted_content` is empty.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationVerdict {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub flagged: bool,
    /// Labels of the local rules that fired, or the remote categories that
    /// were flagged.
    #[serde(rename = "restrictedContent")]
    pub restricted_content: Vec<String>,
    /// Per-category confidence scores; only present when the remote
    /// classifier ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_scores: Option<Map<String, Value>>,
}
