mod mock;
mod openai;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use mock::MockModerationClassifier;
pub use openai::OpenAiModerationClassifier;

/// Outcome of one remote classification: per-category boolean flags and
/// confidence scores. The category set is owned by the remote service, so
/// keys and their order are only known at runtime.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub categories: Map<String, Value>,
    pub category_scores: Map<String, Value>,
}

impl Classification {
    /// Names of the categories whose flag is set, in the order the
    /// classifier returned them.
    pub fn flagged_categories(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|(_, value)| value.as_bool() == Some(true))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[async_trait]
pub trait ModerationClassifier: Send + Sync {
    /// Submits one message for classification, authenticating with the
    /// caller-supplied key.
    async fn classify(&self, api_key: &str, input: &str) -> anyhow::Result<Classification>;
}
