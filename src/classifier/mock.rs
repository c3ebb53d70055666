use async_trait::async_trait;

use super::{Classification, ModerationClassifier};

/// Offline stand-in for the remote classifier. Returns a fixed
/// classification; the default approves everything.
#[derive(Debug, Default)]
pub struct MockModerationClassifier {
    classification: Classification,
}

impl MockModerationClassifier {
    pub fn with_classification(classification: Classification) -> Self {
        Self { classification }
    }
}

#[async_trait]
impl ModerationClassifier for MockModerationClassifier {
    async fn classify(&self, _api_key: &str, _input: &str) -> anyhow::Result<Classification> {
        Ok(self.classification.clone())
    }
}
