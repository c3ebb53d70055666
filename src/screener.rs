//! The moderation pipeline: local pattern rules first, the remote
//! classifier only when no rule fires.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::classifier::ModerationClassifier;
use crate::patterns::PatternScreen;
use crate::types::{ModerationRequest, ModerationVerdict};

/// Errors from the moderation pipeline.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The caller did not supply a classifier credential.
    #[error("no API key provided")]
    MissingApiKey,

    /// The remote classifier call failed.
    #[error("remote classification failed")]
    Classification(anyhow::Error),
}

pub struct MessageScreener {
    patterns: PatternScreen,
    classifier: Arc<dyn ModerationClassifier>,
}

impl MessageScreener {
    pub fn new(patterns: PatternScreen, classifier: Arc<dyn ModerationClassifier>) -> Self {
        Self {
            patterns,
            classifier,
        }
    }

    /// Screens one message. Each request makes at most one remote call,
    /// and none at all when a local rule matches or the credential is
    /// missing.
    pub async fn screen(
        &self,
        request: ModerationRequest,
    ) -> Result<ModerationVerdict, ScreenError> {
        if request.api_key.is_empty() {
            return Err(ScreenError::MissingApiKey);
        }

        let restricted = self.patterns.scan(&request.message);
        if !restricted.is_empty() {
            debug!(labels = ?restricted, "message blocked by pattern rules");
            return Ok(ModerationVerdict {
                is_valid: false,
                flagged: true,
                restricted_content: restricted.iter().map(|label| (*label).to_owned()).collect(),
                category_scores: None,
            });
        }

        let classification = self
            .classifier
            .classify(&request.api_key, &request.message)
            .await
            .map_err(ScreenError::Classification)?;

        let flagged = classification.flagged_categories();
        Ok(ModerationVerdict {
            is_valid: flagged.is_empty(),
            flagged: !flagged.is_empty(),
            restricted_content: flagged,
            category_scores: Some(classification.category_scores),
        })
    }
}
