use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Classification, ModerationClassifier};

/// Client for the OpenAI moderations endpoint.
///
/// The API key arrives with each request to the service and is passed
/// through per call; it is never stored on the client, so credentials from
/// different callers cannot leak into one another.
#[derive(Debug, Clone)]
pub struct OpenAiModerationClassifier {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiModerationClassifier {
    pub fn new(base_url: String, model: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            model,
        })
    }
}

#[derive(Debug, Serialize)]
struct ModerationsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ModerationsResponse {
    results: Vec<ModerationsResult>,
}

#[derive(Debug, Deserialize)]
struct ModerationsResult {
    categories: Map<String, Value>,
    category_scores: Map<String, Value>,
}

#[async_trait]
impl ModerationClassifier for OpenAiModerationClassifier {
    async fn classify(&self, api_key: &str, input: &str) -> anyhow::Result<Classification> {
        let payload = ModerationsRequest {
            model: &self.model,
            input,
        };

        let response = self
            .client
            .post(format!("{}/moderations", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json::<ModerationsResponse>()
            .await?;

        let result = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("moderation API returned no results"))?;

        Ok(Classification {
            categories: result.categories,
            category_scores: result.category_scores,
        })
    }
}
