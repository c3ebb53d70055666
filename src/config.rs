use std::{env, net::SocketAddr, time::Duration};

/// Bound on the outbound classifier call. The upstream service itself does
/// not impose one; override with `REQUEST_TIMEOUT_SECS`.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_bind: SocketAddr,
    /// `openai` (default) or `mock` for offline development.
    pub moderation_provider: String,
    pub openai_base_url: String,
    pub moderation_model: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_owned());
        let http_bind = env::var("HTTP_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        let http_bind = http_bind.parse()?;

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            http_bind,
            moderation_provider: env::var("MODERATION_PROVIDER")
                .unwrap_or_else(|_| "openai".to_owned()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_owned()),
            moderation_model: env::var("MODERATION_MODEL")
                .unwrap_or_else(|_| "omni-moderation-latest".to_owned()),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}
