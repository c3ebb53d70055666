use std::sync::Arc;

use modguard::{
    classifier::{MockModerationClassifier, ModerationClassifier, OpenAiModerationClassifier},
    config::AppConfig,
    http::{self, AppState},
    patterns::PatternScreen,
    screener::MessageScreener,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let classifier = build_classifier(&config)?;
    let screener = Arc::new(MessageScreener::new(PatternScreen::new(), classifier));

    let app = http::router(AppState { screener });
    let listener = TcpListener::bind(config.http_bind).await?;
    info!("Moderation API listening on {}", config.http_bind);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

fn build_classifier(config: &AppConfig) -> anyhow::Result<Arc<dyn ModerationClassifier>> {
    if config.moderation_provider == "mock" {
        warn!("MODERATION_PROVIDER=mock; messages are classified by the offline mock");
        return Ok(Arc::new(MockModerationClassifier::default()));
    }

    Ok(Arc::new(OpenAiModerationClassifier::new(
        config.openai_base_url.clone(),
        config.moderation_model.clone(),
        config.request_timeout,
    )?))
}
