//! HTTP Handlers

use axum::Json;
use serde::Serialize;

use diway_core::IntentClassifier;
use diway_core::content;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Deck metadata response
#[derive(Serialize)]
pub struct SiteInfo {
    pub product: &'static str,
    pub tagline: &'static str,
    pub slides: usize,
    pub story_steps: usize,
    pub agents: usize,
    pub intent_tags: Vec<String>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Deck metadata for smoke checks and link previews
pub async fn site_info() -> Json<SiteInfo> {
    let classifier = IntentClassifier::default();

    Json(SiteInfo {
        product: content::PRODUCT_NAME,
        tagline: content::PRODUCT_TAGLINE,
        slides: content::deck_slides().len(),
        story_steps: content::STORY_STEPS.len(),
        agents: content::AGENTS.len(),
        intent_tags: classifier.tags().iter().map(ToString::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_site_info_reflects_content() {
        let info = site_info().await.0;
        assert_eq!(info.product, "DIWAY");
        assert_eq!(info.story_steps, 5);
        assert_eq!(info.slides, content::deck_slides().len());
        assert!(info.intent_tags.contains(&"Field Evidence".to_string()));
    }
}
