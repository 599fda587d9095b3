//! Drafting content descriptions with an external text-generation service.
//!
//! Generation is best effort: callers use [`describe_or_empty`], which turns
//! any failure into an empty description.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use common::ContentType;

use crate::config::DescribeConfig;

/// Produces a description for a content item from its title and type.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(&self, title: &str, content_type: ContentType) -> Result<String>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DescribeRequest<'a> {
    title: &'a str,
    content_type: ContentType,
}

#[derive(Deserialize)]
struct DescribeResponse {
    description: String,
}

/// Generator backed by a JSON-over-HTTP endpoint.
///
/// Sends `{"title", "contentType"}` and expects `{"description"}` back.
pub struct HttpDescriptionGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpDescriptionGenerator {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// `None` when no endpoint is configured.
    pub fn from_config(config: &DescribeConfig) -> Option<Self> {
        if config.endpoint.trim().is_empty() {
            return None;
        }
        let api_key = (!config.api_key.is_empty()).then(|| config.api_key.clone());
        Some(Self::new(config.endpoint.trim(), api_key))
    }
}

#[async_trait]
impl DescriptionGenerator for HttpDescriptionGenerator {
    async fn generate(&self, title: &str, content_type: ContentType) -> Result<String> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&DescribeRequest { title, content_type });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response: DescribeResponse = request
            .send()
            .await
            .context("Description request failed")?
            .error_for_status()
            .context("Description service returned an error status")?
            .json()
            .await
            .context("Description response is not valid JSON")?;

        Ok(response.description.trim().to_string())
    }
}

/// Generate a description, or an empty string if generation fails.
pub async fn describe_or_empty(
    generator: &dyn DescriptionGenerator,
    title: &str,
    content_type: ContentType,
) -> String {
    if title.trim().is_empty() {
        warn!("Skipping description generation without a title");
        return String::new();
    }

    match generator.generate(title, content_type).await {
        Ok(description) => description,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Description generation failed");
            String::new()
        }
    }
}
