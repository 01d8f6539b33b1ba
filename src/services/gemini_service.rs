use anyhow::Error;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::{PipelineError, Result};
use crate::models::{
    config::Config,
    gemini_generate_content::{GenerateContentRequest, GenerateContentResponse},
};
use crate::services::TextGenerator;
use crate::utils::consts::GEMINI_SERVICE;

/// Single-shot text generation against the Gemini `generateContent` endpoint.
pub struct GeminiService {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiService {
    pub fn new(config: &Config) -> std::result::Result<GeminiService, Error> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(GeminiService {
            client,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_key(),
        })
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(PipelineError::MissingCredential("GEMINI_API_KEY"))?;

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let resp = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PipelineError::upstream(
                GEMINI_SERVICE,
                format!("status {}: {}", status, body.trim()),
            ));
        }

        let response = resp
            .json::<GenerateContentResponse>()
            .await
            .map_err(transport_error)?;

        let text = response.text().ok_or(PipelineError::EmptyResponse)?;
        debug!("Generated {} characters with {}", text.len(), self.model);

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiService {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }
}

fn transport_error(err: reqwest::Error) -> PipelineError {
    PipelineError::upstream(GEMINI_SERVICE, err.without_url().to_string())
}
