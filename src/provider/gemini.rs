use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::errors::PressError;
use crate::prompt::PromptParts;
use crate::wire::{Blob, GenerateContentRequest, GenerateContentResponse};

/// Gemini REST client. The base URL is injectable so tests can point it at a
/// local mock server; the credential is checked per call, at first use.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    text_model: String,
    image_model: String,
    timeout_secs: u64,
    debug: bool,
}

impl GeminiClient {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: cfg.base_url.clone(),
            api_key: cfg.api_key.clone(),
            text_model: cfg.text_model.clone(),
            image_model: cfg.image_model.clone(),
            timeout_secs: cfg.timeout_secs,
            debug: cfg.debug,
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| PressError::MissingCredential.into())
    }

    async fn generate(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let key = self.api_key()?;
        let url = format!("{}/{}:generateContent?key={}", self.base_url, model, key);

        if self.debug {
            eprintln!(
                "debug[gemini]: HTTP POST {}:generateContent body:\n{}",
                model,
                serde_json::to_string_pretty(req)?
            );
        }

        let resp = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(req)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if self.debug {
            eprintln!("debug[gemini]: raw status: {}", status);
            eprintln!("debug[gemini]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            return Err(PressError::Provider(format!("Gemini API error ({}): {}", status, text)).into());
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| PressError::Provider(format!("unparseable Gemini response: {e}")))?;
        Ok(parsed)
    }
}

#[async_trait]
impl super::TextImageModel for GeminiClient {
    async fn generate_text(&self, parts: &PromptParts) -> Result<String> {
        let req = GenerateContentRequest::from_parts(parts);
        let resp = self.generate(&self.text_model, &req).await?;
        Ok(resp.text().unwrap_or_default())
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<Blob>> {
        let req = GenerateContentRequest::text_only(prompt);
        let resp = self.generate(&self.image_model, &req).await?;
        Ok(resp.first_inline_image())
    }
}
