use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;
use crate::prompt::PromptParts;
use crate::wire::Blob;

pub mod gemini;

/// Seam between the gateway and the remote generative service. Test doubles
/// implement this trait; production uses the Gemini client.
#[async_trait]
pub trait TextImageModel: Send + Sync {
    /// One text-generation call: ordered image parts followed by one text
    /// part. Returns the raw generated text ("" when the provider returned
    /// no candidates).
    async fn generate_text(&self, parts: &PromptParts) -> Result<String>;

    /// One image-generation call: a single text part, no attachments.
    /// Ok(None) when no inline image came back.
    async fn generate_image(&self, prompt: &str) -> Result<Option<Blob>>;
}

pub type DynModel = Box<dyn TextImageModel + Send + Sync>;

pub fn make_model(cfg: &Config) -> DynModel {
    Box::new(gemini::GeminiClient::new(cfg))
}
