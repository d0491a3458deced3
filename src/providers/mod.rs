mod open_ai;

pub use open_ai::OpenAIProvider;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FridgecipeError;

/// Boundary to the hosted completion service.
///
/// Both operations return the raw `message.content` of the completion,
/// which is either a string or a list of content parts; flattening is the
/// extractor's job, not the provider's.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Complete a multimodal request: a system instruction, a short user
    /// instruction, and an image supplied as a base64 data URL.
    async fn complete_vision(
        &self,
        system_prompt: &str,
        user_text: &str,
        image_data_url: &str,
    ) -> Result<Value, FridgecipeError>;

    /// Complete a text-only request.
    async fn complete_text(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Value, FridgecipeError>;
}
