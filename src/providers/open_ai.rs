use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::FridgecipeError;
use crate::providers::CompletionProvider;

// Temperatures tuned per step: detection wants deterministic output,
// generation benefits from some variety.
const DETECTION_TEMPERATURE: f32 = 0.2;
const GENERATION_TEMPERATURE: f32 = 0.5;

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, FridgecipeError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or(FridgecipeError::MissingApiKey)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com".to_string());

        Ok(OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            max_tokens: 2000,
            timeout: Duration::from_secs(30),
        }
    }

    async fn chat_completion(&self, body: Value) -> Result<Value, FridgecipeError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FridgecipeError::ServiceError { status, body });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let content = response_body["choices"][0]["message"]["content"].clone();
        if content.is_null() {
            return Err(FridgecipeError::PayloadError(
                "no message content in completion".to_string(),
            ));
        }

        Ok(content)
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete_vision(
        &self,
        system_prompt: &str,
        user_text: &str,
        image_data_url: &str,
    ) -> Result<Value, FridgecipeError> {
        self.chat_completion(json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": [
                    {"type": "text", "text": user_text},
                    {"type": "image_url", "image_url": {"url": image_data_url}}
                ]}
            ],
            "temperature": DETECTION_TEMPERATURE,
            "max_tokens": self.max_tokens
        }))
        .await
    }

    async fn complete_text(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Value, FridgecipeError> {
        self.chat_completion(json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ],
            "temperature": GENERATION_TEMPERATURE,
            "max_tokens": self.max_tokens
        }))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_complete_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r###"{
                    "choices": [{
                        "message": {
                            "content": "## Veggie Omelette\nA quick way to use up eggs."
                        }
                    }]
                }"###,
            )
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let content = provider
            .complete_text("You are a helpful cooking assistant.", "make recipes")
            .await
            .unwrap();
        assert!(content.as_str().unwrap().contains("Omelette"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_vision_sends_image_part() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::PartialJson(json!({"model": "gpt-4o-mini"})),
                mockito::Matcher::Regex("data:image/png;base64,".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "[\"milk\", \"eggs\"]"
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let content = provider
            .complete_vision("list ingredients", "what do you see?", "data:image/png;base64,AAAA")
            .await
            .unwrap();
        assert_eq!(content.as_str().unwrap(), "[\"milk\", \"eggs\"]");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_is_service_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Invalid API key"}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "bad_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let result = provider.complete_text("system", "user").await;
        match result {
            Err(FridgecipeError::ServiceError { status, .. }) => assert_eq!(status, 401),
            other => panic!("expected service error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_content_is_payload_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let result = provider.complete_text("system", "user").await;
        assert!(matches!(result, Err(FridgecipeError::PayloadError(_))));
    }

    #[test]
    fn test_new_requires_api_key() {
        let original_key = std::env::var("OPENAI_API_KEY").ok();
        std::env::remove_var("OPENAI_API_KEY");

        let config = ProviderConfig::default();
        let result = OpenAIProvider::new(&config, Duration::from_secs(30));
        assert!(matches!(result, Err(FridgecipeError::MissingApiKey)));

        if let Some(key) = original_key {
            std::env::set_var("OPENAI_API_KEY", key);
        }
    }

    #[test]
    fn test_provider_name() {
        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            "http://localhost".to_string(),
            "gpt-4o-mini".to_string(),
        );
        assert_eq!(provider.provider_name(), "openai");
    }
}
