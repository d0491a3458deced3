use std::time::Duration;

use log::warn;

use crate::config::{AppConfig, ProviderConfig};
use crate::error::FridgecipeError;
use crate::image::ImageSource;
use crate::model::{FridgeReport, Servings};
use crate::pipeline;
use crate::providers::OpenAIProvider;

/// Builder for configuring and executing a fridge scan
#[derive(Debug, Default)]
pub struct FridgeScannerBuilder {
    image: Option<ImageSource>,
    servings: Option<u32>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl FridgeScannerBuilder {
    /// Set the input to an image file path
    ///
    /// # Example
    /// ```
    /// use fridgecipe::FridgeScanner;
    ///
    /// let builder = FridgeScanner::builder()
    ///     .image("fridge.jpg");
    /// ```
    pub fn image(mut self, path: impl Into<String>) -> Self {
        self.image = Some(ImageSource::Path(path.into()));
        self
    }

    /// Set the input to raw image bytes (JPEG or PNG)
    pub fn image_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.image = Some(ImageSource::Bytes(bytes));
        self
    }

    /// Set the servings count each recipe should be scaled to (1-6)
    pub fn servings(mut self, count: u32) -> Self {
        self.servings = Some(count);
        self
    }

    /// Set the API key directly instead of relying on environment
    /// variables or config files
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the completion provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set a custom base URL for the completion endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for completion requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Execute the scan.
    ///
    /// Fails only on builder misuse (no image, servings out of range).
    /// A missing API credential is not fatal: the scan degrades to an
    /// empty ingredient list with a warning in the recipes field.
    ///
    /// # Example
    /// ```no_run
    /// # use fridgecipe::FridgeScanner;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = FridgeScanner::builder()
    ///     .image("fridge.jpg")
    ///     .servings(2)
    ///     .build()
    ///     .await?;
    /// println!("{}", report.recipes);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<FridgeReport, FridgecipeError> {
        let image = self.image.ok_or_else(|| {
            FridgecipeError::BuilderError(
                "No image specified. Use .image() or .image_bytes()".to_string(),
            )
        })?;

        let servings = match self.servings {
            Some(count) => Servings::new(count)?,
            None => Servings::default(),
        };

        // Builder settings override the loaded configuration
        let config = AppConfig::load().unwrap_or_default();
        let provider_config = ProviderConfig {
            model: self.model.unwrap_or(config.provider.model),
            max_tokens: config.provider.max_tokens,
            api_key: self.api_key.or(config.provider.api_key),
            base_url: self.base_url.or(config.provider.base_url),
        };
        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.timeout));

        let provider = match OpenAIProvider::new(&provider_config, timeout) {
            Ok(provider) => provider,
            Err(FridgecipeError::MissingApiKey) => {
                warn!("No API key configured; returning empty scan results");
                return Ok(FridgeReport {
                    ingredients: Vec::new(),
                    recipes: "No API key configured. Set OPENAI_API_KEY to enable scanning."
                        .to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        Ok(pipeline::scan(&provider, &image, servings).await)
    }
}

/// Main entry point for the builder API
pub struct FridgeScanner;

impl FridgeScanner {
    /// Creates a new builder for scanning a fridge photo
    ///
    /// # Example
    /// ```
    /// use fridgecipe::FridgeScanner;
    ///
    /// let builder = FridgeScanner::builder();
    /// ```
    pub fn builder() -> FridgeScannerBuilder {
        FridgeScannerBuilder::default()
    }
}
