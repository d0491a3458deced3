//! Fridgecipe: scan a photo of a refrigerator for visible ingredients and
//! generate recipe suggestions from them.
//!
//! Both hard steps are delegated to a hosted OpenAI-compatible
//! chat-completions API. The crate's own logic is request construction,
//! response-text parsing with fallbacks, and graceful degradation: a failed
//! call produces an empty ingredient list or an error message string, never
//! a crash.
//!
//! # Example
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = fridgecipe::FridgeScanner::builder()
//!     .image("fridge.jpg")
//!     .servings(2)
//!     .build()
//!     .await?;
//!
//! for ingredient in &report.ingredients {
//!     println!("- {}", ingredient);
//! }
//! println!("{}", report.recipes);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod image;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod providers;

pub use builder::{FridgeScanner, FridgeScannerBuilder};
pub use error::FridgecipeError;
pub use image::ImageSource;
pub use model::{FridgeReport, Servings};
pub use providers::{CompletionProvider, OpenAIProvider};

/// Scan a fridge photo on disk with default settings.
///
/// Convenience wrapper over [`FridgeScanner::builder`].
pub async fn scan_fridge(image_path: &str, servings: u32) -> Result<FridgeReport, FridgecipeError> {
    FridgeScanner::builder()
        .image(image_path)
        .servings(servings)
        .build()
        .await
}

/// Detect ingredients in raw image bytes without generating recipes.
pub async fn detect_ingredients_in_photo(bytes: Vec<u8>) -> Result<Vec<String>, FridgecipeError> {
    let config = config::AppConfig::load().unwrap_or_default();
    let timeout = std::time::Duration::from_secs(config.timeout);
    let provider = match OpenAIProvider::new(&config.provider, timeout) {
        Ok(provider) => provider,
        Err(FridgecipeError::MissingApiKey) => {
            log::warn!("No API key configured; returning empty ingredient list");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let image = ImageSource::Bytes(bytes);
    Ok(pipeline::detect_ingredients(&provider, &image).await)
}
