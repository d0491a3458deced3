use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

use crate::error::FridgecipeError;

/// Represents the source of a fridge photo
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(String),
    /// Image as raw bytes (e.g. from an upload widget)
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Resolve the source to a base64 data URL suitable for embedding in a
    /// multimodal chat message.
    pub async fn to_data_url(&self) -> Result<String, FridgecipeError> {
        let bytes = match self {
            ImageSource::Path(path) => tokio::fs::read(path).await?,
            ImageSource::Bytes(bytes) => bytes.clone(),
        };
        Ok(data_url(&bytes))
    }
}

/// Base64-encode image bytes into a `data:` URL, sniffing the MIME type
/// from the magic bytes.
pub fn data_url(bytes: &[u8]) -> String {
    let mime = sniff_mime(bytes);
    let encoded = STANDARD.encode(bytes);
    debug!("Encoded {} image bytes as {}", bytes.len(), mime);
    format!("data:{};base64,{}", mime, encoded)
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else {
        // PNG magic or anything else: the vision endpoint accepts a PNG
        // label for both, so default to it
        "image/png"
    }
}
