//! Logo ingestion.
//!
//! A selected image file is read in full and turned into a base64 data URI
//! that the prompt can embed inline. Only PNG, JPEG and SVG are accepted.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;

/// Largest logo file accepted, in bytes.
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/// An embeddable logo: `data:<mime>;base64,<payload>`.
///
/// Deserialization goes through [`LogoImage::from_data_uri`], so a request
/// body cannot carry a malformed logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogoImage(String);

impl TryFrom<String> for LogoImage {
    type Error = CoreError;

    fn try_from(uri: String) -> Result<Self, Self::Error> {
        Self::from_data_uri(uri)
    }
}

impl From<LogoImage> for String {
    fn from(logo: LogoImage) -> Self {
        logo.0
    }
}

impl LogoImage {
    /// Encode raw image bytes.
    ///
    /// `hint` is a mime type or file name from the upload; it is only
    /// consulted for SVG, since PNG and JPEG are recognised by their magic
    /// bytes.
    pub fn from_bytes(bytes: &[u8], hint: Option<&str>) -> Result<Self, CoreError> {
        if bytes.len() > MAX_LOGO_BYTES {
            return Err(CoreError::ImageTooLarge {
                size: bytes.len(),
                limit: MAX_LOGO_BYTES,
            });
        }

        let mime = sniff_mime(bytes, hint).ok_or_else(|| {
            CoreError::UnsupportedImage(hint.unwrap_or("unknown").to_string())
        })?;

        debug!(mime, size = bytes.len(), "encoded logo image");

        Ok(Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes))))
    }

    /// Read a local image file and encode it.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| CoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let name = path.file_name().and_then(|n| n.to_str());
        Self::from_bytes(&bytes, name)
    }

    /// Parse an existing data URI, checking its shape and payload.
    pub fn from_data_uri(uri: impl Into<String>) -> Result<Self, CoreError> {
        let logo = Self(uri.into());
        logo.decode()?;
        Ok(logo)
    }

    pub fn as_data_uri(&self) -> &str {
        &self.0
    }

    pub fn mime(&self) -> Option<&str> {
        self.split().ok().map(|(mime, _)| mime)
    }

    /// Decode back into the mime type and the original bytes.
    pub fn decode(&self) -> Result<(String, Vec<u8>), CoreError> {
        let (mime, payload) = self.split()?;
        let bytes = STANDARD.decode(payload)?;
        Ok((mime.to_string(), bytes))
    }

    fn split(&self) -> Result<(&str, &str), CoreError> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::InvalidDataUri("missing data: scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CoreError::InvalidDataUri("missing payload separator".to_string()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| CoreError::InvalidDataUri("payload is not base64".to_string()))?;
        Ok((mime, payload))
    }
}

/// Identify the image type from magic bytes, falling back to the hint for SVG.
fn sniff_mime(bytes: &[u8], hint: Option<&str>) -> Option<&'static str> {
    match bytes {
        [0x89, 0x50, 0x4E, 0x47, ..] => return Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => return Some("image/jpeg"),
        _ => {}
    }

    if looks_like_svg(bytes) {
        return Some("image/svg+xml");
    }

    let hint = hint?.to_ascii_lowercase();
    if hint == "image/svg+xml" || hint.ends_with(".svg") {
        return Some("image/svg+xml");
    }

    None
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}
