use serde::{Deserialize, Serialize};

use super::profile::BrandColors;

/// The structured reply of a profile generation.
///
/// Every field is required on the wire; a reply missing any of them is a
/// failed generation, never a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Base64 PDF bytes. Empty when the provider did not produce a PDF.
    pub pdf_base64: String,
    /// Self-contained HTML document.
    pub html_fallback: String,
    pub meta: GenerationMeta,
}

impl GenerationResult {
    pub fn has_pdf(&self) -> bool {
        !self.pdf_base64.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMeta {
    pub pages: u32,
    pub company_name: String,
    pub brand_colors: BrandColors,
    /// Echoed as free text; the model is not held to the `Locale` set.
    pub locale: String,
    pub notes: String,
}
