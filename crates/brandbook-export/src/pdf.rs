use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use brandbook_core::models::result::GenerationResult;
use tracing::debug;

use crate::error::ExportError;

/// A decoded PDF ready to be saved locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDownload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// `<company_name>_Profile.pdf`, with path separators, quotes and control
/// characters replaced so the name is safe to save.
pub fn download_filename(company_name: &str) -> String {
    let stem: String = company_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '"' | ':' | '*' | '?' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}_Profile.pdf")
}

/// Decode the PDF payload of a result.
///
/// Returns `None` when the provider left the payload empty; the caller then
/// offers only the HTML preview.
pub fn prepare_download(result: &GenerationResult) -> Result<Option<PdfDownload>, ExportError> {
    if !result.has_pdf() {
        return Ok(None);
    }

    // Some providers wrap long base64 output across lines.
    let payload: String = result
        .pdf_base64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let payload = payload
        .strip_prefix("data:application/pdf;base64,")
        .unwrap_or(&payload);

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let filename = download_filename(&result.meta.company_name);
    debug!(filename, size = bytes.len(), "prepared PDF download");

    Ok(Some(PdfDownload { filename, bytes }))
}
