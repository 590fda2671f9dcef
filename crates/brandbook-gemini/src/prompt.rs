//! Prompt construction.
//!
//! Turns a profile request into one instruction document: an inline JSON
//! block carrying the inputs, followed by the content and design rules the
//! model must follow. The JSON block is produced by `serde_json`, so quotes,
//! newlines and other control characters in free text are always escaped
//! and the block stays parseable.

use brandbook_core::models::profile::ProfileRequest;
use serde_json::{Value, json};

/// Heading that introduces the inline JSON block.
pub const INPUT_HEADING: &str = "**Input Data:**";

/// Heading that follows the inline JSON block.
pub const RULES_HEADING: &str = "**Content & Design Rules:**";

const PREAMBLE: &str = "\
You are an expert corporate profile designer and copywriter. Your task is to \
generate a complete, multi-page company profile based on the following JSON data.
Your output must be a single, valid JSON object that adheres to the provided \
schema. Do not include any markdown formatting like ```json.";

/// Build the full instruction text for one generation.
pub fn build_prompt(request: &ProfileRequest) -> String {
    let input = input_block(request);
    let rules = design_rules(request);

    format!(
        "{PREAMBLE}\n\n{INPUT_HEADING}\n{input:#}\n\n{RULES_HEADING}\n{rules}\n\nGenerate the JSON output now.\n"
    )
}

/// The request as the model sees it.
pub fn input_block(request: &ProfileRequest) -> Value {
    let slides: Vec<Value> = request
        .slides
        .iter()
        .map(|slide| {
            json!({
                "title": slide.title,
                "text": slide.text,
                "image_description": slide.image_description,
            })
        })
        .collect();

    json!({
        "company_name": request.company_name,
        "tagline": request.tagline,
        "industry": request.industry,
        "target_audience": request.target_audience,
        "tone": request.tone.as_str(),
        "brand_colors": {
            "primary": request.brand_colors.primary,
            "secondary": request.brand_colors.secondary,
        },
        "brand_fonts": {
            "heading": request.brand_fonts.heading,
            "body": request.brand_fonts.body,
        },
        "logo_image_base64": request.logo_image.as_ref().map(|logo| logo.as_data_uri()),
        "number_of_slides": slides.len(),
        "slides": slides,
        "contact_info": request.contact_info,
        "locale": request.locale.as_str(),
    })
}

fn design_rules(request: &ProfileRequest) -> String {
    let locale = request.locale.as_str();
    let direction_rule = if request.locale.is_rtl() {
        format!(
            "8.  **RTL Support:** The locale is '{locale}', so the entire HTML layout must be \
             right-to-left (RTL). Use 'dir=\"rtl\"' on the <html> tag and adjust CSS accordingly \
             (e.g., text-align: right, mirrored margins and footer alignment)."
        )
    } else {
        format!(
            "8.  **Text Direction:** The locale is '{locale}', which is written left-to-right. \
             Use 'dir=\"ltr\"' on the <html> tag. Only the 'ar' locale uses a right-to-left layout."
        )
    };

    let rules = [
        "1.  **Rewrite/Expand Text:** Rewrite and expand the user-provided text for each slide to \
         sound natural, professional, and persuasive. Tailor the language to the specified 'tone' \
         and 'target_audience'. Keep English at a B1-B2 level unless the locale suggests otherwise."
            .to_string(),
        "2.  **HTML Structure:** Generate a complete, self-contained HTML document for the \
         'html_fallback'. Inline all CSS using a <style> tag. Use the provided brand colors and \
         fonts. If fonts are not standard, use web-safe fallbacks (e.g., 'Inter, sans-serif')."
            .to_string(),
        "3.  **Layout & Styling:** Create a visually appealing, professional design. Use clean \
         spacing, strong headings, and readable body text. Ensure high color contrast for \
         accessibility. Implement page breaks for printing using \
         '@media print { .page { page-break-after: always; } }'. Each slide should be a page."
            .to_string(),
        "4.  **Cover Page:** The first page must be a strong cover with the company name, tagline, \
         and a large, abstract background visual created using SVG and brand colors."
            .to_string(),
        "5.  **Images:** For each slide's 'image_description', create an illustrative and tasteful \
         abstract SVG placeholder using the brand colors. Embed these SVGs directly into the HTML \
         using inline SVG or data URLs. Do not use external images or <img> tags with src \
         attributes pointing to external resources."
            .to_string(),
        "6.  **Logo:** If 'logo_image_base64' is provided, embed it on the cover and in the footer. \
         If null, render the company name as a stylized wordmark."
            .to_string(),
        "7.  **Footer & Page Numbers:** Include a small footer on each page (except the cover) with \
         the company website and a page number."
            .to_string(),
        direction_rule,
        "9.  **PDF Output:** Set 'pdf_base64' to an empty string (\"\"). Focus on creating a \
         perfect, print-ready HTML fallback."
            .to_string(),
        "10. **Meta Notes:** In 'meta.notes', briefly mention any key decisions, like font \
         fallbacks or layout choices."
            .to_string(),
    ];

    rules.join("\n")
}
