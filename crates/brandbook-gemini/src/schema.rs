use serde_json::{Value, json};

/// The `responseSchema` sent with every generation request.
///
/// Mirrors `GenerationResult`; every property is required so the provider
/// cannot omit a field the caller depends on.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "pdf_base64": { "type": "STRING" },
            "html_fallback": { "type": "STRING" },
            "meta": {
                "type": "OBJECT",
                "properties": {
                    "pages": { "type": "INTEGER" },
                    "company_name": { "type": "STRING" },
                    "brand_colors": {
                        "type": "OBJECT",
                        "properties": {
                            "primary": { "type": "STRING" },
                            "secondary": { "type": "STRING" },
                        },
                        "required": ["primary", "secondary"],
                    },
                    "locale": { "type": "STRING" },
                    "notes": { "type": "STRING" },
                },
                "required": ["pages", "company_name", "brand_colors", "locale", "notes"],
            },
        },
        "required": ["pdf_base64", "html_fallback", "meta"],
    })
}
