//! HTML rendering of the form page and the preview panel.
//!
//! The preview panel shows exactly one of four states: idle placeholder,
//! loading indicator, error message, or the generated document inside a
//! sandboxed iframe (`allow-scripts` only, so the document runs without
//! same-origin privileges).

use brandbook_core::models::preview::PreviewState;
use brandbook_core::models::profile::{Locale, ProfileRequest, Tone};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::pdf::download_filename;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
const PREVIEW_TEMPLATE: &str = include_str!("../templates/preview.html");

/// Route the download action points at.
pub const DOWNLOAD_URL: &str = "/download";

#[derive(Serialize)]
struct PreviewView {
    state: &'static str,
    message: String,
    company_name: String,
    html: String,
    has_pdf: bool,
    download_url: &'static str,
    download_filename: String,
    pages: u32,
    notes: String,
    generated_at: String,
}

impl PreviewView {
    fn from_state(preview: &PreviewState) -> Self {
        let mut view = PreviewView {
            state: "idle",
            message: String::new(),
            company_name: String::new(),
            html: String::new(),
            has_pdf: false,
            download_url: DOWNLOAD_URL,
            download_filename: String::new(),
            pages: 0,
            notes: String::new(),
            generated_at: String::new(),
        };

        match preview {
            PreviewState::Idle => {}
            PreviewState::Loading => view.state = "loading",
            PreviewState::Failed { message } => {
                view.state = "failed";
                view.message = message.clone();
            }
            PreviewState::Ready {
                result,
                generated_at,
            } => {
                view.state = "ready";
                view.company_name = result.meta.company_name.clone();
                view.html = result.html_fallback.clone();
                view.has_pdf = result.has_pdf();
                view.download_filename = download_filename(&result.meta.company_name);
                view.pages = result.meta.pages;
                view.notes = result.meta.notes.clone();
                view.generated_at = generated_at.strftime("%Y-%m-%d %H:%M:%S UTC").to_string();
            }
        }

        view
    }
}

#[derive(Serialize)]
struct OptionView {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct SlideView {
    id: String,
    number: usize,
    title: String,
    text: String,
    image_description: String,
}

fn templates() -> Result<Tera, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("preview.html", PREVIEW_TEMPLATE),
        ("page.html", PAGE_TEMPLATE),
    ])
    .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    Ok(tera)
}

/// Render the preview panel on its own, for in-place refreshes.
pub fn render_preview(preview: &PreviewState) -> Result<String, ExportError> {
    let tera = templates()?;
    let mut context = Context::new();
    context.insert("preview", &PreviewView::from_state(preview));
    Ok(tera.render("preview.html", &context)?)
}

/// Render the whole form page with the current request and preview.
pub fn render_page(request: &ProfileRequest, preview: &PreviewState) -> Result<String, ExportError> {
    let tera = templates()?;

    let tones: Vec<OptionView> = Tone::ALL
        .into_iter()
        .map(|t| OptionView {
            value: t.as_str(),
            label: t.label(),
            selected: t == request.tone,
        })
        .collect();
    let locales: Vec<OptionView> = Locale::ALL
        .into_iter()
        .map(|l| OptionView {
            value: l.as_str(),
            label: l.label(),
            selected: l == request.locale,
        })
        .collect();
    let slides: Vec<SlideView> = request
        .slides
        .iter()
        .enumerate()
        .map(|(i, s)| SlideView {
            id: s.id.to_string(),
            number: i + 1,
            title: s.title.clone(),
            text: s.text.clone(),
            image_description: s.image_description.clone(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("request", request);
    context.insert("logo", &request.logo_image.as_ref().map(|l| l.as_data_uri()));
    context.insert("tones", &tones);
    context.insert("locales", &locales);
    context.insert("slides", &slides);
    context.insert("loading", &preview.is_loading());
    context.insert("preview", &PreviewView::from_state(preview));

    Ok(tera.render("page.html", &context)?)
}
