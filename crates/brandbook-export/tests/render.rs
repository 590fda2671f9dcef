use brandbook_core::models::preview::PreviewState;
use brandbook_core::models::profile::{BrandColors, Locale, ProfileRequest, Tone};
use brandbook_core::models::result::{GenerationMeta, GenerationResult};
use brandbook_export::render::{render_page, render_preview};

fn acme_result(pdf_base64: &str) -> GenerationResult {
    GenerationResult {
        pdf_base64: pdf_base64.to_string(),
        html_fallback: "<html><body><h1>Acme</h1></body></html>".to_string(),
        meta: GenerationMeta {
            pages: 2,
            company_name: "Acme".to_string(),
            brand_colors: BrandColors::default(),
            locale: "en".to_string(),
            notes: "Inter fell back to sans-serif.".to_string(),
        },
    }
}

fn ready(result: GenerationResult) -> PreviewState {
    PreviewState::Ready {
        result: Box::new(result),
        generated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn idle_shows_placeholder_only() {
    let html = render_preview(&PreviewState::Idle).expect("renders");
    assert!(html.contains("data-state=\"idle\""));
    assert!(html.contains("Your generated company profile will appear here"));
    assert!(!html.contains("<iframe"));
    assert!(!html.contains("Generating Your Profile"));
}

#[test]
fn loading_shows_indicator_only() {
    let html = render_preview(&PreviewState::Loading).expect("renders");
    assert!(html.contains("data-state=\"loading\""));
    assert!(html.contains("Generating Your Profile..."));
    assert!(!html.contains("<iframe"));
    assert!(!html.contains("An Error Occurred"));
}

#[test]
fn failure_shows_escaped_message() {
    let state = PreviewState::Failed {
        message: "Failed <b>badly</b>".to_string(),
    };
    let html = render_preview(&state).expect("renders");
    assert!(html.contains("An Error Occurred"));
    assert!(html.contains("Failed &lt;b&gt;badly&lt;"));
    assert!(!html.contains("<b>badly"));
    assert!(!html.contains("<iframe"));
}

#[test]
fn ready_without_pdf_shows_preview_and_no_download() {
    let html = render_preview(&ready(acme_result(""))).expect("renders");

    assert!(html.contains("Preview: Acme"));
    assert!(html.contains("sandbox=\"allow-scripts\""));
    assert!(!html.contains("allow-same-origin"));
    assert!(html.contains("srcdoc=\"&lt;html&gt;&lt;body&gt;&lt;h1&gt;Acme"));
    assert!(!html.contains("Download PDF"));
    assert!(html.contains("2 pages"));
}

#[test]
fn ready_with_pdf_offers_named_download() {
    let html = render_preview(&ready(acme_result("JVBERi0xLjQK"))).expect("renders");
    assert!(html.contains("Download PDF"));
    assert!(html.contains("download=\"Acme_Profile.pdf\""));
    assert!(html.contains("href=\"&#x2F;download\""));
}

#[test]
fn generated_document_cannot_break_out_of_srcdoc() {
    let mut result = acme_result("");
    result.html_fallback = "<html>\"><script>alert(1)</script></html>".to_string();
    let html = render_preview(&ready(result)).expect("renders");
    assert!(!html.contains("\"><script>alert(1)"));
    assert!(html.contains("&quot;&gt;&lt;script&gt;"));
}

#[test]
fn page_renders_form_values_and_preview() {
    let mut request = ProfileRequest::example();
    request.company_name = "Smith & \"Sons\"".to_string();
    request.tone = Tone::Bold;
    request.locale = Locale::Ar;

    let html = render_page(&request, &PreviewState::Idle).expect("renders");

    assert!(html.contains("Company Profile Details"));
    assert!(html.contains("value=\"Smith &amp; &quot;Sons&quot;\""));
    assert!(html.contains("<option value=\"bold\" selected>Bold</option>"));
    assert!(html.contains("<option value=\"ar\" selected>Arabic (RTL)</option>"));
    assert!(html.contains("Slide 1"));
    assert!(html.contains("Slide 2"));
    assert!(!html.contains("Slide 3"));
    assert!(html.contains(&request.slides[0].id.to_string()));
    assert!(html.contains("data-state=\"idle\""));
    assert!(html.contains(">Generate Profile</button>"));
}

#[test]
fn page_disables_submit_while_loading() {
    let html = render_page(&ProfileRequest::example(), &PreviewState::Loading).expect("renders");
    assert!(html.contains("id=\"generate\" disabled"));
    assert!(html.contains(">Generating...</button>"));
}

#[test]
fn page_shows_logo_when_present() {
    let mut request = ProfileRequest::example();
    let html = render_page(&request, &PreviewState::Idle).expect("renders");
    assert!(!html.contains("Current logo"));

    request.logo_image = Some(
        brandbook_core::logo::LogoImage::from_bytes(b"<svg/>", Some("logo.svg")).expect("svg"),
    );
    let html = render_page(&request, &PreviewState::Idle).expect("renders");
    assert!(html.contains("Current logo"));
    assert!(html.contains("data:image"));
}

#[test]
fn submit_waits_for_pending_field_edits() {
    let html = render_page(&ProfileRequest::example(), &PreviewState::Idle).expect("renders");

    assert!(html.contains("edit(\"PATCH\", \"/api/profile\""));
    assert!(html.contains("edit(\"PATCH\", `/api/slides/${id}`"));
    let wait = html.find("await Promise.all(pending)").expect("waits for edits");
    let submit = html
        .find("fetch(\"/api/generate\"")
        .expect("posts generate");
    assert!(wait < submit);
}
