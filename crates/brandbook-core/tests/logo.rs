use std::io::Write;

use brandbook_core::error::CoreError;
use brandbook_core::form::ProfileForm;
use brandbook_core::logo::{LogoImage, MAX_LOGO_BYTES};

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn fake_png() -> Vec<u8> {
    let mut bytes = PNG_HEADER.to_vec();
    bytes.extend((0..=255u8).cycle().take(1000));
    bytes
}

#[test]
fn png_round_trips_exactly() {
    let original = fake_png();
    let logo = LogoImage::from_bytes(&original, None).expect("png accepted");

    assert!(logo.as_data_uri().starts_with("data:image/png;base64,"));
    let (mime, decoded) = logo.decode().expect("decodes");
    assert_eq!(mime, "image/png");
    assert_eq!(decoded, original);
}

#[test]
fn jpeg_is_recognised_by_magic_bytes() {
    let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
    let logo = LogoImage::from_bytes(&bytes, Some("photo.bin")).expect("jpeg accepted");
    assert_eq!(logo.mime(), Some("image/jpeg"));
}

#[test]
fn svg_is_recognised_by_content_or_hint() {
    let svg = br#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg"></svg>"#;
    let logo = LogoImage::from_bytes(svg, None).expect("svg accepted");
    assert_eq!(logo.mime(), Some("image/svg+xml"));

    let minified = b"<!-- logo --><svg/>";
    let logo = LogoImage::from_bytes(minified, Some("image/svg+xml")).expect("svg by hint");
    assert_eq!(logo.mime(), Some("image/svg+xml"));
}

#[test]
fn other_formats_are_rejected() {
    let gif = b"GIF89a\x01\x00\x01\x00";
    let err = LogoImage::from_bytes(gif, Some("anim.gif")).unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedImage(name) if name == "anim.gif"));
}

#[test]
fn oversized_files_are_rejected() {
    let mut bytes = PNG_HEADER.to_vec();
    bytes.resize(MAX_LOGO_BYTES + 1, 0);
    let err = LogoImage::from_bytes(&bytes, None).unwrap_err();
    assert!(matches!(err, CoreError::ImageTooLarge { .. }));
}

#[test]
fn malformed_data_uris_are_rejected() {
    assert!(LogoImage::from_data_uri("image/png;base64,AAAA").is_err());
    assert!(LogoImage::from_data_uri("data:image/png,AAAA").is_err());
    assert!(LogoImage::from_data_uri("data:image/png;base64,@@@").is_err());
    assert!(LogoImage::from_data_uri("data:image/png;base64,iVBORw0KGgo=").is_ok());
}

#[test]
fn deserializing_checks_the_data_uri() {
    let logo: LogoImage =
        serde_json::from_str(r#""data:image/png;base64,iVBORw0KGgo=""#).expect("valid uri");
    assert_eq!(logo.mime(), Some("image/png"));
    assert_eq!(
        serde_json::to_string(&logo).expect("serializes"),
        r#""data:image/png;base64,iVBORw0KGgo=""#
    );

    assert!(serde_json::from_str::<LogoImage>(r#""not a data uri""#).is_err());
    assert!(serde_json::from_str::<LogoImage>(r#""data:image/png;base64,@@@""#).is_err());
}

#[tokio::test]
async fn from_path_reads_whole_file() {
    let original = fake_png();
    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("temp file");
    file.write_all(&original).expect("write");
    file.flush().expect("flush");

    let logo = LogoImage::from_path(file.path()).await.expect("reads");
    let (_, decoded) = logo.decode().expect("decodes");
    assert_eq!(decoded, original);
}

#[tokio::test]
async fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = LogoImage::from_path(dir.path().join("nope.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Read { .. }));
}

#[tokio::test]
async fn logo_is_applied_after_conversion() {
    let mut form = ProfileForm::default();
    let mut file = tempfile::Builder::new()
        .suffix(".svg")
        .tempfile()
        .expect("temp file");
    file.write_all(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>")
        .expect("write");

    let logo = LogoImage::from_path(file.path()).await.expect("reads");
    form.set_logo(Some(logo.clone()));
    assert_eq!(form.request().logo_image.as_ref(), Some(&logo));

    form.set_logo(None);
    assert!(form.request().logo_image.is_none());
}
