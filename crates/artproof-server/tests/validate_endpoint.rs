// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP endpoint integration tests for the /validate upload route.

use artproof_core::AppConfig;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};

fn server() -> TestServer {
    TestServer::new(artproof_server::router(AppConfig::default())).expect("test server")
}

/// Solid-color PNG encoded in memory.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 120, 200]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn upload_form(bytes: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes)
            .file_name(file_name)
            .mime_type(mime_type),
    )
}

#[tokio::test]
async fn large_png_upload_is_valid_with_status_200() {
    let server = server();

    let response = server
        .post("/validate")
        .multipart(upload_form(png_bytes(1300, 1100), "art.png", "image/png"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "File is valid.");
    // Wire contract: camelCase field names, byte-for-byte.
    assert_eq!(body["details"]["currentWidth"], 1300);
    assert_eq!(body["details"]["currentHeight"], 1100);
    assert_eq!(body["details"]["requiredWidth"], 1200);
    assert_eq!(body["details"]["requiredHeight"], 1050);
    assert_eq!(body["details"]["requiredResolution"], 300);
    assert_eq!(body["details"]["fileType"], "PNG");
}

#[tokio::test]
async fn undersized_png_upload_fails_with_status_400() {
    let server = server();

    let response = server
        .post("/validate")
        .multipart(upload_form(png_bytes(600, 400), "small.png", "image/png"))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "Invalid dimensions.");
    let suggestions = body["details"]["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
}

#[tokio::test]
async fn unsupported_format_fails_with_status_400() {
    let server = server();

    let response = server
        .post("/validate")
        .multipart(upload_form(b"hello world".to_vec(), "notes.txt", "text/plain"))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid file format.");
}

#[tokio::test]
async fn missing_file_field_fails_with_status_400() {
    let server = server();

    let form = MultipartForm::new().add_text("comment", "no file attached");
    let response = server.post("/validate").multipart(form).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "No file provided");
    assert_eq!(body["details"]["fileType"], "unknown");
}

#[tokio::test]
async fn unmatched_route_is_404() {
    let server = server();
    let response = server.get("/nope").await;
    response.assert_status_not_found();
}
