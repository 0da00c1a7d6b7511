// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP surface — a single multipart upload endpoint in front of the
// validation engine.
//
// Status mapping: 200 when the artwork is valid, 400 for any input defect
// (unsupported format, failed checks, missing file field), 500 only for
// unexpected internal failures. The response body is always the engine's
// `ValidationResult` JSON shape.

use std::sync::Arc;

use artproof_core::error::ArtproofError;
use artproof_core::{
    AppConfig, ArtworkRequirements, ResultDetails, UploadedFile, ValidationResult, remediation,
};
use artproof_document::validate_artwork;
use axum::Router;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

#[derive(Clone)]
struct AppState {
    requirements: ArtworkRequirements,
}

/// Build the application router.
pub fn router(config: AppConfig) -> Router {
    let state = Arc::new(AppState {
        requirements: config.requirements,
    });

    Router::new()
        .route("/validate", post(validate))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        // axum's built-in 2 MiB cap would shadow the configured limit.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn validate(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let file = match read_file_field(&mut multipart).await {
        Ok(Some(file)) => file,
        Ok(None) => return no_file_response(&state.requirements),
        Err(err) => {
            warn!(error = %err, "failed to read multipart upload");
            return internal_error_response(&state.requirements);
        }
    };

    // Extraction is CPU-bound parsing; keep it off the async runtime.
    let requirements = state.requirements;
    let result =
        tokio::task::spawn_blocking(move || validate_artwork(&file, &requirements)).await;

    match result {
        Ok(result) => {
            let status = if result.valid {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(result)).into_response()
        }
        Err(err) => {
            error!(error = %err, "validation worker failed");
            internal_error_response(&state.requirements)
        }
    }
}

/// Pull the single `file` field out of the multipart form.
///
/// Returns `Ok(None)` when the field is missing or empty — a client
/// mistake, not an internal failure.
async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let media_type = field.content_type().unwrap_or("").to_string();
        let name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        return Ok(Some(UploadedFile::new(media_type, name, bytes)));
    }
    Ok(None)
}

fn no_file_response(req: &ArtworkRequirements) -> Response {
    let body = ValidationResult {
        valid: false,
        message: "No file provided".to_string(),
        details: ResultDetails {
            current_width: None,
            current_height: None,
            current_resolution: None,
            required_width: req.min_width_px,
            required_height: req.min_height_px,
            required_resolution: req.required_dpi,
            file_type: "unknown".to_string(),
            suggestions: vec![
                "Please select a file to upload".to_string(),
                "Supported formats: AI, PSD, PDF, JPG, PNG, etc.".to_string(),
            ],
        },
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn internal_error_response(req: &ArtworkRequirements) -> Response {
    // Generic retry guidance; the real failure only goes to the log.
    let body = remediation::remediate(
        &ArtproofError::Internal("request processing failed".to_string()),
        "unknown",
        req,
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
