// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Validation orchestrator — classify, extract, evaluate, assemble.

use artproof_core::error::ArtproofError;
use artproof_core::{
    ArtworkRequirements, HandlingClass, UploadedFile, ValidationResult, remediation,
};
use tracing::{debug, info, instrument};

use crate::classify::classify;
use crate::evaluate::evaluate;
use crate::extract::{extract_metadata, raster, vector};

/// Validate one uploaded artwork file against the given requirements.
///
/// Each call processes exactly one file, once: no retries, no partial
/// results, no state shared across calls. Every extraction failure is
/// recovered into a `ValidationResult` here; nothing escapes as a fault.
#[instrument(
    skip(file),
    fields(media_type = %file.media_type, name = ?file.name, bytes_len = file.byte_len())
)]
pub fn validate_artwork(file: &UploadedFile, req: &ArtworkRequirements) -> ValidationResult {
    let class = classify(file);
    debug!(?class, "upload classified");

    if class == HandlingClass::Rejected {
        let err = ArtproofError::UnsupportedFormat(file.media_type.clone());
        info!("upload rejected by format classification");
        return remediation::remediate(&err, &error_label(file, class), req);
    }

    match extract_metadata(file, class, req.required_dpi) {
        Ok(meta) => {
            let result = evaluate(&meta, class, req);
            info!(valid = result.valid, file_type = %meta.format_label, "artwork validated");
            result
        }
        Err(err) => {
            info!(error = %err, "metadata extraction failed");
            remediation::remediate(&err, &error_label(file, class), req)
        }
    }
}

/// The `fileType` label to report when extraction never produced one.
fn error_label(file: &UploadedFile, class: HandlingClass) -> String {
    match class {
        HandlingClass::VectorDocument => vector::format_label(file),
        HandlingClass::PhotoshopRaster => "PSD".to_string(),
        HandlingClass::GenericRasterImage => raster::format_label(file),
        HandlingClass::Rejected => {
            if file.media_type.is_empty() {
                "unknown".to_string()
            } else {
                file.media_type.clone()
            }
        }
    }
}
