// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remediation messages for failed validations.
//
// Every engine failure is mapped to plain English with actionable
// suggestions the uploader can follow. Raw internal error text never
// reaches the caller.

use crate::config::ArtworkRequirements;
use crate::error::ArtproofError;
use crate::types::{ResultDetails, ValidationResult};

/// Convert an engine failure into the `ValidationResult` shown to the
/// uploader.
///
/// `file_type` is the label echoed back in the details ("PSD", "AI", a
/// declared media type, or "unknown" when nothing better is available).
pub fn remediate(
    err: &ArtproofError,
    file_type: &str,
    req: &ArtworkRequirements,
) -> ValidationResult {
    let (message, suggestions) = match err {
        ArtproofError::UnsupportedFormat(_) => (
            "Invalid file format.",
            vec![
                "Please provide your artwork in AI, PSD, PDF, or common image formats (JPG, PNG, etc.).".to_string(),
                "If you have an Adobe Illustrator file, save it as .ai or PDF.".to_string(),
                "For Photoshop files, save as .psd format.".to_string(),
            ],
        ),

        ArtproofError::NoPages => (
            "Document has no pages.",
            vec![
                "Your document appears to be empty.".to_string(),
                "Please ensure your artwork is on the first page.".to_string(),
                "Try re-saving your document and upload again.".to_string(),
            ],
        ),

        ArtproofError::UnreadablePage(_) => (
            "Could not read first page.",
            vec![
                "Your document appears to be corrupted.".to_string(),
                "Try re-saving your document and upload again.".to_string(),
            ],
        ),

        ArtproofError::UnreadableMetadata(_) => (
            "Could not read dimensions.",
            vec![
                format!("Could not read the dimensions of your {file_type} file."),
                "Try re-saving your file and upload again.".to_string(),
                format!("Ensure your {file_type} file is not corrupted."),
            ],
        ),

        ArtproofError::Processing(_) => (
            "Error processing image file.",
            vec![
                "There was an error processing your image file.".to_string(),
                "The file may be corrupted or in an unsupported format.".to_string(),
                "Try re-saving your file in a different format like JPG or PNG.".to_string(),
            ],
        ),

        // Unexpected failures get a generic retry message; the HTTP layer
        // maps these to status 500.
        ArtproofError::Io(_)
        | ArtproofError::Serialization(_)
        | ArtproofError::Internal(_) => (
            "Error validating file",
            vec![
                "An unexpected error occurred while processing your file.".to_string(),
                "Try a different file or format.".to_string(),
                "Make sure your file is not corrupted.".to_string(),
            ],
        ),
    };

    ValidationResult {
        valid: false,
        message: message.to_string(),
        details: ResultDetails {
            current_width: None,
            current_height: None,
            current_resolution: None,
            required_width: req.min_width_px,
            required_height: req.min_height_px,
            required_resolution: req.required_dpi,
            file_type: file_type.to_string(),
            suggestions,
        },
    }
}
