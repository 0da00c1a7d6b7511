// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Threshold evaluation — compares extracted metadata against the
// print-production minimums and assembles the human-readable verdict.

use artproof_core::{
    ArtworkRequirements, ExtractedMetadata, HandlingClass, ResultDetails, ValidationResult,
};
use tracing::debug;

/// Resolution comparison policy per handling class.
///
/// Photoshop documents are expected to be authored at exactly the target
/// DPI; arbitrary raster uploads merely need to meet the floor; vector
/// content is resolution-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolutionPolicy {
    Exact,
    Floor,
    Skip,
}

fn resolution_policy(class: HandlingClass) -> ResolutionPolicy {
    match class {
        HandlingClass::PhotoshopRaster => ResolutionPolicy::Exact,
        HandlingClass::GenericRasterImage => ResolutionPolicy::Floor,
        // Rejected inputs never reach evaluation.
        HandlingClass::VectorDocument | HandlingClass::Rejected => ResolutionPolicy::Skip,
    }
}

/// Compare extracted metadata against the requirements.
///
/// `valid` is true iff both the dimension and resolution checks pass; the
/// resolution check only applies when a concrete density was extracted.
pub fn evaluate(
    meta: &ExtractedMetadata,
    class: HandlingClass,
    req: &ArtworkRequirements,
) -> ValidationResult {
    let mut issues: Vec<String> = Vec::new();

    let dimensions_ok =
        meta.width_px >= req.min_width_px && meta.height_px >= req.min_height_px;
    if !dimensions_ok {
        push_dimension_issues(&mut issues, meta, class, req);
    }

    let resolution_ok = match (resolution_policy(class), meta.resolution_dpi) {
        (ResolutionPolicy::Exact, Some(dpi)) => dpi == req.required_dpi,
        (ResolutionPolicy::Floor, Some(dpi)) => dpi >= req.required_dpi,
        // Vector content, or no embedded density to compare against.
        _ => true,
    };
    if !resolution_ok {
        push_resolution_issues(&mut issues, meta, class, req);
    }

    let valid = dimensions_ok && resolution_ok;
    let message = if valid {
        "File is valid."
    } else if !dimensions_ok {
        "Invalid dimensions."
    } else {
        "Invalid resolution."
    };
    debug!(
        valid,
        width = meta.width_px,
        height = meta.height_px,
        resolution = ?meta.resolution_dpi,
        "artwork evaluated"
    );

    ValidationResult {
        valid,
        message: message.to_string(),
        details: ResultDetails {
            current_width: Some(meta.width_px),
            current_height: Some(meta.height_px),
            current_resolution: meta.resolution_dpi,
            required_width: req.min_width_px,
            required_height: req.min_height_px,
            required_resolution: req.required_dpi,
            file_type: meta.format_label.clone(),
            suggestions: if valid { confirmation(meta) } else { issues },
        },
    }
}

/// Uniform scale factor that satisfies both axes simultaneously.
fn scale_up(meta: &ExtractedMetadata, req: &ArtworkRequirements) -> f64 {
    let width_scale = f64::from(req.min_width_px) / f64::from(meta.width_px.max(1));
    let height_scale = f64::from(req.min_height_px) / f64::from(meta.height_px.max(1));
    width_scale.max(height_scale)
}

fn push_dimension_issues(
    issues: &mut Vec<String>,
    meta: &ExtractedMetadata,
    class: HandlingClass,
    req: &ArtworkRequirements,
) {
    let scale = scale_up(meta, req);
    let percent = (scale * 100.0).round() as u32;
    let noun = match class {
        HandlingClass::GenericRasterImage => "image",
        _ => "artwork",
    };

    issues.push(format!(
        "Your {noun} is too small. Current size: {}x{}px",
        meta.width_px, meta.height_px
    ));
    issues.push(format!(
        "Required minimum size: {}x{}px",
        req.min_width_px, req.min_height_px
    ));
    match class {
        HandlingClass::VectorDocument => {
            issues.push(format!(
                "Try scaling your artwork by {percent}% to meet the minimum size requirement."
            ));
            issues.push(
                "For vector files (AI/PDF), you can safely scale the artwork without losing quality."
                    .to_string(),
            );
        }
        HandlingClass::PhotoshopRaster => {
            issues.push(format!("Try increasing the canvas size by {percent}%"));
        }
        _ => {
            let target_width = (f64::from(meta.width_px) * scale).ceil() as u32;
            let target_height = (f64::from(meta.height_px) * scale).ceil() as u32;
            issues.push(format!(
                "Try resizing your image to {target_width}x{target_height}px to meet the minimum requirements."
            ));
        }
    }
}

fn push_resolution_issues(
    issues: &mut Vec<String>,
    meta: &ExtractedMetadata,
    class: HandlingClass,
    req: &ArtworkRequirements,
) {
    let current = meta
        .resolution_dpi
        .map(|dpi| dpi.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    issues.push(format!("Current resolution: {current} DPI"));
    issues.push(format!("Required resolution: {} DPI", req.required_dpi));
    if class == HandlingClass::PhotoshopRaster {
        issues.push(format!(
            "In Photoshop, go to Image > Image Size and set resolution to {} DPI",
            req.required_dpi
        ));
    } else {
        issues.push(
            "Consider using a higher resolution image or resample your image in an editing program."
                .to_string(),
        );
    }
}

/// Confirmatory lines for a valid result, echoing the measured values.
fn confirmation(meta: &ExtractedMetadata) -> Vec<String> {
    let mut lines = vec![
        "Your artwork meets all requirements!".to_string(),
        format!("Current size: {}x{}px", meta.width_px, meta.height_px),
    ];
    if let Some(dpi) = meta.resolution_dpi {
        lines.push(format!("Current resolution: {dpi} DPI"));
    }
    lines
}
